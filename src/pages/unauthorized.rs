//! Landing page for role-mismatch redirects.

use leptos::prelude::*;

/// Shown when an authenticated user reaches a view their role does not
/// permit.
#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="unauthorized-page">
            <h1 class="unauthorized-page__title">"Unauthorized Access"</h1>
            <p class="unauthorized-page__body">
                "You do not have permission to view this page."
            </p>
            <a class="btn btn--primary" href="/">"Go to Login"</a>
        </div>
    }
}
