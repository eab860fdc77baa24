//! Navigation shell reflecting the current principal.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar reads the session to decide which links are visible and
//! delegates logout to the session store; it never mutates the principal
//! beyond that.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::notice_stack::notify;
use crate::net::types::Role;
use crate::state::notices::{NoticeKind, NoticeState};
use crate::state::session::SessionStore;

/// Top navigation bar for authenticated views.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = StoredValue::new(use_navigate());

    let brand_href = move || {
        session
            .principal()
            .map_or("/", |principal| principal.role.dashboard_path())
            .to_owned()
    };
    let role_label = move || {
        session
            .principal()
            .map(|principal| format!("Role: {}", principal.role))
    };
    let is_employee = move || {
        session
            .principal()
            .is_some_and(|principal| principal.role == Role::Employee)
    };

    let on_logout = move |_| {
        session.logout();
        notify(notices, NoticeKind::Success, "Logged out successfully");
        navigate.with_value(|navigate| navigate("/", NavigateOptions::default()));
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href=brand_href>
                "Feedback System"
            </a>
            <Show when=move || session.principal().is_some()>
                <div class="navbar__actions">
                    <span class="navbar__role">{role_label}</span>
                    <Show when=is_employee>
                        <a class="navbar__link" href="/employee-dashboard">
                            "Dashboard"
                        </a>
                        <a class="navbar__link" href="/request-feedback">
                            "Request Feedback"
                        </a>
                        <a class="navbar__link" href="/anonymous-feedback">
                            "Anonymous Feedback"
                        </a>
                    </Show>
                    <button class="btn btn--danger navbar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
