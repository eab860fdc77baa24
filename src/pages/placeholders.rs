//! Stub pages for routes that exist in navigation but are not built yet.

use leptos::prelude::*;

/// Employee-initiated feedback requests.
// TODO: replace with the request form once the backend grows an endpoint
// for feedback requests.
#[component]
pub fn RequestFeedbackPage() -> impl IntoView {
    view! {
        <div class="panel">
            <h3 class="panel__title">"Request Feedback"</h3>
            <p class="panel__muted">"Feedback requests are not available yet."</p>
        </div>
    }
}

/// Anonymous peer feedback.
#[component]
pub fn AnonymousFeedbackPage() -> impl IntoView {
    view! {
        <div class="panel">
            <h3 class="panel__title">"Anonymous Feedback"</h3>
            <p class="panel__muted">"Anonymous feedback is not available yet."</p>
        </div>
    }
}
