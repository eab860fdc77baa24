//! Employee dashboard: read received feedback and acknowledge it.
//!
//! The acknowledged banner is a single flag across the whole view, derived
//! by scanning the fetched records; the acknowledge action targets the
//! first record's id. This mirrors the product's observed behavior rather
//! than per-record acknowledgment.

use leptos::prelude::*;

use crate::components::feedback_card::{CardPerspective, FeedbackCard};
use crate::components::notice_stack::notify;
use crate::net::api;
use crate::state::feedback::{FeedbackList, any_acknowledged, first_feedback_id};
use crate::state::notices::{NoticeKind, NoticeState};
use crate::state::session::SessionStore;

fn load_received_feedback(list: RwSignal<FeedbackList>, acknowledged: RwSignal<bool>, token: String) {
    let _ = list.try_set(FeedbackList::pending());
    leptos::task::spawn_local(async move {
        let result = api::employee_feedback(&token).await;
        let _ = list.try_update(|state| match result {
            Ok(items) => {
                let _ = acknowledged.try_set(any_acknowledged(&items));
                state.resolve(items);
            }
            Err(message) => state.reject(message),
        });
    });
}

/// Employee landing route: feedback received plus the acknowledge action.
#[component]
pub fn EmployeeDashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let list = RwSignal::new(FeedbackList::default());
    let acknowledged = RwSignal::new(false);
    let busy = RwSignal::new(false);

    if let Some(principal) = session.principal_untracked() {
        load_received_feedback(list, acknowledged, principal.token);
    }

    let welcome = move || {
        session
            .principal()
            .map_or_else(|| "Welcome".to_owned(), |p| format!("Welcome, {}", p.email))
    };

    let on_acknowledge = move |_| {
        if busy.get() {
            return;
        }
        let Some(feedback_id) = first_feedback_id(&list.get_untracked().items) else {
            notify(notices, NoticeKind::Error, "No feedback found");
            return;
        };
        let Some(principal) = session.principal_untracked() else {
            return;
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            match api::acknowledge_feedback(&principal.token, feedback_id).await {
                Ok(()) => {
                    let _ = acknowledged.try_set(true);
                    notify(notices, NoticeKind::Success, "Feedback acknowledged!");
                }
                Err(message) => notify(notices, NoticeKind::Error, message),
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="dashboard">
            <h2 class="dashboard__welcome">{welcome}</h2>

            <section class="panel">
                <h3 class="panel__title">"Your Feedback"</h3>
                <Show when=move || list.get().error.is_some()>
                    <p class="panel__error">{move || list.get().error.unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || !list.get().loading
                    fallback=|| view! { <p class="panel__muted">"Loading feedback..."</p> }
                >
                    <Show
                        when=move || !list.get().items.is_empty()
                        fallback=|| view! { <p class="panel__muted">"No feedback available yet."</p> }
                    >
                        {move || {
                            list.get()
                                .items
                                .into_iter()
                                .map(|feedback| {
                                    view! {
                                        <FeedbackCard
                                            feedback=feedback
                                            perspective=CardPerspective::Employee
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </Show>
                </Show>
            </section>

            <Show when=move || !list.get().items.is_empty()>
                <div class="dashboard__actions">
                    <Show
                        when=move || !acknowledged.get()
                        fallback=|| view! { <p class="dashboard__acknowledged">"Feedback acknowledged"</p> }
                    >
                        <button class="btn btn--primary" on:click=on_acknowledge disabled=move || busy.get()>
                            {move || if busy.get() { "Acknowledging..." } else { "Acknowledge Feedback" }}
                        </button>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
