//! Transient notice rendering and auto-dismiss.

use std::time::Duration;

use leptos::prelude::*;

use crate::state::notices::{NoticeKind, NoticeState};

const AUTO_DISMISS: Duration = Duration::from_secs(3);

/// Push a notice and schedule its removal.
///
/// The timer holds only the notice id, so a notice the user dismissed by
/// hand (or one replaced by later pushes) is not re-removed by accident.
pub fn notify(notices: RwSignal<NoticeState>, kind: NoticeKind, message: impl Into<String>) {
    let mut id = 0;
    notices.update(|state| id = state.push(kind, message.into()));
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(AUTO_DISMISS).await;
        // The app may have been unmounted while the timer ran.
        let _ = notices.try_update(|state| state.dismiss(id));
    });
}

fn kind_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "notice notice--success",
        NoticeKind::Error => "notice notice--error",
    }
}

/// Stacked transient messages, newest at the bottom. Clicking a notice
/// dismisses it early.
#[component]
pub fn NoticeStack() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-stack" role="status">
            {move || {
                notices
                    .get()
                    .items
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        view! {
                            <button
                                class=kind_class(notice.kind)
                                on:click=move |_| notices.update(|state| state.dismiss(id))
                            >
                                {notice.message}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
