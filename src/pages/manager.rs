//! Manager dashboard: submit feedback and review what has been given.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind the manager role guard. Fetches the manager's submitted
//! feedback once on mount and again after each successful submission, using
//! the bearer token from the session.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use leptos::prelude::*;

use crate::components::feedback_card::{CardPerspective, FeedbackCard};
use crate::components::input_field::{InputField, TextAreaField};
use crate::components::notice_stack::notify;
use crate::net::api;
use crate::net::types::{FeedbackCreate, Sentiment};
use crate::state::feedback::FeedbackList;
use crate::state::notices::{NoticeKind, NoticeState};
use crate::state::session::SessionStore;

fn validate_draft(
    employee_id: &str,
    strengths: &str,
    improvements: &str,
    sentiment: Sentiment,
) -> Result<FeedbackCreate, &'static str> {
    let employee_id = employee_id.trim();
    let strengths = strengths.trim();
    let improvements = improvements.trim();
    if employee_id.is_empty() || strengths.is_empty() || improvements.is_empty() {
        return Err("All fields are required");
    }
    let Ok(employee_id) = employee_id.parse::<i64>() else {
        return Err("Employee ID must be a number");
    };
    Ok(FeedbackCreate {
        employee_id,
        strengths: strengths.to_owned(),
        improvements: improvements.to_owned(),
        sentiment,
    })
}

fn load_given_feedback(list: RwSignal<FeedbackList>, token: String) {
    let _ = list.try_set(FeedbackList::pending());
    leptos::task::spawn_local(async move {
        let result = api::manager_feedback(&token).await;
        let _ = list.try_update(|state| match result {
            Ok(items) => state.resolve(items),
            Err(message) => state.reject(message),
        });
    });
}

/// Manager landing route: submission form above the list of given feedback.
#[component]
pub fn ManagerDashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let list = RwSignal::new(FeedbackList::default());
    let employee_id = RwSignal::new(String::new());
    let strengths = RwSignal::new(String::new());
    let improvements = RwSignal::new(String::new());
    let sentiment = RwSignal::new(Sentiment::Positive);
    let busy = RwSignal::new(false);

    if let Some(principal) = session.principal_untracked() {
        load_given_feedback(list, principal.token);
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let draft = match validate_draft(
            &employee_id.get(),
            &strengths.get(),
            &improvements.get(),
            sentiment.get(),
        ) {
            Ok(draft) => draft,
            Err(message) => {
                notify(notices, NoticeKind::Error, message);
                return;
            }
        };
        let Some(principal) = session.principal_untracked() else {
            return;
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            match api::submit_feedback(&principal.token, &draft).await {
                Ok(_) => {
                    notify(notices, NoticeKind::Success, "Feedback submitted");
                    let _ = employee_id.try_set(String::new());
                    let _ = strengths.try_set(String::new());
                    let _ = improvements.try_set(String::new());
                    let _ = sentiment.try_set(Sentiment::Positive);
                    load_given_feedback(list, principal.token);
                }
                Err(message) => notify(notices, NoticeKind::Error, message),
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="dashboard">
            <form class="panel" on:submit=on_submit>
                <h3 class="panel__title">"Submit Employee Feedback"</h3>

                <InputField
                    label="Employee ID"
                    name="employee_id"
                    placeholder="Enter Employee ID"
                    value=employee_id
                />
                <TextAreaField
                    label="Strengths"
                    name="strengths"
                    placeholder="What is going well"
                    value=strengths
                />
                <TextAreaField
                    label="Improvements"
                    name="improvements"
                    placeholder="Improvement points"
                    value=improvements
                />

                <label class="field" for="sentiment">
                    <span class="field__label">"Sentiment"</span>
                    <select
                        class="field__input"
                        id="sentiment"
                        name="sentiment"
                        on:change=move |ev| {
                            if let Ok(parsed) = event_target_value(&ev).parse::<Sentiment>() {
                                sentiment.set(parsed);
                            }
                        }
                    >
                        <option value="positive" selected=move || sentiment.get() == Sentiment::Positive>
                            "Positive"
                        </option>
                        <option value="neutral" selected=move || sentiment.get() == Sentiment::Neutral>
                            "Neutral"
                        </option>
                        <option value="negative" selected=move || sentiment.get() == Sentiment::Negative>
                            "Negative"
                        </option>
                    </select>
                </label>

                <button class="btn btn--primary panel__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting..." } else { "Submit Feedback" }}
                </button>
            </form>

            <section class="panel">
                <h3 class="panel__title">"Submitted Feedbacks"</h3>
                <Show when=move || list.get().error.is_some()>
                    <p class="panel__error">{move || list.get().error.unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || !list.get().loading
                    fallback=|| view! { <p class="panel__muted">"Loading feedback..."</p> }
                >
                    <Show
                        when=move || !list.get().items.is_empty()
                        fallback=|| view! { <p class="panel__muted">"No feedback submitted yet."</p> }
                    >
                        {move || {
                            list.get()
                                .items
                                .into_iter()
                                .map(|feedback| {
                                    view! {
                                        <FeedbackCard
                                            feedback=feedback
                                            perspective=CardPerspective::Manager
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </Show>
                </Show>
            </section>
        </div>
    }
}
