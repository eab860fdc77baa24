//! Card rendering for a single feedback record.
//!
//! DESIGN
//! ======
//! One card serves both dashboards; the perspective prop decides which
//! counterpart (employee or issuing manager) the header names.

#[cfg(test)]
#[path = "feedback_card_test.rs"]
mod feedback_card_test;

use leptos::prelude::*;

use crate::net::types::{Feedback, Sentiment};

/// Whose dashboard the card is rendered on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardPerspective {
    /// Manager reviewing feedback they gave: header names the employee.
    Manager,
    /// Employee reading feedback received: header names the manager and the
    /// card carries the anonymity note.
    Employee,
}

fn sentiment_class(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "feedback-card__sentiment feedback-card__sentiment--positive",
        Sentiment::Neutral => "feedback-card__sentiment feedback-card__sentiment--neutral",
        Sentiment::Negative => "feedback-card__sentiment feedback-card__sentiment--negative",
    }
}

fn counterpart_line(perspective: CardPerspective, feedback: &Feedback) -> String {
    match perspective {
        CardPerspective::Manager => format!("Employee ID: {}", feedback.employee_id),
        CardPerspective::Employee => format!("From manager: {}", feedback.manager_id),
    }
}

/// A single feedback record with sentiment badge and strengths/improvements
/// sections.
#[component]
pub fn FeedbackCard(feedback: Feedback, perspective: CardPerspective) -> impl IntoView {
    let counterpart = counterpart_line(perspective, &feedback);
    let badge_class = sentiment_class(feedback.sentiment);
    let sentiment = feedback.sentiment.to_string();
    let created_at = feedback.created_at.clone();

    view! {
        <article class="feedback-card">
            <header class="feedback-card__header">
                <span class="feedback-card__counterpart">{counterpart}</span>
                <span class=badge_class>{sentiment}</span>
            </header>
            <section class="feedback-card__section">
                <h4 class="feedback-card__section-title feedback-card__section-title--strengths">
                    "Strengths"
                </h4>
                <p class="feedback-card__body">{feedback.strengths}</p>
            </section>
            <section class="feedback-card__section">
                <h4 class="feedback-card__section-title feedback-card__section-title--improvements">
                    "Areas to improve"
                </h4>
                <p class="feedback-card__body">{feedback.improvements}</p>
            </section>
            <Show when=move || created_at.is_some()>
                <p class="feedback-card__timestamp">
                    {feedback.created_at.clone().unwrap_or_default()}
                </p>
            </Show>
            <Show when=move || perspective == CardPerspective::Employee>
                <p class="feedback-card__anonymous">"(Anonymous feedback)"</p>
            </Show>
        </article>
    }
}
