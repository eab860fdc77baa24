use super::*;
use crate::net::types::{Feedback, Sentiment};

fn record(sentiment: Sentiment) -> Feedback {
    Feedback {
        id: 1,
        employee_id: 42,
        manager_id: 7,
        strengths: "s".to_owned(),
        improvements: "i".to_owned(),
        sentiment,
        acknowledged: false,
        created_at: None,
    }
}

#[test]
fn sentiment_class_varies_by_sentiment() {
    assert!(sentiment_class(Sentiment::Positive).ends_with("--positive"));
    assert!(sentiment_class(Sentiment::Neutral).ends_with("--neutral"));
    assert!(sentiment_class(Sentiment::Negative).ends_with("--negative"));
}

#[test]
fn counterpart_line_follows_perspective() {
    let feedback = record(Sentiment::Positive);
    assert_eq!(
        counterpart_line(CardPerspective::Manager, &feedback),
        "Employee ID: 42"
    );
    assert_eq!(
        counterpart_line(CardPerspective::Employee, &feedback),
        "From manager: 7"
    );
}
