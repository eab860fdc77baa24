use super::*;
use crate::net::types::Sentiment;

fn record(id: i64, acknowledged: bool) -> Feedback {
    Feedback {
        id,
        employee_id: 2,
        manager_id: 1,
        strengths: "clear writing".to_owned(),
        improvements: "estimates".to_owned(),
        sentiment: Sentiment::Positive,
        acknowledged,
        created_at: None,
    }
}

#[test]
fn pending_then_resolve_clears_flags() {
    let mut list = FeedbackList::pending();
    assert!(list.loading);
    list.resolve(vec![record(1, false)]);
    assert!(!list.loading);
    assert_eq!(list.error, None);
    assert_eq!(list.items.len(), 1);
}

#[test]
fn reject_keeps_items_and_records_message() {
    let mut list = FeedbackList::default();
    list.resolve(vec![record(1, false)]);
    list.reject("feedback fetch failed: 500".to_owned());
    assert!(!list.loading);
    assert_eq!(list.error.as_deref(), Some("feedback fetch failed: 500"));
    assert_eq!(list.items.len(), 1);
}

#[test]
fn any_acknowledged_scans_all_records() {
    assert!(!any_acknowledged(&[]));
    assert!(!any_acknowledged(&[record(1, false), record(2, false)]));
    assert!(any_acknowledged(&[record(1, false), record(2, true)]));
}

#[test]
fn first_feedback_id_targets_the_first_fetched_record() {
    assert_eq!(first_feedback_id(&[]), None);
    assert_eq!(first_feedback_id(&[record(7, false), record(3, true)]), Some(7));
}
