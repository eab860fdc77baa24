//! Feedback-list state for the two dashboards.
//!
//! DESIGN
//! ======
//! Both dashboards hold the same shape: the fetched records plus explicit
//! pending/error flags, so the views can render loading and failure states
//! without inspecting network internals.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use crate::net::types::Feedback;

/// Fetched feedback records with request lifecycle flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedbackList {
    pub items: Vec<Feedback>,
    pub loading: bool,
    pub error: Option<String>,
}

impl FeedbackList {
    /// State for a request that has just been issued.
    pub const fn pending() -> Self {
        Self { items: Vec::new(), loading: true, error: None }
    }

    pub fn resolve(&mut self, items: Vec<Feedback>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn reject(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}

/// Whether the employee dashboard shows its acknowledged banner.
///
/// The dashboard treats acknowledgment as a single flag across all fetched
/// records: any acknowledged item marks the whole view.
pub fn any_acknowledged(items: &[Feedback]) -> bool {
    items.iter().any(|feedback| feedback.acknowledged)
}

/// The record targeted by the acknowledge action: the first one fetched.
pub fn first_feedback_id(items: &[Feedback]) -> Option<i64> {
    items.first().map(|feedback| feedback.id)
}
