//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and shared widgets while reading shared
//! state from Leptos context providers.

pub mod feedback_card;
pub mod input_field;
pub mod layout;
pub mod navbar;
pub mod notice_stack;
pub mod protected_route;
