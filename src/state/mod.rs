//! Shared client state provided through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! Each module pairs a plain, unit-testable value type with whatever thin
//! reactive wrapper the views need. Only the session is persisted; feedback
//! lists and notices are per-mount.

pub mod feedback;
pub mod notices;
pub mod session;
