//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod employee;
pub mod login;
pub mod manager;
pub mod placeholders;
pub mod signup;
pub mod unauthorized;
