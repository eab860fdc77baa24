//! Networking modules for the backend REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the shared wire schema.
//! Pages never build requests themselves.

pub mod api;
pub mod types;
