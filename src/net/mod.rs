//! Networking for the sign-in endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP call and folds the response into a UI-ready
//! outcome, `types` defines the shared wire schema.

pub mod api;
pub mod types;
