//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render presentation-only surfaces; the page owns timing and
//! flow state.

pub mod splash;
