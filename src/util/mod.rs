//! Utility helpers shared across the sign-in UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate validation and browser/environment concerns from
//! page logic to improve reuse and testability.

pub mod backdrop;
pub mod email;
