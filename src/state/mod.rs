//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! One `RwSignal<SigninState>` is provided as context by the root `App`
//! component so the page and any child components read from and write to
//! the same flow state.

pub mod signin;
