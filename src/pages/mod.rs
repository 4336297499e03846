//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (timers, validation, network
//! calls) and delegates rendering details to `components`.

pub mod signin;
