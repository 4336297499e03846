//! # anteroom
//!
//! Leptos + WASM frontend for a multi-step sign-in flow: a timed
//! connection-check splash, an email step, a password step, and a single
//! JSON `POST` to the sign-in endpoint.
//!
//! This crate holds the pages, components, flow state, network helpers,
//! and browser-facing utilities. The endpoint it talks to is served
//! elsewhere; nothing here implements server-side auth.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log forwarding and hydrate the
/// server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
