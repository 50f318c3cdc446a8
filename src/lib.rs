//! # vestibule
//!
//! Leptos + WASM application shell that keeps protected content unmounted
//! until three independently-resolving readiness signals converge: the
//! identity provider's interaction status, rehydration of the persisted
//! session, and detection of an in-flight OAuth redirect callback.
//!
//! The gating state machines live in `state` and `util`; `components` wraps
//! them as route-level guards and `pages` consumes them.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the server HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
