//! # gauch-client
//!
//! Browser-side utility crate for the GauchAI web front-end: session
//! handling over an external identity provider, an authenticated fetch
//! wrapper, toast notifications, phone-number input masking, and small
//! text helpers shared by the index/profile pages.
//!
//! Client-side (`web` feature): real DOM, timer, and network access via
//! `web-sys`, `gloo-timers`, and `gloo-net`. Without the feature every
//! browser-touching entry point compiles to a safe stub, which keeps the
//! pure logic unit-testable on native targets.

pub mod auth;
pub mod net;
pub mod util;

/// Install the panic hook and console logger. Call once at startup.
#[cfg(feature = "web")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn boot() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}
