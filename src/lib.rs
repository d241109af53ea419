//! # portfolio
//!
//! Leptos + WASM rendering layer for a static portfolio site. Host pages
//! ship the layout and empty containers; this crate fetches the JSON data
//! documents and renders the experience timeline, tools grid, project cards
//! and contact card into them, and drives the light/dark theme toggle.
//!
//! Browser glue sits behind the `csr` feature. Without it the crate builds
//! natively with the DOM paths stubbed out, which is how the tests run.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point, run once the module loads.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
    app::boot();
}
