//! # portfolio
//!
//! Leptos + WASM single-page portfolio: a static profile plus the owner's
//! most recently updated public GitHub repositories.
//!
//! Two pieces of state carry the behavior. `state::theme` holds the
//! light/dark preference persisted in `localStorage`; `state::feed` holds
//! the repository list fetched once per page load by `net::github`.
//! Everything else is presentation in `components` and `pages`.
//!
//! Build for the browser with the `csr` feature (`trunk serve`). Without it
//! the crate compiles natively with browser calls stubbed out, which is how
//! the tests run.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod profile;
pub mod state;
pub mod util;

/// Browser entry point: install logging and the panic hook, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        leptos::logging::warn!("console logger not installed: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
