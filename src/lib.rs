//! # folio-client
//!
//! WASM interactivity layer for a static portfolio page. The HTML and CSS are
//! served as-is; this crate attaches behavior to the existing markup at
//! startup: theme preference, navigation, scroll reveal animations, the
//! contact form, and a handful of cosmetic effects.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme preference controller and its seams (store, system signal, surface) |
//! | [`state`] | Application state threaded through a single signal |
//! | [`behaviors`] | Independent (selector, event, handler) bindings |
//! | [`components`] | Imperative DOM widgets (notification toast) |
//! | [`net`] | Contact form submission |
//! | [`util`] | DOM helpers, listener bindings, debounce |
//! | [`config`] | Page-embedded configuration |
//! | [`error`] | Crate error type |
//!
//! Browser glue is gated behind the `hydrate` feature. Without it the crate
//! compiles the pure cores only, which is how the unit tests run.

#[cfg(feature = "hydrate")]
pub mod app;
pub mod behaviors;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod state;
pub mod theme;
pub mod util;

/// WASM entry point: install logging, read configuration, hydrate the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = config::SiteConfig::load();
    if let Err(e) = console_log::init_with_level(config.log_level()) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }

    app::boot(config);
}
