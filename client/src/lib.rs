//! CosmicVoyager browser/SSR UI.
//!
//! ARCHITECTURE
//! ============
//! Built twice: with `ssr` for the Axum server and with `hydrate` as the WASM
//! bundle. Browser-only code is gated behind `hydrate`.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    leptos::mount::hydrate_body(app::App);
}
