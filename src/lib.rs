#![recursion_limit = "256"]

pub mod calendar;
pub mod charts;
pub mod common;
pub mod config;
pub mod enrollment;
pub mod fixtures;
pub mod frontend;
pub mod inbox;
pub mod models;
pub mod session;
pub mod toast;
#[cfg(feature = "ssr")]
pub mod web;

/// WASM hydration entry point
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already set: {err}");
    }
    leptos::mount::hydrate_body(frontend::App);
}
