//! # dar-ui
//!
//! Leptos + WASM frontend for DAR Time Trials event registration.
//!
//! This crate contains the registration form and list pages, their view
//! state, the REST helpers for the registration backend, and the spreadsheet
//! export. The server crate links it with the `ssr` feature; the browser
//! bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
