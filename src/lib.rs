//! # foodthing
//!
//! Leptos + WASM client for FoodThing: login and registration, recipe
//! recommendation search, a pantry ("box") tracker with expiration, a
//! receipt-grouped ingredient view, a social board with likes, and settings.
//!
//! Every screen is a thin view over the REST backend. The interesting parts
//! live in `net`: the session resolver (`net::session`) and the shared request
//! pipeline with its 401 refresh protocol (`net::client`). Browser glue is
//! gated behind the `csr` feature so the rest compiles and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and the panic hook, then mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
