//! # stockview
//!
//! Leptos + WASM front-end for browsing stocks and running backtests.
//!
//! The interesting part is the route-guard / auth-state protocol: a static
//! route table (`router::routes`), a pure navigation guard (`router::guard`),
//! and a single-writer auth store (`state::auth`) that delegates to an
//! external authentication service (`net::auth`). Pages are thin.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
