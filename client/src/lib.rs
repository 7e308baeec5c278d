//! # client
//!
//! Leptos + WASM frontend for the bookdesk catalog admin dashboard.
//!
//! This crate contains the auth and book-management pages, the layout shells
//! they mount into, application state, the REST API client, and the
//! submission pipeline every form funnels through. The same crate is built
//! with `ssr` for server rendering and with `hydrate` for the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
