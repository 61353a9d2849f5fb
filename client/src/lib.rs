//! # client
//!
//! Leptos + WASM admin front-end for a rental property backend.
//!
//! This crate contains pages, components, page state, the property form
//! model, and the REST collaborator. The `hydrate` feature builds the
//! browser bundle; `ssr` lets the host render the shell.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: wire logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
