//! # kbc-client
//!
//! Leptos + WASM frontend for the KBC login and signup forms.
//!
//! This crate contains the pages, shared components, page state with the
//! login/signup flows, form validation, the session store, and the REST
//! client for the remote authentication service. The `kbc-portal` binary
//! renders it on the server (`ssr`); the browser bundle hydrates it
//! (`hydrate`).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
