//! # pulse
//!
//! Leptos + WASM single-page client for the Pulse social backend.
//!
//! This crate contains the navigation shell, pages, view state and the
//! browser implementations of the `api` crate's platform seams: `fetch` for
//! HTTP, `localStorage` for the session token and a browser WebSocket for the
//! realtime chat channel. Everything protocol-shaped lives in `api` and
//! `wire`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        leptos::logging::warn!("logger already initialized");
    }
    leptos::mount::mount_to_body(app::App);
}
