//! # lostective-client
//!
//! Leptos + WASM frontend for the Lostective campus lost-and-found portal.
//!
//! The crate owns the session manager, the route guard, the item catalog and
//! the claim/report workflows. Workflow logic is plain Rust over the
//! `net::transport::Transport` seam, so it runs and tests natively; only the
//! `hydrate` feature pulls in browser bindings.

pub mod app;
pub mod components;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
