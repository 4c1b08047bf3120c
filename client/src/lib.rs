//! # client
//!
//! Leptos + WASM front-end for the K2M Analytics dashboard.
//!
//! This crate contains pages, components, application state, REST types, and
//! the browser glue around the `timerange` filter control. It renders on the
//! server (`ssr`) and hydrates in the browser (`hydrate`); network and storage
//! calls are real only in hydrate builds and degrade to no-ops on the server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already initialised");
    }
    leptos::mount::hydrate_body(app::App);
}
