//! # fleet-forms
//!
//! Leptos + WASM frontend for registering drivers and managing trucks against
//! the transporter REST API.
//!
//! State structs under `state` hold all validation and submission logic and
//! are tested natively against a fake `TransporterApi`; `components` and
//! `pages` are thin Leptos views over them. The browser entry point is only
//! compiled with the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
