//! # signup-client
//!
//! Leptos + WASM frontend for the user sign-up form. Replaces the React
//! `frontend` with a Rust-native UI layer.
//!
//! This crate contains the root application shell, the sign-up page, the
//! REST helper that posts registrations to the backend, and the browser
//! notification utility used for the success acknowledgment.

pub mod app;
pub mod net;
pub mod pages;
pub mod util;

/// Browser entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
