//! nodebird web server and UI.
//!
//! This crate provides the Leptos-based login flow: the login form
//! component, the pages that host it, and (with the `ssr` feature) the
//! axum server that renders them.

#![allow(non_snake_case)]

pub mod app;
pub mod components;
pub mod pages;

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod error;
#[cfg(feature = "ssr")]
pub mod server;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
