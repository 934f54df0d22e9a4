//! # auth-client
//!
//! Leptos + WASM frontend for account sign-up and log-in.
//!
//! This crate contains the route pages, the shared field component, the form
//! models with the sign-up submission flow, and the HTTP capability that talks
//! to the auth backend. The `hydrate` feature builds the browser bundle; the
//! `ssr` feature builds the server-rendered side mounted by `auth-portal`.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
