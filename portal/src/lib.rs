//! # portal
//!
//! Leptos + WASM front-end for the Link Wars game portal.
//!
//! The portal is a lobby plus an embedded game view, gated by a Keycloak
//! session. This crate holds the session manager and its identity provider
//! seam, the route guard and login modal, and the lobby, game, and login
//! callback pages.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod games;
pub mod pages;
pub mod state;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
