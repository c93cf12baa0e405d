//! # chemstore-client
//!
//! Leptos + WASM front-end access layer for the chemical-warehouse service.
//! The crate owns the session pair (bearer credential + user profile), the
//! request/response interceptor pipeline that attaches the credential and
//! recovers from authentication expiry, and the navigation guard that gates
//! admin routes before a view renders. Pages and components stay thin; the
//! remote service remains the real authority on every request.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// Browser entry point: set up panic reporting and console logging, then
/// take over the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
