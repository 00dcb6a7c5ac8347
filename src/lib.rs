//! # crimewatch-client
//!
//! Leptos + WASM frontend slice for the CrimeWatch community crime-reporting
//! and agency platform.
//!
//! This crate contains the home view (map banner, call-to-action panels, and
//! the post feed), the pages and components around it, shared client state,
//! and the REST helpers that populate that state. Mutating workflows (crime
//! reporting, agency creation, map focus) belong to collaborating modules and
//! are reached only through caller-supplied callbacks.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entrypoint: install the panic hook and console logger, then
/// hydrate the server-rendered document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
