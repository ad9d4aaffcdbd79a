// lib.rs - Root module for the storefront_admin library
//
// The admin module holds the product management workflow, the REST client
// and the Leptos screens. Fixtures provide a sample catalog for tests.

/// Product management dashboard: workflow, API client and UI
pub mod admin;

/// The fixtures module contains a reusable sample catalog
pub mod fixtures;

/// WASM entry point used by cargo-leptos to hydrate the server-rendered page
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::admin::app::App;

    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
