// lib.rs - Root module for the storefront library
//
// The library holds the whole web application. The same crate is compiled
// twice by cargo-leptos: once as the SSR server binary (feature `ssr`) and
// once as the WASM bundle that hydrates the page in the browser
// (feature `hydrate`).

/// Sample API payloads shared by unit and integration tests
pub mod fixtures;

/// The Leptos storefront application
pub mod web_app;

/// WASM entry point, called by the hydration script cargo-leptos injects
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::web_app::App;

    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
