//! # client
//!
//! Leptos + WASM frontend for the quote board: a reorderable list of short
//! quotes with add, edit-in-dialog, delete, and drag-to-reorder.
//!
//! State lives in `state::quotes::QuoteBoard`, held in one `RwSignal` that
//! `app::App` provides through context. Built with `hydrate` for the browser
//! bundle and `ssr` for server rendering.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the reactive app to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("quoteboard hydrating");
    leptos::mount::hydrate_body(app::App);
}
