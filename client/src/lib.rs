//! # arcade-client
//!
//! Leptos frontend for the game catalog: a home page listing a static set of
//! third-party browser games and a player page that embeds the selected game
//! in an iframe.
//!
//! Built with `ssr` for the server-rendered HTML and with `hydrate` for the
//! WASM bundle that attaches event handlers in the browser.

pub mod app;
pub mod catalog;
pub mod components;
pub mod error;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entrypoint: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
