//! # calcdeck
//!
//! A client-side multi-tool calculator app: independent calculators behind
//! shared navigation, history tracking, saved dates, and content pages.
//!
//! The core is the path-based view-state router (`router` + `browser` +
//! `nav`): a pure `resolve` over URL paths, a state machine returning
//! history-stack effects, and a thin imperative shell applying them. The
//! history log and saved-date registry persist through the `storage`
//! adapter; everything browser-specific sits behind the `web` feature so
//! the whole core tests natively.

pub mod app;
pub mod browser;
pub mod calculators;
pub mod components;
pub mod content;
pub mod nav;
pub mod pages;
pub mod registry;
pub mod router;
pub mod slug;
pub mod state;
pub mod storage;

/// WASM entry point: mounts [`app::App`] onto `<body>`.
#[cfg(feature = "web")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
