//! Imperative browser shell for the router.
//!
//! Everything `web-sys` the router needs lives here, behind the `web`
//! feature with inert native fallbacks, so `router.rs` stays pure and the
//! whole routing contract is testable without a browser.

use crate::router::HistoryOp;

/// Current location pathname, `/` when unavailable.
#[must_use]
pub fn current_path() -> String {
    #[cfg(feature = "web")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_owned())
    }
    #[cfg(not(feature = "web"))]
    {
        "/".to_owned()
    }
}

/// Current query string (including the leading `?`), empty when unavailable.
#[must_use]
pub fn current_query() -> String {
    #[cfg(feature = "web")]
    {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "web"))]
    {
        String::new()
    }
}

/// Current hash fragment (including the leading `#`), empty when absent.
#[must_use]
pub fn current_hash() -> String {
    #[cfg(feature = "web")]
    {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "web"))]
    {
        String::new()
    }
}

/// Apply a history-stack mutation produced by the router state machine.
///
/// Replacing also strips any legacy hash fragment, since the new URL is
/// path-only.
pub fn apply(op: &HistoryOp) {
    match op {
        HistoryOp::Push(path) => push_url(path),
        HistoryOp::Replace(path) => replace_url(path),
        HistoryOp::None => {}
    }
}

fn push_url(path: &str) {
    #[cfg(feature = "web")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = path;
    }
}

fn replace_url(path: &str) {
    #[cfg(feature = "web")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = path;
    }
}

/// Current vertical scroll offset in CSS pixels.
#[must_use]
pub fn scroll_offset() -> f64 {
    #[cfg(feature = "web")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "web"))]
    {
        0.0
    }
}

/// Scroll the window to a vertical offset.
pub fn scroll_to(offset: f64) {
    #[cfg(feature = "web")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, offset);
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = offset;
    }
}

/// Subscribe to back/forward traversals. `handler` receives the new path.
///
/// The listener lives for the whole session (the closure is leaked), which
/// matches the router's no-terminal-state lifecycle.
pub fn on_popstate(handler: impl Fn(String) + 'static) {
    #[cfg(feature = "web")]
    {
        use wasm_bindgen::JsCast;

        let closure = wasm_bindgen::closure::Closure::<dyn FnMut(web_sys::Event)>::new(
            move |_event: web_sys::Event| {
                handler(current_path());
            },
        );
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = handler;
    }
}
