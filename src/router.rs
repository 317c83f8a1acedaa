//! Path-based view-state router.
//!
//! DESIGN
//! ======
//! `resolve` is a pure, total function from a path string to a [`View`];
//! [`RouterState`] is a plain state machine whose transitions return a
//! [`HistoryOp`] describing the history-stack mutation the browser shell
//! should apply. No `web-sys` here — the imperative half lives in
//! `crate::browser`, which keeps every routing rule testable natively.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use crate::content;
use crate::registry;
use crate::slug::slugify;

/// The single active top-level page, derived from the URL path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    Home,
    Calculator { name: String },
    SavedDates,
    Policy { key: PolicyKey },
    BlogList,
    BlogPost { slug: String },
}

/// Static content pages reachable at fixed paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyKey {
    Privacy,
    Terms,
    About,
    Disclaimer,
}

impl PolicyKey {
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/privacy" => Some(Self::Privacy),
            "/terms" => Some(Self::Terms),
            "/about" => Some(Self::About),
            "/disclaimer" => Some(Self::Disclaimer),
            _ => None,
        }
    }
}

/// History-stack mutation requested by a transition.
///
/// The state machine never touches the browser; it hands one of these back
/// and the shell applies it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryOp {
    Push(String),
    Replace(String),
    None,
}

/// Resolve a path to exactly one [`View`].
///
/// Total over all strings: unknown calculator slugs and unrecognized paths
/// fall back to `Home`, unknown blog slugs fall back to `BlogList`. Never
/// errors.
#[must_use]
pub fn resolve(path: &str) -> View {
    if let Some(slug) = path.strip_prefix("/calc/") {
        return match registry::find_by_slug(slug) {
            Some(info) => View::Calculator { name: info.name.to_owned() },
            None => View::Home,
        };
    }
    if let Some(slug) = path.strip_prefix("/blog/") {
        return match content::find_post(slug) {
            Some(post) => View::BlogPost { slug: post.slug.to_owned() },
            None => View::BlogList,
        };
    }
    match path {
        "/saved-dates" => View::SavedDates,
        "/blog" => View::BlogList,
        _ => match PolicyKey::from_path(path) {
            Some(key) => View::Policy { key },
            None => View::Home,
        },
    }
}

/// Router state: current path, the view derived from it, and whether the
/// session is in embed mode.
///
/// The view is always `resolve(path)` (except in embed mode, which pins a
/// single calculator for the whole session), so there is never view state
/// that cannot be reconstructed from the URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouterState {
    pub path: String,
    pub view: View,
    pub embed: bool,
}

impl RouterState {
    /// Navigate to `path`.
    ///
    /// Re-resolves unconditionally, but only mutates the history stack when
    /// the path actually changes — repeated taps on the same link must not
    /// grow the back stack.
    pub fn navigate(&mut self, path: &str, replace: bool) -> HistoryOp {
        self.view = resolve(path);
        if self.path == path {
            return HistoryOp::None;
        }
        self.path = path.to_owned();
        if replace {
            HistoryOp::Replace(path.to_owned())
        } else {
            HistoryOp::Push(path.to_owned())
        }
    }

    /// Handle a back/forward traversal to `path`.
    ///
    /// Pops only re-resolve; returning no [`HistoryOp`] makes it impossible
    /// for a pop to push and loop the back stack.
    pub fn pop(&mut self, path: &str) {
        self.path = path.to_owned();
        self.view = resolve(path);
    }
}

/// Startup reconciliation, run exactly once.
///
/// Priority: an `embed=<name>` query parameter naming a known calculator
/// pins that calculator for the whole session; otherwise a legacy `#/...`
/// hash fragment is normalized into the path scheme and the current history
/// entry replaced; otherwise the path resolves as-is.
#[must_use]
pub fn startup(path: &str, query: &str, hash: &str) -> (RouterState, HistoryOp) {
    if let Some(name) = embed_param(query) {
        if registry::is_known(&name) {
            let path = format!("/calc/{}", slugify(&name));
            let state = RouterState {
                path,
                view: View::Calculator { name },
                embed: true,
            };
            return (state, HistoryOp::None);
        }
    }
    if let Some(normalized) = normalize_hash(hash) {
        let view = resolve(&normalized);
        let state = RouterState { path: normalized.clone(), view, embed: false };
        return (state, HistoryOp::Replace(normalized));
    }
    let state = RouterState { path: path.to_owned(), view: resolve(path), embed: false };
    (state, HistoryOp::None)
}

/// Extract and decode the `embed` query parameter, if present.
#[must_use]
pub fn embed_param(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    for pair in query.split('&') {
        if let Some((key, value)) = pair.split_once('=') {
            if key == "embed" && !value.is_empty() {
                return Some(percent_decode(value));
            }
        }
    }
    None
}

/// Normalize a legacy hash fragment (`#/emi` or `#emi`) to a leading-slash
/// path. Empty and bare-`#` fragments normalize to nothing.
#[must_use]
pub fn normalize_hash(hash: &str) -> Option<String> {
    let frag = hash.strip_prefix('#').unwrap_or(hash);
    if frag.is_empty() {
        return None;
    }
    if frag.starts_with('/') {
        Some(frag.to_owned())
    } else {
        Some(format!("/{frag}"))
    }
}

/// Decode `%XX` escapes and `+` in a query-string value.
///
/// Malformed escapes pass through verbatim rather than erroring; routing
/// must stay total over arbitrary input.
#[must_use]
pub fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match hex_pair(bytes[i + 1], bytes[i + 2]) {
                    Some(byte) => {
                        out.push(byte);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            other => {
                out.push(other);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    let hi = (hi as char).to_digit(16)?;
    let lo = (lo as char).to_digit(16)?;
    Some((hi * 16 + lo) as u8)
}
