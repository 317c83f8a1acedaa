//! Navigation handle provided via context.
//!
//! Wraps the pure router state machine with its browser side effects: apply
//! the returned [`HistoryOp`], remember the Home scroll offset on the way
//! out, and fill the one-shot restore mailbox before navigating.

use leptos::prelude::*;

use crate::browser;
use crate::registry;
use crate::router::{RouterState, View};
use crate::state::history::HistoryRecord;
use crate::state::session::SessionState;

/// Copyable navigation handle for components.
#[derive(Clone, Copy)]
pub struct Navigator {
    pub router: RwSignal<RouterState>,
    pub session: RwSignal<SessionState>,
}

impl Navigator {
    /// Navigate to `path`, pushing a history entry when the path changes.
    pub fn navigate(&self, path: &str) {
        self.go(path, false);
    }

    /// Navigate to `path`, replacing the current history entry.
    pub fn navigate_replace(&self, path: &str) {
        self.go(path, true);
    }

    fn go(&self, path: &str, replace: bool) {
        // Home scroll is remembered just before leaving, so back-navigation
        // can land the user where they were.
        if self.router.with_untracked(|r| r.view == View::Home) {
            let offset = browser::scroll_offset();
            self.session.update(|s| s.home_scroll = offset);
        }
        let mut op = crate::router::HistoryOp::None;
        self.router.update(|r| op = r.navigate(path, replace));
        browser::apply(&op);
    }

    /// Handle a back/forward traversal: re-resolve only, never touch the
    /// history stack.
    pub fn handle_pop(&self, path: &str) {
        self.router.update(|r| r.pop(path));
    }

    /// Reopen a past calculation with its recorded inputs.
    ///
    /// Unknown calculator names no-op. The mailbox is filled before the
    /// navigation so the calculator mounting during this same transition
    /// consumes it as its initial form state.
    pub fn restore_from_history(&self, record: &HistoryRecord) {
        if !registry::is_known(&record.calculator_name) {
            return;
        }
        self.session.update(|s| {
            s.set_restored(&record.calculator_name, record.inputs.clone());
        });
        self.navigate(&registry::path_for(&record.calculator_name));
    }
}
