#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::state::history::InputSnapshot;
use crate::storage::{CONSENT_KEY, ONBOARDING_SEEN_KEY, PRO_USER_KEY, StoreBackend};

/// A snapshot waiting to be consumed by one calculator mount.
#[derive(Clone, Debug, PartialEq)]
pub struct RestoredInputs {
    pub calculator: String,
    pub values: InputSnapshot,
}

/// Per-session state that rides outside the URL.
///
/// `restored` is a one-shot mailbox: filled by the history panel right
/// before it navigates, consumed exactly once by the target calculator on
/// mount. It is not part of the URL and does not survive a reload or a
/// second visit to the same calculator.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    restored: Option<RestoredInputs>,
    pub home_scroll: f64,
}

impl SessionState {
    /// Fill the mailbox, replacing any unconsumed snapshot.
    pub fn set_restored(&mut self, calculator: &str, values: InputSnapshot) {
        self.restored = Some(RestoredInputs { calculator: calculator.to_owned(), values });
    }

    /// Consume the mailbox if it targets `calculator`.
    ///
    /// A snapshot aimed at a different calculator stays put; it will be
    /// replaced or consumed by the navigation that owns it.
    pub fn take_restored(&mut self, calculator: &str) -> Option<InputSnapshot> {
        if self.restored.as_ref()?.calculator == calculator {
            self.restored.take().map(|r| r.values)
        } else {
            None
        }
    }

    #[must_use]
    pub fn has_restored(&self) -> bool {
        self.restored.is_some()
    }
}

/// Read a persisted boolean flag ("true" means set).
pub fn flag<S: StoreBackend>(store: &S, key: &str) -> bool {
    store.read(key).as_deref() == Some("true")
}

/// Persist a boolean flag.
pub fn set_flag<S: StoreBackend>(store: &S, key: &str, value: bool) {
    store.write(key, if value { "true" } else { "false" });
}

/// Durable cookie-consent flag.
pub fn consent_accepted<S: StoreBackend>(store: &S) -> bool {
    flag(store, CONSENT_KEY)
}

pub fn accept_consent<S: StoreBackend>(store: &S) {
    set_flag(store, CONSENT_KEY, true);
}

/// Durable pro-user flag; pro users see no ad slots.
pub fn is_pro_user<S: StoreBackend>(store: &S) -> bool {
    flag(store, PRO_USER_KEY)
}

/// Session-scoped onboarding flag.
pub fn onboarding_seen<S: StoreBackend>(store: &S) -> bool {
    flag(store, ONBOARDING_SEEN_KEY)
}

pub fn mark_onboarding_seen<S: StoreBackend>(store: &S) {
    set_flag(store, ONBOARDING_SEEN_KEY, true);
}
