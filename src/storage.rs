//! Key-value storage adapter.
//!
//! Browser builds read and write `localStorage` / `sessionStorage`; native
//! builds (unit tests) get an in-memory backend. Storage being disabled or
//! holding a corrupt payload is never fatal: loads degrade to the caller's
//! default and the failure is logged.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Durable key for the calculation-history list.
pub const HISTORY_KEY: &str = "calcdeck_history";
/// Durable key for the saved-dates list.
pub const SAVED_DATES_KEY: &str = "calcdeck_saved_dates";
/// Durable key for the cookie-consent flag.
pub const CONSENT_KEY: &str = "calcdeck_consent";
/// Durable key for the pro-user flag.
pub const PRO_USER_KEY: &str = "calcdeck_pro";
/// Session-scoped key for the "has seen onboarding" flag.
pub const ONBOARDING_SEEN_KEY: &str = "calcdeck_onboarding_seen";

/// Why a stored payload could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The key is absent or the storage area is unavailable.
    #[error("no stored value")]
    Missing,
    /// The stored string is not valid JSON for the expected shape.
    #[error("corrupt stored value: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Minimal key-value backend the state modules persist through.
///
/// Implementations must tolerate storage being unavailable; reads answer
/// `None` and writes become no-ops rather than errors.
pub trait StoreBackend: Clone + fmt::Debug + 'static {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

/// Load and deserialize a JSON payload from a backend.
pub fn load_json<T: DeserializeOwned, S: StoreBackend>(store: &S, key: &str) -> Result<T, StoreError> {
    let raw = store.read(key).ok_or(StoreError::Missing)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Serialize and write a JSON payload to a backend.
///
/// Serialization of the app's own types cannot fail in practice; if it ever
/// does the value is logged and the previous stored state left untouched.
pub fn save_json<T: Serialize, S: StoreBackend>(store: &S, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.write(key, &raw),
        Err(err) => log::warn!("failed to serialize {key}: {err}"),
    }
}

/// `localStorage`-backed store (durable across sessions).
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl StoreBackend for LocalStore {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "web")]
        {
            let storage = web_sys::window()?.local_storage().ok()??;
            storage.get_item(key).ok()?
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) {
        #[cfg(feature = "web")]
        {
            if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (key, value);
        }
    }

    fn delete(&self, key: &str) {
        #[cfg(feature = "web")]
        {
            if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = key;
        }
    }
}

/// `sessionStorage`-backed store (scoped to the tab session).
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStore;

impl StoreBackend for SessionStore {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "web")]
        {
            let storage = web_sys::window()?.session_storage().ok()??;
            storage.get_item(key).ok()?
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) {
        #[cfg(feature = "web")]
        {
            if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.session_storage()) {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (key, value);
        }
    }

    fn delete(&self, key: &str) {
        #[cfg(feature = "web")]
        {
            if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.session_storage()) {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = key;
        }
    }
}

/// In-memory store used by native unit tests to exercise persistence
/// round-trips, including corrupt-payload fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    data: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreBackend for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.data.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        if let Ok(mut data) = self.data.lock() {
            data.insert(key.to_owned(), value.to_owned());
        }
    }

    fn delete(&self, key: &str) {
        if let Ok(mut data) = self.data.lock() {
            data.remove(key);
        }
    }
}
