#[cfg(test)]
#[path = "saved_dates_test.rs"]
mod saved_dates_test;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::storage::{self, SAVED_DATES_KEY, StoreBackend, StoreError};

/// What a saved date commemorates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateKind {
    Birthday,
    Anniversary,
}

impl DateKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Birthday => "Birthday",
            Self::Anniversary => "Anniversary",
        }
    }
}

/// The registry as wired up in the running app (browser `localStorage`).
pub type AppSavedDates = SavedDates<crate::storage::LocalStore>;

/// A named date used by the age/date calculators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedDateEntry {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    pub kind: DateKind,
}

/// Small CRUD list of saved dates, kept sorted ascending by date.
///
/// Duplicates are allowed; removal is by id and ignores absent ids. Same
/// persistence pattern as the history log: write-through on every mutation,
/// fall back to empty on unreadable payloads.
#[derive(Clone, Debug)]
pub struct SavedDates<S: StoreBackend> {
    entries: Vec<SavedDateEntry>,
    store: S,
}

impl<S: StoreBackend> SavedDates<S> {
    #[must_use]
    pub fn load(store: S) -> Self {
        let entries = match storage::load_json::<Vec<SavedDateEntry>, _>(&store, SAVED_DATES_KEY) {
            Ok(entries) => entries,
            Err(StoreError::Missing) => Vec::new(),
            Err(err) => {
                log::warn!("discarding unreadable saved dates: {err}");
                Vec::new()
            }
        };
        Self { entries, store }
    }

    #[must_use]
    pub fn entries(&self) -> &[SavedDateEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a new entry and re-sort ascending by date. The sort is stable,
    /// so entries sharing a date keep insertion order.
    pub fn add(&mut self, name: &str, date: NaiveDate, kind: DateKind) {
        self.entries.push(SavedDateEntry {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_owned(),
            date,
            kind,
        });
        self.entries.sort_by_key(|e| e.date);
        self.persist();
    }

    pub fn remove(&mut self, id: &str) {
        self.entries.retain(|e| e.id != id);
        self.persist();
    }

    fn persist(&self) {
        storage::save_json(&self.store, SAVED_DATES_KEY, &self.entries);
    }
}
