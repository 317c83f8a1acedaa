#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::storage::{self, HISTORY_KEY, StoreBackend, StoreError};

/// Opaque calculator-specific field snapshot, keyed by field name.
pub type InputSnapshot = serde_json::Map<String, serde_json::Value>;

/// The log as wired up in the running app (browser `localStorage`).
pub type AppHistoryLog = HistoryLog<crate::storage::LocalStore>;

/// One completed calculation. Immutable after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: String,
    pub calculator_name: String,
    pub summary: String,
    pub inputs: InputSnapshot,
    pub timestamp_ms: i64,
}

/// Records sharing one local calendar day, for panel display.
#[derive(Clone, Debug, PartialEq)]
pub struct DayGroup {
    pub day: NaiveDate,
    pub records: Vec<HistoryRecord>,
}

impl DayGroup {
    #[must_use]
    pub fn label(&self) -> String {
        self.day.format("%-d %b %Y").to_string()
    }
}

/// Append-only log of completed calculations, newest first.
///
/// Every mutation writes through to the backing store; loading falls back to
/// an empty log when the payload is absent or corrupt.
#[derive(Clone, Debug)]
pub struct HistoryLog<S: StoreBackend> {
    records: Vec<HistoryRecord>,
    store: S,
}

impl<S: StoreBackend> HistoryLog<S> {
    /// Load the persisted log, or start empty if nothing usable is stored.
    #[must_use]
    pub fn load(store: S) -> Self {
        let records = match storage::load_json::<Vec<HistoryRecord>, _>(&store, HISTORY_KEY) {
            Ok(records) => records,
            Err(StoreError::Missing) => Vec::new(),
            Err(err) => {
                log::warn!("discarding unreadable history: {err}");
                Vec::new()
            }
        };
        Self { records, store }
    }

    #[must_use]
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Append a record at the front. No de-duplication: repeating the same
    /// calculation produces separate entries.
    pub fn add(&mut self, calculator_name: &str, summary: &str, inputs: InputSnapshot) {
        let record = HistoryRecord {
            id: uuid::Uuid::new_v4().to_string(),
            calculator_name: calculator_name.to_owned(),
            summary: summary.to_owned(),
            inputs,
            timestamp_ms: chrono::Utc::now().timestamp_millis(),
        };
        self.records.insert(0, record);
        self.persist();
    }

    /// Remove one record by id; absent ids are ignored.
    pub fn remove(&mut self, id: &str) {
        self.records.retain(|r| r.id != id);
        self.persist();
    }

    /// Drop every record. Irreversible; any confirmation happens at the UI
    /// call site.
    pub fn clear(&mut self) {
        self.records.clear();
        self.persist();
    }

    /// Group records by local calendar day, newest day first, preserving
    /// insertion order within each day.
    #[must_use]
    pub fn grouped_by_day(&self) -> Vec<DayGroup> {
        let mut groups: Vec<DayGroup> = Vec::new();
        for record in &self.records {
            let day = local_day(record.timestamp_ms);
            match groups.last_mut() {
                Some(group) if group.day == day => group.records.push(record.clone()),
                _ => groups.push(DayGroup { day, records: vec![record.clone()] }),
            }
        }
        groups
    }

    fn persist(&self) {
        storage::save_json(&self.store, HISTORY_KEY, &self.records);
    }
}

/// Calendar day of a millisecond timestamp in the viewer's local timezone.
fn local_day(timestamp_ms: i64) -> NaiveDate {
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|utc| utc.with_timezone(&Local).date_naive())
        .unwrap_or_default()
}
