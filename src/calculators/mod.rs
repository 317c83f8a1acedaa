//! Individual calculators: a pure formula function plus a form component
//! each. Components read their *initial* field values from an optional
//! restored snapshot, then own their form state — later user edits are never
//! clobbered by the snapshot.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod age;
pub mod bmi;
pub mod discount;
pub mod emi;
pub mod percentage;
pub mod sip;

use crate::state::history::InputSnapshot;

/// Initial value for a form field: the restored snapshot's entry if it holds
/// a string under `key`, otherwise `default`.
#[must_use]
pub fn initial(restored: Option<&InputSnapshot>, key: &str, default: &str) -> String {
    restored
        .and_then(|snap| snap.get(key))
        .and_then(|v| v.as_str())
        .map_or_else(|| default.to_owned(), ToOwned::to_owned)
}

/// Build a snapshot from raw field strings.
#[must_use]
pub fn snapshot(pairs: &[(&str, &str)]) -> InputSnapshot {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), serde_json::Value::String((*v).to_owned())))
        .collect()
}

/// Parse a numeric field. Rejects non-finite values; trims whitespace.
#[must_use]
pub fn parse_number(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    value.is_finite().then_some(value)
}
