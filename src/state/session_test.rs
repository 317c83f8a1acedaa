use super::*;
use crate::storage::MemoryStore;

fn snapshot() -> InputSnapshot {
    let mut map = InputSnapshot::new();
    map.insert("amount".into(), serde_json::Value::String("1000".into()));
    map
}

#[test]
fn mailbox_is_consumed_exactly_once() {
    let mut session = SessionState::default();
    session.set_restored("EMI Calculator", snapshot());

    let first = session.take_restored("EMI Calculator");
    assert_eq!(first, Some(snapshot()));

    // A second mount (e.g. back-navigation to the same calculator) starts fresh.
    assert_eq!(session.take_restored("EMI Calculator"), None);
    assert!(!session.has_restored());
}

#[test]
fn mailbox_for_another_calculator_is_left_alone() {
    let mut session = SessionState::default();
    session.set_restored("EMI Calculator", snapshot());
    assert_eq!(session.take_restored("BMI Calculator"), None);
    assert!(session.has_restored());
}

#[test]
fn refilling_replaces_unconsumed_snapshot() {
    let mut session = SessionState::default();
    session.set_restored("EMI Calculator", snapshot());
    let mut other = InputSnapshot::new();
    other.insert("weight".into(), serde_json::Value::String("70".into()));
    session.set_restored("BMI Calculator", other.clone());

    assert_eq!(session.take_restored("EMI Calculator"), None);
    assert_eq!(session.take_restored("BMI Calculator"), Some(other));
}

#[test]
fn flags_default_unset_and_persist() {
    let store = MemoryStore::new();
    assert!(!consent_accepted(&store));
    assert!(!is_pro_user(&store));
    assert!(!onboarding_seen(&store));

    accept_consent(&store);
    mark_onboarding_seen(&store);
    assert!(consent_accepted(&store));
    assert!(onboarding_seen(&store));
    assert!(!is_pro_user(&store));
}

#[test]
fn flag_rejects_non_true_values() {
    let store = MemoryStore::new();
    store.write(crate::storage::PRO_USER_KEY, "yes");
    assert!(!is_pro_user(&store));
    store.write(crate::storage::PRO_USER_KEY, "true");
    assert!(is_pro_user(&store));
}
