use super::*;

#[test]
fn memory_store_round_trip() {
    let store = MemoryStore::new();
    assert_eq!(store.read("k"), None);
    store.write("k", "v");
    assert_eq!(store.read("k"), Some("v".to_owned()));
    store.delete("k");
    assert_eq!(store.read("k"), None);
}

#[test]
fn clones_share_backing_data() {
    let store = MemoryStore::new();
    let other = store.clone();
    store.write("k", "v");
    assert_eq!(other.read("k"), Some("v".to_owned()));
}

#[test]
fn load_json_missing_key() {
    let store = MemoryStore::new();
    let result: Result<Vec<String>, StoreError> = load_json(&store, "absent");
    assert!(matches!(result, Err(StoreError::Missing)));
}

#[test]
fn load_json_corrupt_payload() {
    let store = MemoryStore::new();
    store.write("k", "not json at all");
    let result: Result<Vec<String>, StoreError> = load_json(&store, "k");
    assert!(matches!(result, Err(StoreError::Corrupt(_))));
}

#[test]
fn save_then_load_json() {
    let store = MemoryStore::new();
    save_json(&store, "k", &vec!["a".to_owned(), "b".to_owned()]);
    let loaded: Vec<String> = load_json(&store, "k").unwrap();
    assert_eq!(loaded, ["a", "b"]);
}

#[test]
#[cfg(not(feature = "web"))]
fn browser_stores_are_inert_off_wasm() {
    // Native builds have no window; reads answer None and writes are no-ops.
    let store = LocalStore;
    store.write("k", "v");
    assert_eq!(store.read("k"), None);
    store.delete("k");

    let store = SessionStore;
    store.write("k", "v");
    assert_eq!(store.read("k"), None);
}
