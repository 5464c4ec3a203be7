use std::cell::RefCell;
use std::collections::HashMap;

use super::*;

/// In-memory store with switchable failure modes.
#[derive(Default)]
struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads {
            return Err(StoreError::Read("denied".to_owned()));
        }
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Write("quota exceeded".to_owned()));
        }
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

fn ids(values: &[Option<&str>]) -> Vec<Option<String>> {
    values.iter().map(|v| v.map(str::to_owned)).collect()
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_emits_saved_list() {
    let store = MemoryStore::with(BUCKETS_STORAGE_KEY, r#"["a",null,"c"]"#);
    let cmd = restore(&store).expect("command");
    assert_eq!(cmd, Command::RestoreBuckets { bucket_ids: ids(&[Some("a"), None, Some("c")]) });
}

#[test]
fn restore_with_missing_key_emits_nothing() {
    assert!(restore(&MemoryStore::default()).is_none());
}

#[test]
fn restore_with_malformed_value_emits_nothing() {
    for raw in ["not json", "{\"a\":1}", "42", ""] {
        let store = MemoryStore::with(BUCKETS_STORAGE_KEY, raw);
        assert!(restore(&store).is_none(), "{raw}");
    }
}

#[test]
fn restore_with_read_failure_emits_nothing() {
    let store = MemoryStore { fail_reads: true, ..MemoryStore::default() };
    assert!(restore(&store).is_none());
}

#[test]
fn restore_of_empty_array_still_emits() {
    let store = MemoryStore::with(BUCKETS_STORAGE_KEY, "[]");
    assert_eq!(restore(&store), Some(Command::RestoreBuckets { bucket_ids: vec![] }));
}

// =============================================================
// persist
// =============================================================

#[test]
fn persist_writes_json_with_empty_slots_nulled() {
    let store = MemoryStore::default();
    assert!(persist(&store, &ids(&[Some("x"), Some(""), None, Some("y")])));
    assert_eq!(store.raw(BUCKETS_STORAGE_KEY).as_deref(), Some(r#"["x",null,null,"y"]"#));
}

#[test]
fn persist_then_restore_returns_same_ids() {
    let store = MemoryStore::default();
    let list = ids(&[None, Some("b2"), Some("b3")]);
    persist(&store, &list);
    assert_eq!(restore(&store), Some(Command::RestoreBuckets { bucket_ids: list }));
}

#[test]
fn persist_failure_is_swallowed() {
    let store = MemoryStore { fail_writes: true, ..MemoryStore::default() };
    assert!(!persist(&store, &ids(&[Some("a")])));
    assert!(store.raw(BUCKETS_STORAGE_KEY).is_none());
}

// =============================================================
// decode
// =============================================================

#[test]
fn decode_accepts_legacy_object_slots() {
    let decoded = decode(r#"[{"id":"q"},{"id":""},7]"#).expect("decode");
    assert_eq!(decoded, ids(&[Some("q"), None, Some("7")]));
}

#[test]
fn decode_rejects_non_array() {
    assert!(matches!(decode("{}"), Err(StoreError::Malformed(_))));
}
