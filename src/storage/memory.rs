//! In-memory backend for tests and ephemeral sessions

use ahash::AHashMap;
use std::cell::RefCell;
use std::rc::Rc;

use super::{KeyValueStore, StorageError};

/// Cloneable in-memory store; clones share the same underlying map, so one
/// logical storage surface can back several stores at once.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<AHashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored snapshots
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.put("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_clones_share_entries() {
        let a = MemoryStore::new();
        let b = a.clone();
        a.put("k", "v").unwrap();
        assert_eq!(b.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_put_overwrites_whole_value() {
        let store = MemoryStore::new();
        store.put("k", "first").unwrap();
        store.put("k", "second").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
        assert_eq!(store.len(), 1);
    }
}
