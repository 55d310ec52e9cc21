//! Persistent key-value snapshot storage
//!
//! Every store persists its full state as one JSON document under a
//! deterministic key. The backend is injected so tests run against an
//! in-memory map and the demo binaries against a directory of files.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::core::types::{ChapterId, PackId};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Synchronous string-keyed snapshot storage.
///
/// `put` overwrites the whole value for a key; callers always pass the
/// complete current snapshot rather than incremental patches.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Progress snapshot key for a pack
pub fn progress_key(pack_id: &PackId) -> String {
    format!("learningPack_{}_progress", pack_id)
}

/// Highlight snapshot key for a chapter
pub fn highlights_key(chapter_id: &ChapterId) -> String {
    format!("highlights_{}", chapter_id)
}

/// Sticky-note snapshot key for a chapter
pub fn sticky_notes_key(chapter_id: &ChapterId) -> String {
    format!("sticky_notes_{}", chapter_id)
}

/// Load a snapshot, falling back to the default on a missing, unreadable,
/// or corrupt value. Failures are logged, never surfaced to the caller.
pub fn load_or_default<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    match store.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Discarding corrupt snapshot {}: {}", key, e);
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(e) => {
            tracing::warn!("Failed to read snapshot {}: {}", key, e);
            T::default()
        }
    }
}

/// Persist a snapshot. A failed write is logged and the in-memory state
/// stays authoritative for the rest of the session.
pub fn persist<T, S>(store: &S, key: &str, value: &T)
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!("Failed to serialize snapshot {}: {}", key, e);
            return;
        }
    };
    if let Err(e) = store.put(key, &raw) {
        tracing::warn!("Failed to write snapshot {}: {}", key, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_derivation() {
        assert_eq!(
            progress_key(&PackId::new("force-basics-pack")),
            "learningPack_force-basics-pack_progress"
        );
        assert_eq!(highlights_key(&ChapterId::new("ch8")), "highlights_ch8");
        assert_eq!(sticky_notes_key(&ChapterId::new("ch8")), "sticky_notes_ch8");
    }

    #[test]
    fn test_load_or_default_on_missing_key() {
        let store = MemoryStore::new();
        let value: Vec<String> = load_or_default(&store, "absent");
        assert!(value.is_empty());
    }

    #[test]
    fn test_load_or_default_on_corrupt_value() {
        let store = MemoryStore::new();
        store.put("bad", "{ not json").unwrap();
        let value: Vec<String> = load_or_default(&store, "bad");
        assert!(value.is_empty());
    }

    #[test]
    fn test_persist_then_load_round_trip() {
        let store = MemoryStore::new();
        persist(&store, "list", &vec!["a".to_string(), "b".to_string()]);
        let value: Vec<String> = load_or_default(&store, "list");
        assert_eq!(value, vec!["a", "b"]);
    }
}
