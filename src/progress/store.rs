//! Activity progress store
//!
//! Tracks which activities of one learning pack have been completed and the
//! XP each completion earned. Completion is idempotent: an item earns XP
//! exactly once and its original record is never overwritten.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::time::now_millis;
use crate::core::types::{PackId, Timestamp};
use crate::storage::{self, KeyValueStore};

/// Completion entry for one activity item. Written once per item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    pub completed_at: Timestamp,
    pub xp_earned: u32,
}

/// Progress for one pack, loaded from and written back to the injected
/// key-value store. The store is the sole writer of its snapshot; every
/// mutation persists the full record map before returning.
#[derive(Debug)]
pub struct ProgressStore<S: KeyValueStore> {
    pack_id: PackId,
    key: String,
    records: AHashMap<String, CompletionRecord>,
    backend: S,
}

impl<S: KeyValueStore> ProgressStore<S> {
    /// Open the progress store for a pack, loading any persisted snapshot.
    /// A missing or corrupt snapshot yields an empty record map.
    pub fn open(backend: S, pack_id: PackId) -> Self {
        let key = storage::progress_key(&pack_id);
        let records = storage::load_or_default(&backend, &key);
        Self {
            pack_id,
            key,
            records,
            backend,
        }
    }

    pub fn pack_id(&self) -> &PackId {
        &self.pack_id
    }

    /// True iff a completion record exists for the item
    pub fn is_completed(&self, item_id: &str) -> bool {
        self.records.contains_key(item_id)
    }

    /// Record a first-time completion and return the XP awarded.
    ///
    /// Re-completing an already-completed item returns 0 and leaves the
    /// original record untouched; callers use the return value to decide
    /// whether to show a reward.
    pub fn complete(&mut self, item_id: &str, xp_reward: u32) -> u32 {
        if self.records.contains_key(item_id) {
            return 0;
        }
        self.records.insert(
            item_id.to_string(),
            CompletionRecord {
                completed_at: now_millis(),
                xp_earned: xp_reward,
            },
        );
        storage::persist(&self.backend, &self.key, &self.records);
        tracing::debug!(
            "Completed {} in pack {} for {} XP",
            item_id,
            self.pack_id,
            xp_reward
        );
        xp_reward
    }

    /// Completion record for an item, if any
    pub fn record(&self, item_id: &str) -> Option<&CompletionRecord> {
        self.records.get(item_id)
    }

    /// Sum of XP over all completed items in this pack
    pub fn total_xp(&self) -> u32 {
        self.records.values().map(|r| r.xp_earned).sum()
    }

    pub fn completed_count(&self) -> usize {
        self.records.len()
    }

    /// True iff at least `total_item_count` items have been completed
    pub fn is_fully_complete(&self, total_item_count: usize) -> bool {
        self.records.len() >= total_item_count
    }

    /// Clear all records and delete the persisted snapshot
    pub fn reset(&mut self) {
        self.records.clear();
        if let Err(e) = self.backend.remove(&self.key) {
            tracing::warn!("Failed to remove snapshot {}: {}", self.key, e);
        }
        tracing::debug!("Progress reset for pack {}", self.pack_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn open_store(backend: &MemoryStore, pack: &str) -> ProgressStore<MemoryStore> {
        ProgressStore::open(backend.clone(), PackId::new(pack))
    }

    #[test]
    fn test_complete_awards_xp_once() {
        let backend = MemoryStore::new();
        let mut store = open_store(&backend, "pack-a");

        assert_eq!(store.complete("watch-force", 10), 10);
        assert_eq!(store.complete("watch-force", 10), 0);
        assert_eq!(store.total_xp(), 10);
        assert_eq!(store.completed_count(), 1);
    }

    #[test]
    fn test_recomplete_keeps_original_record() {
        let backend = MemoryStore::new();
        let mut store = open_store(&backend, "pack-a");

        store.complete("item", 10);
        let first = store.record("item").cloned().unwrap();
        store.complete("item", 99);
        assert_eq!(store.record("item"), Some(&first));
    }

    #[test]
    fn test_totals_accumulate_across_items() {
        let backend = MemoryStore::new();
        let mut store = open_store(&backend, "pack-a");

        store.complete("a", 10);
        store.complete("b", 15);
        store.complete("c", 20);
        assert_eq!(store.total_xp(), 45);
        assert!(!store.is_fully_complete(4));
        assert!(store.is_fully_complete(3));
    }

    #[test]
    fn test_progress_survives_reopen() {
        let backend = MemoryStore::new();
        {
            let mut store = open_store(&backend, "pack-a");
            store.complete("a", 10);
        }
        let store = open_store(&backend, "pack-a");
        assert!(store.is_completed("a"));
        assert_eq!(store.total_xp(), 10);
    }

    #[test]
    fn test_packs_are_isolated() {
        let backend = MemoryStore::new();
        let mut a = open_store(&backend, "pack-a");
        let b = open_store(&backend, "pack-b");

        a.complete("item", 10);
        assert!(a.is_completed("item"));
        assert!(!b.is_completed("item"));
    }

    #[test]
    fn test_reset_clears_records_and_snapshot() {
        let backend = MemoryStore::new();
        let mut store = open_store(&backend, "pack-a");
        store.complete("a", 10);
        store.reset();

        assert_eq!(store.completed_count(), 0);
        assert_eq!(store.total_xp(), 0);
        let key = storage::progress_key(&PackId::new("pack-a"));
        assert_eq!(backend.get(&key).unwrap(), None);
    }

    #[test]
    fn test_corrupt_snapshot_degrades_to_empty() {
        let backend = MemoryStore::new();
        let key = storage::progress_key(&PackId::new("pack-a"));
        backend.put(&key, "not json at all").unwrap();

        let mut store = open_store(&backend, "pack-a");
        assert_eq!(store.completed_count(), 0);
        // Store remains usable and re-persists a clean snapshot
        assert_eq!(store.complete("a", 5), 5);
        let raw = backend.get(&key).unwrap().unwrap();
        assert!(raw.contains("xpEarned"));
    }
}
