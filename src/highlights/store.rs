//! Highlight store
//!
//! Holds the exact substrings a learner selected in one chapter. Entries
//! are created and destroyed, never edited; re-application onto rendered
//! text lives in [`super::markup`].

use serde::{Deserialize, Serialize};

use crate::core::ids::IdGenerator;
use crate::core::time::now_millis;
use crate::core::types::{ChapterId, Timestamp};
use crate::storage::{self, KeyValueStore};

/// One user-marked span of reference text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub id: String,
    pub chapter_id: ChapterId,
    /// The exact selected substring; may span multiple lines
    pub text: String,
    pub timestamp: Timestamp,
}

/// Highlight collection for one chapter, persisted after every mutation.
#[derive(Debug)]
pub struct HighlightStore<S: KeyValueStore> {
    chapter_id: ChapterId,
    key: String,
    highlights: Vec<Highlight>,
    ids: IdGenerator,
    backend: S,
}

impl<S: KeyValueStore> HighlightStore<S> {
    /// Open the highlight store for a chapter, loading any persisted snapshot.
    pub fn open(backend: S, chapter_id: ChapterId) -> Self {
        let key = storage::highlights_key(&chapter_id);
        let highlights = storage::load_or_default(&backend, &key);
        Self {
            chapter_id,
            key,
            highlights,
            ids: IdGenerator::new("highlight"),
            backend,
        }
    }

    pub fn chapter_id(&self) -> &ChapterId {
        &self.chapter_id
    }

    /// Trim and store a new highlight. Whitespace-only selections are
    /// rejected (returns `None`).
    pub fn add(&mut self, text: &str) -> Option<Highlight> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let highlight = Highlight {
            id: self.ids.next_id(),
            chapter_id: self.chapter_id.clone(),
            text: text.to_string(),
            timestamp: now_millis(),
        };
        self.highlights.push(highlight.clone());
        storage::persist(&self.backend, &self.key, &self.highlights);
        Some(highlight)
    }

    /// Remove a highlight by id; absent ids are a no-op.
    pub fn remove(&mut self, highlight_id: &str) {
        let before = self.highlights.len();
        self.highlights.retain(|h| h.id != highlight_id);
        if self.highlights.len() != before {
            storage::persist(&self.backend, &self.key, &self.highlights);
        }
    }

    /// Exact-match membership test against stored highlight text
    pub fn is_highlighted(&self, text: &str) -> bool {
        self.highlights.iter().any(|h| h.text == text)
    }

    pub fn all(&self) -> &[Highlight] {
        &self.highlights
    }

    pub fn len(&self) -> usize {
        self.highlights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.highlights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn open_store(backend: &MemoryStore) -> HighlightStore<MemoryStore> {
        HighlightStore::open(backend.clone(), ChapterId::new("ch8"))
    }

    #[test]
    fn test_add_then_query() {
        let backend = MemoryStore::new();
        let mut store = open_store(&backend);

        let h = store.add("force is a push or pull").unwrap();
        assert!(store.is_highlighted("force is a push or pull"));
        assert_eq!(store.all(), &[h]);
    }

    #[test]
    fn test_add_trims_selection() {
        let backend = MemoryStore::new();
        let mut store = open_store(&backend);
        let h = store.add("  balanced force \n").unwrap();
        assert_eq!(h.text, "balanced force");
    }

    #[test]
    fn test_add_rejects_whitespace_only() {
        let backend = MemoryStore::new();
        let mut store = open_store(&backend);
        assert!(store.add("   \n\t ").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let backend = MemoryStore::new();
        let mut store = open_store(&backend);
        store.add("inertia").unwrap();
        store.remove("highlight-does-not-exist");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_round_trip() {
        let backend = MemoryStore::new();
        let mut store = open_store(&backend);
        let h = store.add("inertia").unwrap();
        store.remove(&h.id);
        assert!(!store.is_highlighted("inertia"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_highlights_survive_reopen() {
        let backend = MemoryStore::new();
        {
            let mut store = open_store(&backend);
            store.add("friction").unwrap();
        }
        let store = open_store(&backend);
        assert!(store.is_highlighted("friction"));
    }
}
