//! Sticky note store
//!
//! Freeform notes pinned onto a chapter surface. Heading, content, open
//! state, and position are independently mutable; deletion is gated behind
//! a confirmation step in the calling UI, not here.

use serde::{Deserialize, Serialize};

use crate::core::ids::IdGenerator;
use crate::core::time::now_millis;
use crate::core::types::{ChapterId, Position, Timestamp};
use crate::storage::{self, KeyValueStore};

/// Where a freshly created note lands
pub const DEFAULT_NOTE_POSITION: Position = Position { x: 100.0, y: 100.0 };

/// One draggable annotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickyNote {
    pub id: String,
    pub chapter_id: ChapterId,
    pub heading: String,
    pub content: String,
    pub position: Position,
    pub is_open: bool,
    pub timestamp: Timestamp,
}

/// Editable fields of a note; `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub heading: Option<String>,
    pub content: Option<String>,
    pub is_open: Option<bool>,
}

/// Note collection for one chapter, persisted after every mutation.
#[derive(Debug)]
pub struct StickyNoteStore<S: KeyValueStore> {
    chapter_id: ChapterId,
    key: String,
    notes: Vec<StickyNote>,
    ids: IdGenerator,
    backend: S,
}

impl<S: KeyValueStore> StickyNoteStore<S> {
    /// Open the note store for a chapter, loading any persisted snapshot.
    pub fn open(backend: S, chapter_id: ChapterId) -> Self {
        let key = storage::sticky_notes_key(&chapter_id);
        let notes = storage::load_or_default(&backend, &key);
        Self {
            chapter_id,
            key,
            notes,
            ids: IdGenerator::new("note"),
            backend,
        }
    }

    pub fn chapter_id(&self) -> &ChapterId {
        &self.chapter_id
    }

    /// Create a new empty note at the default position, open for editing.
    pub fn add(&mut self) -> StickyNote {
        let note = StickyNote {
            id: self.ids.next_id(),
            chapter_id: self.chapter_id.clone(),
            heading: String::new(),
            content: String::new(),
            position: DEFAULT_NOTE_POSITION,
            is_open: true,
            timestamp: now_millis(),
        };
        self.notes.push(note.clone());
        storage::persist(&self.backend, &self.key, &self.notes);
        note
    }

    /// Shallow-merge the patch into a note; absent ids are a no-op.
    pub fn update(&mut self, note_id: &str, patch: NotePatch) {
        let Some(note) = self.notes.iter_mut().find(|n| n.id == note_id) else {
            return;
        };
        if let Some(heading) = patch.heading {
            note.heading = heading;
        }
        if let Some(content) = patch.content {
            note.content = content;
        }
        if let Some(is_open) = patch.is_open {
            note.is_open = is_open;
        }
        storage::persist(&self.backend, &self.key, &self.notes);
    }

    /// Set a note's position; absent ids are a no-op.
    pub fn update_position(&mut self, note_id: &str, position: Position) {
        let Some(note) = self.notes.iter_mut().find(|n| n.id == note_id) else {
            return;
        };
        note.position = position;
        storage::persist(&self.backend, &self.key, &self.notes);
    }

    /// Flip a note between open and minimized
    pub fn toggle(&mut self, note_id: &str) {
        let Some(note) = self.notes.iter_mut().find(|n| n.id == note_id) else {
            return;
        };
        note.is_open = !note.is_open;
        storage::persist(&self.backend, &self.key, &self.notes);
    }

    /// Delete a note. The calling UI confirms destructive intent first.
    pub fn delete(&mut self, note_id: &str) {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != note_id);
        if self.notes.len() != before {
            storage::persist(&self.backend, &self.key, &self.notes);
        }
    }

    pub fn get(&self, note_id: &str) -> Option<&StickyNote> {
        self.notes.iter().find(|n| n.id == note_id)
    }

    pub fn all(&self) -> &[StickyNote] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
