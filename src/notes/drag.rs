//! Drag handling for minimized notes
//!
//! Only minimized notes drag; an open note stays put until it is saved and
//! minimized again. While dragging, every pointer move re-clamps the note
//! so its bounding box stays fully inside the containing surface.

use crate::core::types::{Position, Size};
use crate::storage::KeyValueStore;

use super::store::StickyNoteStore;

/// Rendered size of a minimized note icon
pub const MINIMIZED_NOTE_SIZE: Size = Size {
    width: 44.0,
    height: 44.0,
};

/// An in-flight drag of one minimized note
#[derive(Debug, Clone)]
pub struct DragSession {
    note_id: String,
    grab_offset: Position,
}

impl DragSession {
    /// Begin dragging. Returns `None` when the note is open.
    pub fn begin(note: &super::StickyNote, pointer: Position) -> Option<Self> {
        if note.is_open {
            return None;
        }
        Some(Self {
            note_id: note.id.clone(),
            grab_offset: Position::new(pointer.x - note.position.x, pointer.y - note.position.y),
        })
    }

    pub fn note_id(&self) -> &str {
        &self.note_id
    }

    /// Move the note under the pointer, clamped to the container bounds.
    pub fn drag_to<S: KeyValueStore>(
        &self,
        store: &mut StickyNoteStore<S>,
        pointer: Position,
        note_size: Size,
        container: Size,
    ) {
        let target = Position::new(
            pointer.x - self.grab_offset.x,
            pointer.y - self.grab_offset.y,
        );
        store.update_position(&self.note_id, target.clamped(note_size, container));
    }
}
