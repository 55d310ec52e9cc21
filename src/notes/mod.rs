//! Draggable sticky-note annotations per chapter

pub mod drag;
pub mod store;

pub use drag::{DragSession, MINIMIZED_NOTE_SIZE};
pub use store::{NotePatch, StickyNote, StickyNoteStore, DEFAULT_NOTE_POSITION};
