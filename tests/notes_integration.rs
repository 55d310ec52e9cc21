//! Integration tests for sticky notes and drag clamping

use proptest::prelude::*;

use studypath::core::types::{ChapterId, Position, Size};
use studypath::notes::{
    DragSession, NotePatch, StickyNoteStore, DEFAULT_NOTE_POSITION, MINIMIZED_NOTE_SIZE,
};
use studypath::storage::{self, KeyValueStore, MemoryStore};

fn open_store(backend: &MemoryStore) -> StickyNoteStore<MemoryStore> {
    StickyNoteStore::open(backend.clone(), ChapterId::new("ch8"))
}

#[test]
fn test_note_lifecycle() {
    let backend = MemoryStore::new();
    let mut store = open_store(&backend);

    let note = store.add();
    assert!(note.is_open);
    assert_eq!(note.position, DEFAULT_NOTE_POSITION);

    store.update(
        &note.id,
        NotePatch {
            heading: Some("Inertia".to_string()),
            content: Some("Mass resists change in motion".to_string()),
            is_open: Some(false),
        },
    );
    let saved = store.get(&note.id).unwrap();
    assert_eq!(saved.heading, "Inertia");
    assert!(!saved.is_open);

    store.delete(&note.id);
    assert!(store.is_empty());
}

#[test]
fn test_notes_persist_under_chapter_key() {
    let backend = MemoryStore::new();
    let mut store = open_store(&backend);
    store.add();

    let raw = backend
        .get(&storage::sticky_notes_key(&ChapterId::new("ch8")))
        .unwrap()
        .expect("snapshot written");
    assert!(raw.contains("\"isOpen\":true"));
    assert!(raw.contains("\"position\":{\"x\":100.0,\"y\":100.0}"));
}

#[test]
fn test_minimized_note_drags_and_clamps() {
    let backend = MemoryStore::new();
    let mut store = open_store(&backend);
    let note = store.add();
    store.update(
        &note.id,
        NotePatch {
            is_open: Some(false),
            ..Default::default()
        },
    );

    let container = Size::new(800.0, 600.0);
    let note_state = store.get(&note.id).unwrap().clone();
    let drag = DragSession::begin(&note_state, Position::new(100.0, 100.0)).unwrap();

    // Well outside the container in both axes
    drag.drag_to(
        &mut store,
        Position::new(-500.0, 900.0),
        MINIMIZED_NOTE_SIZE,
        container,
    );
    let pos = store.get(&note.id).unwrap().position;
    assert_eq!(pos.x, 0.0);
    assert_eq!(pos.y, 600.0 - MINIMIZED_NOTE_SIZE.height);
}

#[test]
fn test_open_note_refuses_drag() {
    let backend = MemoryStore::new();
    let mut store = open_store(&backend);
    let note = store.add();
    assert!(DragSession::begin(&note, Position::new(0.0, 0.0)).is_none());
    // Position is untouched
    assert_eq!(store.get(&note.id).unwrap().position, DEFAULT_NOTE_POSITION);
}

#[test]
fn test_continuous_drag_updates_follow_pointer() {
    let backend = MemoryStore::new();
    let mut store = open_store(&backend);
    let note = store.add();
    store.update(
        &note.id,
        NotePatch {
            is_open: Some(false),
            ..Default::default()
        },
    );

    let container = Size::new(800.0, 600.0);
    let note_state = store.get(&note.id).unwrap().clone();
    let drag = DragSession::begin(&note_state, Position::new(100.0, 100.0)).unwrap();

    for (px, py) in [(150.0, 120.0), (300.0, 280.0), (420.0, 500.0)] {
        drag.drag_to(
            &mut store,
            Position::new(px, py),
            MINIMIZED_NOTE_SIZE,
            container,
        );
        assert_eq!(store.get(&note.id).unwrap().position, Position::new(px, py));
    }
}

proptest! {
    /// Wherever the pointer goes, the stored position keeps the note's
    /// bounding box fully inside the container.
    #[test]
    fn prop_dragged_note_stays_inside_container(
        px in -2000.0f32..2000.0,
        py in -2000.0f32..2000.0,
    ) {
        let backend = MemoryStore::new();
        let mut store = StickyNoteStore::open(backend, ChapterId::new("ch8"));
        let note = store.add();
        store.update(&note.id, NotePatch { is_open: Some(false), ..Default::default() });

        let container = Size::new(800.0, 600.0);
        let note_state = store.get(&note.id).unwrap().clone();
        let drag = DragSession::begin(&note_state, note_state.position).unwrap();
        drag.drag_to(&mut store, Position::new(px, py), MINIMIZED_NOTE_SIZE, container);

        let pos = store.get(&note.id).unwrap().position;
        prop_assert!(pos.x >= 0.0);
        prop_assert!(pos.y >= 0.0);
        prop_assert!(pos.x <= container.width - MINIMIZED_NOTE_SIZE.width);
        prop_assert!(pos.y <= container.height - MINIMIZED_NOTE_SIZE.height);
    }
}
