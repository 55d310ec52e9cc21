//! Chapter workspace
//!
//! One chapter's view of the world: its learning-pack progress, highlight
//! collection, and sticky notes, all backed by one injected store. The
//! workspace routes activity completions into the XP counter and owns the
//! reset flow.

use crate::content::Chapter;
use crate::core::types::ChapterId;
use crate::highlights::{markup, HighlightStore};
use crate::notes::StickyNoteStore;
use crate::player::{ActivitySession, CompletionOutcome};
use crate::progress::ProgressStore;
use crate::storage::KeyValueStore;

use super::stats::StatsSnapshot;

/// All per-chapter study state over one backing store
#[derive(Debug)]
pub struct ChapterWorkspace<S: KeyValueStore + Clone> {
    chapter: Chapter,
    progress: Option<ProgressStore<S>>,
    highlights: HighlightStore<S>,
    notes: StickyNoteStore<S>,
    session_xp: u32,
}

impl<S: KeyValueStore + Clone> ChapterWorkspace<S> {
    /// Open every store for the chapter. Chapters without a learning pack
    /// get highlight/note support only.
    pub fn open(backend: S, chapter: Chapter) -> Self {
        let progress = chapter
            .learning_pack
            .as_ref()
            .map(|pack| ProgressStore::open(backend.clone(), pack.pack_id.clone()));
        let highlights = HighlightStore::open(backend.clone(), chapter.id.clone());
        let notes = StickyNoteStore::open(backend, chapter.id.clone());
        tracing::debug!("Opened workspace for chapter {}", chapter.id);
        Self {
            chapter,
            progress,
            highlights,
            notes,
            session_xp: 0,
        }
    }

    pub fn chapter(&self) -> &Chapter {
        &self.chapter
    }

    pub fn chapter_id(&self) -> &ChapterId {
        &self.chapter.id
    }

    pub fn progress(&self) -> Option<&ProgressStore<S>> {
        self.progress.as_ref()
    }

    pub fn progress_mut(&mut self) -> Option<&mut ProgressStore<S>> {
        self.progress.as_mut()
    }

    pub fn highlights(&self) -> &HighlightStore<S> {
        &self.highlights
    }

    pub fn highlights_mut(&mut self) -> &mut HighlightStore<S> {
        &mut self.highlights
    }

    pub fn notes(&self) -> &StickyNoteStore<S> {
        &self.notes
    }

    pub fn notes_mut(&mut self) -> &mut StickyNoteStore<S> {
        &mut self.notes
    }

    /// Open a player session for a pack item. Items already recorded as
    /// completed open directly in the completed state.
    pub fn open_activity(&self, item_id: &str) -> Option<ActivitySession> {
        let pack = self.chapter.learning_pack.as_ref()?;
        let item = pack.item(item_id)?.clone();
        let progress = self.progress.as_ref()?;
        Some(ActivitySession::open(item, progress))
    }

    /// Fold a completion outcome into the session XP counter. Returns true
    /// when the reward banner should show.
    pub fn record_completion(&mut self, outcome: CompletionOutcome) -> bool {
        if !outcome.shows_reward() {
            return false;
        }
        self.session_xp += outcome.xp_awarded;
        tracing::info!(
            "Earned {} XP in chapter {}",
            outcome.xp_awarded,
            self.chapter.id
        );
        true
    }

    /// XP earned during this session (drives the floating reward text)
    pub fn session_xp(&self) -> u32 {
        self.session_xp
    }

    /// XP earned across all sessions of this pack
    pub fn total_xp(&self) -> u32 {
        self.progress.as_ref().map_or(0, |p| p.total_xp())
    }

    /// True when every pack item has been completed
    pub fn is_pack_complete(&self) -> bool {
        match (&self.chapter.learning_pack, &self.progress) {
            (Some(pack), Some(progress)) => progress.is_fully_complete(pack.len()),
            _ => false,
        }
    }

    /// Clear pack progress and return the forfeited XP. The calling UI
    /// confirms destructive intent before invoking this.
    pub fn reset_progress(&mut self) -> u32 {
        let Some(progress) = self.progress.as_mut() else {
            return 0;
        };
        let forfeited = progress.total_xp();
        progress.reset();
        self.session_xp = 0;
        tracing::info!("Progress reset for chapter {}", self.chapter.id);
        forfeited
    }

    /// Reference text with this chapter's highlights applied
    pub fn highlighted(&self, text: &str) -> String {
        markup::apply(text, self.highlights.all())
    }

    /// Dashboard stats for this chapter's earned XP
    pub fn stats(&self) -> StatsSnapshot {
        StatsSnapshot::with_xp(self.total_xp())
    }
}
