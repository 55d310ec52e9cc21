//! Activity session state machine
//!
//! A session is transient: built when an activity view opens, discarded
//! when it closes. Each activity kind has its own completion predicate;
//! all of them funnel through one terminal transition that writes through
//! to the progress store at most once per session.

use ahash::{AHashMap, AHashSet};

use crate::content::{ActivityItem, ActivityKind};
use crate::progress::ProgressStore;
use crate::storage::KeyValueStore;

/// Lifecycle of one opened activity. `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    InProgress,
    Completed,
}

/// Result of a completing transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionOutcome {
    /// XP granted by the progress store. 0 means the item had already been
    /// completed earlier; the completed visual state still shows but the
    /// reward notification is suppressed.
    pub xp_awarded: u32,
}

impl CompletionOutcome {
    pub fn shows_reward(&self) -> bool {
        self.xp_awarded > 0
    }
}

/// Transient per-kind interaction state
#[derive(Debug, Clone)]
enum Interaction {
    Watch { elapsed: u32 },
    Explore { activated: AHashSet<String> },
    Practice { answers: AHashMap<String, usize> },
    Reading,
}

/// State machine for one opened activity
#[derive(Debug, Clone)]
pub struct ActivitySession {
    item: ActivityItem,
    state: SessionState,
    interaction: Interaction,
}

impl ActivitySession {
    /// Open a session for an item. An item already recorded as completed
    /// opens directly in the terminal state, skipping Idle/InProgress.
    pub fn open<S: KeyValueStore>(item: ActivityItem, progress: &ProgressStore<S>) -> Self {
        let state = if progress.is_completed(&item.id) {
            SessionState::Completed
        } else {
            SessionState::Idle
        };
        let interaction = match &item.kind {
            ActivityKind::Watch { .. } => Interaction::Watch { elapsed: 0 },
            ActivityKind::Explore { .. } => Interaction::Explore {
                activated: AHashSet::new(),
            },
            ActivityKind::Practice { .. } => Interaction::Practice {
                answers: AHashMap::new(),
            },
            ActivityKind::Curiosity { .. } => Interaction::Reading,
        };
        Self {
            item,
            state,
            interaction,
        }
    }

    pub fn item(&self) -> &ActivityItem {
        &self.item
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state == SessionState::Completed
    }

    /// Begin playback of a Watch activity. No-op for other kinds or after
    /// completion.
    pub fn start(&mut self) {
        if self.state == SessionState::Idle
            && matches!(self.item.kind, ActivityKind::Watch { .. })
        {
            self.state = SessionState::InProgress;
        }
    }

    /// Advance video playback by one second of the recurring tick.
    pub fn tick<S: KeyValueStore>(
        &mut self,
        progress: &mut ProgressStore<S>,
    ) -> Option<CompletionOutcome> {
        if self.state != SessionState::InProgress {
            return None;
        }
        let duration = match &self.item.kind {
            ActivityKind::Watch { duration_seconds } => *duration_seconds,
            _ => return None,
        };
        let done = match &mut self.interaction {
            Interaction::Watch { elapsed } => {
                *elapsed = (*elapsed + 1).min(duration);
                *elapsed >= duration
            }
            _ => return None,
        };
        done.then(|| self.finish(progress))
    }

    /// Fraction of the video watched, for the progress bar.
    pub fn progress_fraction(&self) -> f32 {
        if self.state == SessionState::Completed {
            return 1.0;
        }
        match (&self.item.kind, &self.interaction) {
            (ActivityKind::Watch { duration_seconds }, Interaction::Watch { elapsed })
                if *duration_seconds > 0 =>
            {
                (*elapsed as f32 / *duration_seconds as f32).min(1.0)
            }
            _ => 0.0,
        }
    }

    /// Activate one interactive element of an Explore activity.
    /// Re-activating an element is a no-op; unknown ids are ignored.
    pub fn activate<S: KeyValueStore>(
        &mut self,
        element_id: &str,
        progress: &mut ProgressStore<S>,
    ) -> Option<CompletionOutcome> {
        if self.state == SessionState::Completed {
            return None;
        }
        let total = match &self.item.kind {
            ActivityKind::Explore { interactions }
                if interactions.iter().any(|i| i == element_id) =>
            {
                interactions.len()
            }
            _ => return None,
        };
        let done = match &mut self.interaction {
            Interaction::Explore { activated } => {
                if !activated.insert(element_id.to_string()) {
                    return None;
                }
                activated.len() >= total
            }
            _ => return None,
        };
        self.state = SessionState::InProgress;
        done.then(|| self.finish(progress))
    }

    /// Activated element count, for the "n / 3" display
    pub fn activated_count(&self) -> usize {
        match &self.interaction {
            Interaction::Explore { activated } => activated.len(),
            _ => 0,
        }
    }

    /// Record the selected option for a question, replacing any prior pick.
    pub fn select_answer(&mut self, question_id: &str, option_index: usize) {
        if self.state == SessionState::Completed {
            return;
        }
        let known = match &self.item.kind {
            ActivityKind::Practice { questions } => {
                questions.iter().any(|q| q.id == question_id)
            }
            _ => false,
        };
        if !known {
            return;
        }
        if let Interaction::Practice { answers } = &mut self.interaction {
            answers.insert(question_id.to_string(), option_index);
            self.state = SessionState::InProgress;
        }
    }

    pub fn selected_answer(&self, question_id: &str) -> Option<usize> {
        match &self.interaction {
            Interaction::Practice { answers } => answers.get(question_id).copied(),
            _ => None,
        }
    }

    /// True when every question has a selection; gates the submit action.
    pub fn can_submit(&self) -> bool {
        match (&self.item.kind, &self.interaction) {
            (ActivityKind::Practice { questions }, Interaction::Practice { answers }) => {
                questions.iter().all(|q| answers.contains_key(&q.id))
            }
            _ => false,
        }
    }

    /// Submit the practice answers. Answers are not checked for
    /// correctness; having one per question is what completes the activity.
    pub fn submit<S: KeyValueStore>(
        &mut self,
        progress: &mut ProgressStore<S>,
    ) -> Option<CompletionOutcome> {
        if self.state == SessionState::Completed || !self.can_submit() {
            return None;
        }
        Some(self.finish(progress))
    }

    /// Mark a reading activity as read.
    pub fn mark_read<S: KeyValueStore>(
        &mut self,
        progress: &mut ProgressStore<S>,
    ) -> Option<CompletionOutcome> {
        if self.state == SessionState::Completed
            || !matches!(self.item.kind, ActivityKind::Curiosity { .. })
        {
            return None;
        }
        Some(self.finish(progress))
    }

    fn finish<S: KeyValueStore>(&mut self, progress: &mut ProgressStore<S>) -> CompletionOutcome {
        self.state = SessionState::Completed;
        let xp_awarded = progress.complete(&self.item.id, self.item.xp_reward);
        CompletionOutcome { xp_awarded }
    }
}
