//! Per-pack activity completion tracking with one-time XP awards

pub mod store;

pub use store::{CompletionRecord, ProgressStore};
