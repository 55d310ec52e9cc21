//! Static learning content: chapters, packs, and the Curiosity Centre
//!
//! Content is data supplied to the engine, loaded from JSON or built by
//! [`sample`]. The engine never mutates it.

pub mod catalog;
pub mod curiosity;
pub mod sample;

pub use catalog::{
    ActivityItem, ActivityKind, Catalog, Chapter, LearningPack, Question, SectionStatus, Subsection,
};
pub use curiosity::{
    CuriosityCategory, CuriosityItem, CuriosityKind, CuriosityLibrary, NewsArticle, Topic,
};

use thiserror::Error;

/// Errors that can occur when loading content
#[derive(Debug, Error)]
pub enum CatalogError {
    /// JSON parsing failed
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
