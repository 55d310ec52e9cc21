//! Chapter and learning-pack content model
//!
//! Activity kinds form a closed enum, each variant carrying only the fields
//! its completion rule needs, so new kinds are a compile-time concern
//! rather than a string lookup.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::types::{ChapterId, PackId};

use super::CatalogError;

/// Unlock state of a chapter subsection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionStatus {
    Locked,
    Available,
    Completed,
}

/// One navigable slice of a chapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subsection {
    pub id: String,
    pub full_title: String,
    pub description: String,
    pub status: SectionStatus,
}

/// One practice question. `correct_index` is carried in content data;
/// completion logic does not consult it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

/// What an activity is, with the fields its completion rule needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ActivityKind {
    /// Timed video playback
    Watch {
        #[serde(rename = "durationSeconds")]
        duration_seconds: u32,
    },
    /// Interactive simulation; every listed interaction must be activated
    Explore { interactions: Vec<String> },
    /// Question set; every question needs an answer before submit
    Practice { questions: Vec<Question> },
    /// Reading the learner marks as done
    Curiosity { body: String },
}

impl ActivityKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Watch { .. } => "Watch",
            ActivityKind::Explore { .. } => "Explore",
            ActivityKind::Practice { .. } => "Practice",
            ActivityKind::Curiosity { .. } => "Curiosity",
        }
    }
}

/// One unit of a learning pack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display label such as "2 min"
    pub duration_label: String,
    pub xp_reward: u32,
    #[serde(flatten)]
    pub kind: ActivityKind,
}

/// Ordered collection of activities grouped under one pack id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPack {
    pub pack_id: PackId,
    pub pack_title: String,
    pub items: Vec<ActivityItem>,
}

impl LearningPack {
    pub fn item(&self, item_id: &str) -> Option<&ActivityItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// XP available across the whole pack
    pub fn total_xp(&self) -> u32 {
        self.items.iter().map(|i| i.xp_reward).sum()
    }
}

/// One chapter of a subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: ChapterId,
    pub subject: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_pack: Option<LearningPack>,
    #[serde(default)]
    pub subsections: Vec<Subsection>,
}

/// Full content catalog supplied to the engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub chapters: Vec<Chapter>,
}

impl Catalog {
    /// Look up a chapter by id
    pub fn chapter(&self, id: &ChapterId) -> Option<&Chapter> {
        self.chapters.iter().find(|c| &c.id == id)
    }

    /// Load a catalog from a JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file on disk
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}
