//! Curiosity Centre content: extra media, browse topics, and news
//!
//! Everything here is browse-only reference material. Lookups return
//! `Option` so a caller navigating to a stale id can render a not-found
//! view with a way back.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::ChapterId;

/// Shelf an item appears on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CuriosityCategory {
    Core,
    GoDeeper,
}

/// Medium of a curiosity item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CuriosityKind {
    Video {
        #[serde(rename = "youtubeUrl")]
        youtube_url: String,
    },
    Tool {
        url: String,
    },
    Simulation {
        url: String,
    },
    Course {
        url: String,
        lessons: u32,
    },
    Book {
        url: String,
        pages: u32,
    },
}

/// One browsable piece of extra content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuriosityItem {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display label such as "6 min" or "45 min read"
    pub duration_label: String,
    pub category: CuriosityCategory,
    #[serde(flatten)]
    pub kind: CuriosityKind,
}

/// A general browse topic ("Explore More")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content_count: u32,
}

/// One related news article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub date: String,
    pub source: String,
    pub category: String,
    pub read_time: String,
    pub body: String,
}

/// All Curiosity Centre content, indexed for browsing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CuriosityLibrary {
    chapter_items: AHashMap<ChapterId, Vec<CuriosityItem>>,
    topics: Vec<Topic>,
    topic_items: AHashMap<String, Vec<CuriosityItem>>,
    news: Vec<NewsArticle>,
}

impl CuriosityLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_chapter_items(&mut self, chapter_id: ChapterId, items: Vec<CuriosityItem>) {
        self.chapter_items.entry(chapter_id).or_default().extend(items);
    }

    pub fn add_topic(&mut self, topic: Topic, items: Vec<CuriosityItem>) {
        self.topic_items.insert(topic.id.clone(), items);
        self.topics.push(topic);
    }

    pub fn add_news(&mut self, article: NewsArticle) {
        self.news.push(article);
    }

    /// Items attached to a chapter; empty when the chapter has none
    pub fn chapter_items(&self, chapter_id: &ChapterId) -> &[CuriosityItem] {
        self.chapter_items
            .get(chapter_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Chapter items on one shelf
    pub fn items_in_category(
        &self,
        chapter_id: &ChapterId,
        category: CuriosityCategory,
    ) -> Vec<&CuriosityItem> {
        self.chapter_items(chapter_id)
            .iter()
            .filter(|i| i.category == category)
            .collect()
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn topic(&self, topic_id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == topic_id)
    }

    /// Items filed under a topic; empty when the topic has none
    pub fn topic_items(&self, topic_id: &str) -> &[CuriosityItem] {
        self.topic_items
            .get(topic_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn news(&self) -> &[NewsArticle] {
        &self.news
    }

    pub fn article(&self, article_id: &str) -> Option<&NewsArticle> {
        self.news.iter().find(|a| a.id == article_id)
    }

    /// Find an item anywhere in the library (chapter shelves and topics)
    pub fn find_item(&self, item_id: &str) -> Option<&CuriosityItem> {
        self.chapter_items
            .values()
            .chain(self.topic_items.values())
            .flat_map(|items| items.iter())
            .find(|i| i.id == item_id)
    }
}
