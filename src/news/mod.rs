//! Game news impact classification
//!
//! Headlines are tagged by how likely they are to move skin prices: new cases,
//! operations and major updates move the market; patches and balance changes
//! sometimes do; everything else rarely does.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const HIGH_IMPACT_KEYWORDS: &[&str] = &["case", "кейс", "operation", "операция", "update", "обновление"];
const MEDIUM_IMPACT_KEYWORDS: &[&str] = &["patch", "патч", "balance", "баланс", "fix", "исправление"];

/// Default number of headlines taken from one feed response
pub const DEFAULT_NEWS_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewsImpact {
    High,
    Medium,
    Low,
}

impl NewsImpact {
    pub fn classify(title: &str) -> Self {
        let title = title.to_lowercase();
        if HIGH_IMPACT_KEYWORDS.iter().any(|k| title.contains(k)) {
            NewsImpact::High
        } else if MEDIUM_IMPACT_KEYWORDS.iter().any(|k| title.contains(k)) {
            NewsImpact::Medium
        } else {
            NewsImpact::Low
        }
    }

    pub fn is_notable(&self) -> bool {
        matches!(self, NewsImpact::High | NewsImpact::Medium)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub impact: NewsImpact,
}

impl NewsItem {
    pub fn new(title: impl Into<String>, url: impl Into<String>, published_at: DateTime<Utc>) -> Self {
        let title = title.into();
        let impact = NewsImpact::classify(&title);
        Self {
            title,
            url: url.into(),
            published_at,
            impact,
        }
    }
}

/// Payload of the game news endpoint
#[derive(Debug, Deserialize)]
pub struct NewsFeedResponse {
    #[serde(default)]
    appnews: AppNews,
}

#[derive(Debug, Default, Deserialize)]
struct AppNews {
    #[serde(default)]
    newsitems: Vec<RawNewsItem>,
}

#[derive(Debug, Deserialize)]
struct RawNewsItem {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    /// Unix seconds
    #[serde(default)]
    date: i64,
}

impl NewsFeedResponse {
    /// First `limit` headlines, classified
    pub fn into_items(self, limit: usize) -> Vec<NewsItem> {
        self.appnews
            .newsitems
            .into_iter()
            .take(limit)
            .map(|raw| {
                let published_at = DateTime::from_timestamp(raw.date, 0).unwrap_or_default();
                NewsItem::new(
                    raw.title.unwrap_or_else(|| "Untitled".to_string()),
                    raw.url.unwrap_or_default(),
                    published_at,
                )
            })
            .collect()
    }
}

/// Remembers the previous batch so only fresh headlines are announced
#[derive(Debug, Default)]
pub struct NewsTracker {
    seen_titles: HashSet<String>,
    primed: bool,
}

impl NewsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return headlines not present in the previous batch, then remember this one.
    ///
    /// The very first batch only yields its top headline. An empty batch is
    /// ignored and does not reset what has been seen.
    pub fn ingest(&mut self, items: &[NewsItem]) -> Vec<NewsItem> {
        if items.is_empty() {
            return Vec::new();
        }

        let fresh: Vec<NewsItem> = if self.primed {
            items
                .iter()
                .filter(|item| !self.seen_titles.contains(&item.title))
                .cloned()
                .collect()
        } else {
            items.iter().take(1).cloned().collect()
        };

        self.seen_titles = items.iter().map(|item| item.title.clone()).collect();
        self.primed = true;

        tracing::info!("Found {} new news items", fresh.len());
        fresh
    }

    /// Fresh headlines worth a notification
    pub fn ingest_notable(&mut self, items: &[NewsItem]) -> Vec<NewsItem> {
        self.ingest(items)
            .into_iter()
            .filter(|item| item.impact.is_notable())
            .collect()
    }
}
