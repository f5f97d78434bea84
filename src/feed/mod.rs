//! Market feed seam
//!
//! The HTTP clients for the market and news feeds live outside this crate.
//! Anything that can produce a [`MarketQuote`] per item implements [`QuoteSource`];
//! [`SnapshotQuoteSource`] replays a recorded JSON snapshot for offline runs.

use crate::error::Result;
use crate::history::PriceHistoryStore;
use crate::quote::MarketQuote;
use crate::types::PricePoint;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Source of per-item market quotes
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch the current quote; `Ok(None)` when the feed has nothing for this item
    async fn fetch_quote(&self, item: &str) -> Result<Option<MarketQuote>>;
}

/// Recorded observations and latest quote per item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub items: BTreeMap<String, SnapshotItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotItem {
    #[serde(default)]
    pub history: Vec<PricePoint>,
    #[serde(default)]
    pub quote: MarketQuote,
}

impl Snapshot {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Replay recorded history into the store; returns how many points were accepted.
    /// Points later purged by the retention window still count.
    pub fn seed(&self, store: &PriceHistoryStore) -> usize {
        self.items
            .iter()
            .flat_map(|(item, data)| data.history.iter().map(move |p| (item, p)))
            .filter(|(item, p)| store.record_at(item, p.price, p.observed_at))
            .count()
    }

    pub fn quote_source(&self) -> SnapshotQuoteSource {
        SnapshotQuoteSource {
            quotes: self
                .items
                .iter()
                .map(|(item, data)| (item.clone(), data.quote.clone()))
                .collect(),
        }
    }
}

/// Quote source backed by a fixed map
#[derive(Debug, Clone, Default)]
pub struct SnapshotQuoteSource {
    quotes: BTreeMap<String, MarketQuote>,
}

impl SnapshotQuoteSource {
    pub fn new(quotes: BTreeMap<String, MarketQuote>) -> Self {
        Self { quotes }
    }
}

#[async_trait]
impl QuoteSource for SnapshotQuoteSource {
    async fn fetch_quote(&self, item: &str) -> Result<Option<MarketQuote>> {
        Ok(self.quotes.get(item).cloned())
    }
}
