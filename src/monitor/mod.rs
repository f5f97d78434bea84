//! Price monitoring and trading signals
//!
//! Feeds quotes into the shared price history and raises a [`TradingSignal`]
//! whenever an item shows strong growth or a high profit potential.

#[cfg(test)]
mod tests;

use crate::analysis::{ProfitPotentialScorer, TrendClassifier};
use crate::config::{AnalyticsConfig, MonitorConfig};
use crate::feed::QuoteSource;
use crate::history::PriceHistoryStore;
use crate::quote::MarketQuote;
use crate::types::TrendLabel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Alert raised for an item worth a closer look
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingSignal {
    pub item: String,
    pub price: f64,
    pub trend: TrendLabel,
    pub potential: u8,
    pub observed_at: DateTime<Utc>,
}

/// Quote pushed into the monitor loop
#[derive(Debug, Clone)]
pub struct QuoteUpdate {
    pub item: String,
    pub quote: MarketQuote,
    pub observed_at: DateTime<Utc>,
}

impl QuoteUpdate {
    pub fn now(item: impl Into<String>, quote: MarketQuote) -> Self {
        Self {
            item: item.into(),
            quote,
            observed_at: Utc::now(),
        }
    }
}

pub struct PriceMonitor {
    store: Arc<PriceHistoryStore>,
    trend: TrendClassifier,
    potential: ProfitPotentialScorer,
    /// Potential strictly above this raises a signal
    signal_threshold: u8,
}

impl PriceMonitor {
    pub fn new(store: Arc<PriceHistoryStore>, analytics: &AnalyticsConfig, monitor: &MonitorConfig) -> Self {
        Self {
            store,
            trend: TrendClassifier::new(analytics.trend_window),
            potential: ProfitPotentialScorer::new(analytics.potential_window),
            signal_threshold: monitor.signal_potential_threshold,
        }
    }

    pub fn with_defaults(store: Arc<PriceHistoryStore>) -> Self {
        Self::new(store, &AnalyticsConfig::default(), &MonitorConfig::default())
    }

    pub fn store(&self) -> &Arc<PriceHistoryStore> {
        &self.store
    }

    pub fn observe(&self, item: &str, quote: &MarketQuote) -> Option<TradingSignal> {
        self.observe_at(item, quote, Utc::now())
    }

    /// Record the quote's median price and check for a signal.
    ///
    /// Quotes without a usable median price are skipped entirely.
    pub fn observe_at(&self, item: &str, quote: &MarketQuote, at: DateTime<Utc>) -> Option<TradingSignal> {
        let Some(price) = quote.median_f64() else {
            debug!("No usable median price for {}: {:?}", item, quote.median_price);
            return None;
        };

        if !self.store.record_at(item, price, at) {
            return None;
        }

        let prices = self.store.prices(item, None);
        let trend = self.trend.classify(&prices);
        let potential = self.potential.score(&prices);

        if trend == TrendLabel::StrongGrowth || potential > self.signal_threshold {
            info!("📈 Signal for {}: {:?}, potential {}", item, trend, potential);
            Some(TradingSignal {
                item: item.to_string(),
                price,
                trend,
                potential,
                observed_at: at,
            })
        } else {
            None
        }
    }

    /// Fetch and observe every item once. Feed failures are logged and skipped.
    pub async fn poll<S>(&self, source: &S, items: &[String]) -> Vec<TradingSignal>
    where
        S: QuoteSource + ?Sized,
    {
        info!("Starting price monitoring for {} items", items.len());
        let mut signals = Vec::new();

        for item in items {
            match source.fetch_quote(item).await {
                Ok(Some(quote)) => signals.extend(self.observe(item, &quote)),
                Ok(None) => debug!("No quote for {}", item),
                Err(e) => warn!("Failed to fetch quote for {}: {}", item, e),
            }
        }

        info!("Price monitoring completed, {} signals", signals.len());
        signals
    }

    /// Consume quote updates until the channel closes, forwarding signals.
    /// Returns the number of signals sent.
    pub async fn run(&self, mut rx: mpsc::Receiver<QuoteUpdate>, tx: mpsc::Sender<TradingSignal>) -> usize {
        let mut sent = 0;

        while let Some(update) = rx.recv().await {
            let Some(signal) = self.observe_at(&update.item, &update.quote, update.observed_at) else {
                continue;
            };
            if tx.send(signal).await.is_err() {
                warn!("Signal receiver dropped, stopping monitor");
                break;
            }
            sent += 1;
        }

        sent
    }
}
