//! Per-item price history
//!
//! Rolling, retention-pruned time series for every tracked item. All mutation
//! goes through [`PriceHistoryStore::record_at`], which appends and purges under a
//! single write guard so readers never see a half-updated series.


use crate::config::AnalyticsConfig;
use crate::types::PricePoint;
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use std::collections::{HashMap, VecDeque};
use tracing::{debug, warn};

pub const DEFAULT_RETENTION_DAYS: i64 = 30;

/// In-memory price history keyed by item name
pub struct PriceHistoryStore {
    series: RwLock<HashMap<String, VecDeque<PricePoint>>>,
    retention: Duration,
}

impl PriceHistoryStore {
    /// Non-positive retention falls back to the default window.
    pub fn new(retention: Duration) -> Self {
        let retention = if retention > Duration::zero() {
            retention
        } else {
            warn!("Invalid retention {}, using {} days", retention, DEFAULT_RETENTION_DAYS);
            default_retention()
        };
        Self {
            series: RwLock::new(HashMap::new()),
            retention,
        }
    }

    pub fn from_config(config: &AnalyticsConfig) -> Self {
        Self::new(config.retention())
    }

    pub fn retention(&self) -> Duration {
        self.retention
    }

    /// Record an observation taken now
    pub fn record(&self, item: &str, price: f64) -> bool {
        self.record_at(item, price, Utc::now())
    }

    /// Record an observation and purge everything older than the retention window.
    ///
    /// Non-finite or negative prices are rejected and leave the store untouched.
    /// Returns whether the point was stored.
    pub fn record_at(&self, item: &str, price: f64, at: DateTime<Utc>) -> bool {
        if !price.is_finite() || price < 0.0 {
            warn!("Rejected price {} for {}", price, item);
            return false;
        }

        let mut series = self.series.write();
        let points = series.entry(item.to_string()).or_default();
        points.push_back(PricePoint::new(price, at));

        // Nothing can be older than the earliest representable instant
        let Some(cutoff) = at.checked_sub_signed(self.retention) else {
            return true;
        };

        let before = points.len();
        points.retain(|p| p.observed_at > cutoff);
        let purged = before - points.len();
        if purged > 0 {
            debug!("Purged {} expired points for {}", purged, item);
        }

        true
    }

    /// Series in insertion order, optionally only the last `limit` points.
    /// Unknown items yield an empty series.
    pub fn series(&self, item: &str, limit: Option<usize>) -> Vec<PricePoint> {
        let series = self.series.read();
        let Some(points) = series.get(item) else {
            return Vec::new();
        };

        let skip = match limit {
            Some(n) => points.len().saturating_sub(n),
            None => 0,
        };
        points.iter().skip(skip).copied().collect()
    }

    /// Prices only, same windowing as [`series`](Self::series)
    pub fn prices(&self, item: &str, limit: Option<usize>) -> Vec<f64> {
        self.series(item, limit).into_iter().map(|p| p.price).collect()
    }

    pub fn len(&self, item: &str) -> usize {
        self.series.read().get(item).map_or(0, VecDeque::len)
    }

    /// Names of all items with at least one observation, sorted
    pub fn items(&self) -> Vec<String> {
        let mut items: Vec<String> = self
            .series
            .read()
            .iter()
            .filter(|(_, points)| !points.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        items.sort();
        items
    }
}

impl Default for PriceHistoryStore {
    fn default() -> Self {
        Self::new(default_retention())
    }
}

fn default_retention() -> Duration {
    Duration::days(DEFAULT_RETENTION_DAYS)
}
