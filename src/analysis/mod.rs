//! Price analytics
//!
//! Derived signals over an item's price history:
//! - Trend classification over the last week of observations
//! - Profit potential score over the last two weeks
//! - Linear-regression forecast over the full retained window
//! - Rule-based investment recommendation, per user mode

pub mod advisor;
pub mod potential;
pub mod predictor;
pub mod trend;


pub use advisor::InvestmentAdvisor;
pub use potential::ProfitPotentialScorer;
pub use predictor::PricePredictor;
pub use trend::TrendClassifier;

use crate::config::AnalyticsConfig;
use crate::history::PriceHistoryStore;
use crate::quote::MarketQuote;
use crate::types::{InvestmentAnalysis, Mode, Prediction, TrendLabel};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Everything the presentation layer needs for one item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemReport {
    pub item: String,
    pub median_price: Option<Decimal>,
    pub observations: usize,
    pub trend: TrendLabel,
    pub potential: u8,
    pub prediction: Prediction,
    pub analysis: InvestmentAnalysis,
}

/// Runs all analytics against a shared price history
pub struct MarketAnalyzer {
    store: Arc<PriceHistoryStore>,
    trend: TrendClassifier,
    potential: ProfitPotentialScorer,
    predictor: PricePredictor,
}

impl MarketAnalyzer {
    pub fn new(store: Arc<PriceHistoryStore>, config: &AnalyticsConfig) -> Self {
        Self {
            store,
            trend: TrendClassifier::new(config.trend_window),
            potential: ProfitPotentialScorer::new(config.potential_window),
            predictor: PricePredictor::new(config.prediction_window, config.prediction_horizon_days),
        }
    }

    pub fn with_defaults(store: Arc<PriceHistoryStore>) -> Self {
        Self::new(store, &AnalyticsConfig::default())
    }

    pub fn store(&self) -> &Arc<PriceHistoryStore> {
        &self.store
    }

    pub fn trend(&self, item: &str) -> TrendLabel {
        self.trend.classify(&self.store.prices(item, None))
    }

    pub fn potential(&self, item: &str) -> u8 {
        self.potential.score(&self.store.prices(item, None))
    }

    pub fn predict(&self, item: &str) -> Prediction {
        self.predictor.predict(&self.store.prices(item, None))
    }

    /// Full report for one item from a single snapshot of its series
    pub fn analyze(&self, item: &str, quote: &MarketQuote, mode: Mode) -> ItemReport {
        let prices = self.store.prices(item, None);

        let trend = self.trend.classify(&prices);
        let potential = self.potential.score(&prices);
        let prediction = self.predictor.predict(&prices);
        let analysis = InvestmentAdvisor::analyze(quote, trend, potential, mode);

        tracing::debug!(
            "Analyzed {}: {:?}, potential {}, rating {}",
            item,
            trend,
            potential,
            analysis.rating
        );

        ItemReport {
            item: item.to_string(),
            median_price: quote.median().value(),
            observations: prices.len(),
            trend,
            potential,
            prediction,
            analysis,
        }
    }
}
