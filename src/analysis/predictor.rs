//! Linear-regression price forecast
//!
//! Fits an ordinary least-squares line of price against observation index
//! (evenly spaced, not wall-clock time) and extrapolates it `horizon_days`
//! points forward. Confidence is a fixed heuristic, not a statistical measure.

use crate::types::{Direction, Prediction, PredictionNote};

pub const DEFAULT_PREDICTION_WINDOW: usize = 30;
pub const DEFAULT_HORIZON_DAYS: u32 = 7;
pub const MIN_PREDICTION_HISTORY: usize = 10;

/// Projected move (percent) beyond which the forecast turns directional
const DIRECTIONAL_THRESHOLD_PCT: f64 = 5.0;
const BASE_CONFIDENCE: f64 = 60.0;
const MAX_CONFIDENCE: f64 = 85.0;
const NEUTRAL_CONFIDENCE: u8 = 70;

#[derive(Debug, Clone)]
pub struct PricePredictor {
    window: usize,
    horizon_days: u32,
}

impl PricePredictor {
    pub fn new(window: usize, horizon_days: u32) -> Self {
        Self { window, horizon_days }
    }

    pub fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    pub fn predict(&self, prices: &[f64]) -> Prediction {
        self.predict_with_horizon(prices, self.horizon_days)
    }

    pub fn predict_with_horizon(&self, prices: &[f64], horizon_days: u32) -> Prediction {
        if prices.len() < MIN_PREDICTION_HISTORY {
            return Prediction::fallback(horizon_days, PredictionNote::InsufficientData);
        }

        let recent = &prices[prices.len().saturating_sub(self.window)..];
        let Some(&last) = recent.last() else {
            return Prediction::fallback(horizon_days, PredictionNote::InsufficientData);
        };
        if last == 0.0 {
            return Prediction::fallback(horizon_days, PredictionNote::DegenerateData);
        }

        let projected_change = slope(recent) * horizon_days as f64;
        let change_percent = projected_change / last * 100.0;
        if !change_percent.is_finite() {
            return Prediction::fallback(horizon_days, PredictionNote::DegenerateData);
        }

        let direction = if change_percent > DIRECTIONAL_THRESHOLD_PCT {
            Direction::Bullish
        } else if change_percent < -DIRECTIONAL_THRESHOLD_PCT {
            Direction::Bearish
        } else {
            Direction::Neutral
        };

        let confidence = match direction {
            Direction::Bullish | Direction::Bearish => {
                (BASE_CONFIDENCE + change_percent.abs()).trunc().min(MAX_CONFIDENCE) as u8
            }
            Direction::Neutral => NEUTRAL_CONFIDENCE,
        };

        Prediction {
            direction,
            confidence,
            projected_change_percent: change_percent,
            horizon_days,
            note: None,
        }
    }
}

impl Default for PricePredictor {
    fn default() -> Self {
        Self::new(DEFAULT_PREDICTION_WINDOW, DEFAULT_HORIZON_DAYS)
    }
}

/// OLS slope of `prices[i]` against `i`; zero when the index has no spread
pub fn slope(prices: &[f64]) -> f64 {
    let n = prices.len();
    if n == 0 {
        return 0.0;
    }

    let x_mean = (n - 1) as f64 / 2.0;
    let y_mean = prices.iter().sum::<f64>() / n as f64;

    let (numerator, denominator) = prices
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(num, den), (i, &p)| {
            let dx = i as f64 - x_mean;
            (num + dx * (p - y_mean), den + dx * dx)
        });

    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
