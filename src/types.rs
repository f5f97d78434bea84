//! Core value types shared by the analytics components

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Single price observation for an item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub price: f64,
    pub observed_at: DateTime<Utc>,
}

impl PricePoint {
    pub fn new(price: f64, observed_at: DateTime<Utc>) -> Self {
        Self { price, observed_at }
    }
}

/// Discrete classification of recent price movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendLabel {
    /// Not enough history to classify
    InsufficientData,
    /// Every consecutive observation higher than the last
    StableGrowth,
    /// Every consecutive observation lower than the last
    Decline,
    /// Non-monotonic, but ended more than 10% above the start
    StrongGrowth,
    /// Non-monotonic, but ended more than 10% below the start
    StrongDecline,
    Stable,
}

impl TrendLabel {
    pub fn is_growth(&self) -> bool {
        matches!(self, TrendLabel::StableGrowth | TrendLabel::StrongGrowth)
    }

    pub fn is_decline(&self) -> bool {
        matches!(self, TrendLabel::Decline | TrendLabel::StrongDecline)
    }
}

/// Forecast direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Bullish,
    Bearish,
    Neutral,
}

/// Why a prediction fell back to the neutral default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionNote {
    /// Fewer observations than the predictor needs
    InsufficientData,
    /// Arithmetic on the series was undefined (zero last price)
    DegenerateData,
}

/// Regression-based price forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub direction: Direction,
    /// Confidence in the forecast (0-100)
    pub confidence: u8,
    pub projected_change_percent: f64,
    pub horizon_days: u32,
    /// Set when the forecast is a fallback rather than a fit
    pub note: Option<PredictionNote>,
}

impl Prediction {
    /// Neutral zero-confidence forecast used when no fit is possible
    pub fn fallback(horizon_days: u32, note: PredictionNote) -> Self {
        Self {
            direction: Direction::Neutral,
            confidence: 0,
            projected_change_percent: 0.0,
            horizon_days,
            note: Some(note),
        }
    }
}

/// User's risk/time-horizon profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Investor,
    Trader,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "investor" => Ok(Mode::Investor),
            "trader" => Ok(Mode::Trader),
            other => Err(format!("unknown mode '{}', expected investor or trader", other)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Investor => write!(f, "investor"),
            Mode::Trader => write!(f, "trader"),
        }
    }
}

/// Final recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Buy,
    /// Investor mode: wait and see
    Watch,
    /// Investor mode: stay away
    Avoid,
    /// Trader mode: buy only with a stop-loss
    ConditionalBuy,
    /// Trader mode: pass
    Skip,
}

/// Suggested way to act on a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Hold 3-6 months, exit at +20-30%
    HoldLongTerm,
    AwaitConfirmation,
    SeekAlternatives,
    /// Hold 1-2 weeks, exit at +10-15%
    HoldShortTerm,
    /// Enter with a stop-loss at -5%
    StopLoss,
    LowVolatility,
}

impl Strategy {
    pub fn description(&self) -> &'static str {
        match self {
            Strategy::HoldLongTerm => "Hold 3-6 months, take profit at +20-30%",
            Strategy::AwaitConfirmation => "Wait for the trend to be confirmed",
            Strategy::SeekAlternatives => "High risk, look for alternatives",
            Strategy::HoldShortTerm => "Hold 1-2 weeks, take profit at +10-15%",
            Strategy::StopLoss => "Set a stop-loss at -5%",
            Strategy::LowVolatility => "Not enough volatility",
        }
    }
}

/// Reason tags attached to an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonTag {
    PositiveTrend,
    HighLiquidity,
    HighPotential,
    NegativeTrend,
}

/// Investment recommendation for one item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentAnalysis {
    /// Composite rating (0-100)
    pub rating: u8,
    pub recommendation: Recommendation,
    pub strategy: Strategy,
    pub pros: Vec<ReasonTag>,
    pub cons: Vec<ReasonTag>,
}
