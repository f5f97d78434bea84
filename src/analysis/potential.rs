//! Profit potential score
//!
//! Linear blend of momentum and dispersion over a two-week window:
//! `50 + 2 * trend% + 0.5 * volatility%`, clamped to 0-100.

pub const DEFAULT_POTENTIAL_WINDOW: usize = 14;
pub const MIN_POTENTIAL_HISTORY: usize = 5;
/// Score reported when there is nothing to score
pub const NEUTRAL_POTENTIAL: u8 = 50;

const TREND_WEIGHT: f64 = 2.0;
const VOLATILITY_WEIGHT: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct ProfitPotentialScorer {
    window: usize,
}

impl ProfitPotentialScorer {
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    pub fn score(&self, prices: &[f64]) -> u8 {
        if prices.len() < MIN_POTENTIAL_HISTORY {
            return NEUTRAL_POTENTIAL;
        }

        let recent = &prices[prices.len().saturating_sub(self.window)..];
        let (Some(&first), Some(&last)) = (recent.first(), recent.last()) else {
            return NEUTRAL_POTENTIAL;
        };

        let min = recent.iter().copied().fold(f64::INFINITY, f64::min);
        let max = recent.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if min <= 0.0 || first <= 0.0 {
            return NEUTRAL_POTENTIAL;
        }

        let volatility = (max - min) / min * 100.0;
        let trend = (last - first) / first * 100.0;
        let potential = 50.0 + TREND_WEIGHT * trend + VOLATILITY_WEIGHT * volatility;

        if !potential.is_finite() {
            return NEUTRAL_POTENTIAL;
        }
        potential.trunc().clamp(0.0, 100.0) as u8
    }
}

impl Default for ProfitPotentialScorer {
    fn default() -> Self {
        Self::new(DEFAULT_POTENTIAL_WINDOW)
    }
}
