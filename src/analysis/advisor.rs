//! Rule-based investment advisor
//!
//! Starts from a neutral rating of 50 and applies a fixed set of additive
//! adjustments, then maps the rating onto mode-specific thresholds.

use crate::quote::MarketQuote;
use crate::types::{InvestmentAnalysis, Mode, ReasonTag, Recommendation, Strategy, TrendLabel};

const BASE_RATING: i32 = 50;
const TREND_ADJUSTMENT: i32 = 15;
const LIQUIDITY_ADJUSTMENT: i32 = 10;
const POTENTIAL_ADJUSTMENT: i32 = 10;

/// Daily volume above which an item counts as liquid
const HIGH_VOLUME: u64 = 100;
/// Potential above which an item counts as promising
const HIGH_POTENTIAL: u8 = 70;

pub struct InvestmentAdvisor;

impl InvestmentAdvisor {
    pub fn analyze(
        quote: &MarketQuote,
        trend: TrendLabel,
        potential: u8,
        mode: Mode,
    ) -> InvestmentAnalysis {
        let mut rating = BASE_RATING;
        let mut pros = Vec::new();
        let mut cons = Vec::new();

        if trend.is_growth() {
            rating += TREND_ADJUSTMENT;
            pros.push(ReasonTag::PositiveTrend);
        }

        // Unparseable volume contributes nothing
        if quote.volume().value().is_some_and(|v| v > HIGH_VOLUME) {
            rating += LIQUIDITY_ADJUSTMENT;
            pros.push(ReasonTag::HighLiquidity);
        }

        if potential > HIGH_POTENTIAL {
            rating += POTENTIAL_ADJUSTMENT;
            pros.push(ReasonTag::HighPotential);
        }

        if trend.is_decline() {
            rating -= TREND_ADJUSTMENT;
            cons.push(ReasonTag::NegativeTrend);
        }

        let rating = rating.clamp(0, 100) as u8;
        let (recommendation, strategy) = Self::recommend(rating, mode);

        InvestmentAnalysis {
            rating,
            recommendation,
            strategy,
            pros,
            cons,
        }
    }

    /// Map a rating onto the thresholds for the given mode
    pub fn recommend(rating: u8, mode: Mode) -> (Recommendation, Strategy) {
        match mode {
            Mode::Investor => match rating {
                r if r > 70 => (Recommendation::Buy, Strategy::HoldLongTerm),
                r if r > 50 => (Recommendation::Watch, Strategy::AwaitConfirmation),
                _ => (Recommendation::Avoid, Strategy::SeekAlternatives),
            },
            Mode::Trader => match rating {
                r if r > 60 => (Recommendation::Buy, Strategy::HoldShortTerm),
                r if r > 45 => (Recommendation::ConditionalBuy, Strategy::StopLoss),
                _ => (Recommendation::Skip, Strategy::LowVolatility),
            },
        }
    }
}
