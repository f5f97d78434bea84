//! Trend classification over the most recent observations

use crate::types::TrendLabel;

pub const DEFAULT_TREND_WINDOW: usize = 7;
/// Minimum total history before any classification is attempted
pub const MIN_TREND_HISTORY: usize = 3;

const STRONG_GROWTH_RATIO: f64 = 1.10;
const STRONG_DECLINE_RATIO: f64 = 0.90;

#[derive(Debug, Clone)]
pub struct TrendClassifier {
    window: usize,
}

impl TrendClassifier {
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    /// Classify an item's full price series.
    ///
    /// Monotonic runs win over the ±10% thresholds so the most specific label is
    /// reported.
    pub fn classify(&self, prices: &[f64]) -> TrendLabel {
        if prices.len() < MIN_TREND_HISTORY {
            return TrendLabel::InsufficientData;
        }

        let recent = &prices[prices.len().saturating_sub(self.window)..];
        let (Some(&first), Some(&last)) = (recent.first(), recent.last()) else {
            return TrendLabel::InsufficientData;
        };
        if recent.len() < 2 {
            return TrendLabel::InsufficientData;
        }

        if recent.windows(2).all(|w| w[0] < w[1]) {
            TrendLabel::StableGrowth
        } else if recent.windows(2).all(|w| w[0] > w[1]) {
            TrendLabel::Decline
        } else if last > first * STRONG_GROWTH_RATIO {
            TrendLabel::StrongGrowth
        } else if last < first * STRONG_DECLINE_RATIO {
            TrendLabel::StrongDecline
        } else {
            TrendLabel::Stable
        }
    }
}

impl Default for TrendClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_TREND_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(prices: &[f64]) -> TrendLabel {
        TrendClassifier::default().classify(prices)
    }

    #[test]
    fn test_strictly_increasing() {
        assert_eq!(classify(&[10.0, 11.0, 12.0, 13.0, 14.0]), TrendLabel::StableGrowth);
    }

    #[test]
    fn test_strictly_decreasing() {
        assert_eq!(classify(&[14.0, 13.0, 12.0, 11.0, 10.0]), TrendLabel::Decline);
    }

    #[test]
    fn test_non_monotonic_strong_growth() {
        assert_eq!(classify(&[10.0, 10.2, 10.1, 9.9, 11.3]), TrendLabel::StrongGrowth);
    }

    #[test]
    fn test_non_monotonic_strong_decline() {
        assert_eq!(classify(&[10.0, 9.8, 9.9, 9.5, 8.5]), TrendLabel::StrongDecline);
    }

    #[test]
    fn test_flat_is_stable() {
        assert_eq!(classify(&[10.0, 10.0, 10.0, 10.0]), TrendLabel::Stable);
        assert_eq!(classify(&[10.0, 10.5, 10.2, 10.4]), TrendLabel::Stable);
    }

    #[test]
    fn test_monotonic_takes_precedence_over_threshold() {
        // +50% but strictly increasing: the monotonic label wins
        assert_eq!(classify(&[10.0, 12.0, 15.0]), TrendLabel::StableGrowth);
        assert_eq!(classify(&[15.0, 12.0, 10.0]), TrendLabel::Decline);
    }

    #[test]
    fn test_insufficient_history() {
        assert_eq!(classify(&[]), TrendLabel::InsufficientData);
        assert_eq!(classify(&[1.0]), TrendLabel::InsufficientData);
        assert_eq!(classify(&[1.0, 100.0]), TrendLabel::InsufficientData);
    }

    #[test]
    fn test_only_last_window_considered() {
        // Early crash is outside the 7-point window
        let prices = [50.0, 10.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0];
        assert_eq!(classify(&prices), TrendLabel::StableGrowth);
    }

    #[test]
    fn test_tiny_window_is_insufficient() {
        let classifier = TrendClassifier::new(1);
        assert_eq!(classifier.classify(&[1.0, 2.0, 3.0]), TrendLabel::InsufficientData);

        let classifier = TrendClassifier::new(0);
        assert_eq!(classifier.classify(&[1.0, 2.0, 3.0]), TrendLabel::InsufficientData);
    }

    #[test]
    fn test_zero_start_price() {
        assert_eq!(classify(&[0.0, 0.0, 0.0]), TrendLabel::Stable);
        assert_eq!(classify(&[0.0, 1.0, 0.5]), TrendLabel::StrongGrowth);
    }
}
