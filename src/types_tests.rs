//! Tests for core types

#[cfg(test)]
mod tests {
    use super::super::types::*;
    use chrono::Utc;

    #[test]
    fn test_trend_label_serialization() {
        assert_eq!(serde_json::to_string(&TrendLabel::StableGrowth).unwrap(), "\"stable_growth\"");
        assert_eq!(serde_json::to_string(&TrendLabel::InsufficientData).unwrap(), "\"insufficient_data\"");
    }

    #[test]
    fn test_trend_label_groups() {
        assert!(TrendLabel::StableGrowth.is_growth());
        assert!(TrendLabel::StrongGrowth.is_growth());
        assert!(TrendLabel::Decline.is_decline());
        assert!(TrendLabel::StrongDecline.is_decline());

        for label in [TrendLabel::Stable, TrendLabel::InsufficientData] {
            assert!(!label.is_growth());
            assert!(!label.is_decline());
        }
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("investor".parse::<Mode>().unwrap(), Mode::Investor);
        assert_eq!(" Trader ".parse::<Mode>().unwrap(), Mode::Trader);
        assert!("news".parse::<Mode>().is_err());
        assert_eq!(Mode::default(), Mode::Investor);
        assert_eq!(Mode::Trader.to_string(), "trader");
    }

    #[test]
    fn test_direction_deserialization() {
        let bullish: Direction = serde_json::from_str("\"bullish\"").unwrap();
        assert_eq!(bullish, Direction::Bullish);
    }

    #[test]
    fn test_prediction_fallback() {
        let prediction = Prediction::fallback(7, PredictionNote::DegenerateData);

        assert_eq!(prediction.direction, Direction::Neutral);
        assert_eq!(prediction.confidence, 0);
        assert_eq!(prediction.projected_change_percent, 0.0);
        assert_eq!(prediction.note, Some(PredictionNote::DegenerateData));
    }

    #[test]
    fn test_strategy_descriptions_distinct() {
        let all = [
            Strategy::HoldLongTerm,
            Strategy::AwaitConfirmation,
            Strategy::SeekAlternatives,
            Strategy::HoldShortTerm,
            Strategy::StopLoss,
            Strategy::LowVolatility,
        ];
        let mut descriptions: Vec<_> = all.iter().map(|s| s.description()).collect();
        descriptions.sort();
        descriptions.dedup();
        assert_eq!(descriptions.len(), all.len());
        assert!(Strategy::StopLoss.description().contains("-5%"));
    }

    #[test]
    fn test_price_point_roundtrip() {
        let point = PricePoint::new(12.34, Utc::now());
        let json = serde_json::to_string(&point).unwrap();
        let back: PricePoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, point);
    }
}
