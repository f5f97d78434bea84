//! Unit tests for the price monitor

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::error::AnalyticsError;
    use crate::feed::{MockQuoteSource, SnapshotQuoteSource};
    use chrono::Duration;
    use std::collections::BTreeMap;

    fn quote(median: &str) -> MarketQuote {
        MarketQuote::new(None, Some(median), Some("50"))
    }

    fn feed(monitor: &PriceMonitor, item: &str, prices: &[&str]) -> Vec<TradingSignal> {
        let start = Utc::now() - Duration::hours(prices.len() as i64);
        prices
            .iter()
            .enumerate()
            .filter_map(|(i, p)| monitor.observe_at(item, &quote(p), start + Duration::hours(i as i64)))
            .collect()
    }

    #[test]
    fn test_observe_records_price() {
        let monitor = PriceMonitor::with_defaults(Arc::new(PriceHistoryStore::default()));

        assert!(monitor.observe("item", &quote("$1,012.50")).is_none());
        assert_eq!(monitor.store().prices("item", None), vec![1012.5]);
    }

    #[test]
    fn test_unparseable_median_skipped() {
        let monitor = PriceMonitor::with_defaults(Arc::new(PriceHistoryStore::default()));

        assert!(monitor.observe("item", &quote("N/A")).is_none());
        assert!(monitor.observe("item", &MarketQuote::default()).is_none());
        assert!(monitor.observe("item", &quote("-$5.00")).is_none());
        assert_eq!(monitor.store().len("item"), 0);
    }

    #[test]
    fn test_strong_growth_signal() {
        let monitor = PriceMonitor::with_defaults(Arc::new(PriceHistoryStore::default()));

        let signals = feed(&monitor, "item", &["$10.00", "$10.20", "$10.10", "$9.90", "$11.30"]);

        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].trend, TrendLabel::StrongGrowth);
        assert_eq!(signals[0].item, "item");
        assert!((signals[0].price - 11.3).abs() < 1e-9);
    }

    #[test]
    fn test_high_potential_signal() {
        let monitor = PriceMonitor::with_defaults(Arc::new(PriceHistoryStore::default()));

        // Monotonic rise: StableGrowth, but potential saturates once 5 points exist
        let signals = feed(&monitor, "item", &["$10", "$11", "$12", "$13", "$14"]);

        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].trend, TrendLabel::StableGrowth);
        assert_eq!(signals[0].potential, 100);
    }

    #[test]
    fn test_flat_prices_no_signal() {
        let monitor = PriceMonitor::with_defaults(Arc::new(PriceHistoryStore::default()));
        let signals = feed(&monitor, "item", &["$10"; 8]);
        assert!(signals.is_empty());
    }

    #[test]
    fn test_custom_threshold() {
        let store = Arc::new(PriceHistoryStore::default());
        let monitor_config = MonitorConfig {
            signal_potential_threshold: 49,
            ..Default::default()
        };
        let monitor = PriceMonitor::new(store, &AnalyticsConfig::default(), &monitor_config);

        // Neutral potential of 50 clears a threshold of 49
        let signals = feed(&monitor, "item", &["$10"]);
        assert_eq!(signals.len(), 1);
    }

    #[tokio::test]
    async fn test_poll_skips_feed_errors() {
        let mut source = MockQuoteSource::new();
        source.expect_fetch_quote().returning(|item: &str| match item {
            "broken" => Err(AnalyticsError::Feed("timeout".into())),
            "empty" => Ok(None),
            _ => Ok(Some(MarketQuote::new(None, Some("$5.00"), None))),
        });

        let monitor = PriceMonitor::with_defaults(Arc::new(PriceHistoryStore::default()));
        let items = vec!["broken".to_string(), "empty".to_string(), "ok".to_string()];
        let signals = monitor.poll(&source, &items).await;

        assert!(signals.is_empty());
        assert_eq!(monitor.store().len("ok"), 1);
        assert_eq!(monitor.store().len("broken"), 0);
        assert_eq!(monitor.store().len("empty"), 0);
    }

    #[tokio::test]
    async fn test_poll_with_snapshot_source() {
        let mut quotes = BTreeMap::new();
        quotes.insert("item".to_string(), quote("$20.00"));
        let source = SnapshotQuoteSource::new(quotes);

        let monitor = PriceMonitor::with_defaults(Arc::new(PriceHistoryStore::default()));
        let items = vec!["item".to_string()];
        for _ in 0..3 {
            monitor.poll(&source, &items).await;
        }

        assert_eq!(monitor.store().prices("item", None), vec![20.0, 20.0, 20.0]);
    }

    #[tokio::test]
    async fn test_run_forwards_signals_until_closed() {
        let monitor = PriceMonitor::with_defaults(Arc::new(PriceHistoryStore::default()));
        let (quote_tx, quote_rx) = mpsc::channel(16);
        let (signal_tx, mut signal_rx) = mpsc::channel(16);

        let start = Utc::now() - Duration::hours(10);
        for (i, p) in ["$10.00", "$10.20", "$10.10", "$9.90", "$11.30"].iter().enumerate() {
            quote_tx
                .send(QuoteUpdate {
                    item: "item".to_string(),
                    quote: quote(p),
                    observed_at: start + Duration::hours(i as i64),
                })
                .await
                .unwrap();
        }
        drop(quote_tx);

        let sent = monitor.run(quote_rx, signal_tx).await;
        assert_eq!(sent, 1);

        let signal = signal_rx.recv().await.unwrap();
        assert_eq!(signal.trend, TrendLabel::StrongGrowth);
        assert!(signal_rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_run_stops_when_receiver_dropped() {
        let monitor = PriceMonitor::with_defaults(Arc::new(PriceHistoryStore::default()));
        let (quote_tx, quote_rx) = mpsc::channel(16);
        let (signal_tx, signal_rx) = mpsc::channel(16);
        drop(signal_rx);

        // Threshold 75 is exceeded by the fifth rising point
        for p in ["$10", "$11", "$12", "$13", "$14", "$15"] {
            quote_tx.send(QuoteUpdate::now("item", quote(p))).await.unwrap();
        }
        drop(quote_tx);

        assert_eq!(monitor.run(quote_rx, signal_tx).await, 0);
    }
}
