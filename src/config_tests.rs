//! Tests for configuration

#[cfg(test)]
mod tests {
    use super::super::config::*;
    use std::io::Write;

    #[test]
    fn test_analytics_config_default() {
        let config = AnalyticsConfig::default();
        assert_eq!(config.retention_days, 30);
        assert_eq!(config.trend_window, 7);
        assert_eq!(config.potential_window, 14);
        assert_eq!(config.prediction_window, 30);
        assert_eq!(config.prediction_horizon_days, 7);
        assert_eq!(config.retention(), chrono::Duration::days(30));
    }

    #[test]
    fn test_monitor_config_defaults() {
        let config: MonitorConfig = toml::from_str("").unwrap();
        assert_eq!(config.price_check_interval_secs, 1800);
        assert_eq!(config.news_check_interval_secs, 3600);
        assert_eq!(config.signal_potential_threshold, 75);
        assert_eq!(config.watch_limit, 5);
    }

    #[test]
    fn test_analytics_config_partial() {
        let toml_str = r#"
retention_days = 14
prediction_horizon_days = 3
"#;
        let config: AnalyticsConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.retention_days, 14);
        assert_eq!(config.prediction_horizon_days, 3);
        assert_eq!(config.trend_window, 7);
    }

    #[test]
    fn test_watchlist_default_items() {
        let config = WatchlistConfig::default();
        assert_eq!(config.items.len(), 8);
        assert_eq!(config.items[0], "AK-47 | Redline (Field-Tested)");
    }

    #[test]
    fn test_full_config_from_toml() {
        let toml_str = r#"
[analytics]
retention_days = 7

[monitor]
signal_potential_threshold = 80

[watchlist]
items = ["Glock-18 | Fade (Factory New)"]

[telegram]
bot_token = "123:abc"
chat_id = "12345"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.analytics.retention_days, 7);
        assert_eq!(config.monitor.signal_potential_threshold, 80);
        assert_eq!(config.watchlist.items.len(), 1);
        let telegram = config.telegram.unwrap();
        assert_eq!(telegram.bot_token, "123:abc");
        assert_eq!(telegram.chat_id, "12345");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.analytics.retention_days, 30);
        assert_eq!(config.watchlist.items.len(), 8);
        assert!(config.telegram.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[analytics]\ntrend_window = 5\n\n[monitor]\nwatch_limit = 3").unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.analytics.trend_window, 5);
        assert_eq!(config.monitor.watch_limit, 3);
        assert_eq!(config.analytics.potential_window, 14);
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let config = Config::load("/nonexistent/skin-analytics.toml").unwrap();
        assert_eq!(config.analytics.retention_days, 30);
    }

    #[test]
    fn test_validate_rejects_bad_retention() {
        for days in [0, -1, i64::MAX / 2] {
            let mut config = Config::default();
            config.analytics.retention_days = days;
            assert!(config.validate().is_err(), "retention_days = {}", days);
        }
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_load_rejects_negative_retention() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[analytics]\nretention_days = -1").unwrap();

        let err = Config::load(file.path().to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("retention_days"));
    }

    #[test]
    fn test_retention_out_of_range_uses_default() {
        let config = AnalyticsConfig {
            retention_days: i64::MAX / 2,
            ..AnalyticsConfig::default()
        };
        assert_eq!(config.retention(), chrono::Duration::days(30));

        let config = AnalyticsConfig {
            retention_days: -1,
            ..AnalyticsConfig::default()
        };
        assert_eq!(config.retention(), chrono::Duration::days(30));
    }
}
