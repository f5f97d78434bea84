//! Configuration
//!
//! Loaded from an optional TOML file, then overridden by `SKIN__`-prefixed
//! environment variables (e.g. `SKIN__ANALYTICS__RETENTION_DAYS=14`).

use crate::error::{AnalyticsError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub monitor: MonitorConfig,
    #[serde(default)]
    pub watchlist: WatchlistConfig,
    /// Read by the chat front end, not by this crate
    pub telegram: Option<TelegramConfig>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("SKIN").separator("__"))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let days = self.analytics.retention_days;
        if days < 1 || chrono::Duration::try_days(days).is_none() {
            return Err(AnalyticsError::Config(config::ConfigError::Message(format!(
                "analytics.retention_days must be a positive number of days, got {}",
                days
            ))));
        }
        Ok(())
    }
}

/// Window sizes and horizons for the analytics components
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default = "default_retention_days")]
    pub retention_days: i64,
    #[serde(default = "default_trend_window")]
    pub trend_window: usize,
    #[serde(default = "default_potential_window")]
    pub potential_window: usize,
    #[serde(default = "default_prediction_window")]
    pub prediction_window: usize,
    #[serde(default = "default_prediction_horizon_days")]
    pub prediction_horizon_days: u32,
}

impl AnalyticsConfig {
    /// Retention window; out-of-range values fall back to the default.
    /// [`Config::load`] rejects them before they get here.
    pub fn retention(&self) -> chrono::Duration {
        chrono::Duration::try_days(self.retention_days)
            .filter(|d| *d > chrono::Duration::zero())
            .unwrap_or_else(|| chrono::Duration::days(default_retention_days()))
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            retention_days: default_retention_days(),
            trend_window: default_trend_window(),
            potential_window: default_potential_window(),
            prediction_window: default_prediction_window(),
            prediction_horizon_days: default_prediction_horizon_days(),
        }
    }
}

fn default_retention_days() -> i64 { 30 }
fn default_trend_window() -> usize { 7 }
fn default_potential_window() -> usize { 14 }
fn default_prediction_window() -> usize { 30 }
fn default_prediction_horizon_days() -> u32 { 7 }

/// Periodic monitor settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Scheduler period for price polls; the job scheduler lives outside this crate
    #[serde(default = "default_price_check_interval")]
    pub price_check_interval_secs: u64,
    /// Scheduler period for news polls
    #[serde(default = "default_news_check_interval")]
    pub news_check_interval_secs: u64,
    /// Potential above which a trading signal fires
    #[serde(default = "default_signal_potential_threshold")]
    pub signal_potential_threshold: u8,
    /// How many watchlist items each monitor pass covers
    #[serde(default = "default_watch_limit")]
    pub watch_limit: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            price_check_interval_secs: default_price_check_interval(),
            news_check_interval_secs: default_news_check_interval(),
            signal_potential_threshold: default_signal_potential_threshold(),
            watch_limit: default_watch_limit(),
        }
    }
}

fn default_price_check_interval() -> u64 { 1800 }
fn default_news_check_interval() -> u64 { 3600 }
fn default_signal_potential_threshold() -> u8 { 75 }
fn default_watch_limit() -> usize { 5 }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchlistConfig {
    #[serde(default = "default_items")]
    pub items: Vec<String>,
}

impl Default for WatchlistConfig {
    fn default() -> Self {
        Self { items: default_items() }
    }
}

fn default_items() -> Vec<String> {
    [
        "AK-47 | Redline (Field-Tested)",
        "AWP | Asiimov (Field-Tested)",
        "M4A4 | Howl (Factory New)",
        "Desert Eagle | Blaze (Factory New)",
        "USP-S | Orion (Factory New)",
        "Glock-18 | Fade (Factory New)",
        "Karambit | Doppler (Factory New)",
        "Butterfly Knife | Fade (Factory New)",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Chat front end credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}
