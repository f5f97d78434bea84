//! Error types for the analytics crate
//!
//! The analytics computations themselves are total and never return these.
//! Errors only come from the edges: configuration, snapshot files and quote sources.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Quote feed error: {0}")]
    Feed(String),

    #[error("Unknown item: {0}")]
    UnknownItem(String),
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
