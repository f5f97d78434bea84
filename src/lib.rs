//! CS2 Skin Market Analytics
//!
//! Price-analytics core for a skin trading chat bot.
//!
//! ## Architecture
//!
//! ```text
//! QuoteSource → quote (boundary parse) → PriceHistoryStore
//!                                              ↓
//!                 TrendClassifier / ProfitPotentialScorer / PricePredictor
//!                                              ↓
//!                                      InvestmentAdvisor → ItemReport
//! ```
//!
//! The chat front end, HTTP feed clients and job scheduler sit outside this crate.

pub mod analysis;
pub mod config;
pub mod error;
pub mod feed;
pub mod history;
pub mod monitor;
pub mod news;
pub mod portfolio;
pub mod quote;
pub mod types;

#[cfg(test)]
mod types_tests;
#[cfg(test)]
mod config_tests;
