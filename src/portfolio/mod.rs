//! Portfolio daily summary
//!
//! Aggregates a user's tracked items into growing/falling/stable counts and a
//! total market value, for the daily report.

use crate::quote::MarketQuote;
use crate::types::TrendLabel;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One tracked item as seen at report time
#[derive(Debug, Clone)]
pub struct Holding {
    pub item: String,
    pub trend: TrendLabel,
    /// `None` when the feed had no quote for the item
    pub quote: Option<MarketQuote>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outlook {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub holdings: usize,
    pub growing: usize,
    pub falling: usize,
    /// Everything neither growing nor falling, including unquoted items
    pub stable: usize,
    /// Sum of parseable median prices, saturating at the `Decimal` bounds
    pub total_value: Decimal,
    pub outlook: Outlook,
}

impl PortfolioSummary {
    /// Summarize holdings; `None` for an empty portfolio.
    ///
    /// Trends only count for items the feed returned a quote for.
    pub fn build(holdings: &[Holding]) -> Option<Self> {
        if holdings.is_empty() {
            return None;
        }

        let mut growing = 0;
        let mut falling = 0;
        let mut total_value = Decimal::ZERO;

        for holding in holdings {
            let Some(quote) = &holding.quote else {
                continue;
            };

            if holding.trend.is_growth() {
                growing += 1;
            } else if holding.trend.is_decline() {
                falling += 1;
            }

            if let Some(price) = quote.median().value() {
                total_value = total_value.saturating_add(price);
            }
        }

        let outlook = if growing > falling {
            Outlook::Positive
        } else if falling > growing {
            Outlook::Negative
        } else {
            Outlook::Neutral
        };

        Some(Self {
            holdings: holdings.len(),
            growing,
            falling,
            stable: holdings.len() - growing - falling,
            total_value,
            outlook,
        })
    }
}
