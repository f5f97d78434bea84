//! Market quote boundary
//!
//! Quotes arrive from the market feed with string-typed, decorated numeric fields
//! (`"$1,234.56"`, `"1,234"`). They are parsed once here into validated values.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Raw quote as returned by the market price overview endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketQuote {
    #[serde(default)]
    pub lowest_price: Option<String>,
    #[serde(default)]
    pub median_price: Option<String>,
    #[serde(default)]
    pub volume: Option<String>,
}

/// A numeric quote field after boundary parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteValue<T> {
    Parsed(T),
    /// Field was present but not a number
    Unparseable(String),
    Absent,
}

impl<T: Copy> QuoteValue<T> {
    pub fn value(&self) -> Option<T> {
        match self {
            QuoteValue::Parsed(v) => Some(*v),
            QuoteValue::Unparseable(_) | QuoteValue::Absent => None,
        }
    }
}

/// Parse a decorated price string like `"$1,234.56"`.
pub fn parse_price(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(cleaned).ok()
}

/// Parse a comma-grouped integer volume like `"1,234"`.
/// Digit strings too long for `u64` saturate instead of failing.
pub fn parse_volume(raw: &str) -> Option<u64> {
    let cleaned = raw.trim().replace(',', "");
    if !cleaned.is_empty() && cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return Some(cleaned.parse().unwrap_or(u64::MAX));
    }
    cleaned.parse().ok()
}

fn field<T>(raw: Option<&str>, parse: impl Fn(&str) -> Option<T>) -> QuoteValue<T> {
    match raw {
        None => QuoteValue::Absent,
        Some(s) => match parse(s) {
            Some(v) => QuoteValue::Parsed(v),
            None => QuoteValue::Unparseable(s.to_string()),
        },
    }
}

impl MarketQuote {
    pub fn new(lowest_price: Option<&str>, median_price: Option<&str>, volume: Option<&str>) -> Self {
        Self {
            lowest_price: lowest_price.map(str::to_string),
            median_price: median_price.map(str::to_string),
            volume: volume.map(str::to_string),
        }
    }

    pub fn lowest(&self) -> QuoteValue<Decimal> {
        field(self.lowest_price.as_deref(), parse_price)
    }

    pub fn median(&self) -> QuoteValue<Decimal> {
        field(self.median_price.as_deref(), parse_price)
    }

    pub fn volume(&self) -> QuoteValue<u64> {
        field(self.volume.as_deref(), parse_volume)
    }

    /// Median price as a float for the price history, if it parsed
    pub fn median_f64(&self) -> Option<f64> {
        self.median().value().and_then(|d| d.to_f64())
    }
}
