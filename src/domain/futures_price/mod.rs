//! Futures prices — quote records (`getQuote`).

pub mod client;
mod convert;

use crate::domain::adjust;
use crate::error::ConfigError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use client::{FuturesPrices, FuturesPricesQuery};

/// A futures price quote.
///
/// Every field is optional: a record carries only the keys present in the
/// API result it was built from, and a missing field reads as `None`. Keys
/// outside the documented vocabulary are retained in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FuturesPrice {
    pub close: Option<f64>,
    pub day_code: Option<u32>,
    pub dollar_volume: Option<f64>,
    pub flag: Option<String>,
    pub high_price: Option<f64>,
    pub last_price: Option<f64>,
    pub low_price: Option<f64>,
    pub mode: Option<String>,
    pub name: Option<String>,
    pub net_change: Option<f64>,
    pub num_trades: Option<u64>,
    pub open_price: Option<f64>,
    pub percent_change: Option<f64>,
    pub previous_volume: Option<u64>,
    pub server_timestamp: Option<DateTime<Utc>>,
    pub symbol: Option<String>,
    pub trade_timestamp: Option<DateTime<Utc>>,
    pub unit_code: Option<i32>,
    pub volume: Option<u64>,

    /// Keys outside the documented vocabulary, retained as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FuturesPrice {
    /// `last_price` run through the conversion strategy for this symbol.
    ///
    /// The conversion key is the first two characters of `symbol` — quotes
    /// carry no `contract` field — looked up in the installed registry on
    /// every call. Absent `last_price` or `symbol` yields `None`.
    pub fn adjusted_last_price(&self) -> Result<Option<f64>, ConfigError> {
        adjust(self.last_price, self.symbol.as_deref())
    }

    /// `net_change` run through the same conversion as the price fields.
    pub fn adjusted_net_change(&self) -> Result<Option<f64>, ConfigError> {
        adjust(self.net_change, self.symbol.as_deref())
    }
}
