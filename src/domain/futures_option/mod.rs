//! Futures options — options on futures contracts (`getFuturesOptions`).

pub mod client;
mod convert;

use crate::domain::adjust;
use crate::error::ConfigError;
use crate::shared::month;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use client::{FuturesOptions, FuturesOptionsQuery};

/// Option exercise style. Everything on this feed is American.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionsType {
    American,
}

/// An option on a futures contract.
///
/// Every field is optional: a record carries only the keys present in the
/// API result it was built from, and a missing field reads as `None`. Keys
/// outside the documented vocabulary are retained in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FuturesOption {
    pub contract: Option<String>,
    pub contract_month: Option<String>,
    pub contract_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub delta: Option<f64>,
    pub exchange: Option<String>,
    pub expiration_date: Option<NaiveDate>,
    pub gamma: Option<f64>,
    pub high_price: Option<f64>,
    pub implied_volatility: Option<f64>,
    pub last_price: Option<f64>,
    pub low_price: Option<f64>,
    pub open_price: Option<f64>,
    pub percent_change: Option<f64>,
    pub previous_close: Option<f64>,
    pub root: Option<String>,
    pub strike: Option<f64>,
    pub symbol: Option<String>,
    pub theta: Option<f64>,
    #[serde(rename = "type")]
    pub option_type: Option<String>,
    pub vega: Option<f64>,
    pub volume: Option<u64>,

    /// Keys outside the documented vocabulary, retained as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FuturesOption {
    /// Exercise style — constant for this feed.
    pub fn options_type(&self) -> OptionsType {
        OptionsType::American
    }

    /// Delivery month number from the `contract_month` code.
    pub fn contract_month_number(&self) -> Option<u32> {
        month::month_number(self.contract_month.as_ref()?.chars().next()?)
    }

    /// `last_price` run through the conversion strategy for this contract.
    ///
    /// The conversion key is the first two characters of `contract`, looked
    /// up in the installed registry on every call. Absent `last_price` or
    /// `contract` yields `None`.
    pub fn adjusted_last_price(&self) -> Result<Option<f64>, ConfigError> {
        adjust(self.last_price, self.contract.as_deref())
    }
}
