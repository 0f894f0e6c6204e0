//! Special options — short-dated and serial options (`getSpecialOptions`).

pub mod client;
mod convert;

use crate::shared::month;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use client::{SpecialOptions, SpecialOptionsQuery};

/// A special option on a futures contract.
///
/// Every field is optional: a record carries only the keys present in the
/// API result it was built from, and a missing field reads as `None`. Keys
/// outside the documented vocabulary are retained in `extra`. Special
/// options define no adjusted-price accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SpecialOption {
    pub contract: Option<String>,
    pub contract_month: Option<String>,
    pub contract_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub exchange: Option<String>,
    pub expiration_date: Option<NaiveDate>,
    pub last_price: Option<f64>,
    pub root: Option<String>,
    pub strike: Option<f64>,
    pub symbol: Option<String>,
    #[serde(rename = "type")]
    pub option_type: Option<String>,
    pub underlying_future: Option<String>,

    /// Keys outside the documented vocabulary, retained as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SpecialOption {
    /// Delivery month number from the `contract_month` code.
    pub fn contract_month_number(&self) -> Option<u32> {
        month::month_number(self.contract_month.as_ref()?.chars().next()?)
    }
}
