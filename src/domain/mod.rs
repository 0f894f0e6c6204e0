//! Domain modules organized as vertical slices.
//!
//! Each record kind has its own slice: typed record and accessors in
//! `mod.rs`, raw-record conversion in `convert.rs`, endpoint sub-client in
//! `client.rs`.

pub mod futures_option;
pub mod futures_price;
pub mod special_option;

use crate::error::{ConfigError, SdkError};
use crate::pricing::{self, ConversionKey};
use crate::shared::normalize::{normalize_record, NormalizedRecord, RawRecord, RESERVED_PRICE_KEYS};

pub use futures_option::FuturesOption;
pub use futures_price::FuturesPrice;
pub use special_option::SpecialOption;

/// The kinds of result record the API returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    FuturesOption,
    FuturesPrice,
    SpecialOption,
}

impl RecordKind {
    /// API resource name for this kind.
    pub fn resource(self) -> &'static str {
        match self {
            Self::FuturesOption => "getFuturesOptions",
            Self::FuturesPrice => "getQuote",
            Self::SpecialOption => "getSpecialOptions",
        }
    }

    /// Raw keys renamed before case conversion for this kind.
    ///
    /// Currently the same set for every kind; kept per kind so a vocabulary
    /// divergence stays a one-line change.
    pub(crate) fn reserved_keys(self) -> &'static [&'static str] {
        &RESERVED_PRICE_KEYS
    }
}

/// Rewrite a raw record's keys into the canonical attribute form for `kind`.
pub fn normalize(raw: RawRecord, kind: RecordKind) -> NormalizedRecord {
    normalize_record(raw, kind.reserved_keys())
}

/// A typed record of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    FuturesOption(FuturesOption),
    FuturesPrice(FuturesPrice),
    SpecialOption(SpecialOption),
}

/// Build a typed record from an already-normalized record.
pub fn build_record(normalized: NormalizedRecord, kind: RecordKind) -> Result<Record, SdkError> {
    Ok(match kind {
        RecordKind::FuturesOption => {
            Record::FuturesOption(FuturesOption::from_normalized(normalized)?)
        }
        RecordKind::FuturesPrice => {
            Record::FuturesPrice(FuturesPrice::from_normalized(normalized)?)
        }
        RecordKind::SpecialOption => {
            Record::SpecialOption(SpecialOption::from_normalized(normalized)?)
        }
    })
}

/// Apply the registry-resolved conversion for `key_source` to `base`.
///
/// This is the single computation behind every `adjusted_*` accessor: each
/// accessor declares its base field and key-source field and delegates here.
/// Resolution is lazy and uncached, so a registry swap between calls changes
/// the next result. An absent base value or key source yields `None`.
pub(crate) fn adjust(
    base: Option<f64>,
    key_source: Option<&str>,
) -> Result<Option<f64>, ConfigError> {
    let (Some(value), Some(source)) = (base, key_source) else {
        return Ok(None);
    };
    let strategy = pricing::resolve(&ConversionKey::from_symbol(source))?;
    Ok(Some(strategy.apply(value)))
}
