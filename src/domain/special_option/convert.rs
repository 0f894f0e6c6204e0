//! Conversions from raw API records to special option records.

use super::SpecialOption;
use crate::domain::{normalize, RecordKind};
use crate::error::SdkError;
use crate::shared::normalize::{NormalizedRecord, RawRecord};
use serde_json::Value;

impl SpecialOption {
    /// Build from a raw API record (camelCase keys, reserved price names).
    pub fn from_raw(raw: RawRecord) -> Result<Self, SdkError> {
        Self::from_normalized(normalize(raw, RecordKind::SpecialOption))
    }

    /// Build from an already-normalized record.
    pub fn from_normalized(normalized: NormalizedRecord) -> Result<Self, SdkError> {
        Ok(serde_json::from_value(Value::Object(normalized))?)
    }
}
