//! Shared helpers used across all domain modules.

pub mod month;
pub mod normalize;

pub use month::{month_number, MONTH_CODE_MAP};
pub use normalize::{normalize_record, snake_case, NormalizedRecord, RawRecord};
