//! Futures delivery month codes.

use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// Standard futures month codes → calendar month number.
    pub static ref MONTH_CODE_MAP: HashMap<char, u32> = HashMap::from([
        ('F', 1),
        ('G', 2),
        ('H', 3),
        ('J', 4),
        ('K', 5),
        ('M', 6),
        ('N', 7),
        ('Q', 8),
        ('U', 9),
        ('V', 10),
        ('X', 11),
        ('Z', 12),
    ]);
}

/// Calendar month number for a delivery month code, if the code is valid.
pub fn month_number(code: char) -> Option<u32> {
    MONTH_CODE_MAP.get(&code).copied()
}
