//! Record key normalization.
//!
//! The API sends result records with camelCase keys, and a handful of price
//! fields under names (`open`, `high`, `low`, `last`) that would collide with
//! reserved identifiers on the record's accessor surface. Normalization
//! renames those before snake_casing every key, so the added suffix is
//! case-converted too. Values pass through untouched.

use serde_json::{Map, Value};

/// A result record exactly as received: camelCase keys, scalar values.
pub type RawRecord = Map<String, Value>;

/// A result record after key normalization: canonical snake_case keys.
pub type NormalizedRecord = Map<String, Value>;

/// Raw keys that collide with reserved identifiers and get a `Price` suffix.
pub const RESERVED_PRICE_KEYS: [&str; 4] = ["high", "last", "low", "open"];

/// Normalize a single raw key: reserved-key rename, then case conversion.
///
/// The rename happens strictly before the case conversion, so raw `last`
/// becomes `lastPrice` and only then `last_price`.
pub fn normalize_key(key: &str, reserved: &[&str]) -> String {
    if reserved.contains(&key) {
        snake_case(&format!("{key}Price"))
    } else {
        snake_case(key)
    }
}

/// Rewrite every key of a raw record into the canonical attribute form.
pub fn normalize_record(raw: RawRecord, reserved: &[&str]) -> NormalizedRecord {
    raw.into_iter()
        .map(|(key, value)| (normalize_key(&key, reserved), value))
        .collect()
}

/// camelCase → snake_case.
///
/// Underscores are inserted at lower→upper boundaries and before the last
/// capital of an acronym run (`impliedVolatility` → `implied_volatility`,
/// `ABCQuote` → `abc_quote`). Already-snake_case input is left as is, which
/// makes normalization of canonical records idempotent.
pub fn snake_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev_lower = i > 0 && {
                let p = chars[i - 1];
                p.is_lowercase() || p.is_ascii_digit()
            };
            let next_lower = i > 0
                && chars[i - 1].is_uppercase()
                && chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev_lower || next_lower {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}
