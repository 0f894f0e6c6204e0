//! Price conversion strategies and resolution.
//!
//! Raw prices arrive in whatever unit the exchange feed uses; a per-commodity
//! table maps a symbol-derived key to the conversion that brings them into
//! display units. Strategy names are resolved to implementations when the
//! table is configured, never on the request path.

use crate::error::ConfigError;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// A price conversion strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceConversion {
    /// Identity — the raw value is already in display units.
    Original,
    /// The raw value is in hundredths of the display unit.
    DivideBy100,
}

impl PriceConversion {
    /// Resolve a configured strategy name. Unknown names fail fast.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            "OriginalPrice" => Ok(Self::Original),
            "DivideBy100Price" => Ok(Self::DivideBy100),
            other => Err(ConfigError::UnknownStrategy(other.to_string())),
        }
    }

    /// The configured name of this strategy.
    pub fn name(self) -> &'static str {
        match self {
            Self::Original => "OriginalPrice",
            Self::DivideBy100 => "DivideBy100Price",
        }
    }

    /// Apply the conversion to a raw price value.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Original => value,
            Self::DivideBy100 => value / 100.0,
        }
    }
}

/// Registry lookup key — the first two characters of a contract or symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConversionKey(String);

impl ConversionKey {
    /// Derive the key from a contract or symbol string.
    pub fn from_symbol(symbol: &str) -> Self {
        Self(symbol.chars().take(2).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConversionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ConversionKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Key → strategy table with a configured default.
///
/// Built from strategy names once at configuration time; read-only afterward.
#[derive(Debug, Clone)]
pub struct PriceConversionRegistry {
    by_key: HashMap<String, PriceConversion>,
    default: PriceConversion,
}

impl PriceConversionRegistry {
    /// Build a registry from `(key, strategy name)` pairs and a default name.
    ///
    /// Every name is resolved here, so a typo surfaces at configuration time
    /// instead of deep in a request path.
    pub fn from_names<'a, I>(mappings: I, default_name: &str) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let default = PriceConversion::from_name(default_name)?;
        let mut by_key = HashMap::new();
        for (key, name) in mappings {
            by_key.insert(key.to_string(), PriceConversion::from_name(name)?);
        }
        Ok(Self { by_key, default })
    }

    /// The mapped strategy for `key`, or the default when unmapped.
    pub fn resolve(&self, key: &ConversionKey) -> PriceConversion {
        self.by_key
            .get(key.as_str())
            .copied()
            .unwrap_or(self.default)
    }
}

// ─── Process-wide registry ───────────────────────────────────────────────────

lazy_static! {
    static ref REGISTRY: RwLock<Option<Arc<PriceConversionRegistry>>> = RwLock::new(None);
}

/// Install the process-wide registry.
///
/// Swaps in an immutable snapshot, so concurrent readers either see the old
/// table or the new one, never a partial update.
pub fn install(registry: PriceConversionRegistry) {
    *REGISTRY.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(registry));
}

/// The currently installed registry snapshot, if any.
pub fn installed() -> Option<Arc<PriceConversionRegistry>> {
    REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Resolve a conversion strategy through the installed registry.
///
/// Resolving before any registry was installed is a configuration error,
/// never a silent no-op.
pub fn resolve(key: &ConversionKey) -> Result<PriceConversion, ConfigError> {
    installed()
        .map(|registry| registry.resolve(key))
        .ok_or(ConfigError::Unconfigured)
}
