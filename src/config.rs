//! Process-wide configuration.
//!
//! Supplied once before first use. Client credentials and URLs become the
//! defaults new [`BarchartClient`](crate::client::BarchartClient) instances
//! start from; the price conversion table is resolved and installed as the
//! process-wide registry snapshot.

use crate::error::ConfigError;
use crate::pricing::{self, PriceConversionRegistry};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Configuration passed to [`configure`].
///
/// ```rust,ignore
/// barchart::configure(
///     Config::new()
///         .api_key("xxx")
///         .base_url("http://localhost:3000")
///         .price_conversion("ZC", "DivideBy100Price")
///         .default_price_conversion("OriginalPrice"),
/// )?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub proxy_url: Option<String>,
    pub price_conversions: HashMap<String, String>,
    pub default_price_conversion: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn proxy_url(mut self, url: impl Into<String>) -> Self {
        self.proxy_url = Some(url.into());
        self
    }

    /// Map a conversion key to a strategy name.
    pub fn price_conversion(
        mut self,
        key: impl Into<String>,
        strategy_name: impl Into<String>,
    ) -> Self {
        self.price_conversions
            .insert(key.into(), strategy_name.into());
        self
    }

    /// Strategy name used for keys without a mapping.
    pub fn default_price_conversion(mut self, strategy_name: impl Into<String>) -> Self {
        self.default_price_conversion = Some(strategy_name.into());
        self
    }
}

/// Client defaults seeded by [`configure`].
#[derive(Debug, Clone, Default)]
pub(crate) struct Defaults {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub proxy_url: Option<String>,
}

lazy_static! {
    static ref DEFAULTS: RwLock<Defaults> = RwLock::new(Defaults::default());
}

/// Apply process-wide configuration.
///
/// Conversion strategy names are resolved here: an unknown name fails fast
/// and installs nothing. Fields left unset keep their previous value, so the
/// call can be repeated to adjust a subset.
pub fn configure(config: Config) -> Result<(), ConfigError> {
    match (&config.default_price_conversion, &config.price_conversions) {
        (Some(default_name), mappings) => {
            let registry = PriceConversionRegistry::from_names(
                mappings.iter().map(|(k, v)| (k.as_str(), v.as_str())),
                default_name,
            )?;
            pricing::install(registry);
        }
        (None, mappings) if !mappings.is_empty() => {
            return Err(ConfigError::MissingDefault);
        }
        (None, _) => {}
    }

    let mut defaults = DEFAULTS.write().unwrap_or_else(PoisonError::into_inner);
    if config.api_key.is_some() {
        defaults.api_key = config.api_key;
    }
    if config.base_url.is_some() {
        defaults.base_url = config.base_url;
    }
    if config.proxy_url.is_some() {
        defaults.proxy_url = config.proxy_url;
    }

    Ok(())
}

/// Snapshot of the configured client defaults.
pub(crate) fn defaults() -> Defaults {
    DEFAULTS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}
