//! High-level client — `BarchartClient` with per-endpoint sub-client accessors.
//!
//! Each endpoint has its own sub-client in `domain/<kind>/client.rs`. This
//! module keeps the builder and the accessor methods.

use crate::config;
use crate::domain::futures_option::client::FuturesOptions;
use crate::domain::futures_price::client::FuturesPrices;
use crate::domain::special_option::client::SpecialOptions;
use crate::error::{ConfigError, SdkError};
use crate::http::client::DEFAULT_TIMEOUT_SECS;
use crate::http::BarchartHttp;

use std::time::Duration;

/// The primary entry point for the Barchart OnDemand API.
///
/// ```rust,ignore
/// let client = BarchartClient::builder()
///     .api_key("xxx")
///     .build()?;
///
/// let quotes = client
///     .futures_prices()
///     .fetch(&FuturesPricesQuery::new().symbols("ZCZ22"))
///     .await?;
/// ```
#[derive(Clone, Debug)]
pub struct BarchartClient {
    pub(crate) http: BarchartHttp,
}

impl BarchartClient {
    pub fn builder() -> BarchartClientBuilder {
        BarchartClientBuilder::default()
    }

    /// Client built entirely from the configured process defaults.
    pub fn new() -> Result<Self, SdkError> {
        Self::builder().build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn futures_options(&self) -> FuturesOptions<'_> {
        FuturesOptions { client: self }
    }

    pub fn futures_prices(&self) -> FuturesPrices<'_> {
        FuturesPrices { client: self }
    }

    pub fn special_options(&self) -> SpecialOptions<'_> {
        SpecialOptions { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

/// Builder for [`BarchartClient`]. Starts from the configured process
/// defaults; every setter overrides per instance.
pub struct BarchartClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    proxy_url: Option<String>,
    timeout: Duration,
}

impl Default for BarchartClientBuilder {
    fn default() -> Self {
        let defaults = config::defaults();
        Self {
            api_key: defaults.api_key,
            base_url: defaults.base_url,
            proxy_url: defaults.proxy_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl BarchartClientBuilder {
    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    pub fn proxy_url(mut self, url: &str) -> Self {
        self.proxy_url = Some(url.to_string());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<BarchartClient, SdkError> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| crate::network::DEFAULT_API_URL.to_string());
        let api_key = self.api_key.unwrap_or_default();
        let proxy = match self.proxy_url {
            Some(url) => Some(reqwest::Proxy::all(&url).map_err(|e| ConfigError::InvalidProxy {
                url,
                reason: e.to_string(),
            })?),
            None => None,
        };

        Ok(BarchartClient {
            http: BarchartHttp::new(&base_url, &api_key, proxy, self.timeout)?,
        })
    }
}
