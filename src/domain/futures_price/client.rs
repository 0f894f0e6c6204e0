//! Futures prices sub-client.

use super::FuturesPrice;
use crate::client::BarchartClient;
use crate::domain::RecordKind;
use crate::error::SdkError;
use serde::Serialize;

/// Query parameters for `getQuote`. Unset fields are omitted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FuturesPricesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbols: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

impl FuturesPricesQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Comma-separated list of symbols to quote.
    pub fn symbols(mut self, symbols: &str) -> Self {
        self.symbols = Some(symbols.to_string());
        self
    }

    /// Comma-separated list of result fields to request.
    pub fn fields(mut self, fields: &str) -> Self {
        self.fields = Some(fields.to_string());
        self
    }
}

/// Sub-client for futures price quotes.
pub struct FuturesPrices<'a> {
    pub(crate) client: &'a BarchartClient,
}

impl<'a> FuturesPrices<'a> {
    /// Fetch quotes matching `query`.
    pub async fn fetch(&self, query: &FuturesPricesQuery) -> Result<Vec<FuturesPrice>, SdkError> {
        let raw = self
            .client
            .http
            .get_results(RecordKind::FuturesPrice.resource(), query)
            .await?;
        raw.into_iter().map(FuturesPrice::from_raw).collect()
    }
}
