//! Futures options sub-client.

use super::FuturesOption;
use crate::client::BarchartClient;
use crate::domain::RecordKind;
use crate::error::SdkError;
use serde::Serialize;

/// Query parameters for `getFuturesOptions`. Unset fields are omitted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FuturesOptionsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbols: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

impl FuturesOptionsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exchange(mut self, exchange: &str) -> Self {
        self.exchange = Some(exchange.to_string());
        self
    }

    pub fn root(mut self, root: &str) -> Self {
        self.root = Some(root.to_string());
        self
    }

    pub fn contract(mut self, contract: &str) -> Self {
        self.contract = Some(contract.to_string());
        self
    }

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

/// Sub-client for options on futures contracts.
pub struct FuturesOptions<'a> {
    pub(crate) client: &'a BarchartClient,
}

impl<'a> FuturesOptions<'a> {
    /// Fetch futures options matching `query`.
    pub async fn fetch(&self, query: &FuturesOptionsQuery) -> Result<Vec<FuturesOption>, SdkError> {
        let raw = self
            .client
            .http
            .get_results(RecordKind::FuturesOption.resource(), query)
            .await?;
        raw.into_iter().map(FuturesOption::from_raw).collect()
    }
}
