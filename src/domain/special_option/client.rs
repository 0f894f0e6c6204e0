//! Special options sub-client.

use super::SpecialOption;
use crate::client::BarchartClient;
use crate::domain::RecordKind;
use crate::error::SdkError;
use serde::Serialize;

/// Query parameters for `getSpecialOptions`. Unset fields are omitted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SpecialOptionsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

impl SpecialOptionsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(mut self, root: &str) -> Self {
        self.root = Some(root.to_string());
        self
    }

    pub fn contract(mut self, contract: &str) -> Self {
        self.contract = Some(contract.to_string());
        self
    }

    /// Comma-separated list of result fields to request.
    pub fn fields(mut self, fields: &str) -> Self {
        self.fields = Some(fields.to_string());
        self
    }
}

/// Sub-client for special options on futures contracts.
pub struct SpecialOptions<'a> {
    pub(crate) client: &'a BarchartClient,
}

impl<'a> SpecialOptions<'a> {
    /// Fetch special options matching `query`.
    pub async fn fetch(&self, query: &SpecialOptionsQuery) -> Result<Vec<SpecialOption>, SdkError> {
        let raw = self
            .client
            .http
            .get_results(RecordKind::SpecialOption.resource(), query)
            .await?;
        raw.into_iter().map(SpecialOption::from_raw).collect()
    }
}
