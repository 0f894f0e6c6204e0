//! Low-level HTTP client — `BarchartHttp`.
//!
//! One blocking-shaped GET per call: build the resource URL, send, capture
//! the outcome. Returns raw result records; conversion to typed records
//! happens at the domain boundary.

use crate::error::HttpError;
use crate::shared::normalize::RawRecord;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// User agent sent on every request.
const USER_AGENT_VALUE: &str = concat!("barchart-rs/", env!("CARGO_PKG_VERSION"));

/// Default request timeout in seconds.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A completed HTTP exchange.
///
/// Transient — produced per request and consumed immediately by
/// [`classify`] / [`extract_results`].
#[derive(Debug, Clone)]
pub struct HttpOutcome {
    /// HTTP status code.
    pub status: u16,
    /// Raw body text.
    pub body: String,
    /// Parsed body, when the server sent valid JSON.
    pub parsed: Option<Value>,
}

/// Classify an HTTP outcome into success or a typed failure.
///
/// 400 fails as a bad request carrying the body text and the parsed body as
/// context; 401 and 403 fail as unauthorized carrying the body text. Every
/// other status passes through and the caller proceeds to parse the body.
pub fn classify(outcome: &HttpOutcome) -> Result<(), HttpError> {
    match outcome.status {
        400 => Err(HttpError::BadRequest {
            message: outcome.body.clone(),
            response: outcome.parsed.clone(),
        }),
        401 | 403 => Err(HttpError::Unauthorized(outcome.body.clone())),
        _ => Ok(()),
    }
}

/// Pull the ordered `results` sequence out of a classified-success outcome.
pub fn extract_results(outcome: HttpOutcome) -> Result<Vec<RawRecord>, HttpError> {
    let parsed = match outcome.parsed {
        Some(parsed) => parsed,
        None => serde_json::from_str(&outcome.body)?,
    };

    let Value::Object(mut body) = parsed else {
        return Err(HttpError::UnexpectedPayload(
            "response body is not a JSON object".into(),
        ));
    };
    let Some(results) = body.remove("results") else {
        return Err(HttpError::UnexpectedPayload(
            "response body has no `results` field".into(),
        ));
    };

    Ok(serde_json::from_value(results)?)
}

/// Low-level HTTP client for the Barchart OnDemand REST API.
#[derive(Clone, Debug)]
pub struct BarchartHttp {
    base_url: String,
    api_key: String,
    client: Client,
}

impl BarchartHttp {
    pub(crate) fn new(
        base_url: &str,
        api_key: &str,
        proxy: Option<reqwest::Proxy>,
        timeout: Duration,
    ) -> Result<Self, HttpError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let mut builder = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .pool_max_idle_per_host(10);
        if let Some(proxy) = proxy {
            builder = builder.proxy(proxy);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: builder.build()?,
        })
    }

    /// GET a resource, classify the outcome, and return its raw records.
    pub async fn get_results<Q: Serialize>(
        &self,
        resource: &str,
        params: &Q,
    ) -> Result<Vec<RawRecord>, HttpError> {
        let outcome = self.perform_get(resource, params).await?;
        classify(&outcome)?;
        extract_results(outcome)
    }

    /// Perform a GET against `{base_url}/{resource}.json` with `params`
    /// encoded as the query string and the API key merged in.
    pub async fn perform_get<Q: Serialize>(
        &self,
        resource: &str,
        params: &Q,
    ) -> Result<HttpOutcome, HttpError> {
        let url = self.url_for(resource, params)?;
        tracing::debug!(%url, "GET request");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        let parsed = serde_json::from_str(&body).ok();
        tracing::debug!(status, body_len = body.len(), "GET response");

        Ok(HttpOutcome {
            status,
            body,
            parsed,
        })
    }

    fn url_for<Q: Serialize>(&self, resource: &str, params: &Q) -> Result<String, HttpError> {
        let mut query = serde_urlencoded::to_string(params)?;
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str("apikey=");
        query.push_str(&urlencoding::encode(&self.api_key));

        Ok(format!("{}/{}.json?{}", self.base_url, resource, query))
    }
}
