//! Unified client error types.

use thiserror::Error;

/// Top-level client error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Deserialization error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// HTTP 400 — malformed or incomplete request parameters.
    ///
    /// `message` is the raw response body; `response` is the parsed body,
    /// when the server sent JSON.
    #[error("Bad request: {message}")]
    BadRequest {
        message: String,
        response: Option<serde_json::Value>,
    },

    /// HTTP 401/403 — missing or invalid credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Query encoding error: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    #[error("Deserialization error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Success status but a body without the expected `results` sequence.
    #[error("Unexpected payload: {0}")]
    UnexpectedPayload(String),
}

/// Configuration errors. Fatal — a setup mistake, not a runtime data error.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown price conversion strategy: {0}")]
    UnknownStrategy(String),

    #[error("Price conversions are not configured (no registry installed)")]
    Unconfigured,

    #[error("Price conversion mapping configured without a default strategy")]
    MissingDefault,

    #[error("Invalid proxy URL {url}: {reason}")]
    InvalidProxy { url: String, reason: String },
}
