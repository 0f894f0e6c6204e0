//! # barchart
//!
//! A Rust client for the Barchart OnDemand commodity/futures market-data
//! REST API.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — shared helpers, price conversion resolution, error types
//! 2. **HTTP** — `BarchartHttp`: parameterized GETs, outcome classification,
//!    `results` extraction
//! 3. **Domain** — typed records per kind with normalization from raw
//!    API payloads and lazy adjusted-price accessors
//! 4. **High-Level Client** — `BarchartClient` with per-endpoint sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use barchart::prelude::*;
//!
//! barchart::configure(
//!     Config::new()
//!         .api_key("xxx")
//!         .price_conversion("ZC", "DivideBy100Price")
//!         .default_price_conversion("OriginalPrice"),
//! )?;
//!
//! let client = BarchartClient::new()?;
//! let quotes = client
//!     .futures_prices()
//!     .fetch(&FuturesPricesQuery::new().symbols("ZCZ22"))
//!     .await?;
//! let adjusted = quotes[0].adjusted_last_price()?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared helpers: key normalization, month codes.
pub mod shared;

/// Price conversion strategies and resolution.
pub mod pricing;

/// Unified client error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Process-wide configuration.
pub mod config;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// HTTP layer: outcome classification and results extraction.
pub mod http;

// ── Layer 3: Domain ──────────────────────────────────────────────────────────

/// Domain modules (vertical slices): records, conversions, sub-clients.
pub mod domain;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `BarchartClient` — the primary entry point.
pub mod client;

pub use config::{configure, Config};

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain records
    pub use crate::domain::futures_option::{FuturesOption, OptionsType};
    pub use crate::domain::futures_price::FuturesPrice;
    pub use crate::domain::special_option::SpecialOption;
    pub use crate::domain::{Record, RecordKind};

    // Queries
    pub use crate::domain::futures_option::FuturesOptionsQuery;
    pub use crate::domain::futures_price::FuturesPricesQuery;
    pub use crate::domain::special_option::SpecialOptionsQuery;

    // Pricing
    pub use crate::pricing::{ConversionKey, PriceConversion, PriceConversionRegistry};

    // Errors
    pub use crate::error::{ConfigError, HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Configuration + client
    pub use crate::client::{BarchartClient, BarchartClientBuilder};
    pub use crate::config::{configure, Config};

    // HTTP outcome surface
    pub use crate::http::{classify, extract_results, HttpOutcome};
}
