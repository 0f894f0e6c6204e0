//! Network URL constants for the Barchart client.

/// Default REST API base URL (Barchart OnDemand).
pub const DEFAULT_API_URL: &str = "https://ondemand.websol.barchart.com";
