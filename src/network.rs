//! Network URL constants for the CFTools SDK.

/// Default data API base URL.
pub const DEFAULT_API_URL: &str = "https://data.cftools.cloud";

/// Data API base URL for enterprise (elevated quota) access.
pub const ENTERPRISE_API_URL: &str = "https://epr-data.cftools.cloud";

/// Environment variable holding a static API token.
pub const API_TOKEN_ENV: &str = "CFTOOLS_API_TOKEN";
