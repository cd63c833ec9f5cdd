//! Network URL constants.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Price query endpoint path (`GET ?mode=&limit=`).
pub const PRICES_PATH: &str = "/api/prices";

/// History ingestion endpoint path (`POST ?days=`).
pub const FETCH_HISTORY_PATH: &str = "/api/fetch-history";
