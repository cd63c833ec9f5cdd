//! Wire types for the history ingestion endpoint.

use crate::shared::serde_util::{lenient_count, lenient_string};
use serde::{Deserialize, Serialize};

/// `POST /api/fetch-history` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchHistoryResponse {
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub status: Option<String>,
    /// Absent or non-numeric counts read as `0`.
    #[serde(default, deserialize_with = "lenient_count::deserialize")]
    pub inserted: u64,
}
