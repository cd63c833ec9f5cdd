//! History sub-client — backfill requests.

use super::HistoryReport;
use crate::client::SjcClient;
use crate::error::SdkError;

/// Sub-client for history ingestion.
pub struct HistoryClient<'a> {
    pub(crate) client: &'a SjcClient,
}

impl<'a> HistoryClient<'a> {
    /// Ask the backend to ingest the last `days` days. Not retried.
    pub async fn fetch(&self, days: u32) -> Result<HistoryReport, SdkError> {
        if days == 0 {
            return Err(SdkError::Validation("days must be positive".into()));
        }
        let resp = self.client.http.fetch_history(days).await?;
        tracing::info!(days, inserted = resp.inserted, "History fetched");
        Ok(HistoryReport {
            days,
            inserted: resp.inserted,
        })
    }
}
