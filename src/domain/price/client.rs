//! Price sub-client — normalized quote queries.

use super::PricePoint;
use crate::client::SjcClient;
use crate::error::SdkError;
use crate::shared::RequestParams;

/// Sub-client for price queries.
pub struct PricesClient<'a> {
    pub(crate) client: &'a SjcClient,
}

impl<'a> PricesClient<'a> {
    /// Query prices and normalize them into ascending order.
    pub async fn get(&self, params: RequestParams) -> Result<Vec<PricePoint>, SdkError> {
        let resp = self.client.http.get_prices(params).await?;
        tracing::debug!(
            mode = %params.mode,
            limit = params.limit,
            status = resp.status.as_deref().unwrap_or("-"),
            last_update = ?resp.last_update,
            "Prices received"
        );
        Ok(resp.into_points())
    }
}
