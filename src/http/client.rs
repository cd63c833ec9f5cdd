//! Low-level HTTP client — `SjcHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens in the domain sub-clients).

use crate::domain::history::wire::FetchHistoryResponse;
use crate::domain::price::wire::PricesResponse;
use crate::error::HttpError;
use crate::http::retry::RetryPolicy;
use crate::network::{FETCH_HISTORY_PATH, PRICES_PATH};
use crate::shared::RequestParams;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Endpoint paths, relative to the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub prices: String,
    pub fetch_history: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            prices: PRICES_PATH.to_string(),
            fetch_history: FETCH_HISTORY_PATH.to_string(),
        }
    }
}

/// Low-level HTTP client for the gold price REST API.
#[derive(Clone)]
pub struct SjcHttp {
    base_url: String,
    endpoints: Endpoints,
    price_retry: RetryPolicy,
    client: Client,
}

impl SjcHttp {
    pub fn new(
        base_url: &str,
        endpoints: Endpoints,
        timeout: Duration,
    ) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(4);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            endpoints,
            price_retry: RetryPolicy::Idempotent,
            client: builder.build()?,
        })
    }

    /// Override the retry policy used for price queries.
    pub fn with_price_retry(mut self, policy: RetryPolicy) -> Self {
        self.price_retry = policy;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Prices ───────────────────────────────────────────────────────────

    pub fn prices_url(&self, params: RequestParams) -> String {
        format!(
            "{}{}?mode={}&limit={}",
            self.base_url,
            self.endpoints.prices,
            params.mode.as_str(),
            params.limit
        )
    }

    /// Price payload. Any JSON body is accepted and read leniently.
    pub async fn get_prices(&self, params: RequestParams) -> Result<PricesResponse, HttpError> {
        let url = self.prices_url(params);
        let payload: serde_json::Value = self
            .request_with_retry(reqwest::Method::GET, &url, &self.price_retry)
            .await?;
        Ok(PricesResponse::from_value(&payload))
    }

    // ── History ──────────────────────────────────────────────────────────

    pub fn fetch_history_url(&self, days: u32) -> String {
        format!(
            "{}{}?days={}",
            self.base_url, self.endpoints.fetch_history, days
        )
    }

    /// Ask the backend to ingest `days` of history. Never retried.
    pub async fn fetch_history(&self, days: u32) -> Result<FetchHistoryResponse, HttpError> {
        let url = self.fetch_history_url(days);
        self.request_with_retry(reqwest::Method::POST, &url, &RetryPolicy::None)
            .await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn request_with_retry<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        url: &str,
        retry: &RetryPolicy,
    ) -> Result<T, HttpError> {
        let Some(config) = retry.config() else {
            return self.do_request(&method, url).await;
        };

        let mut attempt = 0;
        loop {
            let e = match self.do_request::<T>(&method, url).await {
                Ok(resp) => return Ok(resp),
                Err(e) => e,
            };

            if !config.should_retry(&e) {
                return Err(e);
            }
            if attempt >= config.max_retries {
                return Err(HttpError::MaxRetriesExceeded {
                    attempts: attempt + 1,
                    last_error: e.to_string(),
                });
            }

            let delay = match &e {
                HttpError::RateLimited {
                    retry_after_ms: Some(ms),
                } => Duration::from_millis(*ms).min(config.max_delay),
                _ => config.delay_for_attempt(attempt),
            };
            tracing::debug!(
                attempt = attempt + 1,
                max = config.max_retries,
                delay_ms = delay.as_millis() as u64,
                error = %e,
                "Retrying request to {}",
                url
            );
            futures_timer::Delay::new(delay).await;
            attempt += 1;
        }
    }

    async fn do_request<T: DeserializeOwned>(
        &self,
        method: &reqwest::Method,
        url: &str,
    ) -> Result<T, HttpError> {
        let resp = self
            .client
            .request(method.clone(), url)
            .send()
            .await
            .map_err(from_transport)?;
        let status = resp.status();

        if status.is_success() {
            return resp.json::<T>().await.map_err(from_transport);
        }

        let status_code = status.as_u16();
        let retry_after_ms = parse_retry_after(
            resp.headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok()),
        );
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited { retry_after_ms }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

fn from_transport(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Reqwest(e)
    }
}

/// `Retry-After` in delay-seconds form, as milliseconds. HTTP dates are ignored.
fn parse_retry_after(header: Option<&str>) -> Option<u64> {
    header?
        .trim()
        .parse::<u64>()
        .ok()
        .map(|secs| secs.saturating_mul(1000))
}
