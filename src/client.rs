//! High-level client — `SjcClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and accessor methods.

use crate::domain::history::client::HistoryClient;
use crate::domain::price::client::PricesClient;
use crate::error::SdkError;
use crate::http::{Endpoints, RetryPolicy, SjcHttp};

use std::time::Duration;

/// The primary entry point for the gold price API.
///
/// Provides nested sub-client accessors for each domain:
/// `client.prices()`, `client.history()`.
#[derive(Clone)]
pub struct SjcClient {
    pub(crate) http: SjcHttp,
}

impl SjcClient {
    pub fn builder() -> SjcClientBuilder {
        SjcClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn prices(&self) -> PricesClient<'_> {
        PricesClient { client: self }
    }

    pub fn history(&self) -> HistoryClient<'_> {
        HistoryClient { client: self }
    }

    pub fn http(&self) -> &SjcHttp {
        &self.http
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct SjcClientBuilder {
    base_url: String,
    endpoints: Endpoints,
    timeout: Duration,
    price_retry: RetryPolicy,
}

impl Default for SjcClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            endpoints: Endpoints::default(),
            timeout: Duration::from_secs(30),
            price_retry: RetryPolicy::Idempotent,
        }
    }
}

impl SjcClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn prices_path(mut self, path: &str) -> Self {
        self.endpoints.prices = path.to_string();
        self
    }

    pub fn fetch_history_path(mut self, path: &str) -> Self {
        self.endpoints.fetch_history = path.to_string();
        self
    }

    /// Per-request timeout (native only; browsers apply their own).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn price_retry(mut self, policy: RetryPolicy) -> Self {
        self.price_retry = policy;
        self
    }

    pub fn build(self) -> Result<SjcClient, SdkError> {
        if self.base_url.trim().is_empty() {
            return Err(SdkError::Validation("base_url must not be empty".into()));
        }
        let http = SjcHttp::new(&self.base_url, self.endpoints, self.timeout)?
            .with_price_retry(self.price_retry);
        Ok(SjcClient { http })
    }
}
