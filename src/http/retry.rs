//! Retry policies for HTTP requests.
//!
//! Price queries are idempotent and retried briefly; a poll tick arrives every
//! minute anyway, so backoff is capped well below that. History ingestion is
//! a write and is never retried.

use std::time::Duration;

use crate::error::HttpError;

/// Retry policy for an HTTP request.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// No retries. Used for the history ingestion POST.
    #[default]
    None,
    /// Retry on transport failures + 502/503/504, with backoff on 429.
    Idempotent,
    /// User-provided retry logic.
    Custom(RetryConfig),
}

impl RetryPolicy {
    /// Resolved retry configuration, `None` when requests are single-shot.
    pub fn config(&self) -> Option<RetryConfig> {
        match self {
            RetryPolicy::None => None,
            RetryPolicy::Idempotent => Some(RetryConfig::idempotent()),
            RetryPolicy::Custom(c) => Some(c.clone()),
        }
    }
}

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (not counting the initial request).
    pub max_retries: u32,
    /// Initial delay before the first retry.
    pub initial_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each retry.
    pub backoff_factor: f64,
    /// Whether to add ±25% jitter to the delay.
    pub jitter: bool,
    /// Server error statuses that trigger a retry. `429` is always retried.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::idempotent()
    }
}

impl RetryConfig {
    /// The default config for price queries.
    pub fn idempotent() -> Self {
        Self {
            max_retries: 2,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(5),
            backoff_factor: 2.0,
            jitter: true,
            retryable_statuses: vec![502, 503, 504],
        }
    }

    /// Whether a failed attempt is worth repeating.
    pub fn should_retry(&self, error: &HttpError) -> bool {
        match error {
            HttpError::ServerError { status, .. } => self.retryable_statuses.contains(status),
            HttpError::RateLimited { .. } | HttpError::Timeout => true,
            HttpError::Reqwest(e) => {
                #[cfg(not(target_arch = "wasm32"))]
                let retryable = e.is_connect() || e.is_request();
                #[cfg(target_arch = "wasm32")]
                let retryable = e.is_request();
                retryable
            }
            _ => false,
        }
    }

    /// Calculate delay for a given attempt (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self.initial_delay.as_millis() as f64
            * self.backoff_factor.powi(attempt as i32);
        let capped = base.min(self.max_delay.as_millis() as f64);

        let final_ms = if self.jitter {
            let jitter_range = capped * 0.25;
            let jitter = (rand::random::<f64>() - 0.5) * 2.0 * jitter_range;
            (capped + jitter).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(final_ms as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_jitter() -> RetryConfig {
        RetryConfig {
            jitter: false,
            ..RetryConfig::idempotent()
        }
    }

    #[test]
    fn test_policy_config() {
        assert!(RetryPolicy::default().config().is_none());
        assert_eq!(RetryPolicy::Idempotent.config().unwrap().max_retries, 2);
        let custom = RetryPolicy::Custom(RetryConfig {
            max_retries: 9,
            ..no_jitter()
        });
        assert_eq!(custom.config().unwrap().max_retries, 9);
    }

    #[test]
    fn test_idempotent_retries_rate_limits_and_gateway_errors() {
        let config = RetryConfig::idempotent();
        for status in [502, 503, 504] {
            assert!(config.should_retry(&HttpError::ServerError {
                status,
                body: String::new()
            }));
        }
        assert!(!config.should_retry(&HttpError::ServerError {
            status: 500,
            body: String::new()
        }));
        assert!(config.should_retry(&HttpError::RateLimited {
            retry_after_ms: None
        }));
        assert!(config.should_retry(&HttpError::Timeout));
    }

    #[test]
    fn test_client_errors_are_not_retried() {
        let config = RetryConfig::idempotent();
        assert!(!config.should_retry(&HttpError::Unauthorized));
        assert!(!config.should_retry(&HttpError::NotFound("/api/prices".into())));
        assert!(!config.should_retry(&HttpError::BadRequest("mode".into())));
    }

    #[test]
    fn test_delay_doubles_then_caps() {
        let config = no_jitter();
        assert_eq!(config.delay_for_attempt(0).as_millis(), 500);
        assert_eq!(config.delay_for_attempt(1).as_millis(), 1000);
        assert_eq!(config.delay_for_attempt(2).as_millis(), 2000);
        assert_eq!(config.delay_for_attempt(5).as_millis(), 5000);
    }

    #[test]
    fn test_jitter_stays_within_quarter() {
        let config = RetryConfig::idempotent();
        for _ in 0..50 {
            let ms = config.delay_for_attempt(1).as_millis();
            assert!((750..=1250).contains(&ms), "delay {ms}ms");
        }
    }

    #[test]
    fn test_whole_backoff_fits_inside_a_poll_interval() {
        let config = no_jitter();
        let total: Duration = (0..config.max_retries)
            .map(|a| config.delay_for_attempt(a))
            .sum();
        assert!(total < Duration::from_secs(60));
    }
}
