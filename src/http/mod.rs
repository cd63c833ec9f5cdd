//! HTTP client layer — `SjcHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::{Endpoints, SjcHttp};
pub use retry::{RetryConfig, RetryPolicy};
