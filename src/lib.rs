//! # SJC Chart
//!
//! Client-side engine for a live buy/sell gold price chart, for native and
//! WASM targets.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — `Mode`, `PricePoint`, normalization, display formatting (always available)
//! 2. **HTTP API** — `SjcHttp` with per-endpoint retry policies
//! 3. **High-Level Client** — `SjcClient` with `prices()` / `history()` sub-clients
//! 4. **Chart** — `ChartBackend` seam and `ChartLifecycle` (one live chart per canvas)
//! 5. **Dashboard** — single-flight refresh orchestration, UI state, event/timer driver
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sjc_chart::prelude::*;
//!
//! let client = SjcClient::builder()
//!     .base_url("http://localhost:3000")
//!     .build()?;
//!
//! let dashboard = Dashboard::new(client, my_chart_backend, my_page, DashboardConfig::default());
//! Driver::new(&dashboard).run(ui_events).await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, coercions and display formatting.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `SjcClient` — the API entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: Chart ───────────────────────────────────────────────────────────

/// Charting library seam and chart lifecycle.
pub mod chart;

// ── Layer 5: Dashboard ───────────────────────────────────────────────────────

/// Refresh orchestration, UI state and the event/timer driver.
pub mod dashboard;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared types
    pub use crate::shared::{DisplayLocale, Mode, RequestParams, Timezone, PLACEHOLDER};

    // Domain types
    pub use crate::domain::history::HistoryReport;
    pub use crate::domain::price::{normalize, PricePoint};

    // Errors
    pub use crate::error::{HttpError, RenderError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{SjcClient, SjcClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};

    // Chart
    pub use crate::chart::{
        ChartBackend, ChartConfig, ChartData, ChartLifecycle, RenderPath, Series, SeriesStyle,
    };

    // Dashboard
    pub use crate::dashboard::{
        Dashboard, DashboardConfig, Driver, HistoryOutcome, Indicators, PageSurface,
        PriceSource, RefreshOutcome, UiEvent, UiState,
    };
}
