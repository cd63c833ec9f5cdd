//! Dashboard — refresh orchestration for the single price chart.
//!
//! [`Dashboard`] runs the refresh cycle (resolve → fetch → normalize → render)
//! behind a single-flight flag: a trigger that arrives while a cycle is in
//! progress is dropped, not queued. Page state lives behind an async mutex
//! that is never held across the network call.

pub mod driver;
mod guard;
pub mod surface;
pub mod ui;

pub use driver::{Driver, UiEvent};
pub use surface::{Indicators, PageSurface};
pub use ui::{resolve, UiState};

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_lock::{Mutex, MutexGuard};

use crate::chart::{ChartBackend, ChartConfig, ChartData, ChartLifecycle, RenderPath};
use crate::domain::history::{HistoryReport, DEFAULT_HISTORY_DAYS};
use crate::domain::price::PricePoint;
use crate::error::SdkError;
use crate::shared::{DisplayLocale, Mode, RequestParams};
use guard::FlightGuard;

// ─── Price source seam ───────────────────────────────────────────────────────

/// Where the dashboard gets its data. Implemented by [`crate::client::SjcClient`].
#[allow(async_fn_in_trait)]
pub trait PriceSource {
    /// Normalized points for `params`, ascending by timestamp.
    async fn query_prices(&self, params: RequestParams) -> Result<Vec<PricePoint>, SdkError>;

    /// Ask the backend to ingest `days` of history.
    async fn ingest_history(&self, days: u32) -> Result<HistoryReport, SdkError>;
}

#[cfg(feature = "http")]
impl PriceSource for crate::client::SjcClient {
    async fn query_prices(&self, params: RequestParams) -> Result<Vec<PricePoint>, SdkError> {
        self.prices().get(params).await
    }

    async fn ingest_history(&self, days: u32) -> Result<HistoryReport, SdkError> {
        self.history().fetch(days).await
    }
}

// ─── Config ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Period of the automatic refresh trigger.
    pub poll_interval: Duration,
    /// Quiet period after a chart is created.
    pub settle: Duration,
    /// Days requested by the history action when the limit control is unusable.
    pub history_days: u32,
    /// Canvas the chart is bound to.
    pub canvas: String,
    pub initial_mode: Mode,
    pub locale: DisplayLocale,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(60),
            settle: Duration::from_millis(50),
            history_days: DEFAULT_HISTORY_DAYS,
            canvas: "priceChart".to_string(),
            initial_mode: Mode::default(),
            locale: DisplayLocale::default(),
        }
    }
}

// ─── Outcomes ────────────────────────────────────────────────────────────────

/// What one refresh trigger did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Another cycle was in progress; nothing happened.
    Dropped,
    /// No data: chart destroyed, placeholder shown.
    Empty,
    Rendered { points: usize, path: RenderPath },
    /// Data arrived but the chart could not be created.
    RenderFailed,
}

/// What one history action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryOutcome {
    /// The action was already running.
    Busy,
    Fetched(HistoryReport),
    Failed,
}

// ─── Page state ──────────────────────────────────────────────────────────────

/// Everything a refresh cycle or a mode switch mutates.
pub struct Page<B: ChartBackend, S> {
    ui: UiState,
    chart: ChartLifecycle<B>,
    surface: S,
    indicators: Indicators,
    empty_state: bool,
}

impl<B: ChartBackend, S: PageSurface> Page<B, S> {
    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn chart(&self) -> &ChartLifecycle<B> {
        &self.chart
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn indicators(&self) -> &Indicators {
        &self.indicators
    }

    /// Whether the placeholder currently replaces the chart.
    pub fn empty_state(&self) -> bool {
        self.empty_state
    }

    fn sync_limit_control(&mut self) {
        let enabled = self.ui.limit_enabled();
        self.surface.set_limit_control(self.ui.limit_input(), enabled);
    }

    fn set_empty_state(&mut self, visible: bool) {
        if self.empty_state != visible {
            self.surface.set_empty_state(visible);
            self.empty_state = visible;
        }
    }

    fn set_indicators(&mut self, indicators: Indicators) {
        self.surface.show_indicators(&indicators);
        self.indicators = indicators;
    }

    fn show_empty(&mut self) {
        self.chart.ensure_destroyed();
        self.set_empty_state(true);
        self.set_indicators(Indicators::placeholder());
    }

    async fn show_points(&mut self, points: &[PricePoint], mode: Mode) -> RefreshOutcome {
        self.set_empty_state(false);

        let locale = &self.chart.config().locale;
        let data = ChartData::from_points(points, mode, locale);
        let indicators = match points.last() {
            Some(latest) => Indicators::from_latest(latest, locale),
            None => Indicators::placeholder(),
        };
        self.set_indicators(indicators);

        match self.chart.render(&data).await {
            Ok(path) => RefreshOutcome::Rendered {
                points: data.len(),
                path,
            },
            Err(e) => {
                tracing::error!(error = %e, "Chart render failed");
                RefreshOutcome::RenderFailed
            }
        }
    }
}

// ─── Dashboard ───────────────────────────────────────────────────────────────

/// Update orchestrator for one page.
pub struct Dashboard<P, B: ChartBackend, S> {
    source: P,
    config: DashboardConfig,
    refreshing: AtomicBool,
    history_busy: AtomicBool,
    /// Set when the history control could not be re-enabled on the spot.
    history_control_stale: AtomicBool,
    page: Mutex<Page<B, S>>,
}

/// Re-enables the history control when a history action ends, however it ends.
struct HistoryControl<'a, B: ChartBackend, S: PageSurface> {
    page: &'a Mutex<Page<B, S>>,
    stale: &'a AtomicBool,
}

impl<B: ChartBackend, S: PageSurface> Drop for HistoryControl<'_, B, S> {
    fn drop(&mut self) {
        match self.page.try_lock() {
            Some(mut page) => page.surface.set_history_busy(false),
            None => self.stale.store(true, Ordering::Release),
        }
    }
}

impl<P, B, S> Dashboard<P, B, S>
where
    P: PriceSource,
    B: ChartBackend,
    S: PageSurface,
{
    pub fn new(source: P, backend: B, surface: S, config: DashboardConfig) -> Self {
        let chart = ChartLifecycle::new(
            backend,
            config.canvas.clone(),
            ChartConfig::new(config.locale.clone()),
            config.settle,
        );
        let page = Page {
            ui: UiState::new(config.initial_mode),
            chart,
            surface,
            indicators: Indicators::placeholder(),
            empty_state: false,
        };
        Self {
            source,
            config,
            refreshing: AtomicBool::new(false),
            history_busy: AtomicBool::new(false),
            history_control_stale: AtomicBool::new(false),
            page: Mutex::new(page),
        }
    }

    pub fn source(&self) -> &P {
        &self.source
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Read page state without racing a cycle's render step.
    pub async fn inspect<R>(&self, f: impl FnOnce(&Page<B, S>) -> R) -> R {
        let page = self.lock_page().await;
        f(&page)
    }

    async fn lock_page(&self) -> MutexGuard<'_, Page<B, S>> {
        let mut page = self.page.lock().await;
        if self.history_control_stale.swap(false, Ordering::AcqRel) {
            page.surface.set_history_busy(false);
        }
        page
    }

    /// First render: sync the limit control, then run one cycle.
    pub async fn init(&self) -> RefreshOutcome {
        self.lock_page().await.sync_limit_control();
        self.refresh().await
    }

    /// Run one refresh cycle unless one is already in progress.
    pub async fn refresh(&self) -> RefreshOutcome {
        let Some(_flight) = FlightGuard::acquire(&self.refreshing) else {
            tracing::debug!("Refresh already in progress, dropping trigger");
            return RefreshOutcome::Dropped;
        };

        let params = self.lock_page().await.ui.resolve();

        let points = match self.source.query_prices(params).await {
            Ok(points) => points,
            Err(e) => {
                tracing::warn!(
                    mode = %params.mode,
                    limit = params.limit,
                    error = %e,
                    "Price query failed, treating as empty"
                );
                Vec::new()
            }
        };

        let mut page = self.lock_page().await;
        let outcome = if points.is_empty() {
            page.show_empty();
            RefreshOutcome::Empty
        } else {
            page.show_points(&points, params.mode).await
        };
        tracing::debug!(mode = %params.mode, limit = params.limit, ?outcome, "Refresh cycle done");
        outcome
    }

    /// Mode button: switch mode, re-default the limit control, refresh.
    pub async fn select_mode(&self, mode: Mode) -> RefreshOutcome {
        {
            let mut page = self.lock_page().await;
            page.ui.select_mode(mode);
            page.sync_limit_control();
        }
        self.refresh().await
    }

    /// Limit control edited by hand: latch the override, refresh.
    pub async fn limit_changed(&self, value: &str) -> RefreshOutcome {
        self.lock_page().await.ui.edit_limit(value);
        self.refresh().await
    }

    /// History button: ingest, acknowledge, refresh once, restore the control.
    ///
    /// The control is restored even if this future is dropped part-way.
    pub async fn fetch_history(&self) -> HistoryOutcome {
        let Some(_busy) = FlightGuard::acquire(&self.history_busy) else {
            tracing::debug!("History fetch already running");
            return HistoryOutcome::Busy;
        };

        let days = {
            let mut page = self.lock_page().await;
            page.surface.set_history_busy(true);
            page.ui.history_days(self.config.history_days)
        };
        let _control = HistoryControl {
            page: &self.page,
            stale: &self.history_control_stale,
        };

        match self.source.ingest_history(days).await {
            Ok(report) => {
                self.lock_page().await.surface.acknowledge(&report.message());
                self.refresh().await;
                HistoryOutcome::Fetched(report)
            }
            Err(e) => {
                tracing::warn!(days, error = %e, "History fetch failed");
                self.lock_page()
                    .await
                    .surface
                    .acknowledge(&format!("Fetch history failed: {}", e));
                HistoryOutcome::Failed
            }
        }
    }

    /// Route one UI event.
    pub async fn dispatch(&self, event: UiEvent) {
        match event {
            UiEvent::SelectMode(mode) => {
                self.select_mode(mode).await;
            }
            UiEvent::ManualRefresh => {
                self.refresh().await;
            }
            UiEvent::LimitChanged(value) => {
                self.limit_changed(&value).await;
            }
            UiEvent::FetchHistory => {
                self.fetch_history().await;
            }
        }
    }
}
