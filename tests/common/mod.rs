//! Fakes shared by the dashboard integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::time::Duration;

use tokio::sync::Notify;

use sjc_chart::chart::{ChartBackend, ChartConfig, ChartData};
use sjc_chart::dashboard::{Dashboard, DashboardConfig, Indicators, PageSurface, PriceSource};
use sjc_chart::domain::history::HistoryReport;
use sjc_chart::domain::price::PricePoint;
use sjc_chart::error::{RenderError, SdkError};
use sjc_chart::shared::{DisplayLocale, RequestParams, Timezone};

// ─── Price source ────────────────────────────────────────────────────────────

/// Scripted price source. Unscripted queries return [`sample_points`].
#[derive(Default)]
pub struct FakeSource {
    prices: RefCell<VecDeque<Result<Vec<PricePoint>, SdkError>>>,
    history: RefCell<VecDeque<Result<HistoryReport, SdkError>>>,
    pub requests: RefCell<Vec<RequestParams>>,
    pub history_requests: RefCell<Vec<u32>>,
    /// When set, every price query waits for a notification first.
    pub gate: Option<Rc<Notify>>,
    /// Same, for history ingestion.
    pub history_gate: Option<Rc<Notify>>,
    pub latency: Duration,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated(gate: Rc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    pub fn history_gated(gate: Rc<Notify>) -> Self {
        Self {
            history_gate: Some(gate),
            ..Self::default()
        }
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            ..Self::default()
        }
    }

    pub fn push_prices(&self, result: Result<Vec<PricePoint>, SdkError>) {
        self.prices.borrow_mut().push_back(result);
    }

    pub fn push_history(&self, result: Result<HistoryReport, SdkError>) {
        self.history.borrow_mut().push_back(result);
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> Option<RequestParams> {
        self.requests.borrow().last().copied()
    }
}

impl PriceSource for FakeSource {
    async fn query_prices(&self, params: RequestParams) -> Result<Vec<PricePoint>, SdkError> {
        self.requests.borrow_mut().push(params);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let scripted = self.prices.borrow_mut().pop_front();
        scripted.unwrap_or_else(|| Ok(sample_points()))
    }

    async fn ingest_history(&self, days: u32) -> Result<HistoryReport, SdkError> {
        self.history_requests.borrow_mut().push(days);
        if let Some(gate) = &self.history_gate {
            gate.notified().await;
        }
        let scripted = self.history.borrow_mut().pop_front();
        scripted.unwrap_or(Ok(HistoryReport { days, inserted: 0 }))
    }
}

/// `[{t:100, buy:1000, sell:1010}, {t:200, buy:1005, sell:1015}]`
pub fn sample_points() -> Vec<PricePoint> {
    vec![
        PricePoint::new(100, Some(1000.0), Some(1010.0)),
        PricePoint::new(200, Some(1005.0), Some(1015.0)),
    ]
}

// ─── Chart backend ───────────────────────────────────────────────────────────

/// In-memory chart library that tracks which handles are bound where.
#[derive(Default)]
pub struct RecordingBackend {
    next_id: u32,
    pub bound: HashMap<String, u32>,
    pub live: Vec<u32>,
    pub creates: u32,
    pub updates: u32,
    pub destroys: u32,
    pub last_data: Option<ChartData>,
    pub fail_updates: bool,
    pub fail_creates: bool,
}

impl RecordingBackend {
    /// Every in-place update fails; creates succeed.
    pub fn failing_updates() -> Self {
        Self {
            fail_updates: true,
            ..Self::default()
        }
    }

    /// Every create fails.
    pub fn failing_creates() -> Self {
        Self {
            fail_creates: true,
            ..Self::default()
        }
    }
}

impl ChartBackend for RecordingBackend {
    type Handle = u32;

    fn create(
        &mut self,
        canvas: &str,
        _config: &ChartConfig,
        data: &ChartData,
    ) -> Result<u32, RenderError> {
        if self.fail_creates {
            return Err(RenderError::CreateFailed("canvas context unavailable".into()));
        }
        self.next_id += 1;
        self.creates += 1;
        self.bound.insert(canvas.to_string(), self.next_id);
        self.live.push(self.next_id);
        self.last_data = Some(data.clone());
        Ok(self.next_id)
    }

    fn update(&mut self, _handle: &mut u32, data: &ChartData) -> Result<(), RenderError> {
        self.updates += 1;
        if self.fail_updates {
            return Err(RenderError::UpdateFailed("dataset detached".into()));
        }
        self.last_data = Some(data.clone());
        Ok(())
    }

    fn destroy(&mut self, handle: u32) -> Result<(), RenderError> {
        self.destroys += 1;
        self.live.retain(|h| *h != handle);
        self.bound.retain(|_, h| *h != handle);
        Ok(())
    }

    fn bound_to(&mut self, canvas: &str) -> Option<u32> {
        self.bound.get(canvas).copied()
    }
}

// ─── Page surface ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Indicators(Indicators),
    EmptyState(bool),
    LimitControl(String, bool),
    HistoryBusy(bool),
    Acknowledge(String),
}

#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn empty_state_calls(&self) -> Vec<bool> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::EmptyState(v) => Some(*v),
                _ => None,
            })
            .collect()
    }

    pub fn acknowledgments(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::Acknowledge(m) => Some(m.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_limit_control(&self) -> Option<(String, bool)> {
        self.calls.iter().rev().find_map(|c| match c {
            SurfaceCall::LimitControl(v, e) => Some((v.clone(), *e)),
            _ => None,
        })
    }
}

impl PageSurface for RecordingSurface {
    fn show_indicators(&mut self, indicators: &Indicators) {
        self.calls.push(SurfaceCall::Indicators(indicators.clone()));
    }

    fn set_empty_state(&mut self, visible: bool) {
        self.calls.push(SurfaceCall::EmptyState(visible));
    }

    fn set_limit_control(&mut self, value: &str, enabled: bool) {
        self.calls
            .push(SurfaceCall::LimitControl(value.to_string(), enabled));
    }

    fn set_history_busy(&mut self, busy: bool) {
        self.calls.push(SurfaceCall::HistoryBusy(busy));
    }

    fn acknowledge(&mut self, message: &str) {
        self.calls.push(SurfaceCall::Acknowledge(message.to_string()));
    }
}

// ─── Setup ───────────────────────────────────────────────────────────────────

pub type TestDashboard = Dashboard<FakeSource, RecordingBackend, RecordingSurface>;

pub fn test_config() -> DashboardConfig {
    DashboardConfig {
        settle: Duration::ZERO,
        locale: DisplayLocale::en_us().with_timezone(Timezone::utc()),
        ..DashboardConfig::default()
    }
}

pub fn dashboard(source: FakeSource) -> TestDashboard {
    Dashboard::new(
        source,
        RecordingBackend::default(),
        RecordingSurface::default(),
        test_config(),
    )
}
