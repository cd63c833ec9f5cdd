//! Event/timer driver — feeds UI events and poll ticks into the dashboard.
//!
//! Handlers run concurrently, the way browser callbacks interleave at await
//! points. Overlapping refreshes are therefore dropped by the dashboard's
//! single-flight flag rather than queued behind each other here.

use std::time::Duration;

use futures_util::future::{FutureExt, LocalBoxFuture};
use futures_util::stream::{self, FuturesUnordered, LocalBoxStream, Stream, StreamExt};
use futures_timer::Delay;

use super::{Dashboard, PageSurface, PriceSource};
use crate::chart::ChartBackend;
use crate::shared::Mode;

/// User actions the page wires to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SelectMode(Mode),
    ManualRefresh,
    /// New text of the limit control.
    LimitChanged(String),
    FetchHistory,
}

/// Runs a dashboard from an event stream plus a fixed poll timer.
pub struct Driver<'a, P, B: ChartBackend, S> {
    dashboard: &'a Dashboard<P, B, S>,
    poll_interval: Duration,
}

impl<'a, P, B, S> Driver<'a, P, B, S>
where
    P: PriceSource,
    B: ChartBackend,
    S: PageSurface,
{
    pub fn new(dashboard: &'a Dashboard<P, B, S>) -> Self {
        Self {
            poll_interval: dashboard.config().poll_interval,
            dashboard,
        }
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Initial render, then serve events and poll ticks until `events` ends.
    ///
    /// Work already in flight when the stream ends is allowed to finish.
    pub async fn run<E>(&self, events: E)
    where
        E: Stream<Item = UiEvent> + Unpin,
    {
        let dashboard = self.dashboard;
        let mut events = events.fuse();
        let mut in_flight: FuturesUnordered<LocalBoxFuture<'a, ()>> = FuturesUnordered::new();
        let mut ticks = poll_ticks(self.poll_interval).fuse();

        in_flight.push(async move { dashboard.init().await; }.boxed_local());

        loop {
            futures_util::select! {
                event = events.next() => match event {
                    Some(event) => {
                        tracing::debug!(?event, "UI event");
                        in_flight.push(dashboard.dispatch(event).boxed_local());
                    }
                    None => break,
                },
                _ = ticks.next() => {
                    in_flight.push(async move { dashboard.refresh().await; }.boxed_local());
                }
                () = in_flight.select_next_some() => {}
                complete => break,
            }
        }

        while in_flight.next().await.is_some() {}
    }
}

/// Endless stream that yields once per `interval`.
fn poll_ticks(interval: Duration) -> LocalBoxStream<'static, ()> {
    stream::unfold((), move |()| async move {
        Delay::new(interval).await;
        Some(((), ()))
    })
    .boxed_local()
}
