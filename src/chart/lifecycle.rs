//! Chart lifecycle — at most one live chart per canvas.
//!
//! All handle mutations go through [`ChartLifecycle`]. A failed in-place update
//! is recovered by destroying the chart and creating a fresh one.

use std::time::Duration;

use super::{ChartBackend, ChartConfig, ChartData};
use crate::error::RenderError;

/// How a render reached the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPath {
    Created,
    Updated,
    Recreated,
}

/// Owner of the single chart handle bound to one canvas.
pub struct ChartLifecycle<B: ChartBackend> {
    backend: B,
    canvas: String,
    config: ChartConfig,
    handle: Option<B::Handle>,
    /// Quiet period after a create. The caller keeps exclusive access for its
    /// duration, so no second create can start on the canvas meanwhile.
    settle: Duration,
}

impl<B: ChartBackend> ChartLifecycle<B> {
    pub fn new(backend: B, canvas: impl Into<String>, config: ChartConfig, settle: Duration) -> Self {
        Self {
            backend,
            canvas: canvas.into(),
            config,
            handle: None,
            settle,
        }
    }

    pub fn is_live(&self) -> bool {
        self.handle.is_some()
    }

    pub fn canvas(&self) -> &str {
        &self.canvas
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Release the owned chart, or any chart the library still has bound to
    /// the canvas. Failures are logged; ownership is cleared regardless.
    pub fn ensure_destroyed(&mut self) {
        let handle = match self.handle.take() {
            Some(handle) => handle,
            None => match self.backend.bound_to(&self.canvas) {
                Some(stray) => {
                    tracing::debug!(canvas = %self.canvas, "Releasing chart left on canvas");
                    stray
                }
                None => return,
            },
        };

        if let Err(e) = self.backend.destroy(handle) {
            tracing::warn!(canvas = %self.canvas, error = %e, "Chart destroy failed");
        }
    }

    /// Destroy whatever is on the canvas, then build a new chart from `data`.
    pub async fn create_with(&mut self, data: &ChartData) -> Result<(), RenderError> {
        self.ensure_destroyed();
        let handle = self.backend.create(&self.canvas, &self.config, data)?;
        self.handle = Some(handle);
        tracing::debug!(canvas = %self.canvas, points = data.len(), "Chart created");

        if !self.settle.is_zero() {
            futures_timer::Delay::new(self.settle).await;
        }
        Ok(())
    }

    /// Swap the live chart's data and redraw.
    pub fn update_in_place(&mut self, data: &ChartData) -> Result<(), RenderError> {
        let handle = self.handle.as_mut().ok_or(RenderError::StaleHandle)?;
        self.backend.update(handle, data)
    }

    /// Show `data`: create on first use, otherwise update, recreating if the
    /// update fails.
    pub async fn render(&mut self, data: &ChartData) -> Result<RenderPath, RenderError> {
        if self.handle.is_none() {
            self.create_with(data).await?;
            return Ok(RenderPath::Created);
        }

        match self.update_in_place(data) {
            Ok(()) => Ok(RenderPath::Updated),
            Err(e) => {
                tracing::warn!(canvas = %self.canvas, error = %e, "In-place chart update failed, recreating");
                self.ensure_destroyed();
                self.create_with(data).await?;
                Ok(RenderPath::Recreated)
            }
        }
    }
}

impl<B: ChartBackend> Drop for ChartLifecycle<B> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = self.backend.destroy(handle);
        }
    }
}
