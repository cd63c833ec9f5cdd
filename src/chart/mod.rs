//! Chart layer — the charting library seam and the data/config handed to it.
//!
//! The library itself is external. [`ChartBackend`] lists the four operations
//! the dashboard consumes; [`lifecycle::ChartLifecycle`] owns the single live
//! handle and decides between create, update and recreate.

pub mod lifecycle;

pub use lifecycle::{ChartLifecycle, RenderPath};

use crate::domain::price::PricePoint;
use crate::error::RenderError;
use crate::shared::fmt::{label, num};
use crate::shared::{DisplayLocale, Mode, PLACEHOLDER};

// ─── Backend seam ────────────────────────────────────────────────────────────

/// Operations consumed from the charting library.
pub trait ChartBackend {
    /// A live chart bound to a canvas.
    type Handle;

    /// Build a chart on `canvas`.
    fn create(
        &mut self,
        canvas: &str,
        config: &ChartConfig,
        data: &ChartData,
    ) -> Result<Self::Handle, RenderError>;

    /// Replace the labels and series of a live chart and redraw it.
    fn update(&mut self, handle: &mut Self::Handle, data: &ChartData) -> Result<(), RenderError>;

    /// Release a chart and everything it holds on the canvas.
    fn destroy(&mut self, handle: Self::Handle) -> Result<(), RenderError>;

    /// Chart the library already has bound to `canvas`, if any.
    fn bound_to(&mut self, canvas: &str) -> Option<Self::Handle>;
}

// ─── Series ──────────────────────────────────────────────────────────────────

/// The two plotted series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
    Buy,
    Sell,
}

impl Series {
    pub fn key(&self) -> &'static str {
        match self {
            Series::Buy => "buy",
            Series::Sell => "sell",
        }
    }
}

/// Styling for one line series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStyle {
    pub label: String,
    /// CSS color for the line.
    pub color: String,
    /// Fill under the line.
    pub fill: bool,
    /// Bezier curve tension, `0.0` for straight segments.
    pub tension: f32,
    pub point_radius: f32,
}

// ─── Config ──────────────────────────────────────────────────────────────────

/// Everything the library needs besides the data itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub buy: SeriesStyle,
    pub sell: SeriesStyle,
    pub locale: DisplayLocale,
}

impl ChartConfig {
    pub fn new(locale: DisplayLocale) -> Self {
        Self {
            buy: SeriesStyle {
                label: "Buy".to_string(),
                color: "#16a34a".to_string(),
                fill: false,
                tension: 0.25,
                point_radius: 2.0,
            },
            sell: SeriesStyle {
                label: "Sell".to_string(),
                color: "#dc2626".to_string(),
                fill: false,
                tension: 0.25,
                point_radius: 2.0,
            },
            locale,
        }
    }

    pub fn style(&self, series: Series) -> &SeriesStyle {
        match series {
            Series::Buy => &self.buy,
            Series::Sell => &self.sell,
        }
    }

    /// Tooltip line, e.g. `"Buy: 84.500.000 VND"` or `"Buy: —"`.
    pub fn tooltip(&self, series: Series, value: Option<f64>) -> String {
        let label = &self.style(series).label;
        match value.filter(|v| v.is_finite()) {
            Some(v) => format!("{}: {}", label, num::display_currency(&v, &self.locale)),
            None => format!("{}: {}", label, PLACEHOLDER),
        }
    }

    /// Value-axis tick text with grouped numerals.
    pub fn tick(&self, value: f64) -> String {
        num::display(&value, &self.locale)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(DisplayLocale::default())
    }
}

// ─── Data ────────────────────────────────────────────────────────────────────

/// Parallel label/value arrays for one render.
///
/// Absent and non-numeric values are `None`, which the library draws as a gap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub buy: Vec<Option<f64>>,
    pub sell: Vec<Option<f64>>,
}

impl ChartData {
    pub fn from_points(points: &[PricePoint], mode: Mode, locale: &DisplayLocale) -> Self {
        Self {
            labels: points
                .iter()
                .map(|p| label::axis_label(p.timestamp, mode, locale))
                .collect(),
            buy: points.iter().map(PricePoint::plotted_buy).collect(),
            sell: points.iter().map(PricePoint::plotted_sell).collect(),
        }
    }

    pub fn series(&self, series: Series) -> &[Option<f64>] {
        match series {
            Series::Buy => &self.buy,
            Series::Sell => &self.sell,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Timezone;

    #[test]
    fn test_tooltip_formats_value_with_currency() {
        let config = ChartConfig::default();
        assert_eq!(
            config.tooltip(Series::Buy, Some(84_500_000.0)),
            "Buy: 84.500.000 VND"
        );
    }

    #[test]
    fn test_tooltip_absent_and_nan_render_dash() {
        let config = ChartConfig::default();
        assert_eq!(config.tooltip(Series::Sell, None), "Sell: —");
        assert_eq!(config.tooltip(Series::Sell, Some(f64::NAN)), "Sell: —");
    }

    #[test]
    fn test_tick_groups_digits() {
        let config = ChartConfig::new(DisplayLocale::en_us());
        assert_eq!(config.tick(85_000_000.0), "85,000,000");
    }

    #[test]
    fn test_chart_data_keeps_gaps() {
        let points = [
            PricePoint::new(100, Some(1000.0), None),
            PricePoint::new(200, Some(f64::NAN), Some(1015.0)),
        ];
        let data = ChartData::from_points(&points, Mode::SevenDay, &DisplayLocale::vi_vn());
        assert_eq!(data.len(), 2);
        assert_eq!(data.series(Series::Buy), [Some(1000.0), None]);
        assert_eq!(data.series(Series::Sell), [None, Some(1015.0)]);
    }

    #[test]
    fn test_chart_data_labels_follow_mode() {
        // 2026-10-17 05:30:00 UTC
        let points = [PricePoint::new(1_792_215_000, Some(1.0), Some(1.0))];
        let locale = DisplayLocale::vi_vn().with_timezone(Timezone::ict());
        assert_eq!(
            ChartData::from_points(&points, Mode::Today, &locale).labels,
            ["12:30"]
        );
        assert_eq!(
            ChartData::from_points(&points, Mode::ThirtyDay, &locale).labels,
            ["17/10/2026"]
        );
    }
}
