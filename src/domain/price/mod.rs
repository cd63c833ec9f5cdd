//! Price domain — buy/sell quotes over time.

#[cfg(feature = "http")]
pub mod client;
pub mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};

pub use convert::normalize;

/// A single buy/sell quote.
///
/// `buy`/`sell` are `None` when the backend sent `null` or omitted the field.
/// A value that was present but not numeric is kept as `Some(NaN)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Unix timestamp in seconds.
    pub timestamp: i64,
    pub buy: Option<f64>,
    pub sell: Option<f64>,
}

impl PricePoint {
    pub fn new(timestamp: i64, buy: Option<f64>, sell: Option<f64>) -> Self {
        Self {
            timestamp,
            buy,
            sell,
        }
    }

    /// Buy value usable for plotting (`NaN` and infinities count as absent).
    pub fn plotted_buy(&self) -> Option<f64> {
        self.buy.filter(|v| v.is_finite())
    }

    /// Sell value usable for plotting (`NaN` and infinities count as absent).
    pub fn plotted_sell(&self) -> Option<f64> {
        self.sell.filter(|v| v.is_finite())
    }
}
