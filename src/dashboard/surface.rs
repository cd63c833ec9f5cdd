//! Page surface — the text indicators, placeholder and controls the
//! dashboard writes to.

use crate::domain::price::PricePoint;
use crate::shared::fmt::{label, num};
use crate::shared::{DisplayLocale, PLACEHOLDER};

/// Display outputs, implemented by the host page.
///
/// Calls are synchronous; `acknowledge` blocks until the user dismisses it.
pub trait PageSurface {
    fn show_indicators(&mut self, indicators: &Indicators);

    /// Show (`true`) the empty-state placeholder in place of the chart canvas,
    /// or remove it and reveal the canvas (`false`).
    fn set_empty_state(&mut self, visible: bool);

    fn set_limit_control(&mut self, value: &str, enabled: bool);

    fn set_history_busy(&mut self, busy: bool);

    fn acknowledge(&mut self, message: &str);
}

/// Current-buy, current-sell and last-updated texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicators {
    pub current_buy: String,
    pub current_sell: String,
    pub last_updated: String,
}

impl Indicators {
    pub fn placeholder() -> Self {
        Self {
            current_buy: PLACEHOLDER.to_string(),
            current_sell: PLACEHOLDER.to_string(),
            last_updated: PLACEHOLDER.to_string(),
        }
    }

    /// Texts for the most recent point.
    ///
    /// A price of exactly `0` reads as "no data", same as a missing one.
    pub fn from_latest(point: &PricePoint, locale: &DisplayLocale) -> Self {
        Self {
            current_buy: price_text(point.buy, locale),
            current_sell: price_text(point.sell, locale),
            last_updated: if point.timestamp == 0 {
                PLACEHOLDER.to_string()
            } else {
                label::date_time(point.timestamp, locale)
            },
        }
    }
}

impl Default for Indicators {
    fn default() -> Self {
        Self::placeholder()
    }
}

fn price_text(value: Option<f64>, locale: &DisplayLocale) -> String {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => num::display(&v, locale),
        _ => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Timezone;

    #[test]
    fn test_from_latest_groups_digits() {
        let point = PricePoint::new(1_792_215_000, Some(84_500_000.0), Some(86_500_000.0));
        let locale = DisplayLocale::vi_vn().with_timezone(Timezone::ict());
        let ind = Indicators::from_latest(&point, &locale);
        assert_eq!(ind.current_buy, "84.500.000");
        assert_eq!(ind.current_sell, "86.500.000");
        assert_eq!(ind.last_updated, "12:30 17/10/2026");
    }

    #[test]
    fn test_missing_and_nan_show_placeholder() {
        let point = PricePoint::new(1, None, Some(f64::NAN));
        let ind = Indicators::from_latest(&point, &DisplayLocale::vi_vn());
        assert_eq!(ind.current_buy, PLACEHOLDER);
        assert_eq!(ind.current_sell, PLACEHOLDER);
    }

    // Known quirk: a genuine zero price is indistinguishable from no data.
    #[test]
    fn test_zero_price_shows_placeholder() {
        let point = PricePoint::new(1, Some(0.0), Some(1.0));
        let ind = Indicators::from_latest(&point, &DisplayLocale::en_us());
        assert_eq!(ind.current_buy, PLACEHOLDER);
        assert_eq!(ind.current_sell, "1");
    }

    #[test]
    fn test_zero_timestamp_has_no_last_updated() {
        let point = PricePoint::new(0, Some(1.0), Some(1.0));
        let ind = Indicators::from_latest(&point, &DisplayLocale::en_us());
        assert_eq!(ind.last_updated, PLACEHOLDER);
    }
}
