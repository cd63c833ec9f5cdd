//! Timestamp labels for the chart axis and the last-updated indicator.

use std::fmt::Write;

use super::DisplayLocale;
use crate::shared::{Mode, PLACEHOLDER};
use chrono::DateTime;

/// Axis label for a point: time of day in `Today` mode, calendar date otherwise.
pub fn axis_label(timestamp: i64, mode: Mode, locale: &DisplayLocale) -> String {
    let pattern = match mode {
        Mode::Today => &locale.time_pattern,
        Mode::SevenDay | Mode::ThirtyDay => &locale.date_pattern,
    };
    render(timestamp, pattern, locale)
}

/// Date and time of day, used for the last-updated indicator.
pub fn date_time(timestamp: i64, locale: &DisplayLocale) -> String {
    let pattern = format!("{} {}", locale.time_pattern, locale.date_pattern);
    render(timestamp, &pattern, locale)
}

/// Out-of-range timestamps and unusable patterns render as the placeholder.
fn render(timestamp: i64, pattern: &str, locale: &DisplayLocale) -> String {
    let Some(instant) = DateTime::from_timestamp(timestamp, 0) else {
        return PLACEHOLDER.to_string();
    };
    let mut out = String::new();
    match write!(out, "{}", locale.timezone.localize(instant).format(pattern)) {
        Ok(()) => out,
        Err(_) => PLACEHOLDER.to_string(),
    }
}
