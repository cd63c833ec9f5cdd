//! Locale-aware display formatting for prices and timestamps.

pub mod label;
pub mod num;

use chrono::{DateTime, FixedOffset, Local, Offset, Utc};

/// Zone timestamps are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timezone {
    /// The host's zone; in a browser build, the browser's.
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl Timezone {
    pub fn utc() -> Self {
        Self::Fixed(Utc.fix())
    }

    /// Indochina Time, UTC+7.
    pub fn ict() -> Self {
        FixedOffset::east_opt(7 * 3600).map_or_else(Self::utc, Self::Fixed)
    }

    pub(crate) fn localize(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Timezone::Local => instant.with_timezone(&Local).fixed_offset(),
            Timezone::Fixed(offset) => instant.with_timezone(offset),
        }
    }
}

/// Display conventions for numbers and dates.
///
/// Resolved once per page; the formatting helpers take it by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayLocale {
    /// Thousands separator in grouped numerals.
    pub group_separator: char,
    /// Separator between integer and fraction digits.
    pub decimal_separator: char,
    /// Currency suffix appended to tooltip values.
    pub currency: String,
    /// `chrono` pattern for calendar dates.
    pub date_pattern: String,
    /// `chrono` pattern for time of day.
    pub time_pattern: String,
    pub timezone: Timezone,
}

impl DisplayLocale {
    /// Vietnamese conventions (`1.234.567`, `17/10/2026`).
    pub fn vi_vn() -> Self {
        Self {
            group_separator: '.',
            decimal_separator: ',',
            currency: "VND".to_string(),
            date_pattern: "%d/%m/%Y".to_string(),
            time_pattern: "%H:%M".to_string(),
            timezone: Timezone::Local,
        }
    }

    /// US conventions (`1,234,567`, `10/17/2026`).
    pub fn en_us() -> Self {
        Self {
            group_separator: ',',
            decimal_separator: '.',
            currency: "VND".to_string(),
            date_pattern: "%m/%d/%Y".to_string(),
            time_pattern: "%I:%M %p".to_string(),
            timezone: Timezone::Local,
        }
    }

    pub fn with_timezone(mut self, timezone: Timezone) -> Self {
        self.timezone = timezone;
        self
    }
}

impl Default for DisplayLocale {
    fn default() -> Self {
        Self::vi_vn()
    }
}
