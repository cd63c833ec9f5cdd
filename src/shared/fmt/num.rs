//! Number formatting utilities for human-readable display.
//!
//! Handles f64 values with trailing-zero trimming and locale group separators.

use super::DisplayLocale;
use crate::shared::PLACEHOLDER;

/// Fraction digits kept when none are requested explicitly.
const DEFAULT_MAX_FRACTION_DIGITS: usize = 3;

/// Trims trailing zeros, adds group separators.
///
/// `formatted` is a plain `-?digits(.digits)?` string as produced by `format!`.
pub fn display_formatted_string(formatted: String, locale: &DisplayLocale) -> String {
    let trimmed = if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    };

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.as_str()),
    };
    let (integer_digits, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let len = integer_digits.len();
    let mut integer_part = String::with_capacity(len + len / 3);
    for (i, c) in integer_digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            integer_part.push(locale.group_separator);
        }
        integer_part.push(c);
    }

    // "-0" after rounding reads as zero
    let is_zero = integer_digits
        .chars()
        .chain(fraction.unwrap_or("").chars())
        .all(|c| c == '0');
    let sign = if negative && !is_zero { "-" } else { "" };

    match fraction {
        Some(f) => format!("{}{}{}{}", sign, integer_part, locale.decimal_separator, f),
        None => format!("{}{}", sign, integer_part),
    }
}

/// Format an f64 with up to three fraction digits.
///
/// Non-finite values render as the placeholder glyph.
pub fn display(amount: &f64, locale: &DisplayLocale) -> String {
    display_with_decimals(amount, DEFAULT_MAX_FRACTION_DIGITS, locale)
}

/// Format an f64 for display with explicit maximum decimal places.
pub fn display_with_decimals(amount: &f64, decimals: usize, locale: &DisplayLocale) -> String {
    if !amount.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let formatted = format!("{:.1$}", amount, decimals);
    display_formatted_string(formatted, locale)
}

/// Format a price with the locale's currency suffix, e.g. `"1.234.000 VND"`.
pub fn display_currency(amount: &f64, locale: &DisplayLocale) -> String {
    format!("{} {}", display(amount, locale), locale.currency)
}
