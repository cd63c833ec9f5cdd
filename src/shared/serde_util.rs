//! Lenient coercion helpers for backend payloads and form input.
//!
//! The backend is loosely typed: numbers can arrive as strings, and fields can
//! be missing or `null`. These helpers follow browser coercion rules so a bad
//! record degrades instead of failing the whole payload.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse a leading integer the way a browser `parseInt(s, 10)` does.
///
/// Skips leading whitespace, accepts an optional sign, then consumes decimal
/// digits. Returns `None` when no digit is found.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude = rest[..digits_len]
        .bytes()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d - b'0')));
    Some(if negative { -magnitude } else { magnitude })
}

/// Coerce a timestamp field to integer seconds. Anything unusable becomes `0`.
pub fn coerce_timestamp(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => parse_int_prefix(s).unwrap_or(0),
        _ => 0,
    }
}

/// Coerce a price field to a number.
///
/// `null` and missing fields are absent (`None`). Other non-numeric values
/// become `Some(NaN)`; consumers decide how to render those.
pub fn coerce_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Null => None,
        Value::Number(n) => Some(n.as_f64().unwrap_or(f64::NAN)),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                Some(0.0)
            } else {
                Some(s.parse::<f64>().unwrap_or(f64::NAN))
            }
        }
        Value::Array(_) | Value::Object(_) => Some(f64::NAN),
    }
}

/// Deserializes a count that may be missing, `null`, or not a number into `u64`.
pub mod lenient_count {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(coerce_number(value.as_ref())
            .filter(|n| n.is_finite() && *n > 0.0)
            .map(|n| n.trunc() as u64)
            .unwrap_or(0))
    }
}

/// Deserializes an optional string; any other JSON type reads as `None`.
pub mod lenient_string {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::String(s)) => Some(s),
            _ => None,
        })
    }
}

/// Deserializes an optional timestamp with [`coerce_timestamp`] rules.
/// Missing and `null` read as `None`.
pub mod lenient_timestamp {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value
            .filter(|v| !v.is_null())
            .map(|v| coerce_timestamp(Some(&v))))
    }
}
