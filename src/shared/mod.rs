//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the backend expects in query strings.

pub mod fmt;
pub mod serde_util;

pub use fmt::{DisplayLocale, Timezone};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Glyph shown in place of a value that is missing.
pub const PLACEHOLDER: &str = "—";

// ─── Mode ────────────────────────────────────────────────────────────────────

/// Active time window. Drives the query, the default limit and label formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "today")]
    Today,
    #[default]
    #[serde(rename = "7d")]
    SevenDay,
    #[serde(rename = "30d")]
    ThirtyDay,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::SevenDay => "7d",
            Self::ThirtyDay => "30d",
        }
    }

    /// Request limit used when the limit control holds no usable value.
    ///
    /// `Today` ignores the limit entirely, so its default is `0`.
    pub fn default_limit(&self) -> u32 {
        match self {
            Self::Today => 0,
            Self::SevenDay => 7,
            Self::ThirtyDay => 30,
        }
    }

    /// Whether the limit control applies to this mode.
    pub fn uses_limit(&self) -> bool {
        !matches!(self, Self::Today)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(Self::Today),
            "7d" => Ok(Self::SevenDay),
            "30d" => Ok(Self::ThirtyDay),
            other => Err(format!("Unknown mode: {}", other)),
        }
    }
}

// ─── RequestParams ───────────────────────────────────────────────────────────

/// Parameters for one price query.
///
/// `limit` is always `0` for [`Mode::Today`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestParams {
    pub mode: Mode,
    pub limit: u32,
}

impl RequestParams {
    pub fn new(mode: Mode, limit: u32) -> Self {
        let limit = if mode.uses_limit() { limit } else { 0 };
        Self { mode, limit }
    }
}
