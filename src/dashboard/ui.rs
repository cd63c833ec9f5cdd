//! UI selection state — mode, limit control and the manual-edit latch.

use crate::shared::serde_util::parse_int_prefix;
use crate::shared::{Mode, RequestParams};

/// Derive query parameters from the current selection.
///
/// `Today` always yields `limit = 0`. Otherwise a positive integer in the
/// limit control wins, whether or not the user typed it; anything else falls
/// back to the mode default. The latch only governs [`UiState::select_mode`].
pub fn resolve(mode: Mode, limit_control_value: &str, _user_modified_limit: bool) -> RequestParams {
    if !mode.uses_limit() {
        return RequestParams::new(mode, 0);
    }
    let limit = parse_positive(limit_control_value).unwrap_or_else(|| mode.default_limit());
    RequestParams::new(mode, limit)
}

fn parse_positive(value: &str) -> Option<u32> {
    parse_int_prefix(value)
        .filter(|n| *n > 0)
        .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
}

/// Selection state for one page session.
///
/// Constructed fresh per page (and per test); nothing here is global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    mode: Mode,
    limit_input: String,
    user_modified_limit: bool,
}

impl UiState {
    pub fn new(mode: Mode) -> Self {
        let limit_input = if mode.uses_limit() {
            mode.default_limit().to_string()
        } else {
            String::new()
        };
        Self {
            mode,
            limit_input,
            user_modified_limit: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current text of the limit control.
    pub fn limit_input(&self) -> &str {
        &self.limit_input
    }

    /// The limit control is disabled in `Today` mode.
    pub fn limit_enabled(&self) -> bool {
        self.mode.uses_limit()
    }

    pub fn user_modified_limit(&self) -> bool {
        self.user_modified_limit
    }

    pub fn resolve(&self) -> RequestParams {
        resolve(self.mode, &self.limit_input, self.user_modified_limit)
    }

    /// Switch mode. Until the user edits the limit by hand, the control is
    /// reset to the new mode's default.
    pub fn select_mode(&mut self, mode: Mode) {
        self.mode = mode;
        if !self.user_modified_limit && mode.uses_limit() {
            self.limit_input = mode.default_limit().to_string();
        }
    }

    /// Record a manual edit of the limit control. Latches for the session.
    pub fn edit_limit(&mut self, value: impl Into<String>) {
        self.limit_input = value.into();
        self.user_modified_limit = true;
    }

    /// Days to request from the history endpoint.
    pub fn history_days(&self, default_days: u32) -> u32 {
        parse_positive(&self.limit_input).unwrap_or(default_days)
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
