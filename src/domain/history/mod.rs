//! History ingestion domain — asks the backend to backfill past days.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

/// Days requested when the limit control holds no usable value.
pub const DEFAULT_HISTORY_DAYS: u32 = 7;

/// Result of one history ingestion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryReport {
    pub days: u32,
    /// Number of new records the backend stored.
    pub inserted: u64,
}

impl HistoryReport {
    /// Human-readable acknowledgment text.
    pub fn message(&self) -> String {
        let noun = if self.inserted == 1 { "record" } else { "records" };
        format!(
            "Inserted {} {} from the last {} day(s)",
            self.inserted, noun, self.days
        )
    }
}
