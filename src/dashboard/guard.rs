//! Single-flight flag with scoped release.

use std::sync::atomic::{AtomicBool, Ordering};

/// Holds a busy flag; dropping it clears the flag on every exit path,
/// including errors and cancelled futures.
#[must_use = "the flag is released as soon as the guard is dropped"]
pub(crate) struct FlightGuard<'a>(&'a AtomicBool);

impl<'a> FlightGuard<'a> {
    /// Set the flag, or return `None` if it is already set.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
