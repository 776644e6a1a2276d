//! Time source for entry timestamps
//!
//! Timestamps are fractional seconds since the Unix epoch with
//! millisecond resolution. [`SystemClock`] reads the wall clock;
//! [`ManualClock`] only moves when told to, for deterministic tests.

use std::sync::atomic::{AtomicU64, Ordering};

const MS_PER_SEC: f64 = 1000.0;

/// A source of the current time
pub trait Clock: Send + Sync {
    /// Current time in seconds since the Unix epoch
    fn now_secs(&self) -> f64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> f64 {
        chrono::Utc::now().timestamp_millis() as f64 / MS_PER_SEC
    }
}

/// A manually driven clock
///
/// - Time only moves forward
/// - All time changes are explicit
/// - Safe to share behind an `Arc` and advance from a test
#[derive(Debug, Default)]
pub struct ManualClock {
    current_ms: AtomicU64,
}

impl ManualClock {
    /// Create a clock starting at the epoch
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock starting at the given time
    pub fn at_secs(secs: u64) -> Self {
        Self {
            current_ms: AtomicU64::new(secs.saturating_mul(1000)),
        }
    }

    /// Advance time by the given number of seconds
    ///
    /// # Panics
    /// Panics if `secs` is negative or not finite.
    pub fn advance_secs(&self, secs: f64) -> f64 {
        assert!(
            secs.is_finite() && secs >= 0.0,
            "advance_secs({}) must be finite and non-negative",
            secs
        );
        let ms = (secs * MS_PER_SEC).round() as u64;
        let new_ms = self.current_ms.fetch_add(ms, Ordering::AcqRel) + ms;
        new_ms as f64 / MS_PER_SEC
    }

    /// Set time to an absolute value
    ///
    /// # Panics
    /// Panics if the new time is earlier than the current time.
    pub fn set_secs(&self, secs: u64) {
        let ms = secs.saturating_mul(1000);
        let current = self.current_ms.load(Ordering::Acquire);
        assert!(
            ms >= current,
            "cannot set time backwards: {} < {}",
            ms,
            current
        );
        self.current_ms.store(ms, Ordering::Release);
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> f64 {
        self.current_ms.load(Ordering::Acquire) as f64 / MS_PER_SEC
    }
}
