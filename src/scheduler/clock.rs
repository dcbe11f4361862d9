//! Injected clock capability.
//!
//! The engine never reads the system clock itself: anchors and
//! progress instants come from a [`Clock`] owned by the caller, so
//! the calculator and progress tracker stay pure and testable with
//! fixed instants.

use chrono::{DateTime, Duration, Utc};
use std::cell::Cell;

/// Source of "now" instants.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A settable clock for tests and simulations.
///
/// Starts at a fixed instant and only moves when told to; `advance`
/// keeps the supplied instants monotonic, matching what the progress
/// tracker requires of its tick source.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Cell<DateTime<Utc>>,
}

impl ManualClock {
    /// Creates a clock frozen at `start`.
    pub fn at(start: DateTime<Utc>) -> Self {
        Self {
            current: Cell::new(start),
        }
    }

    /// Advances the clock by `delta`.
    pub fn advance(&self, delta: Duration) {
        self.current.set(self.current.get() + delta);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.current.get()
    }
}
