//! Live progress tracking for the in-progress order.
//!
//! Pure functions of (scheduled order, current instant). Driven by an
//! external periodic tick; the engine only requires that supplied
//! instants advance monotonically, not any particular cadence.

use chrono::{DateTime, Utc};

use crate::models::{OrderStatus, ScheduledWorkOrder};

/// Completion fraction of `order` at instant `now`, in `[0, 1]`.
///
/// Only meaningful for `InProgress` orders; any other status yields
/// 0.0. Otherwise linear interpolation of elapsed over total duration,
/// clamped: flat 0 before `start`, flat 1 after `end`. A zero-duration
/// slot (`end == start`) is defined as complete (1.0) rather than
/// dividing by zero.
pub fn progress(order: &ScheduledWorkOrder, now: DateTime<Utc>) -> f64 {
    if order.status != OrderStatus::InProgress {
        return 0.0;
    }

    let total = (order.end - order.start).num_seconds();
    if total <= 0 {
        return 1.0;
    }

    let elapsed = (now - order.start).num_seconds();
    (elapsed as f64 / total as f64).clamp(0.0, 1.0)
}

/// [`progress`] scaled to a display percentage in `[0, 100]`.
pub fn progress_percent(order: &ScheduledWorkOrder, now: DateTime<Utc>) -> f64 {
    progress(order, now) * 100.0
}
