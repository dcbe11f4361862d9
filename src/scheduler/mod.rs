//! Schedule computation and live progress.
//!
//! [`compute_schedule`] is the deterministic core: an ordered list of
//! work orders, a duration table, and an anchor instant in; a fully
//! timed [`crate::models::ScheduledQueue`] out. [`progress`] derives
//! the in-progress order's completion fraction from a supplied
//! instant; [`Clock`] is the injected capability that supplies it.

mod calculator;
mod clock;
mod progress;

pub use calculator::compute_schedule;
pub use clock::{Clock, ManualClock, SystemClock};
pub use progress::{progress, progress_percent};
