//! Production queue domain models.
//!
//! Core data types for the single-resource queue: immutable work
//! orders, the product-type duration table, and the fully timed
//! [`ScheduledQueue`] snapshot produced by the schedule calculator.

mod duration;
mod schedule;
mod work_order;

pub use duration::{DurationTable, DEFAULT_KEY, FALLBACK_MINUTES};
pub use schedule::{OrderStatus, PositionUpdate, ScheduledQueue, ScheduledWorkOrder};
pub use work_order::{Priority, WorkOrder};
