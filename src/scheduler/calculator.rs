//! Serial schedule calculator.
//!
//! Turns an ordered list of work orders plus a duration table into a
//! fully timed queue: one left-to-right pass with a running cursor
//! starting at the anchor instant. The calculator never reorders —
//! ordering is an external decision fed to it.

use chrono::{DateTime, Duration, Utc};

use crate::models::{DurationTable, OrderStatus, ScheduledQueue, ScheduledWorkOrder, WorkOrder};

/// Computes the timed queue for `orders` on the single serial resource.
///
/// # Algorithm
/// Maintain a cursor initialized to `anchor`. For each order at index
/// `i`: resolve its duration, assign `start = cursor`,
/// `end = start + duration`, advance the cursor to `end`, mark the
/// first order `InProgress` and the rest `Queued`, and number
/// positions `1..=N`.
///
/// Pure and deterministic: empty input yields an empty queue, an empty
/// table resolves every order to the engine fallback, and identical
/// inputs yield identical output.
pub fn compute_schedule(
    orders: &[WorkOrder],
    table: &DurationTable,
    anchor: DateTime<Utc>,
) -> ScheduledQueue {
    let mut cursor = anchor;
    let entries = orders
        .iter()
        .enumerate()
        .map(|(i, order)| {
            let minutes = table.resolve(&order.product_type);
            let start = cursor;
            let end = start + Duration::minutes(minutes);
            cursor = end;
            ScheduledWorkOrder {
                order: order.clone(),
                duration_min: minutes,
                start,
                end,
                status: if i == 0 {
                    OrderStatus::InProgress
                } else {
                    OrderStatus::Queued
                },
                position: i + 1,
            }
        })
        .collect();

    ScheduledQueue { entries }
}
