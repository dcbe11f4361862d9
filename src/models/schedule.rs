//! Scheduled queue model.
//!
//! A [`ScheduledQueue`] is the fully timed output of the schedule
//! calculator: every work order enriched with its resolved duration,
//! start/end instants, status, and 1-based queue position. Queues are
//! immutable snapshots — mutations always produce a whole new queue.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::WorkOrder;

/// Processing status of a scheduled work order.
///
/// The calculator only ever assigns `InProgress` (position 1) and
/// `Queued`; `Completed` is reserved for the external ordering
/// authority and merely round-trips through this engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Currently occupying the serial resource.
    InProgress,
    /// Waiting for its turn.
    Queued,
    /// Finished; assigned externally, never by this engine.
    Completed,
}

/// A work order enriched with its computed slot on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledWorkOrder {
    /// The underlying work order.
    #[serde(flatten)]
    pub order: WorkOrder,
    /// Resolved processing duration (minutes).
    pub duration_min: i64,
    /// Slot start instant.
    pub start: DateTime<Utc>,
    /// Slot end instant (`start + duration_min`).
    pub end: DateTime<Utc>,
    /// Processing status.
    pub status: OrderStatus,
    /// 1-based queue position.
    pub position: usize,
}

impl ScheduledWorkOrder {
    /// Slot duration as a `chrono::Duration`.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Order identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.order.id
    }
}

/// An `{id, position}` pair, the wire shape consumed by the ordering
/// authority when committing a new queue order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionUpdate {
    /// Order identifier.
    pub id: String,
    /// 1-based queue position.
    pub position: usize,
}

/// An immutable, fully timed queue snapshot.
///
/// Invariants for any queue produced by the calculator: positions are
/// exactly `1..=N` in sequence order, `start[0]` equals the anchor,
/// `start[i] == end[i-1]` for `i > 0`, the first entry is `InProgress`
/// and all later entries `Queued`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledQueue {
    /// Scheduled orders in queue sequence.
    pub entries: Vec<ScheduledWorkOrder>,
}

impl ScheduledQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued orders.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in queue order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScheduledWorkOrder> {
        self.entries.iter()
    }

    /// Finds an entry by order ID.
    pub fn get(&self, order_id: &str) -> Option<&ScheduledWorkOrder> {
        self.entries.iter().find(|e| e.id() == order_id)
    }

    /// The entry currently occupying the resource, if any.
    pub fn in_progress(&self) -> Option<&ScheduledWorkOrder> {
        self.entries.first()
    }

    /// End instant of the last slot (queue drain time), if non-empty.
    pub fn makespan_end(&self) -> Option<DateTime<Utc>> {
        self.entries.last().map(|e| e.end)
    }

    /// The underlying work orders in queue sequence.
    pub fn orders(&self) -> Vec<WorkOrder> {
        self.entries.iter().map(|e| e.order.clone()).collect()
    }

    /// The `{id, position}` list submitted to the ordering authority.
    pub fn position_updates(&self) -> Vec<PositionUpdate> {
        self.entries
            .iter()
            .map(|e| PositionUpdate {
                id: e.order.id.clone(),
                position: e.position,
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a ScheduledQueue {
    type Item = &'a ScheduledWorkOrder;
    type IntoIter = std::slice::Iter<'a, ScheduledWorkOrder>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, hour, min, 0).unwrap()
    }

    fn entry(id: &str, start: DateTime<Utc>, minutes: i64, position: usize) -> ScheduledWorkOrder {
        ScheduledWorkOrder {
            order: WorkOrder::new(id),
            duration_min: minutes,
            start,
            end: start + Duration::minutes(minutes),
            status: if position == 1 {
                OrderStatus::InProgress
            } else {
                OrderStatus::Queued
            },
            position,
        }
    }

    fn sample_queue() -> ScheduledQueue {
        ScheduledQueue {
            entries: vec![
                entry("WO-1", at(10, 0), 60, 1),
                entry("WO-2", at(11, 0), 30, 2),
            ],
        }
    }

    #[test]
    fn test_queue_accessors() {
        let queue = sample_queue();
        assert_eq!(queue.len(), 2);
        assert!(!queue.is_empty());
        assert_eq!(queue.in_progress().unwrap().id(), "WO-1");
        assert_eq!(queue.makespan_end(), Some(at(11, 30)));
        assert_eq!(queue.get("WO-2").unwrap().position, 2);
        assert!(queue.get("WO-9").is_none());
    }

    #[test]
    fn test_empty_queue() {
        let queue = ScheduledQueue::new();
        assert!(queue.is_empty());
        assert!(queue.in_progress().is_none());
        assert!(queue.makespan_end().is_none());
        assert!(queue.position_updates().is_empty());
    }

    #[test]
    fn test_scheduled_duration() {
        let e = entry("WO-1", at(9, 0), 45, 1);
        assert_eq!(e.duration(), Duration::minutes(45));
        assert_eq!(e.duration_min, 45);
    }

    #[test]
    fn test_position_updates_wire_shape() {
        let updates = sample_queue().position_updates();
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].id, "WO-1");
        assert_eq!(updates[0].position, 1);
        assert_eq!(updates[1].position, 2);

        let json = serde_json::to_string(&updates[0]).unwrap();
        assert_eq!(json, r#"{"id":"WO-1","position":1}"#);
    }

    #[test]
    fn test_orders_preserve_sequence() {
        let orders = sample_queue().orders();
        assert_eq!(orders[0].id, "WO-1");
        assert_eq!(orders[1].id, "WO-2");
    }

    #[test]
    fn test_completed_status_round_trips() {
        // Assigned only by the external authority, but must survive serde.
        let mut e = entry("WO-1", at(8, 0), 10, 1);
        e.status = OrderStatus::Completed;
        let json = serde_json::to_string(&e).unwrap();
        let back: ScheduledWorkOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(back.status, OrderStatus::Completed);
    }
}
