//! Single-resource production queue engine.
//!
//! Work orders are processed strictly one at a time, in queue order.
//! This crate turns an ordered list of orders plus a per-product
//! duration table into a timed schedule, derives live completion
//! progress from wall-clock instants, and handles reordering (manual
//! move, priority sort) with optimistic local application and
//! rollback on rejection by the external ordering authority.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `WorkOrder`, `Priority`,
//!   `DurationTable`, `ScheduledWorkOrder`, `ScheduledQueue`,
//!   `PositionUpdate`
//! - **`scheduler`**: The deterministic schedule calculator, the
//!   progress tracker, and the injected `Clock` capability
//! - **`queue`**: `QueueManager` — optimistic reordering reconciled
//!   with the `OrderingAuthority`
//! - **`validation`**: Input integrity checks (duplicate IDs, table
//!   defaults)
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use prodqueue::models::{DurationTable, Priority, WorkOrder};
//! use prodqueue::queue::QueueManager;
//! use prodqueue::scheduler::progress;
//!
//! let orders = vec![
//!     WorkOrder::new("WO-1")
//!         .with_priority(Priority::High)
//!         .with_product_type("ProductX"),
//!     WorkOrder::new("WO-2").with_product_type("ProductY"),
//! ];
//! let table = DurationTable::new()
//!     .with_entry("ProductX", 60)
//!     .with_entry("ProductY", 30)
//!     .with_default(10);
//!
//! let anchor = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
//! let manager = QueueManager::new(orders, table, anchor);
//!
//! let queue = manager.snapshot();
//! let current = queue.in_progress().unwrap();
//! let halfway = anchor + chrono::Duration::minutes(30);
//! assert_eq!(progress(current, halfway), 0.5);
//! ```
//!
//! # Concurrency
//!
//! The core is single-threaded and cooperative: calculator, resolver,
//! and progress tracker are pure. Callers serialize mutations (one in
//! flight per manager); progress ticks read the immutable
//! `Arc<ScheduledQueue>` snapshot and never a queue being mutated.

pub mod models;
pub mod queue;
pub mod scheduler;
pub mod validation;
