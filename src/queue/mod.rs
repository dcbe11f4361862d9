//! Queue mutation and reconciliation with the ordering authority.
//!
//! [`QueueManager`] applies reorders optimistically and rolls back on
//! rejection; [`OrderingAuthority`] is the boundary to the external
//! system that owns the canonical order.

mod authority;
mod manager;

pub use authority::{CommitError, CommitOutcome, OrderingAuthority, ReorderError};
pub use manager::{CommitRequest, CommitTicket, QueueManager, Resolution};
