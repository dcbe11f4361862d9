//! Ordering authority boundary.
//!
//! The external system that owns the canonical queue order. The
//! engine submits a whole `{id, position}` list per mutation and
//! treats the authority's answer as the source of truth for conflict
//! resolution; every failure here is recoverable by rollback.

use thiserror::Error;

use crate::models::PositionUpdate;

/// Failure reported by the ordering authority.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitError {
    /// The authority refused the submitted order.
    #[error("ordering authority rejected the new order: {0}")]
    Rejected(String),
    /// The authority could not be reached.
    #[error("ordering authority unreachable: {0}")]
    Unreachable(String),
}

/// Local mutation failure, before anything is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReorderError {
    /// The named order is not in the queue.
    #[error("unknown work order id: {0}")]
    UnknownOrder(String),
}

/// Authority response: the canonical `{id, position}` list when it
/// differs from (or restates) the submission, or `None` to accept the
/// submission as-is.
pub type CommitOutcome = Result<Option<Vec<PositionUpdate>>, CommitError>;

/// A synchronous ordering authority.
///
/// Implementations wrap whatever transport actually carries the
/// commit (HTTP, channel, in-memory fake). Asynchronous hosts bypass
/// this trait and feed responses straight into
/// [`crate::queue::QueueManager::resolve_commit`].
pub trait OrderingAuthority {
    /// Submits a new queue order for confirmation.
    fn submit(&mut self, updates: &[PositionUpdate]) -> CommitOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = CommitError::Rejected("stale positions".into());
        assert_eq!(
            e.to_string(),
            "ordering authority rejected the new order: stale positions"
        );
        let e = CommitError::Unreachable("connection refused".into());
        assert!(e.to_string().contains("unreachable"));
        let e = ReorderError::UnknownOrder("WO-404".into());
        assert_eq!(e.to_string(), "unknown work order id: WO-404");
    }
}
