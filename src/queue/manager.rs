//! Queue manager: reordering with optimistic apply and rollback.
//!
//! Owns the current ordering and the live [`ScheduledQueue`] snapshot.
//! Every mutation (load, refresh, priority sort, manual reorder)
//! recomputes the whole queue from a freshly captured anchor — queues
//! are never patched in place, so tick readers holding the previous
//! `Arc` snapshot never observe a torn queue.
//!
//! Mutations that involve the ordering authority are optimistic: the
//! new queue becomes locally visible immediately, the `{id, position}`
//! list is handed back as a [`CommitRequest`], and the authority's
//! eventual answer is delivered through [`QueueManager::resolve_commit`].
//! A response for a superseded commit is dropped; a failure rolls the
//! ordering back to what was in effect before that optimistic apply.
//!
//! Callers must serialize mutations (single-writer discipline): at
//! most one mutation in flight against a given manager.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::models::{DurationTable, PositionUpdate, ScheduledQueue, WorkOrder};
use crate::queue::{CommitError, CommitOutcome, OrderingAuthority, ReorderError};
use crate::scheduler::compute_schedule;

/// Identifies one optimistic commit. Monotonically increasing; only
/// the most recent ticket is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommitTicket(u64);

/// An optimistic mutation awaiting confirmation: the ticket to resolve
/// it with and the `{id, position}` list to submit.
#[derive(Debug, Clone)]
pub struct CommitRequest {
    /// Ticket for [`QueueManager::resolve_commit`].
    pub ticket: CommitTicket,
    /// The new queue order, in authority wire shape.
    pub updates: Vec<PositionUpdate>,
}

/// How a delivered authority response was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The optimistic state stands (re-timed if the authority's
    /// canonical order differed).
    Confirmed,
    /// The commit failed; the prior ordering was restored.
    RolledBack(CommitError),
    /// The response belonged to a superseded commit and was ignored.
    Stale,
}

struct PendingCommit {
    ticket: CommitTicket,
    /// Ordering in effect immediately before the optimistic apply;
    /// the rollback target.
    prior_orders: Vec<WorkOrder>,
}

/// Orchestrates the single-resource queue: holds the current ordering
/// and duration table, recomputes the timed queue on every mutation,
/// and reconciles optimistic reorders with the ordering authority.
pub struct QueueManager {
    orders: Vec<WorkOrder>,
    durations: DurationTable,
    queue: Arc<ScheduledQueue>,
    next_ticket: u64,
    pending: Option<PendingCommit>,
}

impl QueueManager {
    /// Creates a manager from an initial load, timed from `now`.
    pub fn new(orders: Vec<WorkOrder>, durations: DurationTable, now: DateTime<Utc>) -> Self {
        let queue = Arc::new(compute_schedule(&orders, &durations, now));
        info!(count = orders.len(), "queue loaded");
        Self {
            orders,
            durations,
            queue,
            next_ticket: 0,
            pending: None,
        }
    }

    /// The current immutable queue snapshot.
    ///
    /// Tick readers clone this `Arc` and read it without coordination;
    /// mutations swap in a whole new queue.
    pub fn snapshot(&self) -> Arc<ScheduledQueue> {
        Arc::clone(&self.queue)
    }

    /// The current ordering.
    pub fn orders(&self) -> &[WorkOrder] {
        &self.orders
    }

    /// Replaces the ordering wholesale from the order source and
    /// re-times from `now`. Local only; no authority round-trip.
    /// Supersedes any in-flight commit.
    pub fn refresh(&mut self, orders: Vec<WorkOrder>, now: DateTime<Utc>) {
        self.supersede_pending("refresh");
        self.orders = orders;
        self.retime(now);
        info!(count = self.orders.len(), "queue refreshed");
    }

    /// Replaces the duration table (independent of order data) and
    /// re-times from `now`. Supersedes any in-flight commit.
    pub fn replace_durations(&mut self, durations: DurationTable, now: DateTime<Utc>) {
        self.supersede_pending("duration refresh");
        self.durations = durations;
        self.retime(now);
        info!(entries = self.durations.len(), "duration table replaced");
    }

    /// Re-ranks the queue High > Medium > Low, ties keeping their
    /// current relative position, and applies the result
    /// optimistically with `now` as the fresh anchor.
    pub fn priority_sort(&mut self, now: DateTime<Utc>) -> CommitRequest {
        let prior = self.orders.clone();
        // Stable sort: equal priorities keep queue order.
        self.orders.sort_by_key(|o| o.priority.rank());
        info!("priority sort applied optimistically");
        self.begin_commit(prior, now)
    }

    /// Moves one order to `target_index` (0-based, clamped to the
    /// valid range), leaving every other order's relative order
    /// unchanged, and applies the result optimistically with `now` as
    /// the fresh anchor.
    ///
    /// A no-op move still re-times from the fresh anchor and still
    /// produces a commit request.
    pub fn manual_reorder(
        &mut self,
        order_id: &str,
        target_index: usize,
        now: DateTime<Utc>,
    ) -> Result<CommitRequest, ReorderError> {
        let source = self
            .orders
            .iter()
            .position(|o| o.id == order_id)
            .ok_or_else(|| ReorderError::UnknownOrder(order_id.to_string()))?;

        let prior = self.orders.clone();
        let order = self.orders.remove(source);
        let target = target_index.min(self.orders.len());
        self.orders.insert(target, order);
        info!(order_id, source, target, "manual reorder applied optimistically");
        Ok(self.begin_commit(prior, now))
    }

    /// Delivers the authority's response for `ticket`.
    ///
    /// Responses for superseded tickets are ignored. On success the
    /// optimistic state stands; a canonical order that differs from
    /// the local one is adopted and re-timed from `now`. On failure
    /// the ordering captured before that commit's optimistic apply is
    /// restored and re-timed from `now`.
    pub fn resolve_commit(
        &mut self,
        ticket: CommitTicket,
        outcome: CommitOutcome,
        now: DateTime<Utc>,
    ) -> Resolution {
        let pending = match self.pending.take() {
            Some(p) if p.ticket == ticket => p,
            other => {
                self.pending = other;
                debug!(?ticket, "stale commit response ignored");
                return Resolution::Stale;
            }
        };

        match outcome {
            Ok(canonical) => {
                if let Some(canonical) = canonical {
                    self.adopt_canonical(&canonical, now);
                }
                debug!(?ticket, "commit confirmed");
                Resolution::Confirmed
            }
            Err(err) => {
                warn!(?ticket, %err, "commit failed, rolling back");
                self.orders = pending.prior_orders;
                self.retime(now);
                Resolution::RolledBack(err)
            }
        }
    }

    /// Submits `request` to a synchronous authority and resolves the
    /// outcome in one step.
    pub fn commit_via(
        &mut self,
        authority: &mut dyn OrderingAuthority,
        request: &CommitRequest,
        now: DateTime<Utc>,
    ) -> Resolution {
        let outcome = authority.submit(&request.updates);
        self.resolve_commit(request.ticket, outcome, now)
    }

    fn begin_commit(&mut self, prior_orders: Vec<WorkOrder>, now: DateTime<Utc>) -> CommitRequest {
        self.supersede_pending("newer mutation");
        self.retime(now);
        self.next_ticket += 1;
        let ticket = CommitTicket(self.next_ticket);
        self.pending = Some(PendingCommit {
            ticket,
            prior_orders,
        });
        CommitRequest {
            ticket,
            updates: self.queue.position_updates(),
        }
    }

    fn supersede_pending(&mut self, reason: &str) {
        if let Some(p) = self.pending.take() {
            debug!(ticket = ?p.ticket, reason, "in-flight commit superseded");
        }
    }

    /// Adopts the authority's canonical order when it is a permutation
    /// of the local ids; anything else keeps the optimistic state.
    fn adopt_canonical(&mut self, canonical: &[PositionUpdate], now: DateTime<Utc>) {
        let local_ids: Vec<&str> = self.orders.iter().map(|o| o.id.as_str()).collect();
        let mut ranked: Vec<&PositionUpdate> = canonical.iter().collect();
        ranked.sort_by_key(|u| u.position);
        let canonical_ids: Vec<&str> = ranked.iter().map(|u| u.id.as_str()).collect();

        let local_set: HashSet<&str> = local_ids.iter().copied().collect();
        let canonical_set: HashSet<&str> = canonical_ids.iter().copied().collect();
        if canonical_ids.len() != local_ids.len() || canonical_set != local_set {
            warn!("canonical order is not a permutation of local orders, keeping optimistic state");
            return;
        }
        if canonical_ids == local_ids {
            return;
        }

        self.orders = canonical_ids
            .iter()
            .filter_map(|id| self.orders.iter().find(|o| o.id == *id).cloned())
            .collect();
        self.retime(now);
        info!("canonical order adopted from authority");
    }

    fn retime(&mut self, now: DateTime<Utc>) {
        self.queue = Arc::new(compute_schedule(&self.orders, &self.durations, now));
    }
}
