//! The per-mount session state machine: `Idle` until a left item is
//! selected, `Attempting` while the connector follows the pointer, back to
//! `Idle` on any right-column attempt regardless of correctness.

use rand::Rng;
use tracing::debug;

use crate::{
    catalog::{Catalog, PairId, PairItem},
    error::MatchError,
    geometry::{Connector, Point},
    sample::sample_pool,
};

/// Right-pool size used when the caller does not pick one.
pub const DEFAULT_POOL_SIZE: usize = 5;

/// The attempt in progress. Existence of this value is what "a left item is
/// selected" means, so an anchor can never outlive its selection.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveAttempt {
    left_id: PairId,
    anchor: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    Solved,
    Missed,
}

/// One game session. Created per mount, discarded on teardown; nothing here
/// is persisted or shared.
#[derive(Debug, Clone)]
pub struct MatchSession {
    catalog: Catalog,
    right_pool: Vec<PairItem>,
    attempt: Option<ActiveAttempt>,
    solved: u32,
}

impl MatchSession {
    /// Starts a session, sampling the right pool from the catalog with the
    /// supplied random source. The pool order is fixed for the session's
    /// lifetime.
    pub fn new<R: Rng + ?Sized>(catalog: Catalog, pool_size: usize, rng: &mut R) -> Self {
        let right_pool = sample_pool(catalog.items(), pool_size, rng);
        debug!(pool_size = right_pool.len(), "session started");
        Self {
            catalog,
            right_pool,
            attempt: None,
            solved: 0,
        }
    }

    /// Starts a session with a caller-supplied pool permutation instead of
    /// sampling. Entries not present in the catalog are dropped.
    pub fn with_pool(catalog: Catalog, right_pool: Vec<PairItem>) -> Self {
        let right_pool = right_pool
            .into_iter()
            .filter(|item| catalog.contains(item.id))
            .collect();
        Self {
            catalog,
            right_pool,
            attempt: None,
            solved: 0,
        }
    }

    /// Selects a left item, capturing the pointer position (already in
    /// surface-local coordinates) as the connector anchor. Selecting while a
    /// prior selection is active silently replaces it without scoring.
    pub fn select_left(&mut self, id: PairId, anchor: Point) -> Result<(), MatchError> {
        if !self.catalog.contains(id) {
            return Err(MatchError::UnknownLeftItem(id));
        }
        debug!(id = id.0, "left item selected");
        self.attempt = Some(ActiveAttempt { left_id: id, anchor });
        Ok(())
    }

    /// Computes this frame's connector from the anchor to the pointer.
    /// Returns `None` while idle; a pointer move without an active attempt
    /// is a normal no-op. The connector is marked visible only while the
    /// pointer is over a right-column target.
    pub fn track_pointer(&self, pointer: Point, over_right_target: bool) -> Option<Connector> {
        let attempt = self.attempt.as_ref()?;
        Some(Connector {
            from: attempt.anchor,
            to: pointer,
            visible: over_right_target,
        })
    }

    /// Scores the attempt against a right-column id and ends it. Solved iff
    /// the right id equals the selected left id; either way the selection
    /// and anchor are cleared. `None` when no attempt is in progress, so a
    /// repeated call without a fresh selection is a no-op.
    pub fn attempt_pair(&mut self, right_id: PairId) -> Option<AttemptOutcome> {
        let attempt = self.attempt.take()?;
        let outcome = if attempt.left_id == right_id {
            // Uncapped on purpose: re-solving an already-solved pair still
            // counts, and no terminal state exists.
            self.solved += 1;
            AttemptOutcome::Solved
        } else {
            AttemptOutcome::Missed
        };
        debug!(
            left = attempt.left_id.0,
            right = right_id.0,
            outcome = ?outcome,
            solved = self.solved,
            "pair attempted"
        );
        Some(outcome)
    }

    pub fn solved(&self) -> u32 {
        self.solved
    }

    pub fn active_left(&self) -> Option<PairId> {
        self.attempt.map(|attempt| attempt.left_id)
    }

    pub fn anchor(&self) -> Option<Point> {
        self.attempt.map(|attempt| attempt.anchor)
    }

    /// The full catalog, rendered as the left column.
    pub fn left_items(&self) -> &[PairItem] {
        self.catalog.items()
    }

    /// The sampled right pool in its fixed session order.
    pub fn right_pool(&self) -> &[PairItem] {
        &self.right_pool
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
