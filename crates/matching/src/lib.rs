//! Pairing interaction model for the line-matching exercise.
//!
//! The model tracks a single session of the "draw a line between matching
//! items" game: a fixed left column, a randomized right pool, the attempt in
//! progress (selected left item plus its captured anchor point), and the
//! running solved tally. It owns no rendering and performs no I/O of its own
//! beyond optional catalog file loading; the GUI layer feeds it pointer
//! events in drawing-surface-local coordinates.

pub mod catalog;
pub mod error;
pub mod geometry;
pub mod sample;
pub mod session;

pub use catalog::{Catalog, PairId, PairItem};
pub use error::{CatalogError, MatchError};
pub use geometry::{CanvasTransform, Connector, Point};
pub use session::{AttemptOutcome, MatchSession, DEFAULT_POOL_SIZE};
