use thiserror::Error;

use crate::catalog::PairId;

/// Session operation failures. The only rejected input is a left selection
/// naming an id outside the catalog; wrong-pair attempts and idle pointer
/// moves are ordinary branches, not errors.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("no catalog item with id {0}")]
    UnknownLeftItem(PairId),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog has no entries")]
    Empty,
    #[error("duplicate pair id {0}")]
    DuplicateId(PairId),
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
