//! Engine error types.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised by catalog construction and pair selection.
///
/// Guesses submitted outside `Playing` are not errors; they are
/// reported as `GuessOutcome::Ignored`.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The catalog has fewer than two cities, so no pair can exist.
    #[error("catalog needs at least 2 cities, got {len}")]
    InvalidCatalog { len: usize },

    /// Every candidate index is excluded.
    #[error("no city left to draw: {excluded} of {catalog_len} excluded")]
    ExhaustedPool { catalog_len: usize, excluded: usize },

    /// The catalog source could not be decoded.
    #[error("invalid catalog format: {0}")]
    CatalogFormat(#[from] serde_json::Error),
}
