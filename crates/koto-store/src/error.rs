//! Store error types for koto-store.

use thiserror::Error;

/// Errors from record store and catalog operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Lookup by id returned no posting.
    #[error("Posting not found: {id}")]
    NotFound { id: String },

    /// Catalog file could not be read or written.
    #[error("Catalog I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file held malformed JSON.
    #[error("Catalog parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
