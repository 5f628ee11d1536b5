//! Cross-cutting error types for hitokoto.
//!
//! This module defines errors that can originate from any crate in the system.
//! Domain-specific errors (e.g., `StoreError`, `FormError`) are defined in
//! their respective crates.

use thiserror::Error;

use crate::sections::SECTION_SLOTS;

/// Errors that can be raised by any hitokoto crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A section slot index was outside the fixed 0..10 range.
    #[error("Section slot {index} out of range (postings have {SECTION_SLOTS} slots)")]
    SlotOutOfRange { index: usize },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
