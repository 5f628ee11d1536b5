//! Job record store — the single write path for committed postings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use koto_core::entities::JobPosting;

use crate::error::StoreError;

/// The authoritative collection of job postings.
///
/// Commit and draft-save in the editor are the only callers of [`upsert`];
/// explicit admin deletion is the only caller of [`delete`]. Implementations
/// keep postings in insertion order with new postings at the front.
///
/// [`upsert`]: JobStore::upsert
/// [`delete`]: JobStore::delete
pub trait JobStore {
    /// All known postings, most recently created first; updates to existing
    /// postings preserve their position.
    fn list(&self) -> Vec<JobPosting>;

    /// Look up a posting by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no posting carries the id.
    fn get(&self, id: &str) -> Result<JobPosting, StoreError>;

    /// Replace the posting with the same id in place, or insert at the front.
    ///
    /// Idempotent under repeated identical input.
    ///
    /// # Errors
    ///
    /// Backend write failures only; the in-memory store never errors.
    fn upsert(&mut self, posting: JobPosting) -> Result<(), StoreError>;

    /// Remove the posting with the given id. No-op if absent.
    ///
    /// # Errors
    ///
    /// Backend write failures only; the in-memory store never errors.
    fn delete(&mut self, id: &str) -> Result<(), StoreError>;
}

/// In-memory reference implementation of [`JobStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct MemoryStore {
    postings: Vec<JobPosting>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored postings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

impl JobStore for MemoryStore {
    fn list(&self) -> Vec<JobPosting> {
        self.postings.clone()
    }

    fn get(&self, id: &str) -> Result<JobPosting, StoreError> {
        self.postings
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    fn upsert(&mut self, posting: JobPosting) -> Result<(), StoreError> {
        if let Some(existing) = self.postings.iter_mut().find(|p| p.id == posting.id) {
            *existing = posting;
        } else {
            self.postings.insert(0, posting);
        }
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        self.postings.retain(|p| p.id != id);
        Ok(())
    }
}
