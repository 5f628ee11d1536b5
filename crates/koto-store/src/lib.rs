//! # koto-store
//!
//! The job record store, category registry, and catalog persistence.
//!
//! The store is deliberately small and injectable: [`JobStore`] is the only
//! write path session logic ever touches, so a real persistence backend can
//! be substituted without changing the editor. [`MemoryStore`] is the
//! reference implementation; [`Catalog`] bundles the store with the category
//! registry, events, and display settings and persists the whole document as
//! JSON for the CLI.

mod catalog;
mod categories;
mod error;
mod jobs;

pub use catalog::{Catalog, Listing};
pub use categories::{CategoryRegistry, DEFAULT_CATEGORIES};
pub use error::StoreError;
pub use jobs::{JobStore, MemoryStore};
