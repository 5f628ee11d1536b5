//! The admin catalog document: postings, categories, events, display settings.
//!
//! The catalog is what the CLI persists between invocations. It serializes to
//! a single pretty-printed JSON file; load and save are whole-document
//! operations, which is plenty for a store this size and keeps the format
//! trivially inspectable.

use std::fs;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use koto_core::entities::{DisplaySettings, Event, JobPosting};

use crate::categories::CategoryRegistry;
use crate::error::StoreError;
use crate::jobs::{JobStore, MemoryStore};

/// One page of the public job listing.
///
/// Pages are cumulative: page `n` holds the first `n * items_per_page`
/// matching postings, the way the site's "load more" control grows the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Listing {
    pub jobs: Vec<JobPosting>,
    /// Whether more matching postings exist beyond this page.
    pub has_more: bool,
}

/// Everything the admin dashboard manages, as one serializable document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Catalog {
    #[serde(default)]
    pub jobs: MemoryStore,
    #[serde(default)]
    pub categories: CategoryRegistry,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub display: DisplaySettings,
}

impl Catalog {
    /// A fresh catalog with the default category set.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            categories: CategoryRegistry::with_defaults(),
            ..Self::default()
        }
    }

    /// Load a catalog from `path`, or return a fresh default catalog if the
    /// file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] for unreadable files and
    /// [`StoreError::Parse`] for malformed JSON.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no catalog file, starting fresh");
            return Ok(Self::with_defaults());
        }
        let raw = fs::read_to_string(path)?;
        let catalog = serde_json::from_str(&raw)?;
        tracing::debug!(path = %path.display(), "catalog loaded");
        Ok(catalog)
    }

    /// Write the catalog as pretty JSON, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] on write failure.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)?;
        tracing::debug!(path = %path.display(), "catalog saved");
        Ok(())
    }

    /// The public listing view: postings filtered by category, grown page by
    /// page in increments of the display settings' `items_per_page`.
    ///
    /// `category` of `None` matches everything; pages are 1-based and a page
    /// of 0 is read as the first page.
    #[must_use]
    pub fn listing(&self, category: Option<&str>, page: u32) -> Listing {
        let matching: Vec<JobPosting> = self
            .jobs
            .list()
            .into_iter()
            .filter(|job| category.is_none_or(|name| job.has_category(name)))
            .collect();

        let per_page = self.display.items_per_page.max(1) as usize;
        let shown = (page.max(1) as usize).saturating_mul(per_page);
        let has_more = matching.len() > shown;

        let mut jobs = matching;
        jobs.truncate(shown);
        Listing { jobs, has_more }
    }

    /// Add an event. Ids are expected to be pre-minted by the caller.
    pub fn add_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Remove an event by id. No-op if absent.
    pub fn remove_event(&mut self, id: &str) {
        self.events.retain(|e| e.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use crate::jobs::JobStore;
    use koto_core::entities::JobPosting;

    #[test]
    fn load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::load(&dir.path().join("catalog.json")).unwrap();
        assert!(catalog.jobs.is_empty());
        assert!(!catalog.categories.is_empty());
    }

    #[test]
    fn save_and_reload_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/catalog.json");

        let mut catalog = Catalog::with_defaults();
        let mut job = JobPosting::new_draft(
            "job-abc123xyz".to_string(),
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        );
        job.admin_title = "Roundtrip check".to_string();
        catalog.jobs.upsert(job).unwrap();
        catalog.add_event(Event {
            id: "evt-def456uvw".to_string(),
            title: "Startup meetup".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            location: "Shibuya, Tokyo".to_string(),
        });

        catalog.save(&path).unwrap();
        let reloaded = Catalog::load(&path).unwrap();
        assert_eq!(reloaded, catalog);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = Catalog::load(&path);
        assert!(matches!(result, Err(StoreError::Parse(_))));
    }

    fn catalog_with_jobs(specs: &[(&str, &[&str])]) -> Catalog {
        let mut catalog = Catalog::with_defaults();
        // Upsert prepends, so insert in reverse to keep spec order.
        for (id, categories) in specs.iter().rev() {
            let mut job = JobPosting::new_draft(
                (*id).to_string(),
                NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            );
            for name in *categories {
                job.toggle_category(name);
            }
            catalog.jobs.upsert(job).unwrap();
        }
        catalog
    }

    fn listed_ids(listing: &super::Listing) -> Vec<&str> {
        listing.jobs.iter().map(|j| j.id.as_str()).collect()
    }

    #[test]
    fn listing_filters_by_category() {
        let catalog = catalog_with_jobs(&[
            ("job-aaaaaaaaa", &["リモートワーク"]),
            ("job-bbbbbbbbb", &["北海道求人"]),
            ("job-ccccccccc", &["リモートワーク", "募集中"]),
        ]);

        let listing = catalog.listing(Some("リモートワーク"), 1);
        assert_eq!(listed_ids(&listing), vec!["job-aaaaaaaaa", "job-ccccccccc"]);
        assert!(!listing.has_more);
    }

    #[test]
    fn listing_without_category_matches_everything() {
        let catalog = catalog_with_jobs(&[
            ("job-aaaaaaaaa", &["リモートワーク"]),
            ("job-bbbbbbbbb", &[] as &[&str]),
        ]);

        let listing = catalog.listing(None, 1);
        assert_eq!(listing.jobs.len(), 2);
    }

    #[test]
    fn listing_pages_grow_cumulatively() {
        let mut catalog = catalog_with_jobs(&[
            ("job-aaaaaaaaa", &[] as &[&str]),
            ("job-bbbbbbbbb", &[]),
            ("job-ccccccccc", &[]),
            ("job-ddddddddd", &[]),
            ("job-eeeeeeeee", &[]),
        ]);
        catalog.display.items_per_page = 2;

        let first = catalog.listing(None, 1);
        assert_eq!(listed_ids(&first), vec!["job-aaaaaaaaa", "job-bbbbbbbbb"]);
        assert!(first.has_more);

        // Page 2 re-includes page 1, it does not replace it.
        let second = catalog.listing(None, 2);
        assert_eq!(second.jobs.len(), 4);
        assert!(second.has_more);

        let third = catalog.listing(None, 3);
        assert_eq!(third.jobs.len(), 5);
        assert!(!third.has_more);
    }

    #[test]
    fn listing_treats_page_zero_as_first_page() {
        let mut catalog = catalog_with_jobs(&[
            ("job-aaaaaaaaa", &[] as &[&str]),
            ("job-bbbbbbbbb", &[]),
        ]);
        catalog.display.items_per_page = 1;

        assert_eq!(catalog.listing(None, 0), catalog.listing(None, 1));
    }

    #[test]
    fn remove_event_is_noop_when_absent() {
        let mut catalog = Catalog::with_defaults();
        catalog.remove_event("evt-missing00");
        assert!(catalog.events.is_empty());
    }
}
