//! The job posting entity.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::JobStatus;
use crate::sections::Sections;

/// A job posting as held by the record store and edited by admin sessions.
///
/// `thumbnail` is a derived field: it always carries the media location of
/// slot 0 as of the last commit or draft save. It is recomputed on every
/// store write and never edited directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct JobPosting {
    pub id: String,
    /// Internal name shown in the admin list, not on the public site.
    pub admin_title: String,
    /// Attention-grabbing lead message, rich-text markup.
    pub lead_message: String,
    pub company: String,
    /// Category names referenced by value; removal from the registry does not
    /// cascade here.
    pub categories: Vec<String>,
    /// Derived from `sections[0].media_location` at last commit time.
    pub thumbnail: String,
    pub sections: Sections,
    /// Requirements block, rich-text markup.
    pub requirements: String,
    pub salary: String,
    pub location: String,
    pub posted_date: NaiveDate,
    pub status: JobStatus,
}

impl JobPosting {
    /// A blank posting as synthesized when an admin starts a "new posting"
    /// session: empty fields, status open, ten empty sections.
    #[must_use]
    pub fn new_draft(id: String, posted_date: NaiveDate) -> Self {
        Self {
            id,
            admin_title: String::new(),
            lead_message: String::new(),
            company: String::new(),
            categories: Vec::new(),
            thumbnail: String::new(),
            sections: Sections::empty(),
            requirements: String::new(),
            salary: String::new(),
            location: String::new(),
            posted_date,
            status: JobStatus::Open,
        }
    }

    /// Recompute the derived thumbnail from slot 0.
    pub fn refresh_thumbnail(&mut self) {
        self.thumbnail = self.sections.first_media_location().to_string();
    }

    /// Flip membership of `name` in the category set.
    ///
    /// Present → removed; absent → appended. Insertion order of the remaining
    /// names is preserved. Toggling the same name twice restores the set.
    pub fn toggle_category(&mut self, name: &str) {
        if let Some(pos) = self.categories.iter().position(|c| c == name) {
            self.categories.remove(pos);
        } else {
            self.categories.push(name.to_string());
        }
    }

    /// Whether the posting carries the given category tag.
    #[must_use]
    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft() -> JobPosting {
        JobPosting::new_draft(
            "job-abc123xyz".to_string(),
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        )
    }

    #[test]
    fn new_draft_defaults() {
        let job = draft();
        assert_eq!(job.status, JobStatus::Open);
        assert_eq!(job.sections.visible().count(), 0);
        assert!(job.categories.is_empty());
        assert!(job.thumbnail.is_empty());
    }

    #[test]
    fn thumbnail_follows_slot_zero() {
        let mut job = draft();
        job.sections.set_media(0, "image/png", "media://x/cover.png").unwrap();
        job.refresh_thumbnail();
        assert_eq!(job.thumbnail, "media://x/cover.png");

        // Idempotent without further edits.
        job.refresh_thumbnail();
        assert_eq!(job.thumbnail, "media://x/cover.png");
    }

    #[test]
    fn thumbnail_ignores_other_slots() {
        let mut job = draft();
        job.sections.set_media(1, "video/mp4", "media://x/b.mp4").unwrap();
        job.refresh_thumbnail();
        assert_eq!(job.thumbnail, "");
    }

    #[test]
    fn toggle_category_is_its_own_inverse() {
        let mut job = draft();
        job.toggle_category("リモートワーク");
        job.toggle_category("スタートアップ");
        let before = job.categories.clone();

        job.toggle_category("関東求人");
        job.toggle_category("関東求人");
        assert_eq!(job.categories, before);
    }

    #[test]
    fn toggle_category_removes_present_name() {
        let mut job = draft();
        job.toggle_category("リモートワーク");
        assert!(job.has_category("リモートワーク"));
        job.toggle_category("リモートワーク");
        assert!(!job.has_category("リモートワーク"));
    }
}
