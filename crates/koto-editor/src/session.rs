//! The job edit session state machine.
//!
//! A session starts from either a deep copy of an existing posting or a
//! freshly synthesized draft. All edits land on the draft; the store sees
//! nothing until `commit` or `save_draft`. Preview mode and the device frame
//! are session view state — they never mutate the draft and are not part of
//! the persisted record.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

use koto_core::entities::JobPosting;
use koto_core::enums::DeviceFrame;
use koto_core::errors::CoreError;
use koto_core::ids::{PREFIX_JOB, generate_id};
use koto_core::markup::{MarkupTag, append_tag};
use koto_store::{JobStore, StoreError};

/// How long the "draft saved" acknowledgement stays visible.
pub const SAVE_ACK_SECONDS: i64 = 2;

/// Which rich-text field a toolbar action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RichTextField {
    LeadMessage,
    Requirements,
    /// A section's article, by slot index.
    Article(usize),
}

/// An exclusive, single-admin working copy of one job posting.
#[derive(Debug, Clone)]
pub struct EditSession {
    draft: JobPosting,
    previewing: bool,
    frame: DeviceFrame,
    ack_shown_at: Option<DateTime<Utc>>,
}

impl EditSession {
    /// Start a session for a brand-new posting: fresh random id, empty
    /// fields, status open, `today` as posted date, ten empty sections.
    #[must_use]
    pub fn start_new(today: NaiveDate) -> Self {
        Self::with_draft(JobPosting::new_draft(generate_id(PREFIX_JOB), today))
    }

    /// Start a session editing an existing posting. The posting is deep
    /// copied; the store copy is untouched until commit.
    #[must_use]
    pub fn open(posting: &JobPosting) -> Self {
        Self::with_draft(posting.clone())
    }

    fn with_draft(draft: JobPosting) -> Self {
        Self {
            draft,
            previewing: false,
            frame: DeviceFrame::Mobile,
            ack_shown_at: None,
        }
    }

    /// The current draft state, including uncommitted edits. This is what the
    /// preview renderer reads.
    #[must_use]
    pub const fn draft(&self) -> &JobPosting {
        &self.draft
    }

    /// Mutable access for plain field edits (title, company, salary, …).
    /// Free-text fields carry no validation by design.
    pub const fn draft_mut(&mut self) -> &mut JobPosting {
        &mut self.draft
    }

    // -- rich text ----------------------------------------------------------

    /// Append an open/close tag pair to the targeted rich-text field.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SlotOutOfRange`] when targeting an article in a
    /// slot index outside the fixed range.
    pub fn append_markup(&mut self, field: RichTextField, tag: MarkupTag) -> Result<(), CoreError> {
        match field {
            RichTextField::LeadMessage => {
                self.draft.lead_message = append_tag(&self.draft.lead_message, tag);
            }
            RichTextField::Requirements => {
                self.draft.requirements = append_tag(&self.draft.requirements, tag);
            }
            RichTextField::Article(index) => {
                let current = self
                    .draft
                    .sections
                    .get(index)
                    .ok_or(CoreError::SlotOutOfRange { index })?
                    .article_content
                    .clone();
                self.draft.sections.set_article(index, append_tag(&current, tag))?;
            }
        }
        Ok(())
    }

    // -- sections -----------------------------------------------------------

    /// Replace a section slot's media, classifying the kind from the content
    /// type. The slot's article is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SlotOutOfRange`] for indices outside the range.
    pub fn set_section_media(
        &mut self,
        index: usize,
        content_type: &str,
        location: impl Into<String>,
    ) -> Result<(), CoreError> {
        self.draft.sections.set_media(index, content_type, location)
    }

    /// Replace a section slot's article content.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SlotOutOfRange`] for indices outside the range.
    pub fn set_section_article(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), CoreError> {
        self.draft.sections.set_article(index, text)
    }

    // -- categories ---------------------------------------------------------

    /// Flip membership of a category name on the draft. No count limit; an
    /// empty set is legal.
    pub fn toggle_category(&mut self, name: &str) {
        self.draft.toggle_category(name);
    }

    // -- view state ---------------------------------------------------------

    /// Flip between editing and previewing. Does not mutate the draft.
    pub const fn toggle_preview(&mut self) {
        self.previewing = !self.previewing;
    }

    #[must_use]
    pub const fn is_previewing(&self) -> bool {
        self.previewing
    }

    /// Select the preview device frame. Orthogonal to the preview toggle and
    /// never mutates the draft.
    pub const fn set_frame(&mut self, frame: DeviceFrame) {
        self.frame = frame;
    }

    #[must_use]
    pub const fn frame(&self) -> DeviceFrame {
        self.frame
    }

    // -- persistence --------------------------------------------------------

    /// Publish the draft: recompute the thumbnail, upsert into the store,
    /// and end the session.
    ///
    /// # Errors
    ///
    /// Propagates store write failures; the draft is recoverable from the
    /// returned error only by restarting the session.
    pub fn commit(mut self, store: &mut impl JobStore) -> Result<JobPosting, StoreError> {
        self.draft.refresh_thumbnail();
        store.upsert(self.draft.clone())?;
        tracing::info!(id = %self.draft.id, "posting committed");
        Ok(self.draft)
    }

    /// Persist the current draft without closing the session, and arm the
    /// self-clearing save acknowledgement.
    ///
    /// # Errors
    ///
    /// Propagates store write failures; the session stays open either way.
    pub fn save_draft(
        &mut self,
        store: &mut impl JobStore,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        self.draft.refresh_thumbnail();
        store.upsert(self.draft.clone())?;
        self.ack_shown_at = Some(now);
        tracing::info!(id = %self.draft.id, "draft saved, session stays open");
        Ok(())
    }

    /// Whether the "draft saved" acknowledgement is still showing at `now`.
    /// It clears itself [`SAVE_ACK_SECONDS`] after the save.
    #[must_use]
    pub fn save_ack_visible(&self, now: DateTime<Utc>) -> bool {
        self.ack_shown_at
            .is_some_and(|shown| now - shown < TimeDelta::seconds(SAVE_ACK_SECONDS))
    }

    /// Abandon the session, discarding the draft. The store was never
    /// touched, so there is nothing to roll back.
    pub fn cancel(self) {
        tracing::debug!(id = %self.draft.id, "edit session cancelled");
    }
}
