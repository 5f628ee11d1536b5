//! The fixed 10-slot media/article section collection.
//!
//! Every posting carries exactly [`SECTION_SLOTS`] sections. Slot identity is
//! positional: slot order is rendering order, and clearing a slot does not
//! shift its neighbours. A slot whose media kind is `none` is invisible to
//! detail and preview rendering regardless of any stray article text.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::MediaKind;
use crate::errors::CoreError;

/// Number of section slots per posting.
pub const SECTION_SLOTS: usize = 10;

/// One media + article pair occupying a fixed slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct JobSection {
    pub media_kind: MediaKind,
    /// URL or ephemeral `media://` reference; empty for unpopulated slots.
    pub media_location: String,
    /// Rich-text markup, rendered verbatim when the slot is visible.
    pub article_content: String,
}

/// Fixed-capacity ordered collection of exactly [`SECTION_SLOTS`] sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Sections([JobSection; SECTION_SLOTS]);

impl Sections {
    /// A collection of empty slots.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replace a slot's media kind and location, leaving its article untouched.
    ///
    /// The kind is classified from `content_type` (prefix `video` → video,
    /// anything else → image).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SlotOutOfRange`] if `index >= SECTION_SLOTS`.
    pub fn set_media(
        &mut self,
        index: usize,
        content_type: &str,
        location: impl Into<String>,
    ) -> Result<(), CoreError> {
        let slot = self.slot_mut(index)?;
        slot.media_kind = MediaKind::from_content_type(content_type);
        slot.media_location = location.into();
        Ok(())
    }

    /// Replace a slot's article content only.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SlotOutOfRange`] if `index >= SECTION_SLOTS`.
    pub fn set_article(&mut self, index: usize, text: impl Into<String>) -> Result<(), CoreError> {
        self.slot_mut(index)?.article_content = text.into();
        Ok(())
    }

    /// Read access to a slot.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&JobSection> {
        self.0.get(index)
    }

    /// The populated slots in ascending slot order, with their indices.
    ///
    /// This is the only view ever rendered publicly or in preview; `none`
    /// slots are skipped even when they hold article text. The iterator is
    /// restartable — each call starts from slot 0.
    pub fn visible(&self) -> impl Iterator<Item = (usize, &JobSection)> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, s)| s.media_kind.is_some())
    }

    /// Media location of the first slot, the source of the derived thumbnail.
    #[must_use]
    pub fn first_media_location(&self) -> &str {
        &self.0[0].media_location
    }

    /// All slots in order, populated or not (the editor shows every slot).
    pub fn iter(&self) -> impl Iterator<Item = &JobSection> {
        self.0.iter()
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut JobSection, CoreError> {
        self.0
            .get_mut(index)
            .ok_or(CoreError::SlotOutOfRange { index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_collection_has_ten_invisible_slots() {
        let sections = Sections::empty();
        assert_eq!(sections.iter().count(), SECTION_SLOTS);
        assert_eq!(sections.visible().count(), 0);
    }

    #[test]
    fn set_media_classifies_and_keeps_article() {
        let mut sections = Sections::empty();
        sections.set_article(3, "intro text").unwrap();
        sections.set_media(3, "video/mp4", "media://a/clip.mp4").unwrap();

        let slot = sections.get(3).unwrap();
        assert_eq!(slot.media_kind, MediaKind::Video);
        assert_eq!(slot.media_location, "media://a/clip.mp4");
        assert_eq!(slot.article_content, "intro text");
    }

    #[test]
    fn set_article_does_not_touch_media() {
        let mut sections = Sections::empty();
        sections.set_media(0, "image/png", "media://b/cover.png").unwrap();
        sections.set_article(0, "caption").unwrap();

        let slot = sections.get(0).unwrap();
        assert_eq!(slot.media_kind, MediaKind::Image);
        assert_eq!(slot.media_location, "media://b/cover.png");
    }

    #[test]
    fn out_of_range_slot_is_rejected() {
        let mut sections = Sections::empty();
        let err = sections.set_article(SECTION_SLOTS, "text").unwrap_err();
        assert!(matches!(err, CoreError::SlotOutOfRange { index: 10 }));
        assert!(sections.set_media(99, "image/png", "x").is_err());
    }

    #[test]
    fn visible_preserves_slot_order_and_skips_none() {
        let mut sections = Sections::empty();
        sections.set_media(7, "image/png", "seven").unwrap();
        sections.set_media(2, "video/mp4", "two").unwrap();
        sections.set_media(4, "image/gif", "four").unwrap();
        // Stray text in an unpopulated slot must stay invisible.
        sections.set_article(5, "leftover draft text").unwrap();

        let indices: Vec<usize> = sections.visible().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![2, 4, 7]);

        let locations: Vec<&str> = sections
            .visible()
            .map(|(_, s)| s.media_location.as_str())
            .collect();
        assert_eq!(locations, vec!["two", "four", "seven"]);
    }

    #[test]
    fn visible_is_restartable() {
        let mut sections = Sections::empty();
        sections.set_media(1, "image/png", "one").unwrap();

        assert_eq!(sections.visible().count(), 1);
        assert_eq!(sections.visible().count(), 1);
    }

    #[test]
    fn serde_roundtrip_is_transparent_array() {
        let mut sections = Sections::empty();
        sections.set_media(0, "image/png", "cover").unwrap();

        let json = serde_json::to_value(&sections).unwrap();
        assert!(json.is_array());
        assert_eq!(json.as_array().unwrap().len(), SECTION_SLOTS);

        let back: Sections = serde_json::from_value(json).unwrap();
        assert_eq!(back, sections);
    }
}
