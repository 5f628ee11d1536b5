//! Media, status, and device-frame enums for hitokoto.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// MediaKind
// ---------------------------------------------------------------------------

/// Kind of media occupying a section slot.
///
/// `None` marks an unpopulated slot: it is never rendered, no matter what the
/// slot's article text contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Video,
    Image,
    #[default]
    None,
}

impl MediaKind {
    /// Classify an inbound content-type string.
    ///
    /// Anything with a `video` prefix is a video; everything else uploaded
    /// through the media picker is treated as an image.
    #[must_use]
    pub fn from_content_type(content_type: &str) -> Self {
        if content_type.starts_with("video") {
            Self::Video
        } else {
            Self::Image
        }
    }

    /// Whether this slot carries renderable media.
    #[must_use]
    pub const fn is_some(self) -> bool {
        !matches!(self, Self::None)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Image => "image",
            Self::None => "none",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// JobStatus
// ---------------------------------------------------------------------------

/// Publication status of a job posting.
///
/// Status is a free selection in the editor; there is no transition machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Open,
    InReview,
    Closed,
}

impl JobStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InReview => "in_review",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DeviceFrame
// ---------------------------------------------------------------------------

/// Simulated device frame for the admin preview.
///
/// Frames differ only in layout chrome; both render the identical block
/// sequence from the same draft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DeviceFrame {
    #[default]
    Mobile,
    Desktop,
}

impl DeviceFrame {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
        }
    }
}

impl fmt::Display for DeviceFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(media_video, MediaKind, MediaKind::Video, "video");
    test_serde_roundtrip!(media_none, MediaKind, MediaKind::None, "none");

    test_serde_roundtrip!(status_in_review, JobStatus, JobStatus::InReview, "in_review");
    test_serde_roundtrip!(status_closed, JobStatus, JobStatus::Closed, "closed");

    test_serde_roundtrip!(frame_mobile, DeviceFrame, DeviceFrame::Mobile, "mobile");
    test_serde_roundtrip!(frame_desktop, DeviceFrame, DeviceFrame::Desktop, "desktop");

    #[test]
    fn classify_video_prefix() {
        assert_eq!(MediaKind::from_content_type("video/mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_content_type("video/webm"), MediaKind::Video);
    }

    #[test]
    fn classify_everything_else_as_image() {
        assert_eq!(MediaKind::from_content_type("image/png"), MediaKind::Image);
        assert_eq!(MediaKind::from_content_type("image/jpeg"), MediaKind::Image);
        // Classification is prefix-only; unknown types fall through to image.
        assert_eq!(
            MediaKind::from_content_type("application/pdf"),
            MediaKind::Image
        );
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", MediaKind::Video), "video");
        assert_eq!(format!("{}", JobStatus::InReview), "in_review");
        assert_eq!(format!("{}", DeviceFrame::Desktop), "desktop");
    }
}
