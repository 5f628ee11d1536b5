//! Media ingestion collaborator.
//!
//! "Upload" is a local reference substitution: the file is classified from
//! its content type and handed back as an ephemeral `media://` reference
//! usable as a section's media location. Nothing is transferred or stored
//! durably; the reference only resolves for the lifetime of the session.

use koto_core::enums::MediaKind;
use koto_core::ids::{PREFIX_MEDIA, generate_id};

/// The result of ingesting one local file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestedMedia {
    pub kind: MediaKind,
    /// Ephemeral locally-resolvable reference, `media://<id>/<file-name>`.
    pub location: String,
}

/// Classify a local file by content type and mint its ephemeral reference.
#[must_use]
pub fn ingest(file_name: &str, content_type: &str) -> IngestedMedia {
    let kind = MediaKind::from_content_type(content_type);
    let location = format!("media://{}/{file_name}", generate_id(PREFIX_MEDIA));
    tracing::debug!(%file_name, %content_type, kind = %kind, "media ingested");
    IngestedMedia { kind, location }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_content_type_yields_video() {
        let media = ingest("tour.mp4", "video/mp4");
        assert_eq!(media.kind, MediaKind::Video);
        assert!(media.location.starts_with("media://med-"));
        assert!(media.location.ends_with("/tour.mp4"));
    }

    #[test]
    fn non_video_content_type_yields_image() {
        let media = ingest("office.jpg", "image/jpeg");
        assert_eq!(media.kind, MediaKind::Image);
    }

    #[test]
    fn references_are_unique_per_ingest() {
        let a = ingest("same.png", "image/png");
        let b = ingest("same.png", "image/png");
        assert_ne!(a.location, b.location);
    }
}
