//! Frame-independent preview projection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use koto_core::entities::JobPosting;
use koto_core::enums::MediaKind;

/// One block of the projected preview, in rendering order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum PreviewBlock {
    /// Category badges, draft order.
    Badges { names: Vec<String> },
    /// Lead message, rendered as markup.
    LeadMessage { markup: String },
    /// A visible section's media.
    Media { media_kind: MediaKind, location: String },
    /// The article paired with the preceding media block.
    Article { markup: String },
    /// Requirements, rendered as markup.
    Requirements { markup: String },
    /// A plain labeled field (salary, location).
    Field { label: String, value: String },
}

/// The projected preview: a fixed-order block sequence read from the draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PreviewDocument {
    pub blocks: Vec<PreviewBlock>,
}

impl PreviewDocument {
    /// Project a posting into its preview block sequence: badges, lead
    /// message, each visible section's media followed by its article, then
    /// requirements and the salary/location fields.
    ///
    /// Pure read; the device frame plays no role here.
    #[must_use]
    pub fn project(job: &JobPosting) -> Self {
        let mut blocks = vec![
            PreviewBlock::Badges {
                names: job.categories.clone(),
            },
            PreviewBlock::LeadMessage {
                markup: job.lead_message.clone(),
            },
        ];

        for (_, section) in job.sections.visible() {
            blocks.push(PreviewBlock::Media {
                media_kind: section.media_kind,
                location: section.media_location.clone(),
            });
            blocks.push(PreviewBlock::Article {
                markup: section.article_content.clone(),
            });
        }

        blocks.push(PreviewBlock::Requirements {
            markup: job.requirements.clone(),
        });
        blocks.push(PreviewBlock::Field {
            label: "Salary".to_string(),
            value: job.salary.clone(),
        });
        blocks.push(PreviewBlock::Field {
            label: "Location".to_string(),
            value: job.location.clone(),
        });

        Self { blocks }
    }
}
