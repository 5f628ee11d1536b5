//! Rich-text markup tag helpers.
//!
//! Admin-facing text fields (lead message, requirements, section articles)
//! hold display markup edited as plain text. The toolbar appends an
//! opening/closing pair for a fixed tag vocabulary — it does not insert at a
//! cursor position, validate nesting, or escape existing content. Repeated
//! invocations can produce redundant or unbalanced markup; that is accepted.
//!
//! The stored value is rendered verbatim at the `koto-render` seam, which is
//! the single documented trust boundary for this markup.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed formatting-tag vocabulary offered by the editor toolbar.
///
/// Extending this set is a code change, not a session-time operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MarkupTag {
    Bold,
    Italic,
    Heading2,
    Paragraph,
    LineBreak,
}

impl MarkupTag {
    /// All tags, in toolbar order.
    pub const ALL: [Self; 5] = [
        Self::Bold,
        Self::Italic,
        Self::Heading2,
        Self::Paragraph,
        Self::LineBreak,
    ];

    /// The markup tag name as it appears between angle brackets.
    #[must_use]
    pub const fn tag_name(self) -> &'static str {
        match self {
            Self::Bold => "b",
            Self::Italic => "i",
            Self::Heading2 => "h2",
            Self::Paragraph => "p",
            Self::LineBreak => "br",
        }
    }
}

impl fmt::Display for MarkupTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_name())
    }
}

/// Append an opening and matching closing pair for `tag` to `current`.
#[must_use]
pub fn append_tag(current: &str, tag: MarkupTag) -> String {
    let name = tag.tag_name();
    format!("{current}<{name}></{name}>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn append_bold_to_empty() {
        assert_eq!(append_tag("", MarkupTag::Bold), "<b></b>");
    }

    #[test]
    fn append_is_not_deduplicated() {
        let once = append_tag("", MarkupTag::Bold);
        let twice = append_tag(&once, MarkupTag::Bold);
        assert_eq!(twice, "<b></b><b></b>");
    }

    #[test]
    fn append_preserves_existing_text() {
        assert_eq!(append_tag("hello", MarkupTag::Heading2), "hello<h2></h2>");
    }

    #[rstest]
    #[case(MarkupTag::Bold, "b")]
    #[case(MarkupTag::Italic, "i")]
    #[case(MarkupTag::Heading2, "h2")]
    #[case(MarkupTag::Paragraph, "p")]
    #[case(MarkupTag::LineBreak, "br")]
    fn tag_names(#[case] tag: MarkupTag, #[case] expected: &str) {
        assert_eq!(tag.tag_name(), expected);
    }
}
