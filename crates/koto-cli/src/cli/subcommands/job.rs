use clap::{Subcommand, ValueEnum};
use chrono::NaiveDate;

use koto_core::enums::JobStatus;
use koto_core::markup::MarkupTag;

/// Job posting commands.
#[derive(Clone, Debug, Subcommand)]
pub enum JobCommands {
    /// Create and publish a posting.
    Create {
        #[arg(long)]
        admin_title: Option<String>,
        #[arg(long)]
        lead_message: Option<String>,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        requirements: Option<String>,
        #[arg(long)]
        salary: Option<String>,
        #[arg(long)]
        location: Option<String>,
        /// Category badge; repeat to assign several.
        #[arg(long)]
        category: Vec<String>,
        /// Posted date (YYYY-MM-DD), defaults to today.
        #[arg(long)]
        posted: Option<NaiveDate>,
    },
    /// Edit and republish an existing posting.
    Update {
        id: String,
        #[arg(long)]
        admin_title: Option<String>,
        #[arg(long)]
        lead_message: Option<String>,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        requirements: Option<String>,
        #[arg(long)]
        salary: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        status: Option<StatusArg>,
    },
    /// Attach media to one of the ten section slots.
    SetMedia {
        id: String,
        /// Section slot index, 0-9.
        #[arg(long)]
        slot: usize,
        /// Local file name to ingest.
        #[arg(long)]
        file: String,
        /// MIME content type, e.g. "video/mp4" or "image/png".
        #[arg(long)]
        content_type: String,
    },
    /// Replace a section slot's article text.
    SetArticle {
        id: String,
        #[arg(long)]
        slot: usize,
        #[arg(long)]
        text: String,
    },
    /// Append a markup tag pair to a rich-text field.
    Markup {
        id: String,
        #[arg(long)]
        field: FieldArg,
        /// Section slot index; required when --field is article.
        #[arg(long)]
        slot: Option<usize>,
        #[arg(long)]
        tag: TagArg,
    },
    /// List postings in display order.
    List {
        /// Show only postings carrying this category badge.
        #[arg(long)]
        category: Option<String>,
        /// Public-listing page (cumulative, sized by display settings).
        #[arg(long)]
        page: Option<u32>,
    },
    /// Get a posting by ID.
    Get { id: String },
    /// Delete a posting.
    Delete { id: String },
}

/// Posting status from the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum StatusArg {
    Open,
    InReview,
    Closed,
}

impl From<StatusArg> for JobStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Open => Self::Open,
            StatusArg::InReview => Self::InReview,
            StatusArg::Closed => Self::Closed,
        }
    }
}

/// Rich-text field target from the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum FieldArg {
    LeadMessage,
    Requirements,
    Article,
}

/// Markup toolbar tag from the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum TagArg {
    Bold,
    Italic,
    Heading2,
    Paragraph,
    LineBreak,
}

impl From<TagArg> for MarkupTag {
    fn from(arg: TagArg) -> Self {
        match arg {
            TagArg::Bold => Self::Bold,
            TagArg::Italic => Self::Italic,
            TagArg::Heading2 => Self::Heading2,
            TagArg::Paragraph => Self::Paragraph,
            TagArg::LineBreak => Self::LineBreak,
        }
    }
}
