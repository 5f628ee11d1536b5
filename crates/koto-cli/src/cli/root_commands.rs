use clap::{Args, Subcommand};

use super::subcommands::{CategoryCommands, DisplayCommands, EventCommands, JobCommands};

/// Top-level commands for the `koto` binary.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Manage job postings.
    Job {
        #[command(subcommand)]
        action: JobCommands,
    },
    /// Manage the category registry.
    Category {
        #[command(subcommand)]
        action: CategoryCommands,
    },
    /// Manage events.
    Event {
        #[command(subcommand)]
        action: EventCommands,
    },
    /// Manage site display settings.
    Display {
        #[command(subcommand)]
        action: DisplayCommands,
    },
    /// Render a posting's preview as framed HTML.
    Preview(PreviewArgs),
    /// Submit an application for a posting.
    Apply(ApplyArgs),
    /// Submit a general inquiry.
    Contact(ContactArgs),
    /// Check admin credentials against the configured pair.
    Login(LoginArgs),
}

#[derive(Clone, Debug, Args)]
pub struct PreviewArgs {
    /// Posting ID to preview.
    pub id: String,
    /// Device frame: mobile or desktop.
    #[arg(long, default_value = "mobile")]
    pub frame: FrameArg,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum FrameArg {
    Mobile,
    Desktop,
}

impl From<FrameArg> for koto_core::enums::DeviceFrame {
    fn from(arg: FrameArg) -> Self {
        match arg {
            FrameArg::Mobile => Self::Mobile,
            FrameArg::Desktop => Self::Desktop,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct ApplyArgs {
    /// Posting ID to apply for.
    pub job_id: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    /// Must match --email exactly.
    #[arg(long)]
    pub email_confirm: String,
    #[arg(long, default_value = "")]
    pub message: String,
    /// Optional resume/portfolio file to ingest and attach.
    #[arg(long)]
    pub attachment: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    /// Must match --email exactly.
    #[arg(long)]
    pub email_confirm: String,
    #[arg(long, default_value = "")]
    pub message: String,
}

#[derive(Clone, Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub password: String,
}
