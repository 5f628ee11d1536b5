use clap::Subcommand;

/// Site display settings commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DisplayCommands {
    /// Show current display settings.
    Show,
    /// Update display settings.
    Set {
        /// Background theme as a hex color string.
        #[arg(long)]
        theme_color: Option<String>,
        /// Listing grid columns, 1-3.
        #[arg(long)]
        columns: Option<u8>,
        /// Postings per page on the public listing.
        #[arg(long)]
        items_per_page: Option<u32>,
    },
}
