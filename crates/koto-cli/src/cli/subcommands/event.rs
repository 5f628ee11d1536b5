use chrono::NaiveDate;
use clap::Subcommand;

/// Event commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EventCommands {
    /// List events.
    List,
    /// Add an event.
    Add {
        #[arg(long)]
        title: String,
        /// Event date (YYYY-MM-DD).
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        location: String,
    },
    /// Remove an event by ID.
    Remove { id: String },
}
