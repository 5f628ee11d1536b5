use clap::Subcommand;

/// Category registry commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CategoryCommands {
    /// List registered categories.
    List,
    /// Register a new category name.
    Add { name: String },
    /// Remove a category from the registry.
    Remove { name: String },
    /// Flip a category badge on a posting.
    Toggle {
        job_id: String,
        name: String,
    },
}
