use crate::cli::{Commands, GlobalFlags};
use crate::commands;
use crate::context::AppContext;

/// Route a parsed command to its handler.
pub fn dispatch(command: &Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Job { action } => commands::job::handle(action, ctx, flags),
        Commands::Category { action } => commands::category::handle(action, ctx, flags),
        Commands::Event { action } => commands::event::handle(action, ctx, flags),
        Commands::Display { action } => commands::display::handle(action, ctx, flags),
        Commands::Preview(args) => commands::preview::handle(args, ctx, flags),
        Commands::Apply(args) => commands::apply::handle(args, ctx, flags),
        Commands::Contact(args) => commands::apply::handle_contact(args, ctx, flags),
        Commands::Login(args) => commands::login::handle(args, ctx, flags),
    }
}
