use koto_core::entities::Event;
use koto_core::ids::{PREFIX_EVENT, generate_id};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EventCommands;
use crate::context::AppContext;
use crate::output;

/// Handle `koto event`.
pub fn handle(
    action: &EventCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EventCommands::List => output::output(&ctx.catalog.events, flags.format),
        EventCommands::Add {
            title,
            date,
            location,
        } => {
            let event = Event {
                id: generate_id(PREFIX_EVENT),
                title: title.clone(),
                date: *date,
                location: location.clone(),
            };
            ctx.catalog.add_event(event.clone());
            ctx.save()?;
            output::output(&event, flags.format)
        }
        EventCommands::Remove { id } => {
            ctx.catalog.remove_event(id);
            ctx.save()?;
            tracing::info!(%id, "event removed");
            if flags.quiet {
                return Ok(());
            }
            output::output(&serde_json::json!({ "removed": id }), flags.format)
        }
    }
}
