use anyhow::bail;

use koto_editor::EditSession;
use koto_store::JobStore;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CategoryCommands;
use crate::context::AppContext;
use crate::output;

/// Handle `koto category`.
pub fn handle(
    action: &CategoryCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CategoryCommands::List => {
            let names: Vec<&str> = ctx.catalog.categories.iter().collect();
            output::output(&names, flags.format)
        }
        CategoryCommands::Add { name } => {
            if !ctx.catalog.categories.add(name) {
                bail!("category '{name}' is blank or already registered");
            }
            ctx.save()?;
            let names: Vec<&str> = ctx.catalog.categories.iter().collect();
            output::output(&names, flags.format)
        }
        CategoryCommands::Remove { name } => {
            if !ctx.catalog.categories.remove(name) {
                bail!("category '{name}' is not registered");
            }
            ctx.save()?;
            let names: Vec<&str> = ctx.catalog.categories.iter().collect();
            output::output(&names, flags.format)
        }
        CategoryCommands::Toggle { job_id, name } => {
            let posting = ctx.catalog.jobs.get(job_id)?;
            let mut session = EditSession::open(&posting);
            session.toggle_category(name);

            let committed = session.commit(&mut ctx.catalog.jobs)?;
            ctx.save()?;
            output::output(&committed.categories, flags.format)
        }
    }
}
