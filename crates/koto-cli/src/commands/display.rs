use crate::cli::GlobalFlags;
use crate::cli::subcommands::DisplayCommands;
use crate::context::AppContext;
use crate::output;

/// Handle `koto display`.
pub fn handle(
    action: &DisplayCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DisplayCommands::Show => output::output(&ctx.catalog.display, flags.format),
        DisplayCommands::Set {
            theme_color,
            columns,
            items_per_page,
        } => {
            if let Some(value) = theme_color {
                ctx.catalog.display.theme_color.clone_from(value);
            }
            if let Some(value) = columns {
                ctx.catalog.display.set_columns(*value)?;
            }
            if let Some(value) = items_per_page {
                ctx.catalog.display.items_per_page = *value;
            }
            ctx.save()?;
            output::output(&ctx.catalog.display, flags.format)
        }
    }
}
