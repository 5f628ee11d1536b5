use koto_render::{PreviewDocument, render_html};
use koto_store::JobStore;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PreviewArgs;
use crate::context::AppContext;

/// Handle `koto preview`: project the posting into its block sequence and
/// print it dressed in the requested device chrome.
pub fn handle(args: &PreviewArgs, ctx: &AppContext, _flags: &GlobalFlags) -> anyhow::Result<()> {
    let posting = ctx.catalog.jobs.get(&args.id)?;
    let doc = PreviewDocument::project(&posting);
    let html = render_html(&doc, args.frame.into());
    println!("{html}");
    Ok(())
}
