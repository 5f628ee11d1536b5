use koto_editor::ingest;
use koto_site::{ApplicationForm, ContactForm, LogNotifier, submit_application, submit_contact};
use koto_store::JobStore;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{ApplyArgs, ContactArgs};
use crate::context::AppContext;
use crate::output;

/// Handle `koto apply`.
pub fn handle(args: &ApplyArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    // The posting must exist; the form itself never checks.
    let posting = ctx.catalog.jobs.get(&args.job_id)?;

    let attachment = args
        .attachment
        .as_ref()
        .map(|file| ingest(file, "application/octet-stream").location);

    let form = ApplicationForm {
        name: args.name.clone(),
        email: args.email.clone(),
        email_confirm: args.email_confirm.clone(),
        message: args.message.clone(),
        attachment,
    };

    let receipt = submit_application(&form, &posting.id, &LogNotifier)?;
    output::output(&receipt, flags.format)
}

/// Handle `koto contact`.
pub fn handle_contact(
    args: &ContactArgs,
    _ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let form = ContactForm {
        name: args.name.clone(),
        email: args.email.clone(),
        email_confirm: args.email_confirm.clone(),
        message: args.message.clone(),
        attachment: None,
    };

    let receipt = submit_contact(&form, &LogNotifier)?;
    output::output(&receipt, flags.format)
}
