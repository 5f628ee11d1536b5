use anyhow::{Context as _, bail};
use chrono::Utc;

use koto_editor::{EditSession, RichTextField, ingest};
use koto_store::JobStore;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{FieldArg, JobCommands};
use crate::context::AppContext;
use crate::output;

/// Handle `koto job`.
pub fn handle(action: &JobCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        JobCommands::Create {
            admin_title,
            lead_message,
            company,
            requirements,
            salary,
            location,
            category,
            posted,
        } => {
            let today = (*posted).unwrap_or_else(|| Utc::now().date_naive());
            let mut session = EditSession::start_new(today);

            let draft = session.draft_mut();
            if let Some(value) = admin_title {
                draft.admin_title.clone_from(value);
            }
            if let Some(value) = lead_message {
                draft.lead_message.clone_from(value);
            }
            if let Some(value) = company {
                draft.company.clone_from(value);
            }
            if let Some(value) = requirements {
                draft.requirements.clone_from(value);
            }
            if let Some(value) = salary {
                draft.salary.clone_from(value);
            }
            if let Some(value) = location {
                draft.location.clone_from(value);
            }
            for name in category {
                session.toggle_category(name);
            }

            let committed = session.commit(&mut ctx.catalog.jobs)?;
            ctx.save()?;
            output::output(&committed, flags.format)
        }
        JobCommands::Update {
            id,
            admin_title,
            lead_message,
            company,
            requirements,
            salary,
            location,
            status,
        } => {
            let posting = ctx.catalog.jobs.get(id)?;
            let mut session = EditSession::open(&posting);

            let draft = session.draft_mut();
            if let Some(value) = admin_title {
                draft.admin_title.clone_from(value);
            }
            if let Some(value) = lead_message {
                draft.lead_message.clone_from(value);
            }
            if let Some(value) = company {
                draft.company.clone_from(value);
            }
            if let Some(value) = requirements {
                draft.requirements.clone_from(value);
            }
            if let Some(value) = salary {
                draft.salary.clone_from(value);
            }
            if let Some(value) = location {
                draft.location.clone_from(value);
            }
            if let Some(value) = status {
                draft.status = (*value).into();
            }

            let committed = session.commit(&mut ctx.catalog.jobs)?;
            ctx.save()?;
            output::output(&committed, flags.format)
        }
        JobCommands::SetMedia {
            id,
            slot,
            file,
            content_type,
        } => {
            let posting = ctx.catalog.jobs.get(id)?;
            let mut session = EditSession::open(&posting);

            let media = ingest(file, content_type);
            session
                .set_section_media(*slot, content_type, media.location)
                .with_context(|| format!("cannot set media in slot {slot}"))?;

            let committed = session.commit(&mut ctx.catalog.jobs)?;
            ctx.save()?;
            output::output(&committed, flags.format)
        }
        JobCommands::SetArticle { id, slot, text } => {
            let posting = ctx.catalog.jobs.get(id)?;
            let mut session = EditSession::open(&posting);
            session
                .set_section_article(*slot, text.clone())
                .with_context(|| format!("cannot set article in slot {slot}"))?;

            let committed = session.commit(&mut ctx.catalog.jobs)?;
            ctx.save()?;
            output::output(&committed, flags.format)
        }
        JobCommands::Markup {
            id,
            field,
            slot,
            tag,
        } => {
            let target = match (field, slot) {
                (FieldArg::LeadMessage, _) => RichTextField::LeadMessage,
                (FieldArg::Requirements, _) => RichTextField::Requirements,
                (FieldArg::Article, Some(index)) => RichTextField::Article(*index),
                (FieldArg::Article, None) => bail!("--slot is required when --field is article"),
            };

            let posting = ctx.catalog.jobs.get(id)?;
            let mut session = EditSession::open(&posting);
            session.append_markup(target, (*tag).into())?;

            let committed = session.commit(&mut ctx.catalog.jobs)?;
            ctx.save()?;
            output::output(&committed, flags.format)
        }
        JobCommands::List { category, page } => {
            if category.is_none() && page.is_none() {
                return output::output(&ctx.catalog.jobs.list(), flags.format);
            }
            let listing = ctx
                .catalog
                .listing(category.as_deref(), page.unwrap_or(1));
            output::output(&listing, flags.format)
        }
        JobCommands::Get { id } => output::output(&ctx.catalog.jobs.get(id)?, flags.format),
        JobCommands::Delete { id } => {
            ctx.catalog.jobs.delete(id)?;
            ctx.save()?;
            tracing::info!(%id, "posting deleted");
            if flags.quiet {
                return Ok(());
            }
            output::output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}
