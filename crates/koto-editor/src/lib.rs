//! # koto-editor
//!
//! The admin edit session: an exclusive mutable working copy of one job
//! posting, plus the media ingestion collaborator that turns uploaded files
//! into ephemeral `media://` references.
//!
//! Exactly one session exists at a time and it owns its draft outright.
//! The record store is touched only at commit and draft-save points, so
//! cancellation is always a synchronous discard with nothing to roll back.

mod media;
mod session;

pub use media::{IngestedMedia, ingest};
pub use session::{EditSession, RichTextField, SAVE_ACK_SECONDS};
