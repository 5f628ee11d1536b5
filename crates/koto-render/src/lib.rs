//! # koto-render
//!
//! Read-only preview projection of a job posting draft.
//!
//! Projection is split from layout on purpose: [`PreviewDocument`] is the
//! frame-independent block sequence, and [`render_html`] dresses the same
//! sequence in mobile or desktop chrome. The two frames may never differ in
//! data selection or ordering — only in proportions and bezel.

mod document;
mod html;

pub use document::{PreviewBlock, PreviewDocument};
pub use html::render_html;
