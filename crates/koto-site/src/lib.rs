//! # koto-site
//!
//! Public-side collaborators of the job board: the navigation surface,
//! application/contact forms, the confirmation notifier, and credential
//! validation for the admin portal.
//!
//! These are the seams the admin core treats as external: forms carry the
//! one validated condition in the whole system (matching email fields), the
//! notifier only ever logs intent, and login is a real credential check
//! behind a trait rather than an unconditional grant.

mod auth;
mod error;
mod forms;
mod notify;
mod routes;

pub use auth::{ConfigCredentials, CredentialValidator};
pub use error::FormError;
pub use forms::{ApplicationForm, ContactForm, SubmissionReceipt, submit_application, submit_contact};
pub use notify::{LogNotifier, Notifier};
pub use routes::Route;
