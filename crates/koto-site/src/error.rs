//! Form error types for koto-site.

use thiserror::Error;

/// Errors from application and contact form submission.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// The two email fields did not match exactly. The form stays open for
    /// correction; nothing is submitted.
    #[error("email address and confirmation do not match")]
    EmailMismatch,
}

impl FormError {
    /// The inline message shown to the visitor, in the site's language.
    #[must_use]
    pub const fn inline_message(&self) -> &'static str {
        match self {
            Self::EmailMismatch => "メールアドレスが一致しません。",
        }
    }
}
