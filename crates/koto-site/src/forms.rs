//! Application and contact forms.
//!
//! The email-confirmation equality check is the single validated condition
//! in the system: a mismatch rejects the submission with no side effect and
//! leaves the form open. Everything else is free text accepted as-is;
//! required-ness is a presentation concern, not enforced here.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::notify::Notifier;

/// A job application submitted from the public site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ApplicationForm {
    pub name: String,
    pub email: String,
    pub email_confirm: String,
    pub message: String,
    /// Optional resume/portfolio reference (ingested media location).
    pub attachment: Option<String>,
}

/// A general inquiry from the "post a job" page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub email_confirm: String,
    pub message: String,
    pub attachment: Option<String>,
}

/// Acknowledgement of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SubmissionReceipt {
    /// Address the completion notification was issued for.
    pub notified: String,
}

fn check_emails(email: &str, email_confirm: &str) -> Result<(), FormError> {
    if email == email_confirm {
        Ok(())
    } else {
        Err(FormError::EmailMismatch)
    }
}

/// Submit an application for the given posting.
///
/// # Errors
///
/// Returns [`FormError::EmailMismatch`] when the confirmation field differs;
/// the notifier is not invoked in that case.
pub fn submit_application(
    form: &ApplicationForm,
    job_id: &str,
    notifier: &impl Notifier,
) -> Result<SubmissionReceipt, FormError> {
    check_emails(&form.email, &form.email_confirm)?;
    notifier.send_confirmation(&form.email, job_id);
    Ok(SubmissionReceipt {
        notified: form.email.clone(),
    })
}

/// Submit a general inquiry.
///
/// # Errors
///
/// Returns [`FormError::EmailMismatch`] when the confirmation field differs.
pub fn submit_contact(
    form: &ContactForm,
    notifier: &impl Notifier,
) -> Result<SubmissionReceipt, FormError> {
    check_emails(&form.email, &form.email_confirm)?;
    notifier.send_confirmation(&form.email, "");
    Ok(SubmissionReceipt {
        notified: form.email.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::testing::RecordingNotifier;
    use pretty_assertions::assert_eq;

    fn form(email: &str, confirm: &str) -> ApplicationForm {
        ApplicationForm {
            name: "Taro Yamada".to_string(),
            email: email.to_string(),
            email_confirm: confirm.to_string(),
            message: "Motivated applicant".to_string(),
            attachment: None,
        }
    }

    #[test]
    fn mismatched_emails_reject_with_no_side_effect() {
        let notifier = RecordingNotifier::default();
        let result = submit_application(&form("a@x.com", "b@x.com"), "job-abc123xyz", &notifier);

        assert_eq!(result, Err(FormError::EmailMismatch));
        assert!(notifier.sent.borrow().is_empty());
    }

    #[test]
    fn matching_emails_submit_and_notify() {
        let notifier = RecordingNotifier::default();
        let receipt =
            submit_application(&form("a@x.com", "a@x.com"), "job-abc123xyz", &notifier).unwrap();

        assert_eq!(receipt.notified, "a@x.com");
        assert_eq!(
            notifier.sent.borrow().as_slice(),
            &[("a@x.com".to_string(), "job-abc123xyz".to_string())]
        );
    }

    #[test]
    fn contact_form_uses_the_same_check() {
        let notifier = RecordingNotifier::default();
        let contact = ContactForm {
            email: "c@x.com".to_string(),
            email_confirm: "c@x.com".to_string(),
            ..ContactForm::default()
        };
        submit_contact(&contact, &notifier).unwrap();
        assert_eq!(notifier.sent.borrow().len(), 1);

        let bad = ContactForm {
            email_confirm: "different@x.com".to_string(),
            ..contact
        };
        assert!(submit_contact(&bad, &notifier).is_err());
        assert_eq!(notifier.sent.borrow().len(), 1);
    }

    #[test]
    fn mismatch_has_a_localized_inline_message() {
        assert_eq!(
            FormError::EmailMismatch.inline_message(),
            "メールアドレスが一致しません。"
        );
    }
}
