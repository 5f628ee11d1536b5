//! Confirmation notification — a logged no-op side channel.

/// Sends completion notifications after a successful form submission.
pub trait Notifier {
    /// Record the intent to send a completion email to `recipient` about the
    /// posting with `job_id` (empty for general inquiries).
    fn send_confirmation(&self, recipient: &str, job_id: &str);
}

/// The stock notifier: logs the intent and sends nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn send_confirmation(&self, recipient: &str, job_id: &str) {
        tracing::info!(%recipient, %job_id, "sending completion email");
    }
}

#[cfg(test)]
pub mod testing {
    use super::Notifier;
    use std::cell::RefCell;

    /// Test double that records every send.
    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        pub sent: RefCell<Vec<(String, String)>>,
    }

    impl Notifier for RecordingNotifier {
        fn send_confirmation(&self, recipient: &str, job_id: &str) {
            self.sent
                .borrow_mut()
                .push((recipient.to_string(), job_id.to_string()));
        }
    }
}
