//! Admin credential validation.
//!
//! The portal performs a real credential comparison against configured
//! values. The check sits behind a trait so a directory or token backend can
//! be substituted without touching callers.

/// Validates admin portal credentials.
pub trait CredentialValidator {
    /// Whether the pair grants access to the dashboard.
    fn validate(&self, username: &str, password: &str) -> bool;
}

/// Validator backed by the configured admin credentials.
#[derive(Debug, Clone)]
pub struct ConfigCredentials {
    username: String,
    password: String,
}

impl ConfigCredentials {
    #[must_use]
    pub const fn new(username: String, password: String) -> Self {
        Self { username, password }
    }
}

impl CredentialValidator for ConfigCredentials {
    fn validate(&self, username: &str, password: &str) -> bool {
        // Empty configured credentials mean the portal is locked, not open.
        !self.username.is_empty()
            && !self.password.is_empty()
            && username == self.username
            && password == self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_pair_grants_access() {
        let validator = ConfigCredentials::new("admin".into(), "koto-secret".into());
        assert!(validator.validate("admin", "koto-secret"));
    }

    #[test]
    fn wrong_pair_is_denied() {
        let validator = ConfigCredentials::new("admin".into(), "koto-secret".into());
        assert!(!validator.validate("admin", "wrong"));
        assert!(!validator.validate("root", "koto-secret"));
        assert!(!validator.validate("", ""));
    }

    #[test]
    fn unconfigured_credentials_lock_the_portal() {
        let validator = ConfigCredentials::new(String::new(), String::new());
        assert!(!validator.validate("", ""));
        assert!(!validator.validate("anyone", "anything"));
    }
}
