//! Admin portal credentials.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AdminConfig {
    /// Dashboard username.
    #[serde(default)]
    pub username: String,

    /// Dashboard password. Usually supplied via `KOTO_ADMIN__PASSWORD`
    /// rather than written to a config file.
    #[serde(default)]
    pub password: String,
}

impl AdminConfig {
    /// Both credentials must be present for the portal to open at all.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_by_default() {
        assert!(!AdminConfig::default().is_configured());
    }

    #[test]
    fn configured_needs_both_fields() {
        let half = AdminConfig {
            username: "admin".to_string(),
            password: String::new(),
        };
        assert!(!half.is_configured());

        let full = AdminConfig {
            username: "admin".to_string(),
            password: "secret".to_string(),
        };
        assert!(full.is_configured());
    }
}
