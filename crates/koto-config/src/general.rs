//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default on-disk catalog location, relative to the working directory.
fn default_catalog_path() -> String {
    ".koto/catalog.json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Where the job catalog JSON file lives. Listing page size and theme
    /// live in the catalog itself as admin-managed display settings.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.catalog_path, ".koto/catalog.json");
    }
}
