//! # koto-config
//!
//! Layered configuration loading for hitokoto using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`KOTO_*` prefix, `__` as separator)
//! 2. Project-level `.koto/config.toml`
//! 3. User-level `~/.config/koto/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `KOTO_GENERAL__CATALOG_PATH` -> `general.catalog_path`,
//! `KOTO_ADMIN__PASSWORD` -> `admin.password`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use koto_config::KotoConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = KotoConfig::load_with_dotenv().expect("config");
//!
//! // Or without dotenvy (env vars must already be set):
//! let config = KotoConfig::load().expect("config");
//!
//! if config.admin.is_configured() {
//!     println!("admin portal enabled for {}", config.admin.username);
//! }
//! ```

mod admin;
mod error;
mod general;

pub use admin::AdminConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KotoConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub admin: AdminConfig,
}

impl KotoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`KOTO_*` prefix)
    /// 2. `.koto/config.toml` (project-local)
    /// 3. `~/.config/koto/config.toml` (user-global)
    /// 4. Default values
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source fails to merge or the
    /// merged value does not extract into [`KotoConfig`], and
    /// [`ConfigError::InvalidValue`] when a field fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validated()
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load the `.env` file from the workspace root before
    /// building the figment. This is the typical entry point for the CLI.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Load configuration with extra key/value pairs layered below process env.
    ///
    /// The pairs use the same `KOTO_*`/`__` naming as real environment
    /// variables; anything set in the actual process environment still wins.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_env_overrides(overrides: &[(String, String)]) -> Result<Self, ConfigError> {
        let mut figment = Self::figment_base();
        for (key, value) in overrides {
            if let Some(stripped) = key.strip_prefix("KOTO_") {
                let path = stripped.to_lowercase().replace("__", ".");
                figment = figment.merge(Serialized::global(&path, value));
            }
        }
        let config: Self = figment.merge(Env::prefixed("KOTO_").split("__")).extract()?;
        config.validated()
    }

    /// Reject values the CLI cannot run with.
    fn validated(self) -> Result<Self, ConfigError> {
        if self.general.catalog_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "general.catalog_path",
                reason: "catalog path must not be empty".to_string(),
            });
        }
        Ok(self)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_base().merge(Env::prefixed("KOTO_").split("__"))
    }

    /// Defaults plus TOML layers, without the environment layer.
    fn figment_base() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".koto/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("koto").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir looking
    /// for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> workspace root)
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        // Fallback: try current directory
        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = KotoConfig::default();
        assert!(!config.admin.is_configured());
        assert_eq!(config.general.catalog_path, ".koto/catalog.json");
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = KotoConfig::figment();
        let config: KotoConfig = figment.extract().expect("should extract defaults");
        assert!(!config.admin.is_configured());
        assert_eq!(config.general.catalog_path, ".koto/catalog.json");
    }

    #[test]
    fn blank_catalog_path_is_rejected() {
        let config = KotoConfig {
            general: GeneralConfig {
                catalog_path: "   ".to_string(),
            },
            ..KotoConfig::default()
        };
        assert!(matches!(
            config.validated(),
            Err(ConfigError::InvalidValue {
                field: "general.catalog_path",
                ..
            })
        ));
    }
}
