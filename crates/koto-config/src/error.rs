//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A configuration field has a value the CLI cannot run with.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
    },
}
