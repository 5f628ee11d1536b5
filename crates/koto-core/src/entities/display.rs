//! Site display settings managed from the admin dashboard.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Allowed listing column counts.
pub const MIN_COLUMNS: u8 = 1;
pub const MAX_COLUMNS: u8 = 3;

/// Basic display settings: theme color, listing columns, page size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DisplaySettings {
    /// Site background theme as a hex color string.
    pub theme_color: String,
    /// Listing grid columns, 1–3.
    pub columns: u8,
    /// Postings shown per page on the public listing.
    pub items_per_page: u32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            theme_color: "#f8f9fa".to_string(),
            columns: 2,
            items_per_page: 4,
        }
    }
}

impl DisplaySettings {
    /// Set the column count, rejecting values outside 1–3.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for out-of-range counts.
    pub fn set_columns(&mut self, columns: u8) -> Result<(), CoreError> {
        if !(MIN_COLUMNS..=MAX_COLUMNS).contains(&columns) {
            return Err(CoreError::Validation(format!(
                "column count must be between {MIN_COLUMNS} and {MAX_COLUMNS}, got {columns}"
            )));
        }
        self.columns = columns;
        Ok(())
    }
}
