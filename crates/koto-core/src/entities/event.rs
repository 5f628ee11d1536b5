//! Admin-managed event entries (job fairs, meetups).

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An announced event shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub location: String,
}
