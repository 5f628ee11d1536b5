//! Category registry — the mutable named-tag set used for classification.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Categories seeded for a fresh catalog, mirroring the public site's filter
/// row.
pub const DEFAULT_CATEGORIES: [&str; 9] = [
    "募集中",
    "東北求人",
    "関東求人",
    "西日本求人",
    "北海道求人",
    "海外求人",
    "リモートワーク",
    "スタートアップ",
    "事業承継",
];

/// Insertion-ordered set of category names.
///
/// Names are referenced by postings by value: removing a name here does not
/// cascade into postings, which simply carry a now-unregistered tag and keep
/// displaying it verbatim wherever badges render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct CategoryRegistry {
    names: Vec<String>,
}

impl CategoryRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with [`DEFAULT_CATEGORIES`].
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            names: DEFAULT_CATEGORIES.iter().map(ToString::to_string).collect(),
        }
    }

    /// Append a name. Blank names and exact-match duplicates are rejected.
    ///
    /// Returns whether the name was added.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Remove a name by value. Returns whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        before != self.names.len()
    }

    /// Exact string-match membership test.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Registered names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
