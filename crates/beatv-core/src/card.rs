//! Wire types for project-board cards.
//!
//! Shapes match the GitHub Projects (classic) API responses; everything not
//! needed for the velocity computation is ignored on deserialization.

use serde::Deserialize;

/// One card in a project column.
///
/// Only cards backed by an issue carry a `content_url`; free-text notes do
/// not, and contribute nothing to the velocity total.
#[derive(Debug, Clone, Deserialize)]
pub struct Card {
    /// URL of the linked issue content, if any.
    #[serde(default)]
    pub content_url: Option<String>,
}

/// The fetched content of an issue-backed card.
#[derive(Debug, Clone, Deserialize)]
pub struct CardContent {
    /// Labels on the linked issue, in the order the API returned them.
    #[serde(default)]
    pub labels: Vec<Label>,
}

/// A single issue label.
#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    /// The label text, e.g. `Beat 3` or `Point: 5`.
    pub name: String,
}

impl CardContent {
    /// Returns `true` if any label matches `name` exactly.
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|label| label.name == name)
    }

    /// Iterates over label names in API order.
    pub fn label_names(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|label| label.name.as_str())
    }
}
