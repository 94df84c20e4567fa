//! Project-column references.
//!
//! A board column is addressed by the URL shown in the browser, e.g.
//! `https://github.com/orgs/acme/projects/25#column-6312145`. The numeric
//! column id lives in the URL fragment and is all the API needs.

use std::fmt;
use std::str::FromStr;

/// The fragment marker that precedes the column id.
const COLUMN_FRAGMENT: &str = "#column-";

/// Errors that can occur while parsing a column URL.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColumnError {
    /// The URL has no `#column-<id>` fragment.
    #[error("column URL has no '#column-<id>' fragment: {url}")]
    MissingFragment {
        /// The offending URL.
        url: String,
    },

    /// The fragment is present but the id is not a decimal number.
    #[error("column id '{id}' is not numeric in URL: {url}")]
    InvalidId {
        /// The non-numeric id text.
        id: String,
        /// The offending URL.
        url: String,
    },
}

/// A parsed reference to a project-board column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    id: String,
}

impl ColumnRef {
    /// The numeric column id as it appeared in the URL.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Builds the cards-listing endpoint for this column against the given
    /// API base (no trailing slash), e.g. `https://api.github.com`.
    pub fn cards_url(&self, api_base: &str) -> String {
        format!("{}/projects/columns/{}/cards", api_base, self.id)
    }
}

impl FromStr for ColumnRef {
    type Err = ColumnError;

    fn from_str(url: &str) -> Result<Self, Self::Err> {
        let (_, id) = url
            .split_once(COLUMN_FRAGMENT)
            .ok_or_else(|| ColumnError::MissingFragment {
                url: url.to_string(),
            })?;

        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ColumnError::InvalidId {
                id: id.to_string(),
                url: url.to_string(),
            });
        }

        Ok(Self { id: id.to_string() })
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "column {}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_id_from_fragment() {
        let column: ColumnRef = "https://github.com/orgs/acme/projects/25#column-6312145"
            .parse()
            .unwrap();
        assert_eq!(column.id(), "6312145");
    }

    #[test]
    fn parses_short_id() {
        let column: ColumnRef = "https://example.test/p/1#column-42".parse().unwrap();
        assert_eq!(column.id(), "42");
    }

    #[test]
    fn missing_fragment_is_an_error() {
        let err = "https://github.com/orgs/acme/projects/25"
            .parse::<ColumnRef>()
            .unwrap_err();
        assert!(matches!(err, ColumnError::MissingFragment { .. }));
    }

    #[test]
    fn non_numeric_id_is_an_error() {
        let err = "https://example.test/p/1#column-abc"
            .parse::<ColumnRef>()
            .unwrap_err();
        assert_eq!(
            err,
            ColumnError::InvalidId {
                id: "abc".to_string(),
                url: "https://example.test/p/1#column-abc".to_string(),
            }
        );
    }

    #[test]
    fn empty_id_is_an_error() {
        let err = "https://example.test/p/1#column-"
            .parse::<ColumnRef>()
            .unwrap_err();
        assert!(matches!(err, ColumnError::InvalidId { .. }));
    }

    #[test]
    fn builds_cards_endpoint() {
        let column: ColumnRef = "https://example.test/p/1#column-42".parse().unwrap();
        assert_eq!(
            column.cards_url("https://api.github.com"),
            "https://api.github.com/projects/columns/42/cards"
        );
    }
}
