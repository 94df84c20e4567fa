//! The card-source seam between the velocity calculator and HTTP.

use beatv_core::card::{Card, CardContent};
use beatv_core::column::ColumnRef;

use crate::error::Result;

/// Provides board cards and their issue content.
///
/// The real implementation is [`crate::GithubClient`]; tests use in-memory
/// fakes. Both operations are fallible and fail the whole computation on
/// first error.
pub trait CardSource {
    /// Lists the cards in a column.
    ///
    /// Only the first page is returned; pagination is not followed.
    fn list_cards(&self, column: &ColumnRef) -> Result<Vec<Card>>;

    /// Fetches the issue content behind a card's `content_url`.
    fn card_content(&self, content_url: &str) -> Result<CardContent>;
}
