//! The velocity calculator.
//!
//! Sums story points over a column's cards for a given beat. One fetch for
//! the card list, then one fetch per issue-backed card, strictly in
//! discovery order. The first fetch error aborts the run and the partial
//! total is discarded.

use tracing::debug;

use beatv_core::column::ColumnRef;
use beatv_core::points;

use crate::error::Result;
use crate::traits::CardSource;

/// Computes the total points closed for `beat` in the given column.
///
/// A card counts only when its labels contain `beat` exactly and at least
/// one label from the points vocabulary; the first points label in the
/// card's own label order supplies the weight. Cards without a linked issue
/// are skipped without a fetch. A beat-labeled card with no recognized
/// points label contributes zero.
pub fn compute_velocity<S: CardSource>(source: &S, column: &ColumnRef, beat: &str) -> Result<f64> {
    let cards = source.list_cards(column)?;
    debug!(column = column.id(), cards = cards.len(), "fetched card list");

    let mut total = 0.0;
    for card in &cards {
        let Some(content_url) = card.content_url.as_deref() else {
            // Free-text note, no linked issue.
            continue;
        };

        let content = source.card_content(content_url)?;
        if !content.has_label(beat) {
            continue;
        }

        match points::first_points_weight(content.label_names()) {
            Some(weight) => {
                debug!(content_url, weight, "counting card");
                total += weight;
            }
            None => {
                debug!(content_url, "beat card has no points label, counts as zero");
            }
        }
    }

    Ok(total)
}
