//! The fixed story-points label vocabulary.
//!
//! Cards carry their estimate as a label like `Point: 5`. The vocabulary is
//! a closed, ordered set; weights come from exact lookup, never from parsing
//! the label text.

/// Ordered label-to-weight vocabulary.
pub const POINTS_LABELS: [(&str, f64); 8] = [
    ("Point: 0.5", 0.5),
    ("Point: 1", 1.0),
    ("Point: 2", 2.0),
    ("Point: 3", 3.0),
    ("Point: 5", 5.0),
    ("Point: 8", 8.0),
    ("Point: 13", 13.0),
    ("Point: 21", 21.0),
];

/// Returns the weight for a label, or `None` if it is not a points label.
pub fn weight_for(label: &str) -> Option<f64> {
    POINTS_LABELS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, weight)| *weight)
}

/// Returns `true` if the label belongs to the points vocabulary.
pub fn is_points_label(label: &str) -> bool {
    weight_for(label).is_some()
}

/// Finds the first points label in the given label order and returns its
/// weight.
///
/// Cards occasionally carry more than one points label; the first one in the
/// card's own label order wins. The upstream API does not guarantee label
/// ordering, so callers must not rely on which of several conflicting
/// estimates is picked.
pub fn first_points_weight<'a, I>(labels: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a str>,
{
    labels.into_iter().find_map(weight_for)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exact_lookup() {
        assert_eq!(weight_for("Point: 0.5"), Some(0.5));
        assert_eq!(weight_for("Point: 5"), Some(5.0));
        assert_eq!(weight_for("Point: 21"), Some(21.0));
    }

    #[test]
    fn near_misses_are_not_points_labels() {
        // Lookup is exact: no trimming, no case folding, no prefix matching.
        assert_eq!(weight_for("point: 5"), None);
        assert_eq!(weight_for("Point: 4"), None);
        assert_eq!(weight_for("Point:5"), None);
        assert_eq!(weight_for("Point: 5 "), None);
        assert_eq!(weight_for("Beat 3"), None);
    }

    #[test]
    fn first_match_follows_label_order() {
        let labels = ["bug", "Point: 8", "Point: 2"];
        assert_eq!(first_points_weight(labels), Some(8.0));

        let reversed = ["Point: 2", "Point: 8", "bug"];
        assert_eq!(first_points_weight(reversed), Some(2.0));
    }

    #[test]
    fn no_points_label_yields_none() {
        let labels = ["Beat 3", "bug", "triage"];
        assert_eq!(first_points_weight(labels), None);
        assert_eq!(first_points_weight(std::iter::empty::<&str>()), None);
    }
}
