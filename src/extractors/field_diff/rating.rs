use crate::extractors::base::{DiffSnippet, Element, Markers};

use super::vocabulary::{
    any_signal, FILL_ATTR, INVISIBLE_CLASS, RATING_ADDED_SIGNALS, RATING_CONTAINER_CLASS,
    RATING_REMOVED_SIGNALS,
};

/// Rating fields
///
/// A rating renders as a fixed row of icons; filled icons carry a `fill`
/// attribute on their path and hidden placeholders sit in `svg.invisible`.
/// The negative-colored row gives the old count, the success-colored row the
/// new one. When the UI renders only an uncolored row it is the new value.
pub(super) struct RatingExtractor;

impl RatingExtractor {
    pub(super) fn extract(snippet: &DiffSnippet) -> Markers {
        let mut markers = Markers::default();
        let containers = snippet.find_all(|el| el.has_class(RATING_CONTAINER_CLASS));

        let removed_row = containers
            .iter()
            .find(|el| any_signal(RATING_REMOVED_SIGNALS, el));
        let added_row = containers
            .iter()
            .find(|el| any_signal(RATING_ADDED_SIGNALS, el))
            .or_else(|| {
                if removed_row.is_some() {
                    None
                } else {
                    containers.first()
                }
            });

        if let Some(count) = removed_row.map(Self::filled_icons).filter(|n| *n > 0) {
            markers.push_removed(count.to_string());
        }
        if let Some(count) = added_row.map(Self::filled_icons).filter(|n| *n > 0) {
            markers.push_added(count.to_string());
        }

        markers
    }

    /// `svg:not(.invisible) path[fill]` below the container
    fn filled_icons(container: &Element) -> usize {
        container
            .find_descendants(|el| el.is_tag("path") && el.has_attr(FILL_ATTR))
            .iter()
            .filter(|path| {
                path.ancestors_within(container)
                    .iter()
                    .any(|ancestor| ancestor.is_tag("svg") && !ancestor.has_class(INVISIBLE_CLASS))
            })
            .count()
    }
}
