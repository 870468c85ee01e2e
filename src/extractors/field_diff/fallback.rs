use crate::extractors::base::Element;
use tracing::debug;

use super::aggregate::ValuePair;
use super::vocabulary::{FLEX_AUTO_CLASS, STRIKETHROUGH_CLASS};

/// Fallback extraction when the type strategy found nothing on either side
///
/// Some change shapes render looser markup than the dedicated strategies
/// expect: a struck-through element for the old value and a plain
/// `flex-auto` leaf for the new one. Best effort; either side may stay empty.
pub(super) struct FallbackExtractor;

impl FallbackExtractor {
    pub(super) fn extract(value_container: &Element) -> ValuePair {
        let old_value = value_container
            .find_descendant(|el| el.class_contains(STRIKETHROUGH_CLASS))
            .and_then(|el| el.non_empty_text());

        let new_value = value_container
            .find_descendant(|el| {
                el.has_class(FLEX_AUTO_CLASS)
                    && el
                        .parent()
                        .is_some_and(|parent| !parent.class_contains(STRIKETHROUGH_CLASS))
            })
            .and_then(|el| el.non_empty_text());

        if old_value.is_some() || new_value.is_some() {
            debug!(
                "Fallback extraction recovered values (old: {}, new: {})",
                old_value.is_some(),
                new_value.is_some()
            );
        }

        ValuePair {
            old_value,
            new_value,
        }
    }
}
