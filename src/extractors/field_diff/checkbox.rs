use crate::extractors::base::{Element, Markers};

use super::vocabulary::{any_signal, CHECKBOX_ADDED_SIGNALS, CHECKBOX_REMOVED_SIGNALS, CHECKED_TEXT};

/// Checkbox fields
///
/// The UI only renders a checked box: red for the side it was removed from,
/// green for the side it was added to. There is no explicit "unchecked"
/// encoding, so a missing indicator means no value on that side.
pub(super) struct CheckboxExtractor;

impl CheckboxExtractor {
    pub(super) fn extract(value_container: &Element) -> Markers {
        let mut markers = Markers::default();

        if value_container
            .find_descendant(|el| any_signal(CHECKBOX_REMOVED_SIGNALS, el))
            .is_some()
        {
            markers.push_removed(CHECKED_TEXT);
        }
        if value_container
            .find_descendant(|el| any_signal(CHECKBOX_ADDED_SIGNALS, el))
            .is_some()
        {
            markers.push_added(CHECKED_TEXT);
        }

        markers
    }
}
