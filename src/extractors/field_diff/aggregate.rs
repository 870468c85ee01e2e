use std::collections::BTreeSet;

use crate::extractors::base::{MarkerTag, Markers};

/// Separator between sub-values of multi-valued fields
pub const MULTI_VALUE_SEPARATOR: &str = " | ";

/// Old/new value pair after aggregation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct ValuePair {
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

impl ValuePair {
    pub(super) fn is_empty(&self) -> bool {
        self.old_value.is_none() && self.new_value.is_none()
    }
}

/// Formats strategy markers into the record's old/new values
pub(super) struct ValueAggregator;

impl ValueAggregator {
    pub(super) fn aggregate(markers: &Markers, multi_valued: bool) -> ValuePair {
        let side = |tag| {
            if multi_valued {
                Self::join_unique(markers.texts(tag))
            } else {
                Self::first(markers.texts(tag))
            }
        };

        ValuePair {
            old_value: side(MarkerTag::Removed),
            new_value: side(MarkerTag::Added),
        }
    }

    /// Deduplicate, sort lexicographically and join; empty becomes `None`
    pub(super) fn join_unique<'m>(texts: impl Iterator<Item = &'m str>) -> Option<String> {
        let unique: BTreeSet<&str> = texts.filter(|text| !text.is_empty()).collect();
        if unique.is_empty() {
            None
        } else {
            Some(unique.into_iter().collect::<Vec<_>>().join(MULTI_VALUE_SEPARATOR))
        }
    }

    pub(super) fn first<'m>(mut texts: impl Iterator<Item = &'m str>) -> Option<String> {
        texts.find(|text| !text.is_empty()).map(str::to_string)
    }
}
