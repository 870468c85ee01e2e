use crate::extractors::base::{ColumnType, DiffSnippet, Element, Markers};

use super::attachment::AttachmentExtractor;
use super::checkbox::CheckboxExtractor;
use super::choice::ChoiceExtractor;
use super::rating::RatingExtractor;
use super::relational::RelationalExtractor;
use super::scalar::ScalarExtractor;

/// Run the extraction strategy for a column type
///
/// `Undetermined` yields no markers; it must not reach the fallback either,
/// which the caller guarantees by checking the type first.
pub(super) fn run_strategy(
    column_type: &ColumnType,
    snippet: &DiffSnippet,
    value_container: &Element,
) -> Markers {
    match column_type {
        ColumnType::SimpleScalar(_) => ScalarExtractor::extract(value_container),
        ColumnType::Choice(_) => ChoiceExtractor::extract(snippet),
        ColumnType::Checkbox => CheckboxExtractor::extract(value_container),
        ColumnType::MultiAttachment => AttachmentExtractor::extract(snippet),
        ColumnType::Rating => RatingExtractor::extract(snippet),
        ColumnType::RelationalLink => RelationalExtractor::extract(value_container),
        ColumnType::Undetermined(_) => Markers::default(),
    }
}
