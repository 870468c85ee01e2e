//! Field-diff extraction
//!
//! Turns one rendered "field changed" snippet from Airtable's row activity
//! feed into a [`FieldDiffRecord`]. The pipeline is:
//!
//! - `metadata` - column id, name and type from the field container
//! - `dispatch` - picks the strategy for the column type
//! - strategies (`scalar`, `choice`, `checkbox`, `attachment`, `rating`,
//!   `relational`) - emit removed/added markers
//! - `aggregate` - formats markers into old/new values
//! - `fallback` - last attempt when a known type produced nothing
//!
//! All markup knowledge lives in `vocabulary`.

mod aggregate;
mod attachment;
mod checkbox;
mod choice;
mod dispatch;
mod fallback;
mod metadata;
mod rating;
mod relational;
mod scalar;
mod vocabulary;


pub use aggregate::MULTI_VALUE_SEPARATOR;

use crate::extractors::base::{DiffSnippet, FieldDiffRecord};
use tracing::debug;

use aggregate::ValueAggregator;
use fallback::FallbackExtractor;
use metadata::MetadataExtractor;

/// Extracts a [`FieldDiffRecord`] from a parsed diff snippet
///
/// Stateless; every call works only on the snippet it is given.
pub struct FieldDiffExtractor;

impl FieldDiffExtractor {
    pub fn extract(snippet: &DiffSnippet) -> FieldDiffRecord {
        let metadata = MetadataExtractor::extract(snippet);

        let mut record = FieldDiffRecord {
            column_id: metadata.column_id,
            column_name: metadata.column_name,
            ..Default::default()
        };

        let (Some(column_type), Some(value_container)) =
            (metadata.column_type, metadata.value_container)
        else {
            return record;
        };

        if column_type.is_undetermined() {
            debug!(
                "Unsupported column type '{}' for column {:?}, values left empty",
                column_type, record.column_name
            );
            record.column_type = Some(column_type);
            return record;
        }

        let markers = dispatch::run_strategy(&column_type, snippet, &value_container);
        let mut values = ValueAggregator::aggregate(&markers, column_type.is_multi_valued());

        if values.is_empty() {
            debug!(
                "No {} markers found for column {:?}, trying fallback",
                column_type, record.column_name
            );
            values = FallbackExtractor::extract(&value_container);
        }

        record.column_type = Some(column_type);
        record.old_value = values.old_value;
        record.new_value = values.new_value;
        record
    }
}
