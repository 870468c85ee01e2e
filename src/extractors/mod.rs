//! Field-diff extractors
//!
//! tree-sitter-html based extraction of Airtable row-activity diffs.
//!
//! # Architecture
//!
//! - `base` - parsed snippet, element navigation and the shared data model
//! - `field_diff` - metadata, per-type strategies, aggregation and fallback
//! - `manager` - DiffExtractorManager public API (single and batch)

pub mod base;
pub mod field_diff;
pub mod manager;

// Re-export the public API
pub use base::{ChoiceKind, ColumnType, DiffSnippet, FieldDiffRecord, ScalarKind};
pub use field_diff::{FieldDiffExtractor, MULTI_VALUE_SEPARATOR};
pub use manager::{extract_field_diff, DiffExtractorManager};
