// PyO3 Bindings Module
//
// Python bindings for the field-diff extractor and revision history parser.
// Rust types are wrapped in PyO3 classes with read-only getters.

mod api;
mod field_diff;
mod revision_entry;

// Re-export for lib.rs
pub use api::{
    parse_diff, parse_diffs_batch, parse_revision_history, parse_revision_response,
    revision_history_to_json,
};
pub use field_diff::PyFieldDiff;
pub use revision_entry::{PyRevisionEntry, PyRevisionPage};
