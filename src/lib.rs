// Rowdiff Core - tree-sitter-html extraction of Airtable row-activity diffs
//
// Library: field-diff extraction from diffRowHtml and revision history parsing.
// With the `python` feature it builds as a PyO3 extension module.

pub mod extractors;
pub mod history;
pub mod utils;

// PyO3 bindings layer
#[cfg(feature = "python")]
mod bindings;

pub use extractors::{
    extract_field_diff, ColumnType, DiffExtractorManager, FieldDiffRecord, MULTI_VALUE_SEPARATOR,
};
pub use history::{
    entries_to_json, sort_newest_first, HistoryConfig, HistoryError, RevisionEntry,
    RevisionHistoryParser, RevisionPage,
};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Rowdiff Core Python module
///
/// Field-diff extraction and revision history parsing for Airtable row activity.
#[cfg(feature = "python")]
#[pymodule]
fn rowdiff_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    // Add Python functions
    m.add_function(wrap_pyfunction!(bindings::parse_diff, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::parse_diffs_batch, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::parse_revision_history, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::parse_revision_response, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::revision_history_to_json, m)?)?;

    // Add Python classes
    m.add_class::<bindings::PyFieldDiff>()?;
    m.add_class::<bindings::PyRevisionEntry>()?;
    m.add_class::<bindings::PyRevisionPage>()?;

    Ok(())
}
