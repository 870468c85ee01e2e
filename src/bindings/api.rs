// API Functions - PyO3-exposed functions for Python
//
// Field-diff extraction and revision history parsing.

use super::{PyFieldDiff, PyRevisionEntry, PyRevisionPage};
use crate::extractors::DiffExtractorManager;
use crate::history::{entries_to_json, HistoryConfig, HistoryError, RevisionHistoryParser};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn to_py_err(e: HistoryError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn parser(sort_newest_first: bool) -> RevisionHistoryParser {
    RevisionHistoryParser::new(HistoryConfig {
        sort_newest_first,
        ..Default::default()
    })
}

/// Extract the field change from one diffRowHtml fragment
///
/// Args:
///     html (str): diffRowHtml markup
///
/// Returns:
///     FieldDiff: Column id/name/type and old/new values (any may be None)
#[pyfunction]
#[pyo3(signature = (html))]
pub fn parse_diff(html: &str) -> PyFieldDiff {
    PyFieldDiff::from_record(DiffExtractorManager::new().extract(html))
}

/// Extract field changes from many fragments in parallel
///
/// Releases the GIL while extracting. Results keep the input order.
///
/// Args:
///     htmls (list[str]): diffRowHtml fragments
///
/// Returns:
///     list[FieldDiff]: One result per input
#[pyfunction]
#[pyo3(signature = (htmls))]
pub fn parse_diffs_batch(py: Python<'_>, htmls: Vec<String>) -> Vec<PyFieldDiff> {
    let records = py.detach(move || DiffExtractorManager::new().extract_batch(&htmls));
    records.into_iter().map(PyFieldDiff::from_record).collect()
}

/// Parse the `data` object of a revision history response
///
/// Args:
///     data_json (str): JSON text of the `data` object
///     sort_newest_first (bool): Sort entries by timestamp, newest first
///
/// Returns:
///     list[RevisionEntry]: Entries in `orderedActivityAndCommentIds` order
///                          unless sorting was requested
///
/// Raises:
///     ValueError: If the JSON is malformed
#[pyfunction]
#[pyo3(signature = (data_json, sort_newest_first = false))]
pub fn parse_revision_history(
    py: Python<'_>,
    data_json: String,
    sort_newest_first: bool,
) -> PyResult<Vec<PyRevisionEntry>> {
    let entries = py
        .detach(move || parser(sort_newest_first).parse_json(&data_json))
        .map_err(to_py_err)?;
    Ok(entries.into_iter().map(PyRevisionEntry::from_entry).collect())
}

/// Parse a full `{msg, data}` revision history response
///
/// Args:
///     response_json (str): JSON text of the whole response
///
/// Returns:
///     RevisionPage: Entries plus the `offsetV2` cursor
///
/// Raises:
///     ValueError: If the JSON is malformed, `msg` is not "SUCCESS" or `data` is missing
#[pyfunction]
#[pyo3(signature = (response_json))]
pub fn parse_revision_response(py: Python<'_>, response_json: String) -> PyResult<PyRevisionPage> {
    let page = py
        .detach(move || parser(false).parse_response_json(&response_json))
        .map_err(to_py_err)?;
    Ok(PyRevisionPage::from_page(page))
}

/// Parse a `data` object and render the persisted JSON (4-space indent)
///
/// Args:
///     data_json (str): JSON text of the `data` object
///     sort_newest_first (bool): Sort entries by timestamp, newest first
///
/// Returns:
///     str: JSON array of entries
///
/// Raises:
///     ValueError: If the JSON is malformed
#[pyfunction]
#[pyo3(signature = (data_json, sort_newest_first = true))]
pub fn revision_history_to_json(
    py: Python<'_>,
    data_json: String,
    sort_newest_first: bool,
) -> PyResult<String> {
    py.detach(move || {
        let entries = parser(sort_newest_first).parse_json(&data_json)?;
        entries_to_json(&entries)
    })
    .map_err(to_py_err)
}
