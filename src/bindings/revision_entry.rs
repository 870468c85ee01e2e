// PyRevisionEntry / PyRevisionPage - PyO3 wrappers for parsed revision history

use super::field_diff::{fill_field_diff_dict, PyFieldDiff};
use crate::history::{EntryDetails, RevisionEntry, RevisionPage};
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Python-accessible revision history entry (activity or comment)
#[pyclass(name = "RevisionEntry")]
pub struct PyRevisionEntry {
    inner: RevisionEntry,
}

impl PyRevisionEntry {
    pub fn from_entry(entry: RevisionEntry) -> Self {
        PyRevisionEntry { inner: entry }
    }
}

#[pymethods]
impl PyRevisionEntry {
    #[getter]
    fn id(&self) -> Option<String> {
        self.inner.id.clone()
    }

    /// "comment" for comments, the activity group type otherwise
    #[getter]
    fn entry_type(&self) -> Option<String> {
        self.inner.entry_type.clone()
    }

    #[getter]
    fn timestamp(&self) -> Option<String> {
        self.inner.timestamp.clone()
    }

    #[getter]
    fn user_id(&self) -> Option<String> {
        self.inner.user.id.clone()
    }

    #[getter]
    fn user_email(&self) -> Option<String> {
        self.inner.user.email.clone()
    }

    #[getter]
    fn user_name(&self) -> Option<String> {
        self.inner.user.name.clone()
    }

    #[getter]
    fn is_comment(&self) -> bool {
        self.inner.is_comment()
    }

    #[getter]
    fn comment(&self) -> Option<String> {
        self.inner.comment().map(str::to_string)
    }

    /// Field change of an activity entry, None for comments
    #[getter]
    fn field_diff(&self) -> Option<PyFieldDiff> {
        self.inner
            .field_diff()
            .map(|record| PyFieldDiff::from_record(record.clone()))
    }

    /// Dict in the persisted shape
    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        dict.set_item("id", self.inner.id.clone())?;
        dict.set_item("type", self.inner.entry_type.clone())?;

        let user = PyDict::new(py);
        user.set_item("id", self.inner.user.id.clone())?;
        user.set_item("email", self.inner.user.email.clone())?;
        user.set_item("name", self.inner.user.name.clone())?;
        dict.set_item("user", user)?;

        dict.set_item("timestamp", self.inner.timestamp.clone())?;
        match &self.inner.details {
            EntryDetails::Comment { comment } => dict.set_item("comment", comment.clone())?,
            EntryDetails::Activity(record) => fill_field_diff_dict(&dict, record)?,
        }
        Ok(dict)
    }

    fn __repr__(&self) -> String {
        format!(
            "RevisionEntry(id={:?}, type={:?}, timestamp={:?})",
            self.inner.id, self.inner.entry_type, self.inner.timestamp
        )
    }
}

/// Python-accessible page of revision history
#[pyclass(name = "RevisionPage")]
pub struct PyRevisionPage {
    inner: RevisionPage,
}

impl PyRevisionPage {
    pub fn from_page(page: RevisionPage) -> Self {
        PyRevisionPage { inner: page }
    }
}

#[pymethods]
impl PyRevisionPage {
    #[getter]
    fn entries(&self) -> Vec<PyRevisionEntry> {
        self.inner
            .entries
            .iter()
            .map(|entry| PyRevisionEntry::from_entry(entry.clone()))
            .collect()
    }

    /// Cursor for the next page, None on the last page
    #[getter]
    fn offset_v2(&self) -> Option<String> {
        self.inner.offset_token()
    }

    #[getter]
    fn has_more(&self) -> bool {
        self.inner.has_more()
    }

    fn __len__(&self) -> usize {
        self.inner.entries.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "RevisionPage(entries={}, has_more={})",
            self.inner.entries.len(),
            self.inner.has_more()
        )
    }
}
