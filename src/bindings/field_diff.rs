// PyFieldDiff - PyO3 wrapper for FieldDiffRecord

use crate::extractors::FieldDiffRecord;
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Python-accessible field diff
///
/// One field change extracted from `diffRowHtml`. All fields are read-only
/// and any of them may be None.
#[pyclass(name = "FieldDiff")]
pub struct PyFieldDiff {
    inner: FieldDiffRecord,
}

impl PyFieldDiff {
    pub fn from_record(record: FieldDiffRecord) -> Self {
        PyFieldDiff { inner: record }
    }
}

/// Fill `dict` with the five camelCase field-diff keys
pub(super) fn fill_field_diff_dict(dict: &Bound<'_, PyDict>, record: &FieldDiffRecord) -> PyResult<()> {
    dict.set_item("columnId", record.column_id.clone())?;
    dict.set_item("columnName", record.column_name.clone())?;
    dict.set_item(
        "columnType",
        record.column_type.as_ref().map(|t| t.tag().to_string()),
    )?;
    dict.set_item("oldValue", record.old_value.clone())?;
    dict.set_item("newValue", record.new_value.clone())?;
    Ok(())
}

#[pymethods]
impl PyFieldDiff {
    #[getter]
    fn column_id(&self) -> Option<String> {
        self.inner.column_id.clone()
    }

    #[getter]
    fn column_name(&self) -> Option<String> {
        self.inner.column_name.clone()
    }

    /// Raw `data-columntype` tag, e.g. "multiSelect"
    #[getter]
    fn column_type(&self) -> Option<String> {
        self.inner.column_type.as_ref().map(|t| t.tag().to_string())
    }

    #[getter]
    fn old_value(&self) -> Option<String> {
        self.inner.old_value.clone()
    }

    #[getter]
    fn new_value(&self) -> Option<String> {
        self.inner.new_value.clone()
    }

    /// Dict with camelCase keys, matching the persisted JSON
    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        fill_field_diff_dict(&dict, &self.inner)?;
        Ok(dict)
    }

    fn __repr__(&self) -> String {
        format!(
            "FieldDiff(column_name={:?}, column_type={:?}, old_value={:?}, new_value={:?})",
            self.inner.column_name,
            self.inner.column_type.as_ref().map(|t| t.tag()),
            self.inner.old_value,
            self.inner.new_value
        )
    }
}
