//! DiffExtractorManager - public API for field-diff extraction
//!
//! Parses `diffRowHtml` fragments and hands them to the field-diff pipeline.
//! Callers get a [`FieldDiffRecord`] for every input; a fragment that cannot
//! be parsed yields an all-absent record instead of an error.

use crate::extractors::base::{DiffSnippet, FieldDiffRecord};
use crate::extractors::field_diff::FieldDiffExtractor;
use rayon::prelude::*;

/// Entry point for turning diff markup into field-diff records
pub struct DiffExtractorManager {
    // Stateless; every extraction parses its own snippet
}

impl Default for DiffExtractorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffExtractorManager {
    pub fn new() -> Self {
        Self {}
    }

    /// Extract the field change described by one markup fragment
    pub fn extract(&self, html: &str) -> FieldDiffRecord {
        match DiffSnippet::parse(html) {
            Ok(snippet) => {
                if snippet.has_errors() {
                    tracing::debug!(
                        "Diff snippet contains malformed markup ({} bytes), extracting best effort",
                        html.len()
                    );
                }
                FieldDiffExtractor::extract(&snippet)
            }
            Err(e) => {
                tracing::warn!("Failed to parse diff snippet: {}", e);
                FieldDiffRecord::default()
            }
        }
    }

    /// Extract many fragments in parallel, preserving input order
    pub fn extract_batch(&self, htmls: &[String]) -> Vec<FieldDiffRecord> {
        let records: Vec<FieldDiffRecord> =
            htmls.par_iter().map(|html| self.extract(html)).collect();

        tracing::debug!("Extracted {} field diffs in batch", records.len());
        records
    }
}

/// Extract one field diff without holding a manager
pub fn extract_field_diff(html: &str) -> FieldDiffRecord {
    DiffExtractorManager::new().extract(html)
}
