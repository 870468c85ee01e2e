use serde::Serialize;

use super::payload::UserRef;
use crate::extractors::FieldDiffRecord;

/// `type` value of comment entries
pub const COMMENT_ENTRY_TYPE: &str = "comment";

/// One parsed revision history item, activity or comment
///
/// Serializes to the persisted shape: `id`, `type`, `user`, `timestamp`,
/// then either `comment` or the five field-diff keys (nulls included).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevisionEntry {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub entry_type: Option<String>,
    pub user: UserRef,
    pub timestamp: Option<String>,
    #[serde(flatten)]
    pub details: EntryDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EntryDetails {
    Comment { comment: Option<String> },
    Activity(FieldDiffRecord),
}

impl RevisionEntry {
    pub fn is_comment(&self) -> bool {
        matches!(self.details, EntryDetails::Comment { .. })
    }

    pub fn comment(&self) -> Option<&str> {
        match &self.details {
            EntryDetails::Comment { comment } => comment.as_deref(),
            EntryDetails::Activity(_) => None,
        }
    }

    /// Field change carried by an activity entry
    pub fn field_diff(&self) -> Option<&FieldDiffRecord> {
        match &self.details {
            EntryDetails::Activity(record) => Some(record),
            EntryDetails::Comment { .. } => None,
        }
    }
}
