//! Revision history parsing
//!
//! Turns one page of Airtable's row-activity payload into an ordered list of
//! [`RevisionEntry`] values. Comments are copied through; activities get their
//! `diffRowHtml` run through the field-diff extractor.

pub mod config;
pub mod entry;
pub mod error;
pub mod payload;

pub use config::HistoryConfig;
pub use entry::{EntryDetails, RevisionEntry, COMMENT_ENTRY_TYPE};
pub use error::{HistoryError, HistoryResult};
pub use payload::{ActivityInfo, CommentInfo, RevisionHistoryPayload, RevisionHistoryResponse, UserRef};

use crate::extractors::DiffExtractorManager;
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;

const SUCCESS_MSG: &str = "SUCCESS";

/// One parsed page plus the cursor for the next one
#[derive(Debug, Clone, PartialEq)]
pub struct RevisionPage {
    pub entries: Vec<RevisionEntry>,
    /// `offsetV2` as sent by the API; `None` on the last page
    pub offset_v2: Option<serde_json::Value>,
}

impl RevisionPage {
    /// Cursor as text: strings verbatim, anything else as compact JSON
    pub fn offset_token(&self) -> Option<String> {
        match self.offset_v2.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(token) => Some(token.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn has_more(&self) -> bool {
        self.offset_token().is_some()
    }
}

/// Parser for revision history pages
pub struct RevisionHistoryParser {
    config: HistoryConfig,
    extractor: DiffExtractorManager,
}

impl Default for RevisionHistoryParser {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}

impl RevisionHistoryParser {
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            config,
            extractor: DiffExtractorManager::new(),
        }
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Parse a decoded payload; entries follow `orderedActivityAndCommentIds`
    pub fn parse(&self, payload: &RevisionHistoryPayload) -> Vec<RevisionEntry> {
        let ids = &payload.ordered_activity_and_comment_ids;

        let mut entries: Vec<RevisionEntry> = if ids.len() >= self.config.parallel_threshold {
            ids.par_iter().map(|id| self.parse_entry(id, payload)).collect()
        } else {
            ids.iter().map(|id| self.parse_entry(id, payload)).collect()
        };

        if self.config.sort_newest_first {
            sort_newest_first(&mut entries);
        }

        tracing::debug!(
            "Parsed {} revision history entries ({} comments)",
            entries.len(),
            entries.iter().filter(|entry| entry.is_comment()).count()
        );
        entries
    }

    /// Parse the `data` object of a revision history response
    pub fn parse_json(&self, data_json: &str) -> HistoryResult<Vec<RevisionEntry>> {
        let payload: RevisionHistoryPayload = serde_json::from_str(data_json)?;
        Ok(self.parse(&payload))
    }

    /// Parse a full `{msg, data}` response into a page
    pub fn parse_response_json(&self, response_json: &str) -> HistoryResult<RevisionPage> {
        let response: RevisionHistoryResponse = serde_json::from_str(response_json)?;

        if response.msg.as_deref() != Some(SUCCESS_MSG) {
            tracing::warn!("Revision history request failed: msg={:?}", response.msg);
            return Err(HistoryError::ApiFailure { msg: response.msg });
        }
        let payload = response.data.ok_or(HistoryError::MissingData)?;

        let entries = self.parse(&payload);
        tracing::info!(
            "Revision history page parsed: {} entries, more pages: {}",
            entries.len(),
            payload.offset_v2.as_ref().is_some_and(|offset| !offset.is_null())
        );

        Ok(RevisionPage {
            entries,
            offset_v2: payload.offset_v2,
        })
    }

    fn parse_entry(&self, id: &str, payload: &RevisionHistoryPayload) -> RevisionEntry {
        if self.config.is_comment_id(id) {
            let comment = payload.comments_by_id.get(id).cloned().unwrap_or_default();
            return RevisionEntry {
                id: comment.id,
                entry_type: Some(COMMENT_ENTRY_TYPE.to_string()),
                user: payload.user(comment.user_id.as_deref()),
                timestamp: comment.created_time,
                details: EntryDetails::Comment {
                    comment: comment.text,
                },
            };
        }

        let activity = payload.row_activity_info_by_id.get(id).cloned().unwrap_or_default();
        let record = self
            .extractor
            .extract(activity.diff_row_html.as_deref().unwrap_or_default());

        RevisionEntry {
            id: Some(id.to_string()),
            entry_type: activity.group_type,
            user: payload.user(activity.originating_user_id.as_deref()),
            timestamp: activity.created_time,
            details: EntryDetails::Activity(record),
        }
    }
}

/// Sort by timestamp, newest first; entries without a timestamp go last
pub fn sort_newest_first(entries: &mut [RevisionEntry]) {
    entries.sort_by(|a, b| match (&a.timestamp, &b.timestamp) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Render entries in the persisted JSON format (4-space indent, UTF-8 kept verbatim)
pub fn entries_to_json(entries: &[RevisionEntry]) -> HistoryResult<String> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    entries.serialize(&mut serializer)?;
    Ok(String::from_utf8(buffer)?)
}
