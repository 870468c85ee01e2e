//! Revision history parsing options

/// Options for [`RevisionHistoryParser`](super::RevisionHistoryParser)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Ids starting with this prefix are comments; everything else is an activity
    pub comment_id_prefix: String,
    /// Pages with at least this many ids are parsed on the rayon pool
    pub parallel_threshold: usize,
    /// Sort parsed entries by timestamp, newest first
    pub sort_newest_first: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            comment_id_prefix: "com".to_string(),
            parallel_threshold: 16,
            sort_newest_first: false,
        }
    }
}

impl HistoryConfig {
    pub fn is_comment_id(&self, id: &str) -> bool {
        id.starts_with(&self.comment_id_prefix)
    }
}
