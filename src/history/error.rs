//! Revision history error types.

use thiserror::Error;

/// Result type for revision history operations.
pub type HistoryResult<T> = Result<T, HistoryError>;

/// Errors raised while reading or rendering revision history payloads.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Payload is not valid JSON or does not have the expected shape.
    #[error("invalid revision history json: {0}")]
    Json(#[from] serde_json::Error),

    /// The API envelope reported something other than success.
    #[error("revision history request failed: msg={msg:?}")]
    ApiFailure { msg: Option<String> },

    /// Successful envelope without a `data` object.
    #[error("revision history response has no data")]
    MissingData,

    /// Rendered output was not valid UTF-8.
    #[error("rendered revision history is not utf-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
