// Wire shapes of the row-activity endpoint
//
// Only the fields the parser reads are declared; everything else in the
// payload is ignored. Airtable sends explicit nulls for missing maps and
// strings, so every field tolerates both absence and null.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// `{msg, data}` envelope around one page of revision history
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RevisionHistoryResponse {
    pub msg: Option<String>,
    pub data: Option<RevisionHistoryPayload>,
}

/// The `data` object of one revision history page
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RevisionHistoryPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub ordered_activity_and_comment_ids: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub row_activity_info_by_id: HashMap<String, ActivityInfo>,
    #[serde(deserialize_with = "null_as_default")]
    pub comments_by_id: HashMap<String, CommentInfo>,
    #[serde(deserialize_with = "null_as_default")]
    pub row_activity_or_comment_user_obj_by_id: HashMap<String, UserRef>,
    /// Pagination cursor; absent on the last page. Kept opaque.
    #[serde(rename = "offsetV2")]
    pub offset_v2: Option<serde_json::Value>,
}

impl RevisionHistoryPayload {
    /// Resolve a user id; unknown or missing ids give an all-null user
    pub fn user(&self, user_id: Option<&str>) -> UserRef {
        user_id
            .and_then(|id| self.row_activity_or_comment_user_obj_by_id.get(id))
            .cloned()
            .unwrap_or_default()
    }
}

/// One activity (field change, row creation, ...)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityInfo {
    pub created_time: Option<String>,
    pub group_type: Option<String>,
    pub originating_user_id: Option<String>,
    pub diff_row_html: Option<String>,
}

/// One comment on the record
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentInfo {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub created_time: Option<String>,
    pub text: Option<String>,
}

/// Author of an activity or comment, as persisted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRef {
    pub id: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nulls_and_missing_fields_default() {
        let payload: RevisionHistoryPayload = serde_json::from_str(
            r#"{"orderedActivityAndCommentIds": null, "commentsById": null}"#,
        )
        .unwrap();
        assert!(payload.ordered_activity_and_comment_ids.is_empty());
        assert!(payload.comments_by_id.is_empty());
        assert!(payload.row_activity_info_by_id.is_empty());
        assert!(payload.offset_v2.is_none());
    }

    #[test]
    fn test_unknown_user_is_all_null() {
        let payload: RevisionHistoryPayload = serde_json::from_str(
            r#"{"rowActivityOrCommentUserObjById": {
                "usr1": {"id": "usr1", "email": "a@example.com", "name": "A", "profilePicUrl": "x"}
            }}"#,
        )
        .unwrap();
        assert_eq!(payload.user(Some("usr1")).email.as_deref(), Some("a@example.com"));
        assert_eq!(payload.user(Some("usr2")), UserRef::default());
        assert_eq!(payload.user(None), UserRef::default());
    }
}
