// Data model for field-diff extraction
//
// ColumnType is the closed set of field families the engine understands.
// FieldDiffRecord is the only value that leaves the engine; ValueMarker and
// Markers are per-call scratch values produced by the strategies.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Single-valued scalar field kinds that share one extraction strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Text,
    MultilineText,
    Phone,
    Number,
    Date,
    Currency,
    Percent,
}

/// Single-select vs multi-select choice fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChoiceKind {
    Single,
    Multi,
}

/// Semantic kind of the field that changed
///
/// Serializes as the raw `data-columntype` tag so persisted output stays
/// identical to what the UI reports (`"multiSelect"`, `"foreignKey"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnType {
    SimpleScalar(ScalarKind),
    Choice(ChoiceKind),
    Checkbox,
    MultiAttachment,
    Rating,
    RelationalLink,
    /// A tag outside the supported table; the raw tag is kept for reporting
    Undetermined(String),
}

impl ColumnType {
    /// Map a `data-columntype` tag to its column type
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "text" => ColumnType::SimpleScalar(ScalarKind::Text),
            "multilineText" => ColumnType::SimpleScalar(ScalarKind::MultilineText),
            "phone" => ColumnType::SimpleScalar(ScalarKind::Phone),
            "number" => ColumnType::SimpleScalar(ScalarKind::Number),
            "date" => ColumnType::SimpleScalar(ScalarKind::Date),
            "currency" => ColumnType::SimpleScalar(ScalarKind::Currency),
            "percent" => ColumnType::SimpleScalar(ScalarKind::Percent),
            "select" => ColumnType::Choice(ChoiceKind::Single),
            "multiSelect" => ColumnType::Choice(ChoiceKind::Multi),
            "checkbox" => ColumnType::Checkbox,
            "multipleAttachment" => ColumnType::MultiAttachment,
            "rating" => ColumnType::Rating,
            "foreignKey" => ColumnType::RelationalLink,
            other => ColumnType::Undetermined(other.to_string()),
        }
    }

    /// The wire tag for this column type
    pub fn tag(&self) -> &str {
        match self {
            ColumnType::SimpleScalar(kind) => match kind {
                ScalarKind::Text => "text",
                ScalarKind::MultilineText => "multilineText",
                ScalarKind::Phone => "phone",
                ScalarKind::Number => "number",
                ScalarKind::Date => "date",
                ScalarKind::Currency => "currency",
                ScalarKind::Percent => "percent",
            },
            ColumnType::Choice(ChoiceKind::Single) => "select",
            ColumnType::Choice(ChoiceKind::Multi) => "multiSelect",
            ColumnType::Checkbox => "checkbox",
            ColumnType::MultiAttachment => "multipleAttachment",
            ColumnType::Rating => "rating",
            ColumnType::RelationalLink => "foreignKey",
            ColumnType::Undetermined(tag) => tag,
        }
    }

    /// Multi-valued types join their values with `" | "`
    pub fn is_multi_valued(&self) -> bool {
        matches!(
            self,
            ColumnType::Choice(ChoiceKind::Multi)
                | ColumnType::MultiAttachment
                | ColumnType::RelationalLink
        )
    }

    pub fn is_undetermined(&self) -> bool {
        matches!(self, ColumnType::Undetermined(_))
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for ColumnType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for ColumnType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(ColumnType::from_tag(&tag))
    }
}

/// Normalized description of one field change
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDiffRecord {
    pub column_id: Option<String>,
    pub column_name: Option<String>,
    pub column_type: Option<ColumnType>,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

impl FieldDiffRecord {
    /// True when neither side carries a value
    pub fn is_empty_change(&self) -> bool {
        self.old_value.is_none() && self.new_value.is_none()
    }
}

/// Which side of the change a marker belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MarkerTag {
    Removed,
    Added,
}

/// One detected value fragment before aggregation
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValueMarker {
    pub text: String,
    pub tag: MarkerTag,
}

/// Markers in the order a strategy found them
///
/// The removed and added sequences are read back per tag; relative order
/// within each side is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Markers {
    found: Vec<ValueMarker>,
}

impl Markers {
    /// Record a marker; empty or whitespace-only text is discarded
    pub fn push(&mut self, tag: MarkerTag, text: impl AsRef<str>) {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return;
        }
        self.found.push(ValueMarker {
            text: text.to_string(),
            tag,
        });
    }

    pub fn push_removed(&mut self, text: impl AsRef<str>) {
        self.push(MarkerTag::Removed, text);
    }

    pub fn push_added(&mut self, text: impl AsRef<str>) {
        self.push(MarkerTag::Added, text);
    }

    /// Marker texts for one side, in discovery order
    pub fn texts(&self, tag: MarkerTag) -> impl Iterator<Item = &str> + '_ {
        self.found
            .iter()
            .filter(move |marker| marker.tag == tag)
            .map(|marker| marker.text.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }
}
