use crate::extractors::base::{ColumnType, DiffSnippet, Element};
use tracing::debug;

use super::vocabulary::{
    COLUMN_ID_ATTR, COLUMN_TYPE_ATTR, FIELD_CONTAINER_CLASS, HEADER_CLASSES,
    VALUE_CONTAINER_CLASS,
};

/// Column identity read from the field container
#[derive(Debug, Clone, Default)]
pub(super) struct FieldMetadata<'a> {
    pub column_id: Option<String>,
    pub column_name: Option<String>,
    /// Set only when the value container and its type attribute were found
    pub column_type: Option<ColumnType>,
    pub value_container: Option<Element<'a>>,
}

/// Locates the field container and reads column id, name and type
pub(super) struct MetadataExtractor;

impl MetadataExtractor {
    pub(super) fn extract<'a>(snippet: &'a DiffSnippet) -> FieldMetadata<'a> {
        let mut metadata = FieldMetadata::default();

        let Some(container) = snippet.find_first(|el| el.has_class(FIELD_CONTAINER_CLASS)) else {
            debug!("Diff snippet has no field container");
            return metadata;
        };

        if let Some(header) = container.find_descendant(|el| el.has_classes(HEADER_CLASSES)) {
            metadata.column_name = header.non_empty_text();
            metadata.column_id = header.non_empty_attr(COLUMN_ID_ATTR);
        }

        let value_container = container.find_descendant(|el| el.has_class(VALUE_CONTAINER_CLASS));
        let type_tag = value_container.and_then(|el| el.non_empty_attr(COLUMN_TYPE_ATTR));

        match (value_container, type_tag) {
            (Some(value_container), Some(tag)) => {
                metadata.column_type = Some(ColumnType::from_tag(&tag));
                metadata.value_container = Some(value_container);
            }
            _ => {
                debug!(
                    "Could not determine column type for diff snippet (column: {:?})",
                    metadata.column_name
                );
            }
        }

        metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::ChoiceKind;

    #[test]
    fn test_reads_id_name_and_type() {
        let html = r#"<div class="historicalCellContainer">
            <div class="micro strong caps mb1" columnId="fldStatus"> Status </div>
            <div class="historicalCellValue" data-columntype="multiSelect"></div>
        </div>"#;
        let snippet = DiffSnippet::parse(html).unwrap();
        let metadata = MetadataExtractor::extract(&snippet);
        assert_eq!(metadata.column_id.as_deref(), Some("fldStatus"));
        assert_eq!(metadata.column_name.as_deref(), Some("Status"));
        assert_eq!(metadata.column_type, Some(ColumnType::Choice(ChoiceKind::Multi)));
        assert!(metadata.value_container.is_some());
    }

    #[test]
    fn test_missing_type_attribute_keeps_id_and_name() {
        let html = r#"<div class="historicalCellContainer">
            <div class="micro strong caps" columnid="fldNotes">Notes</div>
            <div class="historicalCellValue"></div>
        </div>"#;
        let snippet = DiffSnippet::parse(html).unwrap();
        let metadata = MetadataExtractor::extract(&snippet);
        assert_eq!(metadata.column_id.as_deref(), Some("fldNotes"));
        assert_eq!(metadata.column_name.as_deref(), Some("Notes"));
        assert_eq!(metadata.column_type, None);
        assert!(metadata.value_container.is_none());
    }

    #[test]
    fn test_empty_type_attribute_is_absent() {
        let html = r#"<div class="historicalCellContainer">
            <div class="historicalCellValue" data-columntype=""></div>
        </div>"#;
        let snippet = DiffSnippet::parse(html).unwrap();
        assert_eq!(MetadataExtractor::extract(&snippet).column_type, None);
    }

    #[test]
    fn test_value_container_outside_field_container_is_ignored() {
        let html = r#"<div class="historicalCellValue" data-columntype="text"></div>"#;
        let snippet = DiffSnippet::parse(html).unwrap();
        let metadata = MetadataExtractor::extract(&snippet);
        assert_eq!(metadata.column_type, None);
        assert_eq!(metadata.column_id, None);
    }

    #[test]
    fn test_header_needs_all_three_classes() {
        let html = r#"<div class="historicalCellContainer">
            <div class="micro strong" columnId="fldX">Wrong</div>
            <div class="historicalCellValue" data-columntype="text"></div>
        </div>"#;
        let snippet = DiffSnippet::parse(html).unwrap();
        let metadata = MetadataExtractor::extract(&snippet);
        assert_eq!(metadata.column_name, None);
        assert_eq!(metadata.column_type, Some(ColumnType::from_tag("text")));
    }
}
