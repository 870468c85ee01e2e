use crate::extractors::base::{Element, Markers};

use super::vocabulary::{ADDED_CLASS, FOREIGN_RECORD_CLASS, REMOVED_CLASS};

/// Linked-record (foreign key) fields
pub(super) struct RelationalExtractor;

impl RelationalExtractor {
    pub(super) fn extract(value_container: &Element) -> Markers {
        let mut markers = Markers::default();

        for record in value_container.find_descendants(|el| el.has_class(FOREIGN_RECORD_CLASS)) {
            let Some(label) = record.non_empty_attr("title").or_else(|| record.non_empty_text())
            else {
                continue;
            };
            if record.has_class(REMOVED_CLASS) {
                markers.push_removed(label);
            } else if record.has_class(ADDED_CLASS) {
                markers.push_added(label);
            }
        }

        markers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::{DiffSnippet, MarkerTag};

    #[test]
    fn test_linked_records_by_state() {
        let html = r#"<div class="historicalCellValue" data-columntype="foreignKey">
            <div class="foreignRecord removed" title="Acme Corp">Acme</div>
            <div class="foreignRecord added">  Globex  </div>
            <div class="foreignRecord added" title="">Initech</div>
            <div class="foreignRecord">Unchanged Ltd</div>
        </div>"#;
        let snippet = DiffSnippet::parse(html).unwrap();
        let container = snippet
            .find_first(|el| el.has_class("historicalCellValue"))
            .unwrap();
        let markers = RelationalExtractor::extract(&container);

        assert_eq!(markers.texts(MarkerTag::Removed).collect::<Vec<_>>(), vec!["Acme Corp"]);
        assert_eq!(
            markers.texts(MarkerTag::Added).collect::<Vec<_>>(),
            vec!["Globex", "Initech"]
        );
    }
}
