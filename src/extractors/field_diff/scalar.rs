use crate::extractors::base::{Element, Markers};

use super::vocabulary::{any_signal, ADDED_TEXT_SIGNALS, REMOVED_TEXT_SIGNALS};

/// Text, multiline text, phone, number, date, currency and percent fields
///
/// Every marked element under the value container becomes a marker in
/// document order; aggregation keeps the first one per side.
pub(super) struct ScalarExtractor;

impl ScalarExtractor {
    pub(super) fn extract(value_container: &Element) -> Markers {
        let mut markers = Markers::default();

        for element in value_container.descendants() {
            if any_signal(REMOVED_TEXT_SIGNALS, &element) {
                markers.push_removed(element.text());
            }
            if any_signal(ADDED_TEXT_SIGNALS, &element) {
                markers.push_added(element.text());
            }
        }

        markers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::{DiffSnippet, MarkerTag};

    fn markers_for(html: &str) -> Markers {
        let snippet = DiffSnippet::parse(html).unwrap();
        let container = snippet
            .find_first(|el| el.has_class("historicalCellValue"))
            .unwrap();
        ScalarExtractor::extract(&container)
    }

    #[test]
    fn test_strikethrough_and_success_spans() {
        let markers = markers_for(
            r#"<div class="historicalCellValue" data-columntype="text">
                <span class="strikethrough">Old Name</span>
                <span class="colors-background-success">New Name</span>
            </div>"#,
        );
        assert_eq!(markers.texts(MarkerTag::Removed).collect::<Vec<_>>(), vec!["Old Name"]);
        assert_eq!(markers.texts(MarkerTag::Added).collect::<Vec<_>>(), vec!["New Name"]);
    }

    #[test]
    fn test_alternate_removed_encodings() {
        let markers = markers_for(
            r#"<div class="historicalCellValue">
                <span class="colors-foreground-accent-negative">42</span>
                <span style="text-decoration:line-through">41</span>
            </div>"#,
        );
        assert_eq!(markers.texts(MarkerTag::Removed).collect::<Vec<_>>(), vec!["42", "41"]);
        assert_eq!(markers.texts(MarkerTag::Added).count(), 0);
    }

    #[test]
    fn test_empty_marked_elements_are_skipped() {
        let markers = markers_for(
            r#"<div class="historicalCellValue">
                <span class="colors-background-negative">  </span>
                <span class="colors-background-negative">2024-01-02</span>
            </div>"#,
        );
        assert_eq!(markers.texts(MarkerTag::Removed).collect::<Vec<_>>(), vec!["2024-01-02"]);
    }

    #[test]
    fn test_container_itself_is_not_a_marker() {
        let markers = markers_for(
            r#"<div class="historicalCellValue strikethrough"><span>plain</span></div>"#,
        );
        assert!(markers.is_empty());
    }
}
