use crate::extractors::base::{DiffSnippet, Element, Markers};

use super::vocabulary::{
    any_signal, has_icon, ADDED_PILL_SUFFIX, CHOICE_TOKEN_CLASS, PLUS_ICON_REF,
    STRUCK_PILL_SIGNALS, TRUNCATED_LABEL_CLASS,
};

/// Single- and multi-select fields
///
/// Each `choiceToken` pill is one value. Struck-through pills were removed.
/// Every other pill belongs to the post-change selection, whether it was just
/// added or left unchanged; pills followed by a plus icon carry a `" +"`
/// suffix. Other adjacent icons carry no meaning.
pub(super) struct ChoiceExtractor;

impl ChoiceExtractor {
    pub(super) fn extract(snippet: &DiffSnippet) -> Markers {
        let mut markers = Markers::default();

        for pill in snippet.find_all(|el| el.has_class(CHOICE_TOKEN_CLASS)) {
            let Some(label) = Self::pill_label(&pill) else {
                continue;
            };

            if any_signal(STRUCK_PILL_SIGNALS, &pill) {
                markers.push_removed(label);
            } else if pill
                .next_sibling_tagged("div")
                .is_some_and(|icon| has_icon(&icon, PLUS_ICON_REF))
            {
                markers.push_added(format!("{}{}", label, ADDED_PILL_SUFFIX));
            } else {
                markers.push_added(label);
            }
        }

        markers
    }

    /// Title attribute, else the truncated label, else the pill's own text
    fn pill_label(pill: &Element) -> Option<String> {
        pill.non_empty_attr("title")
            .or_else(|| {
                pill.find_descendant(|el| el.has_class(TRUNCATED_LABEL_CLASS))
                    .and_then(|label| label.non_empty_text())
            })
            .or_else(|| pill.non_empty_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::MarkerTag;

    const PLUS: &str = r##"<div class="ml-half"><svg class="icon"><use href="/images/icons.svg#Plus"></use></svg></div>"##;
    const MINUS: &str = r##"<div class="ml-half"><svg class="icon"><use href="/images/icons.svg#Minus"></use></svg></div>"##;

    fn extract(html: &str) -> Markers {
        let snippet = DiffSnippet::parse(html).unwrap();
        ChoiceExtractor::extract(&snippet)
    }

    fn texts(markers: &Markers, tag: MarkerTag) -> Vec<String> {
        markers.texts(tag).map(str::to_string).collect()
    }

    #[test]
    fn test_removed_added_and_retained_pills() {
        let html = format!(
            r#"<div class="historicalCellValue" data-columntype="multiSelect">
                <div class="flex">
                    <div class="choiceToken" style="text-decoration: line-through" title="Blocked"></div>
                </div>
                <div class="flex">
                    <div class="choiceToken" title="Done"></div>{}
                </div>
                <div class="flex">
                    <div class="choiceToken"><div class="truncate-pre">Urgent</div></div>
                </div>
            </div>"#,
            PLUS
        );
        let markers = extract(&html);
        assert_eq!(texts(&markers, MarkerTag::Removed), vec!["Blocked"]);
        assert_eq!(texts(&markers, MarkerTag::Added), vec!["Done +", "Urgent"]);
    }

    #[test]
    fn test_strikethrough_class_marks_removal() {
        let markers = extract(
            r#"<div class="choiceToken strikethrough"><span class="truncate-pre">Low</span></div>"#,
        );
        assert_eq!(texts(&markers, MarkerTag::Removed), vec!["Low"]);
        assert!(texts(&markers, MarkerTag::Added).is_empty());
    }

    #[test]
    fn test_minus_icon_alone_does_not_remove() {
        let html = format!(r#"<div><div class="choiceToken" title="Old"></div>{}</div>"#, MINUS);
        let markers = extract(&html);
        assert_eq!(texts(&markers, MarkerTag::Added), vec!["Old"]);
        assert!(texts(&markers, MarkerTag::Removed).is_empty());
    }

    #[test]
    fn test_blank_title_falls_back_to_truncated_label() {
        let markers = extract(
            r#"<div class="choiceToken" title="  "><div class="truncate-pre"> In progress </div></div>"#,
        );
        assert_eq!(texts(&markers, MarkerTag::Added), vec!["In progress"]);
    }

    #[test]
    fn test_plus_icon_must_follow_the_pill() {
        let html = format!(
            r#"<div>{}<div class="choiceToken" title="Before icon"></div></div>"#,
            PLUS
        );
        let markers = extract(&html);
        assert_eq!(texts(&markers, MarkerTag::Added), vec!["Before icon"]);
    }

    #[test]
    fn test_label_less_pill_is_skipped() {
        let markers = extract(r#"<div class="choiceToken"></div>"#);
        assert!(markers.is_empty());
    }
}
