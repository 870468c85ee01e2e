// Element - read-only view of one tree-sitter-html `element` node
//
// Attribute lookup, class matching and text extraction. Navigation
// (descendants, parents, siblings) lives in tree_methods.rs.

use tree_sitter::Node;

use crate::utils::html_text::{clean_text, decode_entities, rendered_text};

/// An HTML element inside a parsed snippet
#[derive(Clone, Copy)]
pub struct Element<'a> {
    pub(super) node: Node<'a>,
    pub(super) source: &'a str,
}

impl<'a> Element<'a> {
    pub(super) fn new(node: Node<'a>, source: &'a str) -> Self {
        Self { node, source }
    }

    fn slice(&self, node: &Node) -> &'a str {
        self.source
            .get(node.start_byte()..node.end_byte())
            .unwrap_or_default()
    }

    /// The start_tag or self_closing_tag carrying name and attributes
    fn tag_node(&self) -> Option<Node<'a>> {
        let mut cursor = self.node.walk();
        let found = self
            .node
            .children(&mut cursor)
            .find(|c| matches!(c.kind(), "start_tag" | "self_closing_tag"));
        found
    }

    /// Lowercased tag name (`div`, `span`, `svg`, ...)
    pub fn tag_name(&self) -> String {
        if let Some(tag) = self.tag_node() {
            let mut cursor = tag.walk();
            for child in tag.children(&mut cursor) {
                if child.kind() == "tag_name" {
                    return self.slice(&child).to_ascii_lowercase();
                }
            }
        }
        "unknown".to_string()
    }

    pub fn is_tag(&self, name: &str) -> bool {
        self.tag_name().eq_ignore_ascii_case(name)
    }

    /// Raw attribute value; names match ASCII case-insensitively
    ///
    /// Boolean attributes (`<input disabled>`) yield an empty string.
    pub fn raw_attr(&self, name: &str) -> Option<&'a str> {
        let tag = self.tag_node()?;
        let mut cursor = tag.walk();
        for child in tag.children(&mut cursor) {
            if child.kind() != "attribute" {
                continue;
            }
            let (attr_name, attr_value) = self.attribute_name_value(child);
            if attr_name.is_some_and(|n| n.eq_ignore_ascii_case(name)) {
                return Some(attr_value.unwrap_or_default());
            }
        }
        None
    }

    /// Attribute value with character references decoded
    pub fn attr(&self, name: &str) -> Option<String> {
        self.raw_attr(name)
            .map(|value| decode_entities(value).into_owned())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.raw_attr(name).is_some()
    }

    /// Attribute value trimmed, `None` when missing or blank
    pub fn non_empty_attr(&self, name: &str) -> Option<String> {
        self.raw_attr(name).and_then(clean_text)
    }

    fn attribute_name_value(&self, attr_node: Node<'a>) -> (Option<&'a str>, Option<&'a str>) {
        let mut name = None;
        let mut value = None;

        let mut cursor = attr_node.walk();
        for child in attr_node.children(&mut cursor) {
            match child.kind() {
                "attribute_name" => name = Some(self.slice(&child)),
                "attribute_value" => value = Some(self.slice(&child)),
                "quoted_attribute_value" => {
                    // Quoted form wraps an attribute_value; `title=""` has none
                    let mut inner = child.walk();
                    let inner_value = child
                        .children(&mut inner)
                        .find(|c| c.kind() == "attribute_value")
                        .map(|c| self.slice(&c));
                    value = Some(inner_value.unwrap_or_default());
                }
                _ => {}
            }
        }

        (name, value)
    }

    /// Raw `class` attribute, empty when absent
    pub fn class_attr(&self) -> &'a str {
        self.raw_attr("class").unwrap_or_default()
    }

    /// Whole-token class match (`.choiceToken`)
    pub fn has_class(&self, class: &str) -> bool {
        self.class_attr().split_ascii_whitespace().any(|c| c == class)
    }

    /// Every token present (`.micro.strong.caps`)
    pub fn has_classes(&self, classes: &[&str]) -> bool {
        classes.iter().all(|class| self.has_class(class))
    }

    /// Substring match over the class attribute (`[class*="..."]`)
    pub fn class_contains(&self, fragment: &str) -> bool {
        self.class_attr().contains(fragment)
    }

    /// Substring match over the inline style (`[style*="..."]`)
    pub fn style_contains(&self, fragment: &str) -> bool {
        self.raw_attr("style")
            .is_some_and(|style| style.contains(fragment))
    }

    /// Substring match over any attribute (`[title*="..."]`)
    pub fn attr_contains(&self, name: &str, fragment: &str) -> bool {
        self.attr(name).is_some_and(|value| value.contains(fragment))
    }

    /// Source between the start tag and the closing tag
    ///
    /// A missing closing tag extends the range to the end of the element.
    fn inner_markup(&self) -> &'a str {
        let mut start = self.node.start_byte();
        let mut end = self.node.end_byte();

        let mut cursor = self.node.walk();
        for child in self.node.children(&mut cursor) {
            match child.kind() {
                "self_closing_tag" => return "",
                "start_tag" => start = child.end_byte(),
                "end_tag" if !child.is_missing() => end = child.start_byte(),
                _ => {}
            }
        }

        self.source.get(start..end.max(start)).unwrap_or_default()
    }

    /// Rendered text content, entity-decoded and trimmed
    ///
    /// Read from the element's source so text the grammar files under ERROR
    /// nodes (a bare `&`, a stray `<`) is kept.
    pub fn text(&self) -> String {
        rendered_text(self.inner_markup())
    }

    /// Rendered text, `None` when empty
    pub fn non_empty_text(&self) -> Option<String> {
        Some(self.text()).filter(|text| !text.is_empty())
    }
}

impl std::fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag_name())
            .field("class", &self.class_attr())
            .field("start_byte", &self.node.start_byte())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::extractors::base::DiffSnippet;

    #[test]
    fn test_attributes_quoted_unquoted_and_empty() {
        let snippet = DiffSnippet::parse(
            r#"<div id=plain title="" data-x='single' columnId="fld1" hidden></div>"#,
        )
        .unwrap();
        let div = snippet.find_first(|el| el.is_tag("div")).unwrap();
        assert_eq!(div.attr("id").as_deref(), Some("plain"));
        assert_eq!(div.attr("title").as_deref(), Some(""));
        assert_eq!(div.attr("data-x").as_deref(), Some("single"));
        assert_eq!(div.attr("hidden").as_deref(), Some(""));
        assert_eq!(div.non_empty_attr("title"), None);
        assert!(div.attr("missing").is_none());
    }

    #[test]
    fn test_attribute_names_are_case_insensitive() {
        let snippet = DiffSnippet::parse(r#"<div columnId="fldAbc"></div>"#).unwrap();
        let div = snippet.find_first(|el| el.is_tag("div")).unwrap();
        assert_eq!(div.attr("columnid").as_deref(), Some("fldAbc"));
    }

    #[test]
    fn test_attribute_entities_are_decoded() {
        let snippet = DiffSnippet::parse(r#"<div title="Q&amp;A was added"></div>"#).unwrap();
        let div = snippet.find_first(|el| el.is_tag("div")).unwrap();
        assert_eq!(div.attr("title").as_deref(), Some("Q&A was added"));
    }

    #[test]
    fn test_class_token_vs_substring() {
        let snippet =
            DiffSnippet::parse(r#"<span class="text-dark colors-background-negative-light"></span>"#)
                .unwrap();
        let span = snippet.find_first(|el| el.is_tag("span")).unwrap();
        assert!(span.class_contains("colors-background-negative"));
        assert!(!span.has_class("colors-background-negative"));
        assert!(span.has_class("text-dark"));
    }

    #[test]
    fn test_text_joins_tokens_with_rendered_spaces() {
        let snippet =
            DiffSnippet::parse("<div>  Old <b>Name</b><i>s</i>\n <!-- note --> here </div>")
                .unwrap();
        let div = snippet.find_first(|el| el.is_tag("div")).unwrap();
        assert_eq!(div.text(), "Old Names here");
    }

    #[test]
    fn test_text_decodes_entities() {
        let snippet = DiffSnippet::parse("<span>Fish &amp; Chips</span>").unwrap();
        let span = snippet.find_first(|el| el.is_tag("span")).unwrap();
        assert_eq!(span.text(), "Fish & Chips");

        let snippet = DiffSnippet::parse("<span>&amp;lt;b&amp;gt;</span>").unwrap();
        let span = snippet.find_first(|el| el.is_tag("span")).unwrap();
        assert_eq!(span.non_empty_text().as_deref(), Some("&lt;b&gt;"));
    }

    #[test]
    fn test_text_keeps_stray_ampersand_and_angle_bracket() {
        let snippet = DiffSnippet::parse("<div>R & D</div><p>5 < 7</p>").unwrap();
        let div = snippet.find_first(|el| el.is_tag("div")).unwrap();
        assert_eq!(div.text(), "R & D");
        let p = snippet.find_first(|el| el.is_tag("p")).unwrap();
        assert_eq!(p.text(), "5 < 7");
    }

    #[test]
    fn test_text_decodes_full_entity_set() {
        let snippet = DiffSnippet::parse("<span>Caf&eacute; &mdash; open</span>").unwrap();
        let span = snippet.find_first(|el| el.is_tag("span")).unwrap();
        assert_eq!(span.text(), "Caf\u{e9} \u{2014} open");
    }

    #[test]
    fn test_text_ignores_angle_bracket_in_quoted_attribute() {
        let snippet = DiffSnippet::parse(r#"<div>Old<b title="a > b">Name</b></div>"#).unwrap();
        let div = snippet.find_first(|el| el.is_tag("div")).unwrap();
        assert_eq!(div.text(), "OldName");
    }

    #[test]
    fn test_empty_element_text() {
        let snippet = DiffSnippet::parse("<span>   </span>").unwrap();
        let span = snippet.find_first(|el| el.is_tag("span")).unwrap();
        assert_eq!(span.text(), "");
        assert_eq!(span.non_empty_text(), None);
    }
}
