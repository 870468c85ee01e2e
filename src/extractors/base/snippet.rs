// DiffSnippet - parsed diffRowHtml fragment
//
// Owns the markup and its tree-sitter-html tree for the duration of one
// extraction call. Nothing here mutates the tree after parsing.

use anyhow::Result;
use tree_sitter::{Node, Parser, Tree};

use super::element::Element;

/// Get the tree-sitter language used for diff snippets
pub fn html_language() -> tree_sitter::Language {
    tree_sitter_html::LANGUAGE.into()
}

/// One field-diff markup fragment and its syntax tree
pub struct DiffSnippet {
    content: String,
    tree: Tree,
}

impl DiffSnippet {
    /// Parse a markup fragment
    ///
    /// tree-sitter recovers from malformed markup, so an error here means the
    /// parser itself could not run (grammar/ABI mismatch), not bad input.
    pub fn parse(content: impl Into<String>) -> Result<Self> {
        let content = content.into();

        let mut parser = Parser::new();
        parser
            .set_language(&html_language())
            .map_err(|e| anyhow::anyhow!("Failed to set parser language for html: {}", e))?;

        let tree = parser
            .parse(&content, None)
            .ok_or_else(|| anyhow::anyhow!("Failed to parse diff snippet ({} bytes)", content.len()))?;

        Ok(Self { content, tree })
    }

    fn root_node(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// True when tree-sitter had to recover from syntax errors
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// Top-level elements of the fragment, in document order
    fn top_level_elements(&self) -> Vec<Element<'_>> {
        Element::element_children_of(self.root_node(), &self.content)
    }

    /// Every element in the fragment, in document order
    pub fn elements(&self) -> Vec<Element<'_>> {
        let mut all = Vec::new();
        for top in self.top_level_elements() {
            all.push(top);
            all.extend(top.descendants());
        }
        all
    }

    /// First element (document order) satisfying `predicate`
    pub fn find_first<F>(&self, predicate: F) -> Option<Element<'_>>
    where
        F: Fn(&Element<'_>) -> bool,
    {
        self.elements().into_iter().find(|el| predicate(el))
    }

    /// All elements (document order) satisfying `predicate`
    pub fn find_all<F>(&self, predicate: F) -> Vec<Element<'_>>
    where
        F: Fn(&Element<'_>) -> bool,
    {
        self.elements().into_iter().filter(|el| predicate(el)).collect()
    }
}

impl std::fmt::Debug for DiffSnippet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiffSnippet")
            .field("bytes", &self.content.len())
            .field("has_errors", &self.has_errors())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_fragment() {
        let snippet = DiffSnippet::parse("").unwrap();
        assert!(snippet.elements().is_empty());
    }

    #[test]
    fn test_elements_are_in_document_order() {
        let snippet =
            DiffSnippet::parse(r#"<div id="a"><span id="b"></span><span id="c"></span></div><div id="d"></div>"#)
                .unwrap();
        let ids: Vec<String> = snippet
            .elements()
            .iter()
            .filter_map(|el| el.attr("id"))
            .collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_find_first_and_find_all() {
        let snippet = DiffSnippet::parse(
            r#"<div class="x one"></div><div class="x two"></div><div class="y"></div>"#,
        )
        .unwrap();
        let first = snippet.find_first(|el| el.has_class("x")).unwrap();
        assert!(first.has_class("one"));
        assert_eq!(snippet.find_all(|el| el.has_class("x")).len(), 2);
        assert!(snippet.find_first(|el| el.has_class("z")).is_none());
    }

    #[test]
    fn test_malformed_markup_still_parses() {
        let snippet = DiffSnippet::parse(r#"<div class="a"><span>unclosed</div></i>"#).unwrap();
        assert!(snippet.find_first(|el| el.has_class("a")).is_some());
    }
}
