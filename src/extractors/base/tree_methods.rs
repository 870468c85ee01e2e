// Tree navigation methods for Element
//
// CSS-combinator equivalents (descendant, parent, following sibling) over
// tree-sitter-html nodes. Elements recovered inside ERROR nodes are treated as
// ordinary children so malformed snippets stay searchable.

use super::element::Element;
use tree_sitter::Node;

/// Pre-order walk over descendant elements
///
/// Keeps pending elements on a heap stack, so nesting depth is bounded by
/// memory rather than the call stack.
struct Descendants<'a> {
    stack: Vec<Element<'a>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = Element<'a>;

    fn next(&mut self) -> Option<Element<'a>> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children().into_iter().rev());
        Some(next)
    }
}

impl<'a> Element<'a> {
    /// Element children of an arbitrary node (document root, ERROR, element)
    ///
    /// Elements nested in ERROR nodes are lifted into the child list.
    pub(super) fn element_children_of(node: Node<'a>, source: &'a str) -> Vec<Element<'a>> {
        let mut children = Vec::new();
        let mut pending = direct_children_reversed(node);
        while let Some(child) = pending.pop() {
            match child.kind() {
                "element" => children.push(Element::new(child, source)),
                "ERROR" => pending.extend(direct_children_reversed(child)),
                _ => {}
            }
        }
        children
    }

    /// Direct element children, in document order
    pub fn children(&self) -> Vec<Element<'a>> {
        Self::element_children_of(self.node, self.source)
    }

    fn descendant_iter(&self) -> Descendants<'a> {
        let mut stack = self.children();
        stack.reverse();
        Descendants { stack }
    }

    /// All descendant elements in document order (excluding self)
    pub fn descendants(&self) -> Vec<Element<'a>> {
        self.descendant_iter().collect()
    }

    /// First descendant satisfying `predicate` (`el.select_one(...)`)
    pub fn find_descendant<F>(&self, predicate: F) -> Option<Element<'a>>
    where
        F: Fn(&Element<'a>) -> bool,
    {
        self.descendant_iter().find(|el| predicate(el))
    }

    /// All descendants satisfying `predicate` (`el.select(...)`)
    pub fn find_descendants<F>(&self, predicate: F) -> Vec<Element<'a>>
    where
        F: Fn(&Element<'a>) -> bool,
    {
        self.descendant_iter().filter(|el| predicate(el)).collect()
    }

    /// Nearest enclosing element
    pub fn parent(&self) -> Option<Element<'a>> {
        let mut current = self.node.parent();
        while let Some(node) = current {
            if node.kind() == "element" {
                return Some(Element::new(node, self.source));
            }
            current = node.parent();
        }
        None
    }

    /// Enclosing elements from the parent outwards, stopping before `boundary`
    pub fn ancestors_within(&self, boundary: &Element<'a>) -> Vec<Element<'a>> {
        let mut ancestors = Vec::new();
        let mut current = self.parent();
        while let Some(el) = current {
            if el.node.id() == boundary.node.id() {
                break;
            }
            ancestors.push(el);
            current = el.parent();
        }
        ancestors
    }

    /// Following sibling elements, nearest first
    pub fn following_siblings(&self) -> Vec<Element<'a>> {
        let mut siblings = Vec::new();
        let mut current = self.node.next_sibling();
        while let Some(node) = current {
            if node.kind() == "element" {
                siblings.push(Element::new(node, self.source));
            }
            current = node.next_sibling();
        }
        siblings
    }

    /// First following sibling with the given tag (`find_next_sibling('div')`)
    pub fn next_sibling_tagged(&self, tag: &str) -> Option<Element<'a>> {
        self.following_siblings()
            .into_iter()
            .find(|sibling| sibling.is_tag(tag))
    }
}

fn direct_children_reversed(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    let mut children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.reverse();
    children
}
