// Base types and tree access for field-diff extraction
//
// - snippet.rs: DiffSnippet (markup + tree-sitter-html tree)
// - element.rs: Element view (attributes, classes, text)
// - tree_methods.rs: element navigation (descendants, parents, siblings)
// - types.rs: ColumnType, FieldDiffRecord and the per-call marker types

pub mod element;
pub mod snippet;
pub mod tree_methods;
pub mod types;

// Re-export key types for external use
pub use element::Element;
pub use snippet::{html_language, DiffSnippet};
pub use types::{ChoiceKind, ColumnType, FieldDiffRecord, ScalarKind};
pub(crate) use types::{MarkerTag, Markers};
