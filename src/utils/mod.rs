// Rowdiff Utilities Module
//
// Common helpers shared by the extractors.

/// HTML entity decoding and rendered-whitespace helpers
pub mod html_text;
