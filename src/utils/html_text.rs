// HTML text helpers
//
// Entity decoding and rendered-text extraction over raw markup. Works on the
// source slice rather than tree-sitter tokens so stray `<` and `&` that the
// grammar files under ERROR nodes still come through as text.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Markup that renders nothing: comments, script/style blocks, tags (quoted
/// attribute values may contain `>`), and a tag cut off at the end of input
static MARKUP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)<!--.*?(?:-->|\z)|<(?i:script|style)\b.*?(?:</(?i:script|style)\s*>|\z)|<[A-Za-z/!?](?:[^>"']|"[^"]*"|'[^']*')*>|<[A-Za-z/!?][^>]*\z"#,
    )
    .expect("markup pattern is valid")
});

/// Decode character references (`&amp;`, `&eacute;`, `&#39;`, `&#x2019;`, ...)
///
/// Covers the full HTML5 named set. Unknown names and bare `&` are kept.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(text)
}

/// Rendered text of a markup fragment, entity-decoded and trimmed
///
/// Text runs between tags are trimmed and joined with one space wherever the
/// markup between them renders whitespace. A `<` that does not open a tag is
/// literal text.
pub fn rendered_text(markup: &str) -> String {
    let mut out = String::new();
    let mut pending_space = false;
    let mut last = 0;

    let mut push_run = |run: &str| {
        let trimmed = run.trim();
        if trimmed.is_empty() {
            pending_space |= !run.is_empty();
            return;
        }
        if (pending_space || run.starts_with(char::is_whitespace)) && !out.is_empty() {
            out.push(' ');
        }
        out.push_str(trimmed);
        pending_space = run.ends_with(char::is_whitespace);
    };

    for tag in MARKUP_RE.find_iter(markup) {
        push_run(&markup[last..tag.start()]);
        last = tag.end();
    }
    push_run(&markup[last..]);

    decode_entities(&out).trim().to_string()
}

/// Trim and decode, returning `None` for empty results
pub fn clean_text(raw: &str) -> Option<String> {
    let decoded = decode_entities(raw.trim());
    let trimmed = decoded.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_named_and_numeric_entities() {
        assert_eq!(decode_entities("Q&amp;A"), "Q&A");
        assert_eq!(decode_entities("it&#39;s"), "it's");
        assert_eq!(decode_entities("caf&#xE9;"), "café");
        assert_eq!(decode_entities("a&lt;b&gt;c"), "a<b>c");
    }

    #[test]
    fn test_decode_full_named_set() {
        assert_eq!(decode_entities("Caf&eacute;"), "Café");
        assert_eq!(decode_entities("&frac12; cup"), "\u{bd} cup");
    }

    #[test]
    fn test_unknown_entities_are_kept() {
        assert_eq!(decode_entities("&bogus; stays"), "&bogus; stays");
        assert_eq!(decode_entities("AT&T"), "AT&T");
        assert_eq!(decode_entities("R & D"), "R & D");
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(decode_entities("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_rendered_text_spacing() {
        assert_eq!(
            rendered_text("  Old <b>Name</b><i>s</i>\n <!-- note --> here "),
            "Old Names here"
        );
        assert_eq!(rendered_text("</span>\n  <span>x</span>y"), "xy");
        assert_eq!(rendered_text("a<b class=\"x y\">b</b>"), "ab");
        assert_eq!(rendered_text(""), "");
    }

    #[test]
    fn test_rendered_text_quoted_angle_bracket() {
        assert_eq!(rendered_text(r#"Old<b title="a > b">Name</b>"#), "OldName");
        assert_eq!(rendered_text("Old<b title='x>y'> Name</b>"), "Old Name");
    }

    #[test]
    fn test_rendered_text_keeps_stray_markup_characters() {
        assert_eq!(rendered_text("R & D"), "R & D");
        assert_eq!(rendered_text("5 < 7"), "5 < 7");
        assert_eq!(rendered_text("a <b>b</b> &lt; c"), "a b < c");
    }

    #[test]
    fn test_rendered_text_skips_scripts_and_cut_off_tags() {
        assert_eq!(rendered_text("x<script>if (a < b) {}</script> y"), "x y");
        assert_eq!(rendered_text("first draft</span\n  "), "first draft");
    }

    #[test]
    fn test_clean_text_drops_empty() {
        assert_eq!(clean_text("   "), None);
        assert_eq!(clean_text("&nbsp;"), None);
        assert_eq!(clean_text("  Old Name \n"), Some("Old Name".to_string()));
    }
}
