use crate::extractors::base::{DiffSnippet, Element, MarkerTag, Markers};

use super::vocabulary::{
    ADDED_BORDER, ADDED_TITLE_SUFFIX, ATTACHMENT_PREVIEW_CLASS, ATTACHMENT_ROUNDED_CLASS,
    REMOVED_BORDER, REMOVED_TITLE_SUFFIX,
};

/// Multiple-attachment fields
///
/// Attachment previews carry a title such as `"invoice.pdf was removed"`.
/// The phrase is cut off by exact length, never searched for, so file names
/// that contain the phrase elsewhere survive intact. Previews without the
/// phrase fall back to their red/green border class.
pub(super) struct AttachmentExtractor;

impl AttachmentExtractor {
    pub(super) fn extract(snippet: &DiffSnippet) -> Markers {
        let mut markers = Markers::default();

        for preview in snippet.find_all(|el| el.has_class(ATTACHMENT_PREVIEW_CLASS)) {
            if let Some((tag, name)) = Self::classify(&preview) {
                markers.push(tag, name);
            }
        }

        markers
    }

    fn classify(preview: &Element) -> Option<(MarkerTag, String)> {
        let title = preview.attr("title")?;

        if let Some(name) = title.strip_suffix(REMOVED_TITLE_SUFFIX) {
            return Some((MarkerTag::Removed, name.to_string()));
        }
        if let Some(name) = title.strip_suffix(ADDED_TITLE_SUFFIX) {
            return Some((MarkerTag::Added, name.to_string()));
        }

        if !preview.has_class(ATTACHMENT_ROUNDED_CLASS) {
            return None;
        }
        if preview.class_contains(REMOVED_BORDER) {
            Some((MarkerTag::Removed, title))
        } else if preview.class_contains(ADDED_BORDER) {
            Some((MarkerTag::Added, title))
        } else {
            None
        }
    }
}
