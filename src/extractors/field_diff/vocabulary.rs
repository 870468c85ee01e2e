// Markup vocabulary of Airtable's row-activity diff rendering
//
// Every class name, style fragment, icon reference and title phrase the
// extractors look for is declared here. The vocabulary belongs to Airtable's
// web client and drifts between UI versions; alternate encodings of the same
// state are listed together as ordered signal lists.

use crate::extractors::base::Element;

// Field container and its metadata carriers
pub(super) const FIELD_CONTAINER_CLASS: &str = "historicalCellContainer";
pub(super) const HEADER_CLASSES: &[&str] = &["micro", "strong", "caps"];
pub(super) const COLUMN_ID_ATTR: &str = "columnid";
pub(super) const VALUE_CONTAINER_CLASS: &str = "historicalCellValue";
pub(super) const COLUMN_TYPE_ATTR: &str = "data-columntype";

// Color / strike states
pub(super) const NEGATIVE_BACKGROUND: &str = "colors-background-negative";
pub(super) const NEGATIVE_FOREGROUND: &str = "colors-foreground-accent-negative";
pub(super) const SUCCESS_BACKGROUND: &str = "colors-background-success";
pub(super) const STRIKETHROUGH_CLASS: &str = "strikethrough";
pub(super) const LINE_THROUGH_STYLE: &str = "line-through";

// Choice pills
pub(super) const CHOICE_TOKEN_CLASS: &str = "choiceToken";
pub(super) const TRUNCATED_LABEL_CLASS: &str = "truncate-pre";
pub(super) const PLUS_ICON_REF: &str = "#Plus";
pub(super) const ICON_REF_ATTRS: &[&str] = &["href", "xlink:href"];
pub(super) const ADDED_PILL_SUFFIX: &str = " +";

// Checkbox
pub(super) const CHECKBOX_REMOVED_CLASS: &str = "redLight2";
pub(super) const CHECKBOX_ADDED_CLASS: &str = "greenLight2";
pub(super) const CHECKED_TEXT: &str = "True";

// Attachments
pub(super) const ATTACHMENT_PREVIEW_CLASS: &str = "preview";
pub(super) const ATTACHMENT_ROUNDED_CLASS: &str = "rounded";
pub(super) const REMOVED_TITLE_SUFFIX: &str = " was removed";
pub(super) const ADDED_TITLE_SUFFIX: &str = " was added";
pub(super) const REMOVED_BORDER: &str = "border-red-light1";
pub(super) const ADDED_BORDER: &str = "border-green-light1";

// Rating
pub(super) const RATING_CONTAINER_CLASS: &str = "ratingContainer";
pub(super) const INVISIBLE_CLASS: &str = "invisible";
pub(super) const FILL_ATTR: &str = "fill";

// Linked records
pub(super) const FOREIGN_RECORD_CLASS: &str = "foreignRecord";
pub(super) const REMOVED_CLASS: &str = "removed";
pub(super) const ADDED_CLASS: &str = "added";

// Fallback new-value leaf
pub(super) const FLEX_AUTO_CLASS: &str = "flex-auto";

/// One way the UI marks an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Signal {
    /// `[class*="..."]`
    ClassContains(&'static str),
    /// `.token`
    ClassToken(&'static str),
    /// `[style*="..."]`
    StyleContains(&'static str),
}

impl Signal {
    pub(super) fn matches(&self, element: &Element) -> bool {
        match *self {
            Signal::ClassContains(fragment) => element.class_contains(fragment),
            Signal::ClassToken(token) => element.has_class(token),
            Signal::StyleContains(fragment) => element.style_contains(fragment),
        }
    }
}

/// True when any signal in the list marks the element
pub(super) fn any_signal(signals: &[Signal], element: &Element) -> bool {
    signals.iter().any(|signal| signal.matches(element))
}

/// Deleted text in scalar fields, across UI versions
pub(super) const REMOVED_TEXT_SIGNALS: &[Signal] = &[
    Signal::ClassContains(NEGATIVE_BACKGROUND),
    Signal::ClassContains(NEGATIVE_FOREGROUND),
    Signal::ClassContains(STRIKETHROUGH_CLASS),
    Signal::StyleContains(LINE_THROUGH_STYLE),
];

/// Inserted text in scalar fields
pub(super) const ADDED_TEXT_SIGNALS: &[Signal] = &[Signal::ClassContains(SUCCESS_BACKGROUND)];

/// Struck-through choice pills
pub(super) const STRUCK_PILL_SIGNALS: &[Signal] = &[
    Signal::StyleContains(LINE_THROUGH_STYLE),
    Signal::ClassContains(STRIKETHROUGH_CLASS),
];

/// Checkbox states on the value container's descendants
pub(super) const CHECKBOX_REMOVED_SIGNALS: &[Signal] = &[Signal::ClassToken(CHECKBOX_REMOVED_CLASS)];
pub(super) const CHECKBOX_ADDED_SIGNALS: &[Signal] = &[Signal::ClassToken(CHECKBOX_ADDED_CLASS)];

/// Rating container colors
pub(super) const RATING_REMOVED_SIGNALS: &[Signal] = &[Signal::ClassContains(NEGATIVE_BACKGROUND)];
pub(super) const RATING_ADDED_SIGNALS: &[Signal] = &[Signal::ClassContains(SUCCESS_BACKGROUND)];

/// True when an `svg > use` icon below `element` references `icon_ref`
pub(super) fn has_icon(element: &Element, icon_ref: &str) -> bool {
    element
        .find_descendant(|el| {
            el.is_tag("use")
                && ICON_REF_ATTRS
                    .iter()
                    .any(|attr| el.attr_contains(attr, icon_ref))
                && el.parent().is_some_and(|p| p.is_tag("svg"))
        })
        .is_some()
}
