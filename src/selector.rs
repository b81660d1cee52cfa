//! Table selection by markup content.

use crate::dom::HtmlElement;

/// Whether `table` should be kept for the given `pattern`.
///
/// Without a pattern every table is kept. With one, the table's serialized
/// markup (tags and attributes included) must contain it as a substring.
#[must_use]
pub fn matches<E: HtmlElement>(table: &E, pattern: Option<&str>) -> bool {
    pattern.is_none_or(|p| table.outer_html().contains(p))
}
