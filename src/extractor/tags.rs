//! Tag catalogs used by the node classifier.
//!
//! Arrays are kept for iteration and documentation; the `HashSet` views are
//! what the classifier consults.

use std::collections::HashSet;
use std::sync::LazyLock;

// === Tag Lists (arrays for iteration) ===

/// Generic containers that may carry a paragraph of text.
pub static TEXT_CONTAINER_TAGS: [&str; 5] = ["p", "div", "span", "li", "blockquote"];

/// Inline children that keep a container "direct text": anchors, spans, formatting, breaks.
pub static INLINE_TAGS: [&str; 11] = [
    "a", "span", "b", "strong", "em", "i", "u", "code", "mark", "small", "br",
];

/// Explicit heading tags: h1-h6
pub static HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Scripts and controls whose whole subtree is never content.
pub static OPAQUE_TAGS: [&str; 12] = [
    "script", "style", "noscript", "template", "svg", "canvas", "button", "input", "select",
    "option", "textarea", "iframe",
];

// === Tag Sets (HashSets for O(1) lookup) ===

/// `TEXT_CONTAINER_TAGS` as a `HashSet`
pub static TEXT_CONTAINER_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| TEXT_CONTAINER_TAGS.into_iter().collect());

/// `INLINE_TAGS` as a `HashSet`
pub static INLINE_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| INLINE_TAGS.into_iter().collect());

/// `OPAQUE_TAGS` as a `HashSet`
pub static OPAQUE_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| OPAQUE_TAGS.into_iter().collect());

/// Level of an explicit heading tag (`h1` → 1), `None` otherwise.
#[must_use]
pub fn heading_tag_level(tag: &str) -> Option<u8> {
    HEADING_TAGS
        .iter()
        .position(|h| h.eq_ignore_ascii_case(tag))
        .map(|i| i as u8 + 1)
}
