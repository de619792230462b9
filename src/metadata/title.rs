//! Headline resolution.

use crate::dom::Element;
use crate::extractor::classify::NodeKind;
use crate::extractor::tags::heading_tag_level;
use crate::extractor::walker::walk;
use crate::Options;

/// Resolve the article title inside `container`.
///
/// Prefers the first `h1`. Otherwise takes the first text container, in
/// document order, rendered larger than `title_font_size` whose length lies
/// strictly between `title_min_len` and `title_max_len`. Returns an empty
/// string when nothing qualifies.
#[must_use]
pub fn extract_title(container: &Element, opts: &Options) -> String {
    let explicit = container
        .find(|el| heading_tag_level(&el.tag) == Some(1))
        .map(Element::normalized_text)
        .filter(|t| !t.is_empty());
    if let Some(title) = explicit {
        return title;
    }

    walk(container)
        .filter(|c| c.kind == NodeKind::TextContainer)
        .filter(|c| c.element.style.font_size > opts.title_font_size)
        .map(|c| c.element.normalized_text())
        .find(|text| {
            let len = text.chars().count();
            len > opts.title_min_len && len < opts.title_max_len
        })
        .unwrap_or_default()
}
