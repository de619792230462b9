//! Block builder.
//!
//! Turns admitted candidates into typed blocks: attaches inline links to
//! text and decides heading vs. paragraph from measured style.

use crate::dom::{normalize_whitespace, ComputedStyle, Element};
use crate::options::Options;
use crate::result::{Block, Link};
use crate::url_utils::is_script_url;

/// Whether measured style marks text as a heading.
///
/// Monotonic: raising size or weight past its threshold never turns a
/// heading back into text.
#[must_use]
pub fn is_heading_style(style: &ComputedStyle, options: &Options) -> bool {
    style.font_size > options.heading_font_size || style.font_weight >= options.heading_font_weight
}

/// Build the block for an admitted text container.
#[must_use]
pub fn build_text_block(container: &Element, content: String, options: &Options) -> Block {
    if is_heading_style(&container.style, options) {
        return Block::Heading { content };
    }
    let links = attach_links(&content, container);
    Block::Text { content, links }
}

/// Attach the container's descendant anchors to `content`.
///
/// Each anchor text is searched for starting at the end of the previous
/// match. This is greedy and never backtracks: when a text appears more than
/// once only the first remaining occurrence is linked, and an anchor whose
/// text cannot be found is dropped as a link (its text still belongs to the
/// content).
#[must_use]
pub fn attach_links(content: &str, container: &Element) -> Vec<Link> {
    let mut links = Vec::new();
    let mut cursor = 0;

    for anchor in container.self_and_descendants().skip(1).filter(|e| e.is("a")) {
        let Some(url) = anchor.url.as_deref().map(str::trim) else {
            continue;
        };
        if url.is_empty() || is_script_url(url) {
            continue;
        }
        let text = normalize_whitespace(&anchor.text_content());
        if text.is_empty() {
            continue;
        }

        if let Some(offset) = content[cursor..].find(text.as_str()) {
            cursor += offset + text.len();
            links.push(Link {
                text,
                url: url.to_string(),
            });
        }
    }

    links
}
