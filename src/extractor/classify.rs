//! Node classifier.
//!
//! Decides whether an element can carry content. This is advisory filtering
//! only: whether accepted text renders as a heading or a paragraph is decided
//! later from measured style by the block builder.

use crate::dom::{Element, Node};

use super::tags::{heading_tag_level, INLINE_TAG_SET, OPAQUE_TAG_SET, TEXT_CONTAINER_TAG_SET};

/// Kind of content an accepted element may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// `img` with a resolved URL.
    Image,
    /// `a` element; its links are attached by the enclosing text container.
    Anchor,
    /// Paragraph-like container whose children are text or inline elements.
    TextContainer,
    /// Explicit heading (`h1`-`h6`, or `role="heading"`), with its level.
    Heading(u8),
}

/// Verdict of the classifier for a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Candidate content carrier.
    Accept(NodeKind),
    /// Not a carrier itself; descendants may still be.
    Skip,
    /// Script or control; nothing below it is content either.
    SkipSubtree,
}

/// Classify one element by tag, role, URL and children.
#[must_use]
pub fn classify(el: &Element) -> Classification {
    let tag = el.tag.as_str();

    if OPAQUE_TAG_SET.contains(tag) {
        return Classification::SkipSubtree;
    }

    if el.is("img") {
        let has_url = el.url.as_deref().is_some_and(|u| !u.trim().is_empty());
        return if has_url {
            Classification::Accept(NodeKind::Image)
        } else {
            Classification::Skip
        };
    }

    if el.is("a") {
        return Classification::Accept(NodeKind::Anchor);
    }

    if let Some(level) = heading_level(el) {
        return Classification::Accept(NodeKind::Heading(level));
    }

    if TEXT_CONTAINER_TAG_SET.contains(tag) && is_direct_text_container(el) {
        return Classification::Accept(NodeKind::TextContainer);
    }

    Classification::Skip
}

/// Heading level from the tag, or level 2 for an untagged `role="heading"`.
#[must_use]
pub fn heading_level(el: &Element) -> Option<u8> {
    heading_tag_level(&el.tag).or_else(|| el.has_role("heading").then_some(2))
}

/// True when every child is text or an inline element.
fn is_direct_text_container(el: &Element) -> bool {
    el.children.iter().all(|child| match child {
        Node::Text { .. } => true,
        Node::Element(inner) => INLINE_TAG_SET.contains(inner.tag.as_str()),
    })
}
