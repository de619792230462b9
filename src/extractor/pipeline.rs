//! Content extraction pipeline.
//!
//! Orchestrates one pass over a snapshot: locate the article container,
//! resolve metadata, walk candidates in document order, dedupe and build
//! blocks, then assemble the document. Pure and deterministic: the same
//! snapshot always yields the same document.

use crate::dom::{Element, Node};
use crate::metadata::{self, Metadata};
use crate::result::{Block, ExtractResult};
use crate::Options;

use super::assembler::assemble;
use super::builder::build_text_block;
use super::classify::NodeKind;
use super::filters::Verdict;
use super::state::Deduplicator;
use super::walker::walk;

/// Extract a document from a snapshot tree.
///
/// Never fails: a snapshot without an article container or without usable
/// content yields an empty but structurally valid document, with the reason
/// recorded in `warnings`.
#[must_use]
pub fn extract_content(root: &Node, source_url: &str, opts: &Options) -> ExtractResult {
    let mut warnings = Vec::new();

    let Some(root) = root.as_element() else {
        warnings.push("Snapshot root is not an element".to_string());
        log::warn!("extraction empty for {source_url}: snapshot root is not an element");
        return ExtractResult {
            document: assemble(Metadata::default(), Vec::new(), source_url),
            warnings,
        };
    };

    let container = find_article_container(root);
    let metadata = metadata::extract_metadata(root, container, opts);

    let blocks = match container {
        Some(container) => {
            let blocks = build_blocks(container, &metadata.title, opts);
            if blocks.is_empty() {
                warnings.push("No usable content blocks found".to_string());
                log::warn!("extraction empty for {source_url}: no usable blocks");
            }
            blocks
        }
        None => {
            warnings.push("No article container found".to_string());
            log::warn!("extraction empty for {source_url}: no article container");
            Vec::new()
        }
    };

    log::debug!(
        "extracted {} blocks from {source_url} (title: {} chars)",
        blocks.len(),
        metadata.title.chars().count()
    );

    ExtractResult {
        document: assemble(metadata, blocks, source_url),
        warnings,
    }
}

/// First `article` element (or `role="article"`) in document order.
#[must_use]
pub fn find_article_container(root: &Element) -> Option<&Element> {
    root.find(|el| el.is("article") || el.has_role("article"))
}

/// Walk `container` and build its deduplicated block stream.
///
/// Block order equals the document order of surviving candidates.
#[must_use]
pub fn build_blocks(container: &Element, title: &str, opts: &Options) -> Vec<Block> {
    let mut dedup = Deduplicator::new(title, opts);
    let mut blocks = Vec::new();

    for candidate in walk(container) {
        let el = candidate.element;
        match candidate.kind {
            NodeKind::Image => {
                if let Some(url) = el.url.as_deref().and_then(|u| dedup.admit_image(u)) {
                    blocks.push(Block::Image { url });
                }
            }
            // Links are attached by the enclosing text container
            NodeKind::Anchor => {}
            NodeKind::Heading(_) => {
                let content = el.normalized_text();
                if dedup.admit_heading(&content).is_keep() {
                    blocks.push(Block::Heading { content });
                }
            }
            NodeKind::TextContainer => {
                let content = el.normalized_text();
                match dedup.admit_text(&content) {
                    Verdict::Keep => blocks.push(build_text_block(el, content, opts)),
                    Verdict::Reject(rule) => {
                        if rule != "too_short" {
                            log::debug!("dropped <{}> by {rule}", el.tag);
                        }
                    }
                }
            }
        }
    }

    blocks
}
