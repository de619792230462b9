//! # article-press
//!
//! Article extraction into typed content blocks, and fixed-size pagination
//! of those blocks.
//!
//! The input is a DOM snapshot of a rendered article page: a tree of nodes
//! carrying tag, role, text, computed font size and weight, and resolved
//! image/link URLs. Snapshots come from a [`source::PageSource`], from JSON
//! ([`dom::from_json`]) or from plain HTML ([`dom::from_html`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use article_press::layout::ImageSize;
//! use article_press::{extract, paginate, Block, PageGeometry};
//! use std::collections::HashMap;
//!
//! let html = r#"<html><body><article>
//!     <h1>Why Snapshots Matter</h1>
//!     <p>The first paragraph of the article body.</p>
//!     <p>3:45 PM</p>
//! </article></body></html>"#;
//!
//! let result = extract(html);
//! assert_eq!(result.document.title, "Why Snapshots Matter");
//! assert_eq!(result.document.blocks, vec![Block::text("The first paragraph of the article body.")]);
//!
//! let mut images: HashMap<String, ImageSize> = HashMap::new();
//! let layout = paginate(&result.document.blocks, &PageGeometry::default(), &mut images);
//! assert_eq!(layout.pages.len(), 1);
//! ```
//!
//! ## Features
//!
//! - **Block Extraction**: Text, headings and images in document order, with
//!   inline links attached to their text
//! - **Noise Filtering**: Timestamps, dates, metadata strips and duplicates
//!   are dropped by an ordered table of named rules
//! - **Metadata**: Title, author, handle and avatar, with placeholders when absent
//! - **Pagination**: Line-level text flow and atomic, height-capped images
//! - **Configurable**: Style thresholds and page geometry are plain structs

mod error;
mod options;
mod patterns;
mod result;

/// DOM snapshot model and HTML adapter.
pub mod dom;

/// Main content extraction module (classifier, walker, filters, builder).
pub mod extractor;

/// Title and author byline resolution.
pub mod metadata;

/// URL utilities for validation, resolution and image canonicalization.
pub mod url_utils;

/// Page acquisition seam and the URL-level extraction operation.
pub mod source;

/// Fixed-size page layout.
pub mod layout;

/// Layout renderers and file naming.
pub mod render;

// Public API - re-exports
pub use error::{Error, Result};
pub use layout::{paginate, paginate_document, Layout, PageGeometry, PrintOptions};
pub use options::Options;
pub use result::{Block, Document, ExtractResult, Link, UNKNOWN_AUTHOR, UNTITLED};
pub use source::{extract_html, extract_url, HtmlSnapshot, PageSource};

/// Extracts an article from rendered HTML using default options.
///
/// # Example
///
/// ```rust
/// use article_press::extract;
///
/// let result = extract("<html><body><p>No article here at all.</p></body></html>");
/// assert!(result.document.blocks.is_empty());
/// assert_eq!(result.warnings.len(), 1);
/// ```
#[must_use]
pub fn extract(html: &str) -> ExtractResult {
    extract_with_options(html, &Options::default())
}

/// Extracts an article from rendered HTML with custom options.
///
/// # Example
///
/// ```rust
/// use article_press::{extract_with_options, Options};
///
/// let html = r#"<article><p style="font-size: 22px">A large line of text</p></article>"#;
/// let options = Options {
///     heading_font_size: 24.0,
///     ..Options::default()
/// };
/// let result = extract_with_options(html, &options);
/// assert!(matches!(result.document.blocks[0], article_press::Block::Text { .. }));
/// ```
#[must_use]
pub fn extract_with_options(html: &str, options: &Options) -> ExtractResult {
    source::extract_html(html, "", options)
}

/// Extracts an article from a JSON-encoded snapshot.
///
/// # Errors
///
/// Returns [`Error::ParseError`] when `json` is not a valid snapshot.
pub fn extract_snapshot(json: &str, source_url: &str, options: &Options) -> Result<ExtractResult> {
    let root = dom::from_json(json)?;
    Ok(extractor::extract_content(&root, source_url, options))
}
