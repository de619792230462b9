//! Page acquisition seam.
//!
//! Rendering a live page (headless browser, remote service) happens outside
//! this crate. A [`PageSource`] hands over the finished snapshot, and
//! [`extract_url`] is the single request/response operation built on top of it.

use std::collections::HashMap;

use crate::dom::{self, Node};
use crate::error::{Error, Result};
use crate::extractor::extract_content;
use crate::result::ExtractResult;
use crate::url_utils::validate_source_url;
use crate::Options;

/// Produces a DOM snapshot for an article URL.
pub trait PageSource {
    /// Acquire the rendered snapshot of `url`.
    ///
    /// # Errors
    ///
    /// Any error returned here is surfaced as [`Error::AcquisitionFailed`].
    fn acquire(&self, url: &str) -> Result<Node>;
}

impl<F> PageSource for F
where
    F: Fn(&str) -> Result<Node>,
{
    fn acquire(&self, url: &str) -> Result<Node> {
        self(url)
    }
}

/// Page source backed by pre-rendered HTML keyed by URL.
///
/// Useful for replaying captured pages and in tests.
#[derive(Debug, Clone, Default)]
pub struct HtmlSnapshot {
    pages: HashMap<String, String>,
}

impl HtmlSnapshot {
    /// Create an empty snapshot store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the rendered HTML for `url`.
    #[must_use]
    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(url.into(), html.into());
        self
    }
}

impl PageSource for HtmlSnapshot {
    fn acquire(&self, url: &str) -> Result<Node> {
        let html = self
            .pages
            .get(url)
            .ok_or_else(|| Error::AcquisitionFailed(format!("no snapshot for {url}")))?;
        Ok(dom::from_html(html, Some(url)))
    }
}

/// Validate `url`, acquire its snapshot and extract the document.
///
/// # Errors
///
/// Returns [`Error::InputInvalid`] when `url` is not an article link; the
/// source is never consulted in that case. Returns
/// [`Error::AcquisitionFailed`] when the source cannot produce a snapshot.
pub fn extract_url<S>(source: &S, url: &str, options: &Options) -> Result<ExtractResult>
where
    S: PageSource + ?Sized,
{
    validate_source_url(url)?;

    let root = source.acquire(url).map_err(|e| match e {
        Error::AcquisitionFailed(msg) => Error::AcquisitionFailed(msg),
        other => Error::AcquisitionFailed(other.to_string()),
    })?;

    log::debug!("acquired snapshot for {url}");
    Ok(extract_content(&root, url, options))
}

/// Extract a document from already-rendered HTML.
///
/// Relative `src`/`href` values resolve against `url`. The URL shape is not
/// validated here, so captured pages from any origin can be replayed.
#[must_use]
pub fn extract_html(html: &str, url: &str, options: &Options) -> ExtractResult {
    let base = if url.is_empty() { None } else { Some(url) };
    let root = dom::from_html(html, base);
    extract_content(&root, url, options)
}
