//! Deduplication state.
//!
//! `Deduplicator` owns the seen-text and seen-image sets for one extraction.
//! It is created per document and dropped when the block stream is built, so
//! no state leaks between extractions.
//!
//! Known limitation: exact-string duplicates are assumed to be page chrome.
//! A paragraph legitimately repeated verbatim (a pull quote, say) is dropped
//! the second time it appears.

use std::collections::HashSet;

use crate::options::Options;
use crate::result::Block;
use crate::url_utils::{canonical_image_key, with_image_query, CanonicalImageKey};

use super::filters::{evaluate, NoiseRule, RuleContext, Verdict, HEADING_RULES, TEXT_RULES};

/// Tracks seen texts and images while a block stream is built.
pub struct Deduplicator<'o> {
    title: String,
    options: &'o Options,
    seen_texts: HashSet<String>,
    seen_images: HashSet<CanonicalImageKey>,
}

impl<'o> Deduplicator<'o> {
    /// Create a deduplicator for a document with the given (possibly empty) title.
    #[must_use]
    pub fn new(title: &str, options: &'o Options) -> Self {
        Self {
            title: title.to_string(),
            options,
            seen_texts: HashSet::new(),
            seen_images: HashSet::new(),
        }
    }

    /// Admit a text container's normalized text.
    ///
    /// Runs the noise rules, then the exact-duplicate check. Admitted text is
    /// marked seen.
    pub fn admit_text(&mut self, text: &str) -> Verdict {
        self.admit(TEXT_RULES, text)
    }

    /// Admit an explicit heading's normalized text.
    pub fn admit_heading(&mut self, text: &str) -> Verdict {
        self.admit(HEADING_RULES, text)
    }

    fn admit(&mut self, rules: &[NoiseRule], text: &str) -> Verdict {
        let ctx = RuleContext {
            title: &self.title,
            options: self.options,
        };
        let verdict = evaluate(rules, text, &ctx);
        if !verdict.is_keep() {
            return verdict;
        }
        if !self.seen_texts.insert(text.to_string()) {
            return Verdict::Reject("duplicate");
        }
        Verdict::Keep
    }

    /// Admit an image URL, returning the URL to emit.
    ///
    /// Returns `None` when the URL fails the include/exclude filters or its
    /// canonical key was already seen.
    pub fn admit_image(&mut self, url: &str) -> Option<String> {
        let url = url.trim();
        if url.is_empty() || !self.image_url_allowed(url) {
            return None;
        }

        let key = canonical_image_key(url);
        let emitted = match &self.options.image_query {
            Some(query) => with_image_query(&key, query),
            None => url.to_string(),
        };
        self.seen_images.insert(key).then_some(emitted)
    }

    fn image_url_allowed(&self, url: &str) -> bool {
        let included = self.options.image_include.is_empty()
            || self.options.image_include.iter().any(|p| url.contains(p.as_str()));
        let excluded = self.options.image_exclude.iter().any(|p| url.contains(p.as_str()));
        included && !excluded
    }
}

/// Run an existing block stream through a fresh deduplicator.
///
/// Headings are checked against the heading rules and text blocks against the
/// text rules; images by canonical key. Applying this to its own output
/// returns the same stream.
#[must_use]
pub fn dedupe_blocks(blocks: &[Block], title: &str, options: &Options) -> Vec<Block> {
    let mut dedup = Deduplicator::new(title, options);
    blocks
        .iter()
        .filter_map(|block| match block {
            Block::Text { content, .. } => dedup.admit_text(content).is_keep().then(|| block.clone()),
            Block::Heading { content } => dedup.admit_heading(content).is_keep().then(|| block.clone()),
            Block::Image { url } => dedup.admit_image(url).map(Block::image),
        })
        .collect()
}
