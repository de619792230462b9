//! Document assembler.
//!
//! Derives summary, tags and cover image from a finished block stream and
//! combines them with the resolved metadata into one `Document`.

use crate::metadata::Metadata;
use crate::patterns::HASHTAG;
use crate::result::{Block, Document, UNKNOWN_AUTHOR, UNTITLED};

/// Tags used when the content carries no hashtags.
pub const FALLBACK_TAGS: [&str; 2] = ["Twitter", "Article"];

/// Maximum tags taken from the content.
pub const MAX_TAGS: usize = 3;

/// Maximum summary length in characters, ellipsis included.
pub const SUMMARY_MAX_CHARS: usize = 200;

const ELLIPSIS: &str = "...";

/// Text and heading contents joined with single spaces.
fn joined_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .filter_map(Block::content)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Leading text of the document, truncated with an ellipsis past 200 characters.
#[must_use]
pub fn summarize(blocks: &[Block]) -> String {
    let all = joined_text(blocks);
    if all.chars().count() <= SUMMARY_MAX_CHARS {
        return all;
    }
    let keep = SUMMARY_MAX_CHARS - ELLIPSIS.len();
    let mut summary: String = all.chars().take(keep).collect();
    summary.push_str(ELLIPSIS);
    summary
}

/// First three hashtags in order of appearance, without the `#` marker.
#[must_use]
pub fn extract_tags(blocks: &[Block]) -> Vec<String> {
    let all = joined_text(blocks);
    let tags: Vec<String> = HASHTAG
        .captures_iter(&all)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .take(MAX_TAGS)
        .collect();

    if tags.is_empty() {
        return FALLBACK_TAGS.iter().map(|t| (*t).to_string()).collect();
    }
    tags
}

/// URL of the first image block.
#[must_use]
pub fn cover_image(blocks: &[Block]) -> Option<String> {
    blocks.iter().find_map(Block::image_url).map(str::to_string)
}

/// Combine metadata and blocks into a document.
#[must_use]
pub fn assemble(metadata: Metadata, blocks: Vec<Block>, source_url: &str) -> Document {
    let title = if metadata.title.is_empty() {
        UNTITLED.to_string()
    } else {
        metadata.title
    };

    Document {
        title,
        author: metadata.author.unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
        author_handle: metadata.author_handle,
        author_avatar: metadata.author_avatar,
        cover_image: cover_image(&blocks),
        summary: summarize(&blocks),
        tags: extract_tags(&blocks),
        blocks,
        source_url: source_url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_short_text_untouched() {
        let blocks = vec![
            Block::heading("Intro"),
            Block::image("https://a.com/i.jpg"),
            Block::text("Body text"),
        ];
        assert_eq!(summarize(&blocks), "Intro Body text");
    }

    #[test]
    fn test_summary_truncated_to_200_chars() {
        let blocks = vec![Block::text("a".repeat(150)), Block::text("b".repeat(150))];
        let summary = summarize(&blocks);
        assert_eq!(summary.chars().count(), 200);
        assert!(summary.ends_with("..."));
        assert!(summary.starts_with(&"a".repeat(150)));
    }

    #[test]
    fn test_summary_exactly_200_not_truncated() {
        let blocks = vec![Block::text("x".repeat(200))];
        assert_eq!(summarize(&blocks), "x".repeat(200));
    }

    #[test]
    fn test_summary_counts_characters_not_bytes() {
        let blocks = vec![Block::text("é".repeat(250))];
        let summary = summarize(&blocks);
        assert_eq!(summary.chars().count(), 200);
    }

    #[test]
    fn test_tags_first_three_in_order() {
        let blocks = vec![
            Block::heading("All about #rust"),
            Block::text("Also #wasm and #async plus #tokio"),
        ];
        assert_eq!(extract_tags(&blocks), vec!["rust", "wasm", "async"]);
    }

    #[test]
    fn test_tags_stop_at_non_ascii_letters() {
        let blocks = vec![Block::text("Dinner at the #café with #日本 friends #2024")];
        assert_eq!(extract_tags(&blocks), vec!["caf", "2024"]);
    }

    #[test]
    fn test_tags_fallback() {
        let blocks = vec![Block::text("No hashtags in here at all")];
        assert_eq!(extract_tags(&blocks), vec!["Twitter", "Article"]);
    }

    #[test]
    fn test_tags_ignore_image_urls() {
        let blocks = vec![Block::image("https://a.com/page#anchor")];
        assert_eq!(extract_tags(&blocks), vec!["Twitter", "Article"]);
    }

    #[test]
    fn test_assemble_placeholders_and_cover() {
        let blocks = vec![
            Block::text("Opening paragraph text"),
            Block::image("https://a.com/first.jpg"),
            Block::image("https://a.com/second.jpg"),
        ];
        let doc = assemble(Metadata::default(), blocks, "https://x.com/a/status/1");

        assert_eq!(doc.title, UNTITLED);
        assert_eq!(doc.author, UNKNOWN_AUTHOR);
        assert_eq!(doc.cover_image.as_deref(), Some("https://a.com/first.jpg"));
        assert_eq!(doc.summary, "Opening paragraph text");
        assert_eq!(doc.source_url, "https://x.com/a/status/1");
    }
}
