//! Result types for extraction output.
//!
//! These types serialize to the camelCase JSON schema consumed by the
//! paginator and by any viewer.

use serde::{Deserialize, Serialize};

/// Title used when no headline could be resolved.
pub const UNTITLED: &str = "Untitled Article";

/// Author used when no byline could be resolved.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// An inline link attached to a text block.
///
/// `text` occurs verbatim in the block content, after the previous link's match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Visible anchor text.
    pub text: String,
    /// Absolute link target.
    pub url: String,
}

/// Minimal typed unit of document content.
///
/// Blocks are immutable once built; their order is the reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    /// Body paragraph, with inline links in match order.
    Text {
        content: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        links: Vec<Link>,
    },
    /// Section heading.
    Heading { content: String },
    /// Image placed in the reading flow.
    Image { url: String },
}

impl Block {
    /// Text block without links.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            links: Vec::new(),
        }
    }

    #[must_use]
    pub fn heading(content: impl Into<String>) -> Self {
        Self::Heading {
            content: content.into(),
        }
    }

    #[must_use]
    pub fn image(url: impl Into<String>) -> Self {
        Self::Image { url: url.into() }
    }

    /// Textual content of text and heading blocks.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Text { content, .. } | Self::Heading { content } => Some(content),
            Self::Image { .. } => None,
        }
    }

    /// URL of image blocks.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        match self {
            Self::Image { url } => Some(url),
            _ => None,
        }
    }

    /// Inline links of text blocks; empty for everything else.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        match self {
            Self::Text { links, .. } => links,
            _ => &[],
        }
    }
}

/// An extracted article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Headline, or [`UNTITLED`] when none was found.
    pub title: String,

    /// Display name of the author, or [`UNKNOWN_AUTHOR`].
    pub author: String,

    /// Author handle including the `@` marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_handle: Option<String>,

    /// Author avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_avatar: Option<String>,

    /// URL of the first image block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,

    /// Content blocks in reading order.
    pub blocks: Vec<Block>,

    /// Leading text of the article, at most 200 characters.
    pub summary: String,

    /// One to three topic tags.
    pub tags: Vec<String>,

    /// URL the article was acquired from.
    pub source_url: String,
}

impl Document {
    /// Text and heading contents in reading order.
    pub fn text_contents(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(Block::content)
    }

    /// Text and heading contents joined by blank lines.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.text_contents().collect::<Vec<_>>().join("\n\n")
    }

    /// Every image block URL in reading order.
    #[must_use]
    pub fn image_urls(&self) -> Vec<&str> {
        self.blocks.iter().filter_map(Block::image_url).collect()
    }
}

/// Result of extracting a document from a snapshot.
#[derive(Debug, Clone)]
pub struct ExtractResult {
    /// The extracted document; structurally valid even when empty.
    pub document: Document,

    /// Non-fatal issues encountered during extraction, such as a missing
    /// article container or zero usable blocks.
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_schema() {
        let block = Block::Text {
            content: "Please click here now".to_string(),
            links: vec![Link {
                text: "click here".to_string(),
                url: "https://example.com".to_string(),
            }],
        };
        let json = serde_json::to_value(&block).expect("serialize");
        assert_eq!(json["type"], "text");
        assert_eq!(json["content"], "Please click here now");
        assert_eq!(json["links"][0]["text"], "click here");

        let plain = serde_json::to_value(Block::text("No links here")).expect("serialize");
        assert!(plain.get("links").is_none());

        let image = serde_json::to_value(Block::image("https://a.com/i.jpg")).expect("serialize");
        assert_eq!(image["type"], "image");
        assert_eq!(image["url"], "https://a.com/i.jpg");
    }

    #[test]
    fn test_document_schema_uses_camel_case() {
        let doc = Document {
            title: "Title".to_string(),
            author: "Ada".to_string(),
            author_handle: Some("@ada".to_string()),
            author_avatar: None,
            cover_image: Some("https://a.com/c.jpg".to_string()),
            blocks: vec![Block::image("https://a.com/c.jpg"), Block::heading("Intro")],
            summary: "Intro".to_string(),
            tags: vec!["Twitter".to_string(), "Article".to_string()],
            source_url: "https://x.com/ada/status/1".to_string(),
        };
        let json = serde_json::to_value(&doc).expect("serialize");
        assert_eq!(json["authorHandle"], "@ada");
        assert_eq!(json["coverImage"], "https://a.com/c.jpg");
        assert_eq!(json["sourceUrl"], "https://x.com/ada/status/1");
        assert!(json.get("authorAvatar").is_none());

        let back: Document = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, doc);
    }

    #[test]
    fn test_document_accessors() {
        let doc = Document {
            title: UNTITLED.to_string(),
            author: UNKNOWN_AUTHOR.to_string(),
            author_handle: None,
            author_avatar: None,
            cover_image: None,
            blocks: vec![
                Block::heading("First"),
                Block::image("https://a.com/1.jpg"),
                Block::text("Second paragraph"),
            ],
            summary: String::new(),
            tags: Vec::new(),
            source_url: String::new(),
        };
        assert_eq!(doc.plain_text(), "First\n\nSecond paragraph");
        assert_eq!(doc.image_urls(), vec!["https://a.com/1.jpg"]);
    }
}
