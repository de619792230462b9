//! Metadata extraction module.
//!
//! Resolves the article headline and the author byline from a snapshot.
//! Both are best effort: missing values stay `None` (or empty for the title)
//! and the assembler substitutes placeholders.

pub mod byline;
pub mod title;

use crate::dom::Element;
use crate::Options;

pub use byline::extract_byline;
pub use title::extract_title;

/// Metadata resolved from a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    /// Resolved headline; empty when none qualified.
    pub title: String,

    /// Author display name.
    pub author: Option<String>,

    /// Author handle including the `@` marker.
    pub author_handle: Option<String>,

    /// Author avatar image URL.
    pub author_avatar: Option<String>,
}

/// Extract title and byline.
///
/// # Arguments
/// * `root` - Snapshot root; the byline may sit outside the article container
/// * `container` - Article container, if one was found; the avatar is taken from it
/// * `opts` - Extraction options (title thresholds, byline role, avatar marker)
#[must_use]
pub fn extract_metadata(root: &Element, container: Option<&Element>, opts: &Options) -> Metadata {
    let title = container.map(|c| extract_title(c, opts)).unwrap_or_default();
    let byline = extract_byline(root, container, opts);

    Metadata {
        title,
        author: byline.name,
        author_handle: byline.handle,
        author_avatar: byline.avatar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_metadata_without_container() {
        let root = Element::new("html").with_child(
            Element::new("div")
                .with_role("User-Name")
                .with_child(Element::new("span").with_text("Ada Lovelace"))
                .with_child(Element::new("span").with_text("@ada")),
        );
        let metadata = extract_metadata(&root, None, &Options::default());

        assert!(metadata.title.is_empty());
        assert_eq!(metadata.author.as_deref(), Some("Ada Lovelace"));
        assert_eq!(metadata.author_handle.as_deref(), Some("@ada"));
        assert!(metadata.author_avatar.is_none());
    }
}
