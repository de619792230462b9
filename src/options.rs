//! Configuration options for content extraction.
//!
//! The `Options` struct carries every threshold the extraction heuristics use.
//! The style thresholds were tuned against a single site's stylesheet, so they
//! are plain fields rather than constants.

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings, or [`Options::x_article`] for X/Twitter article pages.
///
/// # Example
///
/// ```rust
/// use article_press::Options;
///
/// let options = Options {
///     heading_font_size: 20.0,
///     ..Options::default()
/// };
/// assert_eq!(options.heading_font_weight, 600);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Text rendered strictly larger than this becomes a heading.
    ///
    /// Default: `18.0`
    pub heading_font_size: f32,

    /// Text rendered at or above this weight becomes a heading.
    ///
    /// Default: `600`
    pub heading_font_weight: u16,

    /// Minimum font size (exclusive) for a styled title candidate.
    ///
    /// Only consulted when the article has no explicit top-level heading.
    ///
    /// Default: `24.0`
    pub title_font_size: f32,

    /// Lower bound (exclusive) on title length in characters.
    ///
    /// Default: `10`
    pub title_min_len: usize,

    /// Upper bound (exclusive) on title length in characters.
    ///
    /// Default: `200`
    pub title_max_len: usize,

    /// Text candidates must be strictly longer than this (trimmed characters).
    ///
    /// Default: `10`
    pub min_text_len: usize,

    /// Strings shorter than this containing a middle dot are metadata.
    ///
    /// Default: `50`
    pub separator_max_len: usize,

    /// Image URLs must contain one of these substrings. Empty accepts all.
    ///
    /// Default: empty
    pub image_include: Vec<String>,

    /// Image URLs containing any of these substrings are ignored.
    ///
    /// Default: `["profile_images"]`
    pub image_exclude: Vec<String>,

    /// Query string re-attached to canonical image URLs.
    ///
    /// When `None`, the first occurrence's URL is kept unchanged.
    ///
    /// Default: `None`
    pub image_query: Option<String>,

    /// Role marking the byline container holding author name and handle.
    ///
    /// Default: `"User-Name"`
    pub author_role: String,

    /// Substring identifying the author's avatar image URL.
    ///
    /// Default: `"profile_images"`
    pub avatar_marker: String,
}

impl Options {
    /// Preset for X/Twitter article pages.
    ///
    /// Only media images are kept and each is requested at its large JPEG rendition.
    #[must_use]
    pub fn x_article() -> Self {
        Self {
            image_include: vec!["pbs.twimg.com/media".to_string()],
            image_query: Some("format=jpg&name=large".to_string()),
            ..Self::default()
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            heading_font_size: 18.0,
            heading_font_weight: 600,
            title_font_size: 24.0,
            title_min_len: 10,
            title_max_len: 200,
            min_text_len: 10,
            separator_max_len: 50,
            image_include: Vec::new(),
            image_exclude: vec!["profile_images".to_string()],
            image_query: None,
            author_role: "User-Name".to_string(),
            avatar_marker: "profile_images".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_thresholds() {
        let opts = Options::default();

        assert_eq!(opts.heading_font_size, 18.0);
        assert_eq!(opts.heading_font_weight, 600);
        assert_eq!(opts.title_font_size, 24.0);
        assert_eq!(opts.title_min_len, 10);
        assert_eq!(opts.title_max_len, 200);
        assert_eq!(opts.min_text_len, 10);
        assert_eq!(opts.separator_max_len, 50);
        assert!(opts.image_include.is_empty());
        assert_eq!(opts.image_exclude, vec!["profile_images".to_string()]);
        assert!(opts.image_query.is_none());
    }

    #[test]
    fn test_x_article_preset() {
        let opts = Options::x_article();

        assert_eq!(opts.image_include, vec!["pbs.twimg.com/media".to_string()]);
        assert_eq!(opts.image_query.as_deref(), Some("format=jpg&name=large"));
        // Thresholds stay at their defaults
        assert_eq!(opts.heading_font_size, 18.0);
    }

    #[test]
    fn test_custom_thresholds() {
        let opts = Options {
            heading_font_size: 22.0,
            min_text_len: 3,
            ..Options::default()
        };

        assert_eq!(opts.heading_font_size, 22.0);
        assert_eq!(opts.min_text_len, 3);
        assert_eq!(opts.heading_font_weight, 600);
    }
}
