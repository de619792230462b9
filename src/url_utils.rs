//! URL Utility Functions
//!
//! URL validation, resolution, and identity helpers used by the snapshot
//! adapter, the image deduplicator, and the service boundary.

use std::fmt;

use url::Url;

use crate::error::{Error, Result};
use crate::patterns::SOURCE_URL;

/// Check if a string is a valid absolute http(s) URL with a host.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => (true, Some(url)),
        _ => (false, None),
    }
}

/// Convert a relative or absolute URL to absolute form.
///
/// Special schemes (`data:`, `javascript:`, `mailto:`, `tel:`) are returned
/// unchanged, as is anything the base cannot resolve.
#[must_use]
pub fn create_absolute_url(url_str: &str, base: &Url) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty() {
        return String::new();
    }

    if url_str.starts_with("data:")
        || is_script_url(url_str)
        || url_str.starts_with("mailto:")
        || url_str.starts_with("tel:")
    {
        return url_str.to_string();
    }

    if is_absolute_url(url_str).0 {
        return url_str.to_string();
    }

    match base.join(url_str) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url_str.to_string(),
    }
}

/// Whether a link target runs script instead of navigating.
#[must_use]
pub fn is_script_url(url_str: &str) -> bool {
    url_str.trim_start().to_ascii_lowercase().starts_with("javascript:")
}

// === Image Identity ===

/// Identity of an image URL with its query string and fragment removed.
///
/// Two URLs that differ only after `?` or `#` are the same image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalImageKey(String);

impl CanonicalImageKey {
    /// The canonical URL text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalImageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the canonical key of an image URL.
///
/// # Examples
/// ```
/// use article_press::url_utils::canonical_image_key;
///
/// let a = canonical_image_key("https://cdn.example.com/img.jpg?x=1");
/// let b = canonical_image_key("https://cdn.example.com/img.jpg?x=2");
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "https://cdn.example.com/img.jpg");
/// ```
#[must_use]
pub fn canonical_image_key(url: &str) -> CanonicalImageKey {
    let url = url.trim();
    let base = url.split(['?', '#']).next().unwrap_or(url);
    CanonicalImageKey(base.to_string())
}

/// Rebuild an image URL from its canonical key and a fixed query string.
#[must_use]
pub fn with_image_query(key: &CanonicalImageKey, query: &str) -> String {
    let query = query.trim_start_matches('?');
    if query.is_empty() {
        return key.as_str().to_string();
    }
    format!("{}?{query}", key.as_str())
}

// === Service Boundary ===

/// Validate a source URL against the accepted article-link shape.
///
/// Runs before any acquisition or extraction work.
///
/// # Examples
/// ```
/// use article_press::url_utils::validate_source_url;
///
/// assert!(validate_source_url("https://x.com/someone/status/123").is_ok());
/// assert!(validate_source_url("https://example.com/post").is_err());
/// ```
pub fn validate_source_url(url_str: &str) -> Result<()> {
    let trimmed = url_str.trim();
    if trimmed.is_empty() {
        return Err(Error::InputInvalid("URL is required".to_string()));
    }
    if !SOURCE_URL.is_match(trimmed) {
        return Err(Error::InputInvalid(format!(
            "{trimmed} is not an X/Twitter status link"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("https://example.com/a").0);
        assert!(!is_absolute_url("/relative/path").0);
        assert!(!is_absolute_url("ftp://example.com").0);
        assert!(!is_absolute_url("").0);
    }

    #[test]
    fn test_create_absolute_url() {
        let base = Url::parse("https://example.com/blog/post").expect("base");
        assert_eq!(create_absolute_url("/img/a.png", &base), "https://example.com/img/a.png");
        assert_eq!(create_absolute_url("b.png", &base), "https://example.com/blog/b.png");
        assert_eq!(
            create_absolute_url("https://other.com/c.png", &base),
            "https://other.com/c.png"
        );
        assert_eq!(create_absolute_url("javascript:void(0)", &base), "javascript:void(0)");
    }

    #[test]
    fn test_is_script_url() {
        assert!(is_script_url("javascript:void(0)"));
        assert!(is_script_url("  JavaScript:alert(1)"));
        assert!(!is_script_url("https://example.com/javascript"));
    }

    #[test]
    fn test_canonical_key_ignores_query_and_fragment() {
        let plain = canonical_image_key("https://pbs.twimg.com/media/abc.jpg");
        assert_eq!(canonical_image_key("https://pbs.twimg.com/media/abc.jpg?format=jpg&name=small"), plain);
        assert_eq!(canonical_image_key("https://pbs.twimg.com/media/abc.jpg#top"), plain);
        assert_ne!(canonical_image_key("https://pbs.twimg.com/media/abd.jpg"), plain);
    }

    #[test]
    fn test_canonical_key_idempotent() {
        for url in [
            "https://a.com/img.jpg?x=1",
            "https://a.com/img.jpg",
            "img.jpg?x=1#frag",
            "",
        ] {
            let once = canonical_image_key(url);
            let twice = canonical_image_key(once.as_str());
            assert_eq!(once, twice, "canonicalization not idempotent for {url}");
        }
    }

    #[test]
    fn test_with_image_query() {
        let key = canonical_image_key("https://pbs.twimg.com/media/abc?format=png&name=small");
        assert_eq!(
            with_image_query(&key, "format=jpg&name=large"),
            "https://pbs.twimg.com/media/abc?format=jpg&name=large"
        );
        assert_eq!(with_image_query(&key, ""), "https://pbs.twimg.com/media/abc");
    }

    #[test]
    fn test_validate_source_url() {
        assert!(validate_source_url("https://twitter.com/jack/status/20").is_ok());
        assert!(matches!(validate_source_url(""), Err(Error::InputInvalid(_))));
        assert!(matches!(
            validate_source_url("https://x.com/jack"),
            Err(Error::InputInvalid(_))
        ));
    }
}
