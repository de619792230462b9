//! Error types for article-press.
//!
//! Only input and acquisition failures are fatal end to end. An article
//! without usable content is not an error: extraction returns an empty
//! `Document` and records a warning instead.

/// Error type for extraction and layout operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source URL does not match the accepted article-link pattern.
    #[error("Invalid source URL: {0}")]
    InputInvalid(String),

    /// The page source could not produce a DOM snapshot.
    #[error("Page acquisition failed: {0}")]
    AcquisitionFailed(String),

    /// A snapshot could not be decoded into a node tree.
    #[error("Snapshot parsing failed: {0}")]
    ParseError(String),

    /// An image could not be fetched or measured during layout.
    #[error("Image load failed for {url}: {reason}")]
    ImageLoadFailed {
        /// URL of the image that failed.
        url: String,
        /// Human-readable failure reason.
        reason: String,
    },

    /// A renderer could not emit its artifact.
    #[error("Rendering failed: {0}")]
    RenderError(String),
}

/// Result type alias for extraction and layout operations.
pub type Result<T> = std::result::Result<T, Error>;
