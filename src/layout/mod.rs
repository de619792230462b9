//! Page layout module.
//!
//! Turns a finished block stream into fixed-size pages of positioned
//! fragments. Nothing here encodes an output format; a [`crate::render`]
//! renderer consumes the resulting [`Layout`].
//!
//! # Module Structure
//!
//! - `geometry`: Page size, margins, fonts and gaps
//! - `text`: Text measurement and greedy line wrapping
//! - `images`: Natural image sizes (map-backed or probed from bytes)
//! - `paginator`: The cursor state machine, front matter and footer

pub mod geometry;
pub mod images;
pub mod paginator;
pub mod text;

pub use geometry::PageGeometry;
pub use images::{probe_size, FetchedImages, ImageSize, ImageSource};
pub use paginator::{
    display_text, paginate, paginate_document, Fragment, FragmentKind, Layout, Page, Paginator,
    PrintOptions, SkippedImage,
};
pub use text::{wrap_text, AverageGlyphWidth, TextMeasure};
