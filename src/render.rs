//! Renderers for paginated layouts.
//!
//! A renderer turns a [`Layout`] into an artifact. Encoding a PDF is left to
//! integrators; [`JsonRenderer`] emits the layout itself.

use std::io::Write;

use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::patterns::FILE_STEM_UNSAFE;

/// Maximum characters of the title used for a file name.
pub const FILE_STEM_MAX_CHARS: usize = 40;

/// Fallback file stem for titles without usable characters.
const DEFAULT_STEM: &str = "article";

/// Emits a layout into a writer.
pub trait Renderer {
    /// File extension of the artifact, without the dot.
    fn extension(&self) -> &'static str;

    /// Write `layout` to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RenderError`] when the artifact cannot be written.
    fn render(&self, layout: &Layout, out: &mut dyn Write) -> Result<()>;
}

/// Writes the layout as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl Renderer for JsonRenderer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, layout: &Layout, out: &mut dyn Write) -> Result<()> {
        let written = if self.pretty {
            serde_json::to_writer_pretty(&mut *out, layout)
        } else {
            serde_json::to_writer(&mut *out, layout)
        };
        written.map_err(|e| Error::RenderError(e.to_string()))?;
        out.flush().map_err(|e| Error::RenderError(e.to_string()))
    }
}

/// File name stem derived from an article title.
///
/// Takes the first 40 characters, trims them and collapses every run of
/// non-alphanumeric characters into one `_`.
///
/// ```rust
/// use article_press::render::file_stem;
///
/// assert_eq!(file_stem("Hello, World!  2024"), "Hello_World_2024");
/// ```
#[must_use]
pub fn file_stem(title: &str) -> String {
    let head: String = title.chars().take(FILE_STEM_MAX_CHARS).collect();
    let stem = FILE_STEM_UNSAFE.replace_all(head.trim(), "_");
    let stem = stem.trim_matches('_');
    if stem.is_empty() {
        DEFAULT_STEM.to_string()
    } else {
        stem.to_string()
    }
}

/// Full file name for `title` using the renderer's extension.
#[must_use]
pub fn file_name<R: Renderer + ?Sized>(title: &str, renderer: &R) -> String {
    format!("{}.{}", file_stem(title), renderer.extension())
}
