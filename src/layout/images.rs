//! Image dimension resolution for layout.
//!
//! The paginator only needs an image's natural size to place it. Sizes come
//! from an [`ImageSource`]: a precomputed map, or [`FetchedImages`], which
//! fetches bytes through a caller-supplied function and probes the header.

use std::collections::HashMap;
use std::io::Cursor;

use image::ImageReader;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Natural pixel size of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Height over width, `None` for a degenerate size.
    #[must_use]
    pub fn aspect_ratio(self) -> Option<f32> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(self.height as f32 / self.width as f32)
    }
}

/// Resolves image URLs to natural sizes.
pub trait ImageSource {
    /// Natural size of the image at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ImageLoadFailed`] when the image cannot be fetched
    /// or decoded. The paginator skips such images.
    fn size(&mut self, url: &str) -> Result<ImageSize>;
}

impl ImageSource for HashMap<String, ImageSize> {
    fn size(&mut self, url: &str) -> Result<ImageSize> {
        self.get(url).copied().ok_or_else(|| Error::ImageLoadFailed {
            url: url.to_string(),
            reason: "size unknown".to_string(),
        })
    }
}

/// Image source that fetches bytes and reads dimensions from the header.
///
/// Sizes are cached per URL, so a repeated image is fetched once.
pub struct FetchedImages<F> {
    fetch: F,
    cache: HashMap<String, ImageSize>,
}

impl<F> FetchedImages<F>
where
    F: FnMut(&str) -> Result<Vec<u8>>,
{
    pub fn new(fetch: F) -> Self {
        Self {
            fetch,
            cache: HashMap::new(),
        }
    }
}

impl<F> ImageSource for FetchedImages<F>
where
    F: FnMut(&str) -> Result<Vec<u8>>,
{
    fn size(&mut self, url: &str) -> Result<ImageSize> {
        if let Some(size) = self.cache.get(url) {
            return Ok(*size);
        }

        let bytes = (self.fetch)(url).map_err(|e| match e {
            Error::ImageLoadFailed { .. } => e,
            other => Error::ImageLoadFailed {
                url: url.to_string(),
                reason: other.to_string(),
            },
        })?;
        let size = probe_size(&bytes).map_err(|e| Error::ImageLoadFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        self.cache.insert(url.to_string(), size);
        Ok(size)
    }
}

/// Read image dimensions from encoded bytes without decoding pixels.
pub fn probe_size(bytes: &[u8]) -> image::ImageResult<ImageSize> {
    let (width, height) = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()?;
    Ok(ImageSize { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, RgbImage};

    fn png(width: u32, height: u32) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(RgbImage::new(width, height))
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_probe_png() {
        assert_eq!(probe_size(&png(8, 3)).unwrap(), ImageSize::new(8, 3));
    }

    #[test]
    fn test_probe_garbage_fails() {
        assert!(probe_size(b"not an image").is_err());
    }

    #[test]
    fn test_fetched_images_caches() {
        let mut fetches = 0;
        let bytes = png(4, 2);
        let mut source = FetchedImages::new(|_: &str| {
            fetches += 1;
            Ok(bytes.clone())
        });

        assert_eq!(source.size("https://a.com/i.png").unwrap(), ImageSize::new(4, 2));
        assert_eq!(source.size("https://a.com/i.png").unwrap(), ImageSize::new(4, 2));
        drop(source);
        assert_eq!(fetches, 1);
    }

    #[test]
    fn test_fetch_error_becomes_image_load_failed() {
        let mut source = FetchedImages::new(|_: &str| -> Result<Vec<u8>> {
            Err(Error::AcquisitionFailed("timeout".to_string()))
        });
        let err = source.size("https://a.com/x.jpg").unwrap_err();
        assert!(matches!(err, Error::ImageLoadFailed { url, .. } if url == "https://a.com/x.jpg"));
    }

    #[test]
    fn test_map_source_unknown_url() {
        let mut map = HashMap::from([("a".to_string(), ImageSize::new(1, 1))]);
        assert!(map.size("a").is_ok());
        assert!(map.size("b").is_err());
    }

    #[test]
    fn test_aspect_ratio() {
        assert_eq!(ImageSize::new(200, 100).aspect_ratio(), Some(0.5));
        assert_eq!(ImageSize::new(0, 100).aspect_ratio(), None);
    }
}
