//! Page geometry configuration.

use serde::{Deserialize, Serialize};

/// Fixed page geometry, in one consistent length unit.
///
/// Defaults describe an A4 page in millimetres with font sizes in points.
/// Missing keys fall back to the defaults when deserializing, so a caller can
/// override only what it needs:
///
/// ```rust
/// use article_press::layout::PageGeometry;
///
/// let geometry: PageGeometry = serde_json::from_str(r#"{"margin": 20}"#)?;
/// assert_eq!(geometry.margin, 20.0);
/// assert_eq!(geometry.page_height, 297.0);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageGeometry {
    /// Page width.
    ///
    /// Default: `210.0`
    pub page_width: f32,

    /// Page height.
    ///
    /// Default: `297.0`
    pub page_height: f32,

    /// Margin applied on all four sides.
    ///
    /// Default: `15.0`
    pub margin: f32,

    /// Line height of body text.
    ///
    /// Default: `4.5`
    pub line_height: f32,

    /// Line height of headings.
    ///
    /// Default: `5.5`
    pub heading_line_height: f32,

    /// Heading font size in points.
    ///
    /// Default: `13.0`
    pub heading_font_size: f32,

    /// Body font size in points.
    ///
    /// Default: `10.0`
    pub body_font_size: f32,

    /// Extra space before a heading that does not open a page.
    ///
    /// Default: `4.0`
    pub heading_leading: f32,

    /// Space after a text block.
    ///
    /// Default: `4.0`
    pub paragraph_gap: f32,

    /// Space after a heading.
    ///
    /// Default: `6.0`
    pub heading_gap: f32,

    /// Space after an image.
    ///
    /// Default: `10.0`
    pub image_gap: f32,

    /// Title font size in points (front matter).
    ///
    /// Default: `20.0`
    pub title_font_size: f32,

    /// Title line height (front matter).
    ///
    /// Default: `8.0`
    pub title_line_height: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: 15.0,
            line_height: 4.5,
            heading_line_height: 5.5,
            heading_font_size: 13.0,
            body_font_size: 10.0,
            heading_leading: 4.0,
            paragraph_gap: 4.0,
            heading_gap: 6.0,
            image_gap: 10.0,
            title_font_size: 20.0,
            title_line_height: 8.0,
        }
    }
}

impl PageGeometry {
    /// Page width minus both side margins.
    #[must_use]
    pub fn usable_width(&self) -> f32 {
        (self.page_width - 2.0 * self.margin).max(0.0)
    }

    /// Page height minus top and bottom margins.
    #[must_use]
    pub fn usable_height(&self) -> f32 {
        (self.page_height - 2.0 * self.margin).max(0.0)
    }

    /// Lowest y coordinate content may reach.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.margin + self.usable_height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_defaults() {
        let g = PageGeometry::default();
        assert_eq!(g.usable_width(), 180.0);
        assert_eq!(g.usable_height(), 267.0);
        assert_eq!(g.bottom(), 282.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let g: PageGeometry =
            serde_json::from_str(r#"{"pageWidth": 100, "lineHeight": 6}"#).unwrap();
        assert_eq!(g.page_width, 100.0);
        assert_eq!(g.line_height, 6.0);
        assert_eq!(g.margin, 15.0);
        assert_eq!(g.usable_width(), 70.0);
    }

    #[test]
    fn test_degenerate_margins_clamp() {
        let g = PageGeometry {
            margin: 200.0,
            ..PageGeometry::default()
        };
        assert_eq!(g.usable_width(), 0.0);
        assert_eq!(g.usable_height(), 0.0);
    }
}
