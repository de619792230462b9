//! Fixed-size page layout.
//!
//! A single cursor `(page, y)` walks the block stream in order. Text and
//! headings are wrapped to the usable width and may continue on the next
//! page at a line boundary; images are scaled to the full usable width,
//! capped at the usable height and always placed whole.

use std::mem;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::result::{Block, Document, Link};

use super::geometry::PageGeometry;
use super::images::ImageSource;
use super::text::{wrap_text, AverageGlyphWidth, TextMeasure};

const HEADER_FONT_SIZE: f32 = 8.0;
const HEADER_ADVANCE: f32 = 10.0;
const BYLINE_ADVANCE: f32 = 10.0;
const RULE_THICKNESS: f32 = 0.3;
const RULE_ADVANCE: f32 = 12.0;
const FOOTER_SPACE: f32 = 15.0;
const FOOTER_RULE_ADVANCE: f32 = 8.0;

/// What a placed fragment shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FragmentKind {
    Text,
    Heading,
    Image,
    Title,
    Byline,
    Rule,
    Header,
    Footer,
}

/// A positioned piece of content in page-local coordinates.
///
/// `y` is the top edge. Text fragments hold one wrapped line each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    pub kind: FragmentKind,

    /// Index of the source block, for fragments laid out from blocks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Image URL, for image fragments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Fragment {
    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// One output page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// 0-based page number.
    pub index: usize,
    pub fragments: Vec<Fragment>,
}

impl Page {
    fn new(index: usize) -> Self {
        Self {
            index,
            fragments: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// An image left out of the layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedImage {
    pub url: String,
    pub reason: String,
}

/// Paginated output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Pages in creation order; never empty.
    pub pages: Vec<Page>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_images: Vec<SkippedImage>,
}

impl Layout {
    /// Every fragment with its page index, in placement order.
    pub fn fragments(&self) -> impl Iterator<Item = (usize, &Fragment)> {
        self.pages
            .iter()
            .flat_map(|p| p.fragments.iter().map(move |f| (p.index, f)))
    }
}

/// Front matter and footer settings for [`paginate_document`].
#[derive(Debug, Clone)]
pub struct PrintOptions {
    /// Label at the top left of the first page.
    ///
    /// Default: `"X Article Archive"`
    pub header_label: String,

    /// Date printed at the top right; today when `None`.
    pub date: Option<NaiveDate>,

    /// Last footer line.
    ///
    /// Default: `"Generated with Article Reader"`
    pub colophon: String,

    /// Lay out header, title, byline and rule before the blocks.
    ///
    /// Default: `true`
    pub front_matter: bool,

    /// Lay out the source footer after the blocks.
    ///
    /// Default: `true`
    pub footer: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            header_label: "X Article Archive".to_string(),
            date: None,
            colophon: "Generated with Article Reader".to_string(),
            front_matter: true,
            footer: true,
        }
    }
}

/// Cursor-driven page layout engine.
pub struct Paginator<'g, M = AverageGlyphWidth> {
    geometry: &'g PageGeometry,
    measure: M,
    finished: Vec<Page>,
    page: Page,
    y: f32,
    skipped_images: Vec<SkippedImage>,
}

impl<'g> Paginator<'g> {
    /// Paginator using average glyph widths.
    #[must_use]
    pub fn new(geometry: &'g PageGeometry) -> Self {
        Self::with_measure(geometry, AverageGlyphWidth::default())
    }
}

impl<'g, M: TextMeasure> Paginator<'g, M> {
    pub fn with_measure(geometry: &'g PageGeometry, measure: M) -> Self {
        Self {
            geometry,
            measure,
            finished: Vec::new(),
            page: Page::new(0),
            y: geometry.margin,
            skipped_images: Vec::new(),
        }
    }

    /// Current `(page index, y)` cursor.
    #[must_use]
    pub fn cursor(&self) -> (usize, f32) {
        (self.page.index, self.y)
    }

    /// Lay out every block in order.
    pub fn push_blocks<I>(&mut self, blocks: &[Block], images: &mut I)
    where
        I: ImageSource + ?Sized,
    {
        for (index, block) in blocks.iter().enumerate() {
            self.push_block(index, block, images);
        }
    }

    /// Lay out one block; `index` is recorded on its fragments.
    pub fn push_block<I>(&mut self, index: usize, block: &Block, images: &mut I)
    where
        I: ImageSource + ?Sized,
    {
        let g = self.geometry;
        match block {
            Block::Text { content, links } => {
                let text = display_text(content, links);
                self.place_text(
                    FragmentKind::Text,
                    Some(index),
                    &text,
                    g.body_font_size,
                    g.line_height,
                    0.0,
                    g.paragraph_gap,
                );
            }
            Block::Heading { content } => {
                self.place_text(
                    FragmentKind::Heading,
                    Some(index),
                    content,
                    g.heading_font_size,
                    g.heading_line_height,
                    g.heading_leading,
                    g.heading_gap,
                );
            }
            Block::Image { url } => self.place_image(index, url, images),
        }
    }

    /// Header line, title, byline and separator rule.
    pub fn push_front_matter(&mut self, doc: &Document, print: &PrintOptions) {
        let g = self.geometry;
        let header_height = self.line_box(HEADER_FONT_SIZE);

        self.push(
            FragmentKind::Header,
            None,
            Some(print.header_label.clone()),
            g.margin,
            g.usable_width(),
            header_height,
        );

        let date = print
            .date
            .unwrap_or_else(|| Local::now().date_naive())
            .format("%Y-%m-%d")
            .to_string();
        let date_width = self.measure.width(&date, HEADER_FONT_SIZE).min(g.usable_width());
        let date_x = g.margin + g.usable_width() - date_width;
        self.push(FragmentKind::Header, None, Some(date), date_x, date_width, header_height);
        self.y += HEADER_ADVANCE;

        self.place_text(
            FragmentKind::Title,
            None,
            &doc.title,
            g.title_font_size,
            g.title_line_height,
            0.0,
            g.heading_gap,
        );

        let byline = match &doc.author_handle {
            Some(handle) => format!("{} {handle}", doc.author),
            None => doc.author.clone(),
        };
        self.place_text(
            FragmentKind::Byline,
            None,
            &byline,
            g.body_font_size,
            g.line_height,
            0.0,
            (BYLINE_ADVANCE - g.line_height).max(0.0),
        );

        self.place_rule();
        self.y += RULE_ADVANCE - RULE_THICKNESS;
    }

    /// Separator rule, source line and colophon.
    pub fn push_footer(&mut self, doc: &Document, print: &PrintOptions) {
        let g = self.geometry;
        let lines: Vec<String> = [
            (!doc.source_url.is_empty()).then(|| format!("Source: {}", doc.source_url)),
            (!print.colophon.is_empty()).then(|| print.colophon.clone()),
        ]
        .into_iter()
        .flatten()
        .collect();

        let line_height = self.line_box(HEADER_FONT_SIZE);
        let required = FOOTER_SPACE + FOOTER_RULE_ADVANCE + lines.len() as f32 * line_height;
        if self.y + required > g.bottom() && !self.page.is_empty() {
            self.new_page();
        } else if !self.page.is_empty() {
            self.y += FOOTER_SPACE;
        }

        self.place_rule();
        self.y += FOOTER_RULE_ADVANCE - RULE_THICKNESS;

        for line in &lines {
            let wrapped = wrap_text(line, HEADER_FONT_SIZE, g.usable_width(), &self.measure);
            self.place_lines(FragmentKind::Footer, None, wrapped, line_height);
        }
    }

    /// Finish layout; the result holds at least one page.
    #[must_use]
    pub fn finish(mut self) -> Layout {
        self.finished.push(self.page);
        Layout {
            pages: self.finished,
            skipped_images: self.skipped_images,
        }
    }

    fn new_page(&mut self) {
        let next = Page::new(self.page.index + 1);
        self.finished.push(mem::replace(&mut self.page, next));
        self.y = self.geometry.margin;
    }

    fn push(
        &mut self,
        kind: FragmentKind,
        block: Option<usize>,
        content: Option<String>,
        x: f32,
        width: f32,
        height: f32,
    ) {
        self.page.fragments.push(Fragment {
            kind,
            block,
            content,
            image: None,
            x,
            y: self.y,
            width,
            height,
        });
    }

    /// Line box height for small print, in page units.
    fn line_box(&self, font_size: f32) -> f32 {
        self.geometry.line_height * font_size / self.geometry.body_font_size.max(1.0)
    }

    #[allow(clippy::too_many_arguments)]
    fn place_text(
        &mut self,
        kind: FragmentKind,
        block: Option<usize>,
        text: &str,
        font_size: f32,
        line_height: f32,
        leading: f32,
        gap: f32,
    ) {
        let g = self.geometry;
        let lines = wrap_text(text, font_size, g.usable_width(), &self.measure);
        if lines.is_empty() {
            return;
        }

        let leading = if self.page.is_empty() { 0.0 } else { leading };
        let required = lines.len() as f32 * line_height + leading;
        if self.y + required > g.bottom() && !self.page.is_empty() {
            self.new_page();
        } else {
            self.y += leading;
        }

        self.place_lines(kind, block, lines, line_height);
        self.y += gap;
    }

    /// Place lines one by one, breaking the page at a line boundary.
    fn place_lines(
        &mut self,
        kind: FragmentKind,
        block: Option<usize>,
        lines: Vec<String>,
        line_height: f32,
    ) {
        let g = self.geometry;
        for line in lines {
            if self.y + line_height > g.bottom() && !self.page.is_empty() {
                self.new_page();
            }
            self.push(kind, block, Some(line), g.margin, g.usable_width(), line_height);
            self.y += line_height;
        }
    }

    fn place_rule(&mut self) {
        let g = self.geometry;
        if self.y + RULE_THICKNESS > g.bottom() && !self.page.is_empty() {
            self.new_page();
        }
        self.push(FragmentKind::Rule, None, None, g.margin, g.usable_width(), RULE_THICKNESS);
    }

    fn place_image<I>(&mut self, index: usize, url: &str, images: &mut I)
    where
        I: ImageSource + ?Sized,
    {
        let g = self.geometry;
        let size = match images.size(url) {
            Ok(size) => size,
            Err(e) => {
                log::warn!("skipping image {url}: {e}");
                self.skip_image(url, e.to_string());
                return;
            }
        };
        let Some(ratio) = size.aspect_ratio() else {
            log::warn!("skipping image {url}: zero dimension");
            self.skip_image(url, "zero dimension".to_string());
            return;
        };

        let width = g.usable_width();
        let height = (width * ratio).min(g.usable_height());

        if self.y + height > g.bottom() && !self.page.is_empty() {
            self.new_page();
        }

        self.page.fragments.push(Fragment {
            kind: FragmentKind::Image,
            block: Some(index),
            content: None,
            image: Some(url.to_string()),
            x: g.margin,
            y: self.y,
            width,
            height,
        });
        self.y += height + g.image_gap;
    }

    fn skip_image(&mut self, url: &str, reason: String) {
        self.skipped_images.push(SkippedImage {
            url: url.to_string(),
            reason,
        });
    }
}

/// Display form of a text block: each link URL that appears literally in
/// the content is replaced by `[link text]`.
#[must_use]
pub fn display_text(content: &str, links: &[Link]) -> String {
    let mut text = content.to_string();
    for link in links {
        if link.url.starts_with("http") && text.contains(&link.url) {
            text = text.replacen(&link.url, &format!("[{}]", link.text), 1);
        }
    }
    text
}

/// Paginate a block stream with average glyph metrics.
pub fn paginate<I>(blocks: &[Block], geometry: &PageGeometry, images: &mut I) -> Layout
where
    I: ImageSource + ?Sized,
{
    let mut paginator = Paginator::new(geometry);
    paginator.push_blocks(blocks, images);
    let layout = paginator.finish();
    log::debug!(
        "laid out {} blocks on {} pages ({} images skipped)",
        blocks.len(),
        layout.pages.len(),
        layout.skipped_images.len()
    );
    layout
}

/// Paginate a whole document, with optional front matter and footer.
pub fn paginate_document<I>(
    doc: &Document,
    geometry: &PageGeometry,
    images: &mut I,
    print: &PrintOptions,
) -> Layout
where
    I: ImageSource + ?Sized,
{
    let mut paginator = Paginator::new(geometry);
    if print.front_matter {
        paginator.push_front_matter(doc, print);
    }
    paginator.push_blocks(&doc.blocks, images);
    if print.footer {
        paginator.push_footer(doc, print);
    }
    let layout = paginator.finish();
    log::debug!("laid out \"{}\" on {} pages", doc.title, layout.pages.len());
    layout
}
