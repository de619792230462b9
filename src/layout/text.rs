//! Text measurement and line wrapping.

/// Measures rendered text width.
pub trait TextMeasure {
    /// Width of `text` set at `font_size` points, in page units.
    fn width(&self, text: &str, font_size: f32) -> f32;
}

/// Measures every glyph as a fixed fraction of the em square.
///
/// A stand-in for real font metrics: good enough to decide line breaks for
/// proportional Latin text without shipping a font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageGlyphWidth {
    /// Average glyph advance as a fraction of the font size.
    pub em_ratio: f32,

    /// Page units per point (25.4 / 72 for millimetres).
    pub units_per_point: f32,
}

impl Default for AverageGlyphWidth {
    fn default() -> Self {
        Self {
            em_ratio: 0.5,
            units_per_point: 25.4 / 72.0,
        }
    }
}

impl TextMeasure for AverageGlyphWidth {
    fn width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * self.em_ratio * self.units_per_point
    }
}

/// Greedily wrap `text` into lines no wider than `max_width`.
///
/// Words are kept whole unless a single word is wider than a line, in which
/// case it is split at character boundaries. Empty input yields no lines.
pub fn wrap_text<M>(text: &str, font_size: f32, max_width: f32, measure: &M) -> Vec<String>
where
    M: TextMeasure + ?Sized,
{
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if measure.width(&candidate, font_size) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if measure.width(word, font_size) <= max_width {
            current = word.to_string();
        } else {
            let mut pieces = split_word(word, font_size, max_width, measure);
            // Last piece stays open so the next word can join it
            current = pieces.pop().unwrap_or_default();
            lines.extend(pieces);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split an over-long word into line-sized pieces (at least one char each).
fn split_word<M>(word: &str, font_size: f32, max_width: f32, measure: &M) -> Vec<String>
where
    M: TextMeasure + ?Sized,
{
    let mut pieces = Vec::new();
    let mut piece = String::new();

    for ch in word.chars() {
        piece.push(ch);
        if piece.chars().count() > 1 && measure.width(&piece, font_size) > max_width {
            piece.pop();
            pieces.push(std::mem::replace(&mut piece, ch.to_string()));
        }
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}
