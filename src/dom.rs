//! DOM snapshot model and HTML adapter.
//!
//! Extraction runs over a captured, static node tree rather than a live
//! document. Each element carries only what the page renderer can report:
//! tag, role, computed font size and weight, a resolved URL for images and
//! anchors, and its children. Trees arrive either as JSON from a rendering
//! collaborator ([`from_json`]) or are derived from raw HTML with
//! [`from_html`], which approximates computed style from tag defaults and
//! inline `style` declarations.

use dom_query::{Document, NodeRef};
use lightningcss::properties::font::{
    AbsoluteFontSize, AbsoluteFontWeight, FontSize, FontWeight, RelativeFontSize,
};
use lightningcss::properties::Property;
use lightningcss::stylesheet::{ParserOptions, StyleAttribute};
use lightningcss::values::calc::{Calc, MathFunction};
use lightningcss::values::length::{LengthPercentage, LengthValue};
use serde::{Deserialize, Serialize};
use tendril::StrTendril;
use url::Url;

use crate::error::{Error, Result};
use crate::patterns::WHITESPACE_NORMALIZE;
use crate::url_utils;

/// Font size of the root element when nothing else is specified.
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Font weight of the root element when nothing else is specified.
pub const DEFAULT_FONT_WEIGHT: u16 = 400;

/// Subtrees deeper than this are truncated by the HTML adapter.
pub const MAX_SNAPSHOT_DEPTH: usize = 256;

/// Elements that never render and are dropped from HTML snapshots.
const UNRENDERED_TAGS: &[&str] = &["script", "style", "noscript", "template", "head"];

// === Snapshot Model ===

/// Computed text style of an element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComputedStyle {
    /// Font size in CSS pixels.
    pub font_size: f32,
    /// Numeric font weight (400 normal, 700 bold).
    pub font_weight: u16,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            font_weight: DEFAULT_FONT_WEIGHT,
        }
    }
}

/// A node of the snapshot tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// An element with style and children.
    Element(Element),
    /// A run of character data.
    Text {
        /// Raw text, whitespace preserved.
        text: String,
    },
}

impl Node {
    /// Create a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// The element behind this node, if it is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text { .. } => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

/// An element of the snapshot tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Lowercase tag name.
    pub tag: String,
    /// ARIA role or test identifier, when the page provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Computed text style.
    #[serde(default)]
    pub style: ComputedStyle,
    /// Absolute URL for images (`src`) and anchors (`href`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Child nodes in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with default style and no children.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    #[must_use]
    pub fn with_style(mut self, font_size: f32, font_weight: u16) -> Self {
        self.style = ComputedStyle {
            font_size,
            font_weight,
        };
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::text(text));
        self
    }

    /// Append an element child.
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Check the tag name, ignoring ASCII case.
    #[inline]
    #[must_use]
    pub fn is(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    /// Check the role, ignoring ASCII case.
    #[inline]
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.role.as_deref().is_some_and(|r| r.eq_ignore_ascii_case(role))
    }

    /// Direct element children, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Concatenated text of all descendant text nodes, like DOM `textContent`.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        let mut stack: Vec<&Node> = self.children.iter().rev().collect();
        while let Some(node) = stack.pop() {
            match node {
                Node::Text { text } => out.push_str(text),
                Node::Element(el) => stack.extend(el.children.iter().rev()),
            }
        }
        out
    }

    /// `text_content` trimmed, with whitespace runs collapsed to one space.
    #[must_use]
    pub fn normalized_text(&self) -> String {
        normalize_whitespace(&self.text_content())
    }

    /// This element followed by every descendant element, in pre-order.
    #[must_use]
    pub fn self_and_descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// First element in pre-order (self included) matching the predicate.
    pub fn find<P>(&self, mut predicate: P) -> Option<&Element>
    where
        P: FnMut(&Element) -> bool,
    {
        self.self_and_descendants().find(|el| predicate(el))
    }
}

/// Pre-order iterator over an element and its descendant elements.
///
/// Uses an explicit stack so arbitrarily deep trees cannot overflow.
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let el = self.stack.pop()?;
        self.stack.extend(el.children.iter().rev().filter_map(Node::as_element));
        Some(el)
    }
}

/// Trim and collapse whitespace runs, approximating rendered text.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text.trim(), " ").into_owned()
}

// === Snapshot Loading ===

/// Decode a JSON snapshot produced by a rendering collaborator.
pub fn from_json(json: &str) -> Result<Node> {
    serde_json::from_str(json).map_err(|e| Error::ParseError(e.to_string()))
}

/// Build a snapshot tree from raw HTML.
///
/// Computed style is approximated from user-agent defaults (heading sizes,
/// bold tags) and inline `style` declarations, inherited from the parent.
/// Image and anchor URLs are resolved against `base_url` when given.
#[must_use]
pub fn from_html(html: &str, base_url: Option<&str>) -> Node {
    let document = Document::from(html);
    let base = base_url.and_then(|b| Url::parse(b).ok());

    let html_sel = document.select("html");
    let Some(root) = html_sel.nodes().first() else {
        return Node::Element(Element::new("html"));
    };

    convert(root, ComputedStyle::default(), base.as_ref(), 0)
        .unwrap_or_else(|| Node::Element(Element::new("html")))
}

fn convert(node: &NodeRef, parent: ComputedStyle, base: Option<&Url>, depth: usize) -> Option<Node> {
    if node.is_text() {
        return Some(Node::text(node.text().to_string()));
    }
    if !node.is_element() {
        return None;
    }

    let tag = node.node_name()?.to_ascii_lowercase();
    if UNRENDERED_TAGS.contains(&tag.as_str()) {
        return None;
    }

    let inline = attr(node, "style");
    let style = computed_style(&tag, inline.as_deref(), parent);
    let role = attr(node, "role")
        .or_else(|| attr(node, "data-testid"))
        .map(|r| r.to_string());
    let url = element_url(node, &tag).map(|raw| match base {
        Some(base) => url_utils::create_absolute_url(&raw, base),
        None => raw.trim().to_string(),
    });

    let children = if depth >= MAX_SNAPSHOT_DEPTH {
        log::warn!("snapshot truncated below depth {MAX_SNAPSHOT_DEPTH} at <{tag}>");
        Vec::new()
    } else {
        node.children()
            .iter()
            .filter_map(|child| convert(child, style, base, depth + 1))
            .collect()
    };

    Some(Node::Element(Element {
        tag,
        role,
        style,
        url,
        children,
    }))
}

#[inline]
fn attr(node: &NodeRef, name: &str) -> Option<StrTendril> {
    node.attr(name)
}

fn element_url(node: &NodeRef, tag: &str) -> Option<String> {
    let raw = match tag {
        "img" => attr(node, "src")
            .filter(|s| !s.trim().is_empty())
            .or_else(|| attr(node, "data-src")),
        "a" => attr(node, "href"),
        _ => None,
    }?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    // Protocol-relative sources default to https
    if raw.starts_with("//") {
        return Some(format!("https:{raw}"));
    }
    Some(raw.to_string())
}

// === Computed Style ===

fn computed_style(tag: &str, inline: Option<&str>, parent: ComputedStyle) -> ComputedStyle {
    let mut style = parent;

    if let Some(scale) = heading_scale(tag) {
        style.font_size = parent.font_size * scale;
        style.font_weight = 700;
    }
    match tag {
        "b" | "strong" | "th" => style.font_weight = bolder(parent.font_weight),
        "small" => style.font_size = parent.font_size * 0.83,
        _ => {}
    }

    match inline {
        Some(inline) => apply_inline_style(inline, style, parent),
        None => style,
    }
}

/// Apply the font declarations of an inline `style` attribute.
///
/// Relative sizes and weights resolve against `parent`. Important
/// declarations win over normal ones; later declarations win over earlier.
fn apply_inline_style(inline: &str, mut style: ComputedStyle, parent: ComputedStyle) -> ComputedStyle {
    let options = ParserOptions {
        error_recovery: true,
        ..ParserOptions::default()
    };
    let attr = match StyleAttribute::parse(inline, options) {
        Ok(attr) => attr,
        Err(e) => {
            log::debug!("ignoring unparsable style attribute: {e}");
            return style;
        }
    };

    let declarations = &attr.declarations;
    for prop in declarations
        .declarations
        .iter()
        .chain(declarations.important_declarations.iter())
    {
        match prop {
            Property::FontSize(size) => set_font_size(&mut style, size, parent),
            Property::FontWeight(weight) => set_font_weight(&mut style, weight, parent),
            Property::Font(font) => {
                set_font_size(&mut style, &font.size, parent);
                set_font_weight(&mut style, &font.weight, parent);
            }
            _ => {}
        }
    }
    style
}

fn set_font_size(style: &mut ComputedStyle, size: &FontSize, parent: ComputedStyle) {
    if let Some(px) = font_size_px(size, parent.font_size) {
        style.font_size = px;
    }
}

fn set_font_weight(style: &mut ComputedStyle, weight: &FontWeight, parent: ComputedStyle) {
    if let Some(weight) = font_weight_value(weight, parent.font_weight) {
        style.font_weight = weight;
    }
}

fn heading_scale(tag: &str) -> Option<f32> {
    match tag {
        "h1" => Some(2.0),
        "h2" => Some(1.5),
        "h3" => Some(1.17),
        "h4" => Some(1.0),
        "h5" => Some(0.83),
        "h6" => Some(0.67),
        _ => None,
    }
}

/// Resolve a `font-size` value to pixels.
///
/// `em` and `%` are relative to the parent size, `rem` to the root default.
fn font_size_px(value: &FontSize, parent_size: f32) -> Option<f32> {
    let px = match value {
        FontSize::Length(length) => length_px(length, parent_size)?,
        FontSize::Absolute(size) => absolute_font_size(*size),
        FontSize::Relative(RelativeFontSize::Smaller) => parent_size / 1.2,
        FontSize::Relative(RelativeFontSize::Larger) => parent_size * 1.2,
    };
    (px.is_finite() && px >= 0.0).then_some(px)
}

fn absolute_font_size(size: AbsoluteFontSize) -> f32 {
    match size {
        AbsoluteFontSize::XXSmall => 9.0,
        AbsoluteFontSize::XSmall => 10.0,
        AbsoluteFontSize::Small => 13.0,
        AbsoluteFontSize::Medium => 16.0,
        AbsoluteFontSize::Large => 18.0,
        AbsoluteFontSize::XLarge => 24.0,
        AbsoluteFontSize::XXLarge => 32.0,
        AbsoluteFontSize::XXXLarge => 48.0,
    }
}

fn length_px(value: &LengthPercentage, parent_size: f32) -> Option<f32> {
    match value {
        LengthPercentage::Percentage(pct) => Some(parent_size * pct.0),
        LengthPercentage::Dimension(length) => match length {
            LengthValue::Em(val) => Some(val * parent_size),
            LengthValue::Rem(val) => Some(val * DEFAULT_FONT_SIZE),
            other => other.to_px(),
        },
        LengthPercentage::Calc(calc) => calc_px(calc, parent_size),
    }
}

fn calc_px(calc: &Calc<LengthPercentage>, parent_size: f32) -> Option<f32> {
    match calc {
        Calc::Value(value) => length_px(value, parent_size),
        Calc::Sum(a, b) => Some(calc_px(a, parent_size)? + calc_px(b, parent_size)?),
        Calc::Product(factor, inner) => calc_px(inner, parent_size).map(|px| px * factor),
        Calc::Function(func) => match func.as_ref() {
            MathFunction::Calc(inner) => calc_px(inner, parent_size),
            _ => None,
        },
        Calc::Number(_) => None,
    }
}

#[allow(clippy::cast_sign_loss)]
fn font_weight_value(value: &FontWeight, parent_weight: u16) -> Option<u16> {
    match value {
        FontWeight::Absolute(AbsoluteFontWeight::Normal) => Some(400),
        FontWeight::Absolute(AbsoluteFontWeight::Bold) => Some(700),
        FontWeight::Absolute(AbsoluteFontWeight::Weight(w)) => {
            (1.0..=1000.0).contains(w).then(|| w.round() as u16)
        }
        FontWeight::Bolder => Some(bolder(parent_weight)),
        FontWeight::Lighter => Some(lighter(parent_weight)),
    }
}

fn bolder(parent: u16) -> u16 {
    match parent {
        0..=349 => 400,
        350..=549 => 700,
        _ => 900,
    }
}

fn lighter(parent: u16) -> u16 {
    match parent {
        0..=549 => 100,
        550..=749 => 400,
        _ => 700,
    }
}
