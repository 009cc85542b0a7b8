//! Wire models for the two Figma REST endpoints colorway consumes.
//!
//! These structs mirror the JSON payloads exactly and stay deliberately
//! lenient: fields that Figma omits for some node kinds are `Option` or
//! default to empty, so a half-formed document decodes and the caller
//! decides what to keep. The styles endpoint uses `snake_case` keys while
//! node documents use `camelCase`, hence the mixed rename attributes.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

/// Identifier of a node inside a Figma file, e.g. `"1:42"`.
pub type NodeId = String;

// ============================================================================
// GET /v1/files/:key/styles
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct StylesResponse {
    pub meta: StyleMeta,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StyleMeta {
    pub styles: Vec<Style>,
}

/// A published style from the team library catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Style {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub style_type: StyleType,
    pub node_id: NodeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StyleType {
    Fill,
    Text,
    Effect,
    Grid,
}

// ============================================================================
// GET /v1/files/:key/nodes
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct NodesResponse {
    pub nodes: HashMap<NodeId, Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Node {
    pub document: Document,
}

/// The document subtree backing a published style.
///
/// Fill styles resolve to a shape node carrying `fills`; text styles
/// resolve to a text node carrying `style`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Document {
    pub id: NodeId,
    pub name: String,
    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub style: Option<TypeStyle>,
}

/// One paint of a node's fill stack.
///
/// Every payload field is optional on the wire: a `SOLID` paint without a
/// `color`, or a gradient without `gradientStops`, decodes fine and is
/// sorted out later by classification.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(rename = "type")]
    pub paint_type: PaintType,
    #[serde(default)]
    pub opacity: Option<f64>,
    #[serde(default)]
    pub color: Option<PaintColor>,
    #[serde(default)]
    pub gradient_stops: Option<Vec<ColorStop>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintType {
    Solid,
    Image,
    Rectangle,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
}

impl PaintType {
    /// The wire spelling, used when reporting an unsupported paint.
    pub fn as_str(self) -> &'static str {
        match self {
            PaintType::Solid => "SOLID",
            PaintType::Image => "IMAGE",
            PaintType::Rectangle => "RECTANGLE",
            PaintType::GradientLinear => "GRADIENT_LINEAR",
            PaintType::GradientRadial => "GRADIENT_RADIAL",
            PaintType::GradientAngular => "GRADIENT_ANGULAR",
            PaintType::GradientDiamond => "GRADIENT_DIAMOND",
        }
    }
}

impl fmt::Display for PaintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized RGBA channels in the `0.0..=1.0` range.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PaintColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// A single stop of a gradient paint.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ColorStop {
    pub position: f64,
    pub color: PaintColor,
}

/// Typographic attributes of a text node.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    pub font_post_script_name: String,
    pub font_weight: f64,
    pub font_size: f64,
    pub line_height_px: f64,
    #[serde(default)]
    pub letter_spacing: f64,
    pub line_height_unit: LineHeightUnit,
    #[serde(default)]
    pub text_case: Option<TextCase>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum LineHeightUnit {
    #[serde(rename = "PIXELS")]
    Pixels,
    #[serde(rename = "FONT_SIZE_%")]
    FontSize,
    #[serde(rename = "INTRINSIC_%")]
    Intrinsic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextCase {
    Upper,
    Lower,
    Title,
    SmallCaps,
    SmallCapsForced,
}

// ============================================================================
// Tests
// ============================================================================
