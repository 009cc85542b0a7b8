//! Text style normalization.
//!
//! Simpler than colors: no variants, no synthetic tokens. Each surviving
//! catalog entry either carries typographic attributes or gets skipped
//! with a diagnostic.

use std::collections::HashMap;

use colorway_api::{FileApi, LineHeightUnit, Node, NodeId, Style};

use crate::catalog::{load_nodes, load_text_styles};
use crate::diagnostics::{Diagnostic, DiagnosticsSink};
use crate::error::LoadError;
use crate::platform::Platform;
use crate::token::TokenName;

/// Text transform applied when the style is used.
///
/// Figma knows more transforms (title case, small caps) than app code can
/// express; those collapse to `Original`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCase {
    Original,
    Upper,
    Lower,
}

/// A normalized text style token.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub name: TokenName,
    pub platform: Option<Platform>,
    /// PostScript name, the thing `UIFont(name:)` wants.
    pub font_name: String,
    pub font_size: f64,
    pub font_weight: f64,
    /// Only carried when the designer fixed the line height in pixels.
    /// Percentage and intrinsic line heights are the font's own business.
    pub line_height: Option<f64>,
    pub letter_spacing: f64,
    pub text_case: TextCase,
}

/// Load one file's text style tokens end to end.
pub fn load_text_tokens(
    api: &dyn FileApi,
    file_key: &str,
    diagnostics: &mut dyn DiagnosticsSink,
) -> Result<Vec<TextStyle>, LoadError> {
    let styles = load_text_styles(api, file_key)?;
    let nodes = load_nodes(api, file_key, &styles)?;
    Ok(normalize_text(&styles, &nodes, diagnostics))
}

/// Join text catalog entries with their nodes. Catalog order is preserved.
pub fn normalize_text(
    styles: &[Style],
    nodes: &HashMap<NodeId, Node>,
    diagnostics: &mut dyn DiagnosticsSink,
) -> Vec<TextStyle> {
    let mut tokens = Vec::with_capacity(styles.len());

    for style in styles {
        let Some(node) = nodes.get(&style.node_id) else {
            diagnostics.record(Diagnostic::MissingNode {
                style: style.name.clone(),
                node_id: style.node_id.clone(),
            });
            continue;
        };

        let Some(attributes) = &node.document.style else {
            diagnostics.record(Diagnostic::MissingTextAttributes {
                style: style.name.clone(),
            });
            continue;
        };

        let line_height = match attributes.line_height_unit {
            LineHeightUnit::Pixels => Some(attributes.line_height_px),
            LineHeightUnit::FontSize | LineHeightUnit::Intrinsic => None,
        };

        let text_case = match attributes.text_case {
            Some(colorway_api::TextCase::Upper) => TextCase::Upper,
            Some(colorway_api::TextCase::Lower) => TextCase::Lower,
            _ => TextCase::Original,
        };

        tokens.push(TextStyle {
            name: TokenName::new(&style.name),
            platform: Platform::from_description(&style.description),
            font_name: attributes.font_post_script_name.clone(),
            font_size: attributes.font_size,
            font_weight: attributes.font_weight,
            line_height,
            letter_spacing: attributes.letter_spacing,
            text_case,
        });
    }

    tokens
}

/// Drop text styles tagged for a different platform.
pub fn retain_platform(styles: &mut Vec<TextStyle>, platform: Platform) {
    styles.retain(|style| platform.admits(style.platform));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingSink;
    use colorway_api::{Document, StyleType, TypeStyle};

    fn style(name: &str, node_id: &str, description: &str) -> Style {
        Style {
            key: format!("key-{name}"),
            name: name.to_string(),
            description: description.to_string(),
            style_type: StyleType::Text,
            node_id: node_id.to_string(),
        }
    }

    fn text_node(id: &str, attributes: Option<TypeStyle>) -> Node {
        Node {
            document: Document {
                id: id.to_string(),
                name: id.to_string(),
                fills: Vec::new(),
                style: attributes,
            },
        }
    }

    fn attributes(unit: LineHeightUnit, case: Option<colorway_api::TextCase>) -> TypeStyle {
        TypeStyle {
            font_post_script_name: "Inter-Bold".to_string(),
            font_weight: 700.0,
            font_size: 24.0,
            line_height_px: 28.8,
            letter_spacing: 0.4,
            line_height_unit: unit,
            text_case: case,
        }
    }

    #[test]
    fn pixel_line_heights_are_carried() {
        let styles = vec![style("heading", "9:1", "")];
        let mut nodes = HashMap::new();
        nodes.insert(
            "9:1".to_string(),
            text_node("9:1", Some(attributes(LineHeightUnit::Pixels, None))),
        );

        let tokens = normalize_text(&styles, &nodes, &mut RecordingSink::new());
        assert_eq!(tokens.len(), 1);
        let token = &tokens[0];
        assert_eq!(token.font_name, "Inter-Bold");
        assert_eq!(token.line_height, Some(28.8));
        assert_eq!(token.text_case, TextCase::Original);
    }

    #[test]
    fn percent_line_heights_are_dropped() {
        for unit in [LineHeightUnit::FontSize, LineHeightUnit::Intrinsic] {
            let styles = vec![style("body", "9:1", "")];
            let mut nodes = HashMap::new();
            nodes.insert("9:1".to_string(), text_node("9:1", Some(attributes(unit, None))));

            let tokens = normalize_text(&styles, &nodes, &mut RecordingSink::new());
            assert_eq!(tokens[0].line_height, None);
        }
    }

    #[test]
    fn exotic_text_cases_collapse_to_original() {
        use colorway_api::TextCase as Wire;

        let cases = [
            (Some(Wire::Upper), TextCase::Upper),
            (Some(Wire::Lower), TextCase::Lower),
            (Some(Wire::Title), TextCase::Original),
            (Some(Wire::SmallCaps), TextCase::Original),
            (Some(Wire::SmallCapsForced), TextCase::Original),
            (None, TextCase::Original),
        ];

        for (wire, expected) in cases {
            let styles = vec![style("label", "9:1", "")];
            let mut nodes = HashMap::new();
            nodes.insert(
                "9:1".to_string(),
                text_node("9:1", Some(attributes(LineHeightUnit::Pixels, wire))),
            );

            let tokens = normalize_text(&styles, &nodes, &mut RecordingSink::new());
            assert_eq!(tokens[0].text_case, expected, "wire case {wire:?}");
        }
    }

    #[test]
    fn node_without_attributes_is_skipped() {
        let styles = vec![style("broken", "9:1", ""), style("fine", "9:2", "")];
        let mut nodes = HashMap::new();
        nodes.insert("9:1".to_string(), text_node("9:1", None));
        nodes.insert(
            "9:2".to_string(),
            text_node("9:2", Some(attributes(LineHeightUnit::Pixels, None))),
        );

        let mut sink = RecordingSink::new();
        let tokens = normalize_text(&styles, &nodes, &mut sink);

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name.as_str(), "fine");
        assert_eq!(
            sink.diagnostics,
            vec![Diagnostic::MissingTextAttributes { style: "broken".to_string() }]
        );
    }

    #[test]
    fn platform_filter_applies_to_text_styles() {
        let mut tokens = vec![
            TextStyle {
                name: TokenName::new("shared"),
                platform: None,
                font_name: "Inter-Regular".to_string(),
                font_size: 16.0,
                font_weight: 400.0,
                line_height: None,
                letter_spacing: 0.0,
                text_case: TextCase::Original,
            },
            TextStyle {
                name: TokenName::new("android_toast"),
                platform: Some(Platform::Android),
                font_name: "Roboto-Regular".to_string(),
                font_size: 14.0,
                font_weight: 400.0,
                line_height: None,
                letter_spacing: 0.0,
                text_case: TextCase::Original,
            },
        ];

        retain_platform(&mut tokens, Platform::Ios);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name.as_str(), "shared");
    }
}
