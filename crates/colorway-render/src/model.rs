//! Typed render models.
//!
//! Exporters never hand the engine loose maps; every template receives one
//! of these serializable structs. The conversion from tokens to models is
//! also where identifier generation and gradient cross-referencing happen,
//! so template code deals only in final strings and numbers.

use std::collections::HashMap;

use serde::Serialize;

use colorway_core::{AssetPair, ColorToken, GradientToken, TextStyle, TokenName};

use crate::error::RenderError;
use crate::identifiers::{identifier, type_identifier, NameStyle};

/// RGBA channels of one appearance of a color.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChannelsModel {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl From<&ColorToken> for ChannelsModel {
    fn from(token: &ColorToken) -> Self {
        Self {
            red: token.red,
            green: token.green,
            blue: token.blue,
            alpha: token.alpha,
        }
    }
}

/// One color as the templates see it: an identifier, a light appearance,
/// and optionally a dark one.
#[derive(Debug, Clone, Serialize)]
pub struct ColorModel {
    pub identifier: String,
    pub light: ChannelsModel,
    pub dark: Option<ChannelsModel>,
}

/// One gradient stop, already resolved to a generated color identifier.
#[derive(Debug, Clone, Serialize)]
pub struct GradientStopModel {
    pub color_identifier: String,
    pub position: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GradientModel {
    pub identifier: String,
    pub stops: Vec<GradientStopModel>,
}

/// One text style as the label and font templates see it.
#[derive(Debug, Clone, Serialize)]
pub struct TextStyleModel {
    pub identifier: String,
    /// Prefix for generated class names, e.g. `Headline` for
    /// `HeadlineLabel`.
    pub class_name: String,
    pub font_name: String,
    pub font_size: f64,
    pub line_height: Option<f64>,
    pub tracking: f64,
    /// One of `original`, `uppercased`, `lowercased`, matching the
    /// generated `LabelStyle.TextCase` cases.
    pub text_case: &'static str,
}

/// Build color models in pair order.
pub fn color_models(pairs: &[AssetPair<ColorToken>], style: NameStyle) -> Vec<ColorModel> {
    pairs
        .iter()
        .map(|pair| ColorModel {
            identifier: identifier(pair.light.name.as_str(), style),
            light: ChannelsModel::from(&pair.light),
            dark: pair.dark.as_ref().map(ChannelsModel::from),
        })
        .collect()
}

/// The cross-reference map gradients resolve their stops against: token
/// name to generated identifier, taken from the light colors.
///
/// Stop tokens never carry the dark suffix (the suffix sits mid-name,
/// `g_dark_0`), so even a dark gradient's stops live in the light color
/// set.
pub fn color_identifiers(
    pairs: &[AssetPair<ColorToken>],
    style: NameStyle,
) -> HashMap<TokenName, String> {
    pairs
        .iter()
        .map(|pair| {
            (
                pair.light.name.clone(),
                identifier(pair.light.name.as_str(), style),
            )
        })
        .collect()
}

/// Build gradient models, resolving every stop through the identifier map.
///
/// A stop naming a color outside the map is a broken reference: the
/// generated Swift would mention a member that does not exist, so the
/// whole export fails rather than emitting code that cannot compile.
pub fn gradient_models(
    pairs: &[AssetPair<GradientToken>],
    identifiers: &HashMap<TokenName, String>,
    style: NameStyle,
) -> Result<Vec<GradientModel>, RenderError> {
    pairs
        .iter()
        .map(|pair| {
            let gradient = &pair.light;
            let stops = gradient
                .stops
                .iter()
                .map(|stop| {
                    identifiers
                        .get(&stop.color)
                        .map(|color_identifier| GradientStopModel {
                            color_identifier: color_identifier.clone(),
                            position: stop.position,
                        })
                        .ok_or_else(|| RenderError::BrokenReference {
                            gradient: gradient.name.to_string(),
                            stop: stop.color.to_string(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(GradientModel {
                identifier: identifier(gradient.name.as_str(), style),
                stops,
            })
        })
        .collect()
}

/// Build text style models in token order.
///
/// Letter spacing is rounded to two decimal places here: the wire values
/// carry single-precision noise (`0.30000001192092896`) that would
/// otherwise leak into the generated source.
pub fn text_style_models(styles: &[TextStyle], style: NameStyle) -> Vec<TextStyleModel> {
    styles
        .iter()
        .map(|text| TextStyleModel {
            identifier: identifier(text.name.as_str(), style),
            class_name: type_identifier(text.name.as_str(), style),
            font_name: text.font_name.clone(),
            font_size: text.font_size,
            line_height: text.line_height,
            tracking: (text.letter_spacing * 100.0).round() / 100.0,
            text_case: match text.text_case {
                colorway_core::TextCase::Original => "original",
                colorway_core::TextCase::Upper => "uppercased",
                colorway_core::TextCase::Lower => "lowercased",
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorway_core::{GradientStop, Platform, TextCase};

    fn color(name: &str, red: f64) -> ColorToken {
        ColorToken {
            name: TokenName::new(name),
            platform: None,
            red,
            green: 0.0,
            blue: 0.0,
            alpha: 1.0,
        }
    }

    fn gradient(name: &str, stops: &[(&str, f64)]) -> GradientToken {
        GradientToken {
            name: TokenName::new(name),
            platform: Some(Platform::Ios),
            stops: stops
                .iter()
                .map(|(color, position)| GradientStop {
                    color: TokenName::new(*color),
                    position: *position,
                })
                .collect(),
        }
    }

    #[test]
    fn color_models_carry_both_appearances() {
        let pairs = vec![AssetPair::new(color("brand/red", 1.0), Some(color("brand/red", 0.6)))];
        let models = color_models(&pairs, NameStyle::CamelCase);

        assert_eq!(models[0].identifier, "brandRed");
        assert_eq!(models[0].light.red, 1.0);
        assert_eq!(models[0].dark.unwrap().red, 0.6);
    }

    #[test]
    fn identifier_map_uses_light_names() {
        let pairs = vec![
            AssetPair::new(color("brand_gradient_0", 1.0), None),
            AssetPair::new(color("brand_gradient_1", 0.0), None),
        ];
        let map = color_identifiers(&pairs, NameStyle::CamelCase);

        assert_eq!(map[&TokenName::new("brand_gradient_0")], "brandGradient0");
        assert_eq!(map[&TokenName::new("brand_gradient_1")], "brandGradient1");
    }

    #[test]
    fn gradient_models_resolve_stop_identifiers() {
        let colors = vec![
            AssetPair::new(color("hero_0", 1.0), None),
            AssetPair::new(color("hero_1", 0.0), None),
        ];
        let gradients = vec![AssetPair::new(
            gradient("hero", &[("hero_0", 0.0), ("hero_1", 1.0)]),
            None,
        )];

        let map = color_identifiers(&colors, NameStyle::CamelCase);
        let models = gradient_models(&gradients, &map, NameStyle::CamelCase).unwrap();

        assert_eq!(models[0].identifier, "hero");
        assert_eq!(models[0].stops[0].color_identifier, "hero0");
        assert_eq!(models[0].stops[1].position, 1.0);
    }

    #[test]
    fn unresolved_stop_is_a_broken_reference() {
        let gradients = vec![AssetPair::new(gradient("hero", &[("hero_9", 0.5)]), None)];
        let err =
            gradient_models(&gradients, &HashMap::new(), NameStyle::CamelCase).unwrap_err();

        match err {
            RenderError::BrokenReference { gradient, stop } => {
                assert_eq!(gradient, "hero");
                assert_eq!(stop, "hero_9");
            }
            other => panic!("expected BrokenReference, got {other}"),
        }
    }

    #[test]
    fn text_style_models_map_cases_to_swift_names() {
        let styles = vec![TextStyle {
            name: TokenName::new("caption/small"),
            platform: None,
            font_name: "Inter-Medium".to_string(),
            font_size: 12.0,
            font_weight: 500.0,
            line_height: Some(16.0),
            letter_spacing: 0.4,
            text_case: TextCase::Upper,
        }];

        let models = text_style_models(&styles, NameStyle::CamelCase);
        let model = &models[0];

        assert_eq!(model.identifier, "captionSmall");
        assert_eq!(model.class_name, "CaptionSmall");
        assert_eq!(model.text_case, "uppercased");
        assert_eq!(model.line_height, Some(16.0));
        assert_eq!(model.tracking, 0.4);
    }

    #[test]
    fn tracking_drops_single_precision_noise() {
        let styles = vec![TextStyle {
            name: TokenName::new("body"),
            platform: None,
            font_name: "Inter-Regular".to_string(),
            font_size: 16.0,
            font_weight: 400.0,
            line_height: None,
            letter_spacing: 0.300_000_011_920_928_96,
            text_case: TextCase::Original,
        }];

        let models = text_style_models(&styles, NameStyle::CamelCase);
        assert_eq!(models[0].tracking, 0.3);
    }
}
