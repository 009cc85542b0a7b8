//! Color exporter: UIKit and SwiftUI color accessor files.

use serde::Serialize;

use colorway_core::{AssetPair, ColorToken};

use crate::engine::TemplateEngine;
use crate::error::RenderError;
use crate::files::{Destination, GeneratedFile};
use crate::identifiers::NameStyle;
use crate::model::{color_models, ColorModel};
use crate::templates::{COLORS_SWIFTUI, COLORS_UIKIT, GENERATED_HEADER};

/// Which color artifacts to produce and where they go.
///
/// A missing destination means that artifact is simply not emitted.
#[derive(Debug, Clone, Default)]
pub struct ColorsOutput {
    /// UIKit `UIColor` extension.
    pub color_swift: Option<Destination>,
    /// SwiftUI `Color` extension bridging the UIKit constants.
    pub swiftui_color_swift: Option<Destination>,
    pub name_style: NameStyle,
}

#[derive(Serialize)]
struct ColorsContext<'a> {
    header: &'static str,
    colors: &'a [ColorModel],
}

/// Renders color accessor files from paired color tokens.
///
/// The SwiftUI file refers to colors through the UIKit constants
/// (`Color(UIColor.accent)`), so both files must be generated from the
/// same token set for the references to line up.
pub struct ColorExporter {
    output: ColorsOutput,
}

impl ColorExporter {
    pub fn new(output: ColorsOutput) -> Self {
        Self { output }
    }

    pub fn export(
        &self,
        engine: &dyn TemplateEngine,
        color_pairs: &[AssetPair<ColorToken>],
    ) -> Result<Vec<GeneratedFile>, RenderError> {
        let models = color_models(color_pairs, self.output.name_style);
        let context = serde_json::to_value(ColorsContext {
            header: GENERATED_HEADER,
            colors: &models,
        })?;

        let mut files = Vec::new();

        if let Some(destination) = &self.output.color_swift {
            let content = engine.render_named(COLORS_UIKIT, &context)?;
            files.push(GeneratedFile::new(destination.clone(), content));
        }

        if let Some(destination) = &self.output.swiftui_color_swift {
            let content = engine.render_named(COLORS_SWIFTUI, &context)?;
            files.push(GeneratedFile::new(destination.clone(), content));
        }

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::builtin_engine;
    use colorway_core::TokenName;

    fn token(name: &str, red: f64, green: f64, blue: f64, alpha: f64) -> ColorToken {
        ColorToken {
            name: TokenName::new(name),
            platform: None,
            red,
            green,
            blue,
            alpha,
        }
    }

    fn sample_pairs() -> Vec<AssetPair<ColorToken>> {
        vec![
            AssetPair::new(
                token("accent", 1.0, 1.0, 1.0, 1.0),
                Some(token("accent", 0.1, 0.1, 0.1, 1.0)),
            ),
            AssetPair::new(token("base", 0.5, 0.5, 0.5, 0.2), None),
        ]
    }

    #[test]
    fn no_destinations_means_no_files() {
        let engine = builtin_engine().unwrap();
        let exporter = ColorExporter::new(ColorsOutput::default());

        let files = exporter.export(&engine, &sample_pairs()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn uikit_file_matches_expected_output() {
        let engine = builtin_engine().unwrap();
        let exporter = ColorExporter::new(ColorsOutput {
            color_swift: Some(Destination::new("Sources/UI", "Colors.swift")),
            swiftui_color_swift: None,
            name_style: NameStyle::CamelCase,
        });

        let files = exporter.export(&engine, &sample_pairs()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].destination.file_name, "Colors.swift");

        let expected = "\
//
//  Generated by colorway from the design file.
//  Do not edit directly: the file is rewritten on every export.
//

import UIKit

public extension UIColor {

    static var accent: UIColor {
        UIColor { traitCollection -> UIColor in
            if traitCollection.userInterfaceStyle == .dark {
                return UIColor(red: 0.1, green: 0.1, blue: 0.1, alpha: 1.0)
            } else {
                return UIColor(red: 1.0, green: 1.0, blue: 1.0, alpha: 1.0)
            }
        }
    }

    static var base: UIColor {
        UIColor(red: 0.5, green: 0.5, blue: 0.5, alpha: 0.2)
    }
}
";
        assert_eq!(files[0].content, expected);
    }

    #[test]
    fn swiftui_file_bridges_through_uikit_constants() {
        let engine = builtin_engine().unwrap();
        let exporter = ColorExporter::new(ColorsOutput {
            color_swift: None,
            swiftui_color_swift: Some(Destination::new("Sources/UI", "Color+App.swift")),
            name_style: NameStyle::CamelCase,
        });

        let files = exporter.export(&engine, &sample_pairs()).unwrap();
        assert_eq!(files.len(), 1);

        let content = &files[0].content;
        assert!(content.contains("import SwiftUI"));
        assert!(content.contains("    static var accent: Color {\n        Color(UIColor.accent)\n    }"));
        assert!(content.contains("Color(UIColor.base)"));
    }

    #[test]
    fn both_files_render_from_one_model_set() {
        let engine = builtin_engine().unwrap();
        let exporter = ColorExporter::new(ColorsOutput {
            color_swift: Some(Destination::new(".", "Colors.swift")),
            swiftui_color_swift: Some(Destination::new(".", "Color+App.swift")),
            name_style: NameStyle::CamelCase,
        });

        let files = exporter.export(&engine, &sample_pairs()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].content.contains("UIColor"));
        assert!(files[1].content.contains("Color(UIColor.accent)"));
    }

    #[test]
    fn snake_case_style_flows_into_identifiers() {
        let engine = builtin_engine().unwrap();
        let exporter = ColorExporter::new(ColorsOutput {
            color_swift: Some(Destination::new(".", "Colors.swift")),
            swiftui_color_swift: None,
            name_style: NameStyle::SnakeCase,
        });

        let pairs = vec![AssetPair::new(
            token("brand/primaryRed", 1.0, 0.0, 0.0, 1.0),
            None,
        )];
        let files = exporter.export(&engine, &pairs).unwrap();
        assert!(files[0].content.contains("static var brand_primary_red: UIColor"));
    }
}
