//! Typography exporter: font accessors and the UIKit label hierarchy.

use std::path::PathBuf;

use serde::Serialize;

use colorway_core::TextStyle;

use crate::engine::TemplateEngine;
use crate::error::RenderError;
use crate::files::{Destination, GeneratedFile};
use crate::identifiers::NameStyle;
use crate::model::{text_style_models, TextStyleModel};
use crate::templates::{
    FONTS_SWIFTUI, FONTS_UIKIT, GENERATED_HEADER, LABEL, LABEL_STYLE, LABEL_STYLES,
};

/// Which typography artifacts to produce and where they go.
#[derive(Debug, Clone, Default)]
pub struct TypographyOutput {
    /// UIKit `UIFont` extension.
    pub font_swift: Option<Destination>,
    /// SwiftUI `Font` extension.
    pub swiftui_font_swift: Option<Destination>,
    /// Whether to generate `Label.swift` and `LabelStyle.swift`.
    pub generate_labels: bool,
    /// Directory the label files land in; labels are skipped without it.
    pub labels_directory: Option<PathBuf>,
    /// Optional `LabelStyle` factory extension. When set, the generated
    /// label subclasses call these factories instead of carrying inline
    /// style literals.
    pub label_styles_swift: Option<Destination>,
    pub name_style: NameStyle,
}

#[derive(Serialize)]
struct FontsContext<'a> {
    header: &'static str,
    styles: &'a [TextStyleModel],
}

#[derive(Serialize)]
struct LabelContext<'a> {
    header: &'static str,
    styles: &'a [TextStyleModel],
    separate_styles: bool,
}

#[derive(Serialize)]
struct HeaderContext {
    header: &'static str,
}

/// Renders font and label files from text style tokens.
pub struct TypographyExporter {
    output: TypographyOutput,
}

impl TypographyExporter {
    pub fn new(output: TypographyOutput) -> Self {
        Self { output }
    }

    pub fn export(
        &self,
        engine: &dyn TemplateEngine,
        styles: &[TextStyle],
    ) -> Result<Vec<GeneratedFile>, RenderError> {
        let models = text_style_models(styles, self.output.name_style);
        let fonts_context = serde_json::to_value(FontsContext {
            header: GENERATED_HEADER,
            styles: &models,
        })?;

        let mut files = Vec::new();

        if let Some(destination) = &self.output.font_swift {
            let content = engine.render_named(FONTS_UIKIT, &fonts_context)?;
            files.push(GeneratedFile::new(destination.clone(), content));
        }

        if let Some(destination) = &self.output.swiftui_font_swift {
            let content = engine.render_named(FONTS_SWIFTUI, &fonts_context)?;
            files.push(GeneratedFile::new(destination.clone(), content));
        }

        if self.output.generate_labels {
            if let Some(directory) = &self.output.labels_directory {
                let separate_styles = self.output.label_styles_swift.is_some();
                let label_context = serde_json::to_value(LabelContext {
                    header: GENERATED_HEADER,
                    styles: &models,
                    separate_styles,
                })?;
                let header_context = serde_json::to_value(HeaderContext {
                    header: GENERATED_HEADER,
                })?;

                let label = engine.render_named(LABEL, &label_context)?;
                files.push(GeneratedFile::new(
                    Destination::new(directory.clone(), "Label.swift"),
                    label,
                ));

                let label_style = engine.render_named(LABEL_STYLE, &header_context)?;
                files.push(GeneratedFile::new(
                    Destination::new(directory.clone(), "LabelStyle.swift"),
                    label_style,
                ));

                if let Some(destination) = &self.output.label_styles_swift {
                    let content = engine.render_named(LABEL_STYLES, &fonts_context)?;
                    files.push(GeneratedFile::new(destination.clone(), content));
                }
            }
        }

        Ok(files)
    }
}
