//! Gradient exporter: SwiftUI `Gradient` accessors with stops resolved
//! against the generated color identifiers.

use serde::Serialize;

use colorway_core::{AssetPair, ColorToken, GradientToken};

use crate::engine::TemplateEngine;
use crate::error::RenderError;
use crate::files::{Destination, GeneratedFile};
use crate::identifiers::NameStyle;
use crate::model::{color_identifiers, gradient_models, GradientModel};
use crate::templates::{GENERATED_HEADER, GRADIENTS_SWIFTUI};

/// Gradient artifact configuration.
#[derive(Debug, Clone, Default)]
pub struct GradientsOutput {
    /// SwiftUI `Gradient` extension.
    pub swiftui_gradient_swift: Option<Destination>,
    pub name_style: NameStyle,
}

#[derive(Serialize)]
struct GradientsContext<'a> {
    header: &'static str,
    gradients: &'a [GradientModel],
}

/// Renders the gradient accessor file.
///
/// Stops do not carry color values; they name colors. The exporter
/// therefore needs the color pairs the [`ColorExporter`] rendered so it
/// can resolve each stop to the identifier that actually exists in the
/// generated color file. A stop that resolves to nothing fails the whole
/// export with [`RenderError::BrokenReference`].
///
/// [`ColorExporter`]: crate::colors::ColorExporter
pub struct GradientExporter {
    output: GradientsOutput,
}

impl GradientExporter {
    pub fn new(output: GradientsOutput) -> Self {
        Self { output }
    }

    pub fn export(
        &self,
        engine: &dyn TemplateEngine,
        gradient_pairs: &[AssetPair<GradientToken>],
        color_pairs: &[AssetPair<ColorToken>],
    ) -> Result<Vec<GeneratedFile>, RenderError> {
        let Some(destination) = &self.output.swiftui_gradient_swift else {
            return Ok(Vec::new());
        };

        let identifiers = color_identifiers(color_pairs, self.output.name_style);
        let models = gradient_models(gradient_pairs, &identifiers, self.output.name_style)?;
        let context = serde_json::to_value(GradientsContext {
            header: GENERATED_HEADER,
            gradients: &models,
        })?;

        let content = engine.render_named(GRADIENTS_SWIFTUI, &context)?;
        Ok(vec![GeneratedFile::new(destination.clone(), content)])
    }
}
