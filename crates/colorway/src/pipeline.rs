//! Export pipelines: fetch, normalize, pair, render.
//!
//! Each pipeline returns the complete artifact set without touching the
//! filesystem. Rendering errors therefore abort the export before a
//! single file is written.

use anyhow::Context;
use tracing::debug;

use colorway_api::FileApi;
use colorway_core::typography;
use colorway_core::{
    load_color_variants, pair_colors, pair_gradients, DiagnosticsSink, Platform, VariantSource,
};
use colorway_render::{
    builtin_engine, load_template_overrides, ColorExporter, ColorsOutput, Destination,
    GeneratedFile, GradientExporter, GradientsOutput, MiniJinjaEngine, TypographyExporter,
    TypographyOutput,
};

use crate::config::Config;

/// Fetch color and gradient styles and render the color artifacts.
pub fn export_colors(
    api: &dyn FileApi,
    config: &Config,
    diagnostics: &mut dyn DiagnosticsSink,
) -> anyhow::Result<Vec<GeneratedFile>> {
    let source = variant_source(config);
    let mut variants =
        load_color_variants(api, &source, diagnostics).context("failed to load color styles")?;
    variants.retain_platform(Platform::Ios);

    let color_pairs = pair_colors(&variants, diagnostics);
    let gradient_pairs = pair_gradients(&variants, diagnostics);
    debug!(
        "normalized {} color pairs, {} gradient pairs",
        color_pairs.len(),
        gradient_pairs.len()
    );

    let engine = prepare_engine(config)?;

    let mut files = ColorExporter::new(colors_output(config)).export(&engine, &color_pairs)?;
    files.extend(GradientExporter::new(gradients_output(config)).export(
        &engine,
        &gradient_pairs,
        &color_pairs,
    )?);

    Ok(files)
}

/// Fetch text styles and render the typography artifacts.
pub fn export_typography(
    api: &dyn FileApi,
    config: &Config,
    diagnostics: &mut dyn DiagnosticsSink,
) -> anyhow::Result<Vec<GeneratedFile>> {
    let mut styles = typography::load_text_tokens(api, &config.figma.light_file_id, diagnostics)
        .context("failed to load text styles")?;
    typography::retain_platform(&mut styles, Platform::Ios);
    debug!("normalized {} text styles", styles.len());

    let engine = prepare_engine(config)?;
    let files = TypographyExporter::new(typography_output(config)).export(&engine, &styles)?;

    Ok(files)
}

/// Which appearance layout the config describes.
fn variant_source(config: &Config) -> VariantSource {
    let colors = &config.common.colors;
    if colors.use_single_file {
        VariantSource::SingleFile {
            file: config.figma.light_file_id.clone(),
            suffix: colors.dark_mode_suffix.clone(),
        }
    } else {
        VariantSource::TwinFiles {
            light: config.figma.light_file_id.clone(),
            dark: config.figma.dark_file_id.clone(),
        }
    }
}

/// Built-in templates, shadowed by the configured override directory.
fn prepare_engine(config: &Config) -> anyhow::Result<MiniJinjaEngine> {
    let mut engine = builtin_engine()?;
    if let Some(dir) = &config.ios.templates_path {
        let loaded = load_template_overrides(&mut engine, dir).with_context(|| {
            format!("failed to load template overrides from {}", dir.display())
        })?;
        for name in &loaded.replaced {
            debug!("template override: {name}");
        }
        for name in &loaded.added {
            debug!("extra template: {name}");
        }
    }
    Ok(engine)
}

fn colors_output(config: &Config) -> ColorsOutput {
    let colors = config.ios.colors.as_ref();
    ColorsOutput {
        color_swift: colors
            .and_then(|section| section.color_swift.as_deref())
            .map(Destination::from_path),
        swiftui_color_swift: colors
            .and_then(|section| section.swiftui_color_swift.as_deref())
            .map(Destination::from_path),
        name_style: config.ios.name_style,
    }
}

fn gradients_output(config: &Config) -> GradientsOutput {
    GradientsOutput {
        swiftui_gradient_swift: config
            .ios
            .gradients
            .as_ref()
            .and_then(|section| section.swiftui_gradient_swift.as_deref())
            .map(Destination::from_path),
        name_style: config.ios.name_style,
    }
}

fn typography_output(config: &Config) -> TypographyOutput {
    let Some(section) = config.ios.typography.as_ref() else {
        return TypographyOutput {
            name_style: config.ios.name_style,
            ..TypographyOutput::default()
        };
    };
    TypographyOutput {
        font_swift: section.font_swift.as_deref().map(Destination::from_path),
        swiftui_font_swift: section
            .swiftui_font_swift
            .as_deref()
            .map(Destination::from_path),
        generate_labels: section.generate_labels,
        labels_directory: section.labels_directory.clone(),
        label_styles_swift: section
            .label_styles_swift
            .as_deref()
            .map(Destination::from_path),
        name_style: config.ios.name_style,
    }
}
