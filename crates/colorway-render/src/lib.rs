//! # Colorway Render - Token-to-Source Rendering
//!
//! `colorway-render` turns the token collections produced by
//! `colorway-core` into Swift source files: color, gradient and font
//! accessors plus the UIKit label hierarchy.
//!
//! The crate sits behind two seams. [`TemplateEngine`] abstracts the
//! template backend (MiniJinja by default, with user overrides loaded
//! from a directory), and every exporter returns [`GeneratedFile`]
//! values instead of writing to disk, so a caller can collect the whole
//! artifact set and write it atomically or not at all.
//!
//! ## Core Concepts
//!
//! - [`identifier`]: turns token names into Swift identifiers
//!   (`brand/primaryRed` to `brandPrimaryRed`), escaping reserved words
//! - Render models: typed serde structs handed to templates, built in
//!   [`model`]
//! - [`ColorExporter`], [`GradientExporter`], [`TypographyExporter`]:
//!   one per artifact family, each configured with an output description
//! - [`builtin_engine`]: a [`MiniJinjaEngine`] preloaded with the
//!   built-in templates; [`load_template_overrides`] shadows them from a
//!   directory of `.jinja` files
//!
//! Gradients are where rendering gets interesting: a gradient stop names
//! a color token rather than carrying channel values, so the gradient
//! exporter resolves every stop against the identifiers the color
//! exporter generated. A stop that cannot be resolved fails the export
//! with [`RenderError::BrokenReference`].
//!
//! ## Quick Start
//!
//! ```rust
//! use colorway_core::{AssetPair, ColorToken, TokenName};
//! use colorway_render::{
//!     builtin_engine, ColorExporter, ColorsOutput, Destination, NameStyle,
//! };
//!
//! let engine = builtin_engine().unwrap();
//! let exporter = ColorExporter::new(ColorsOutput {
//!     color_swift: Some(Destination::new("Sources/UI", "Colors.swift")),
//!     swiftui_color_swift: None,
//!     name_style: NameStyle::CamelCase,
//! });
//!
//! let pairs = vec![AssetPair::new(
//!     ColorToken {
//!         name: TokenName::new("brand/primary"),
//!         platform: None,
//!         red: 1.0,
//!         green: 0.2,
//!         blue: 0.2,
//!         alpha: 1.0,
//!     },
//!     None,
//! )];
//!
//! let files = exporter.export(&engine, &pairs).unwrap();
//! assert!(files[0].content.contains("static var brandPrimary: UIColor"));
//! ```

pub mod colors;
pub mod engine;
pub mod error;
pub mod files;
pub mod gradients;
pub mod identifiers;
pub mod model;
pub mod templates;
pub mod typography;

pub use colors::{ColorExporter, ColorsOutput};
pub use engine::{format_decimal, register_filters, MiniJinjaEngine, TemplateEngine};
pub use error::RenderError;
pub use files::{Destination, GeneratedFile};
pub use gradients::{GradientExporter, GradientsOutput};
pub use identifiers::{identifier, type_identifier, NameStyle};
pub use model::{
    color_identifiers, color_models, gradient_models, text_style_models, ChannelsModel,
    ColorModel, GradientModel, GradientStopModel, TextStyleModel,
};
pub use templates::{
    builtin_engine, load_template_overrides, register_builtins, LoadedOverrides,
    BUILTIN_TEMPLATES, GENERATED_HEADER, TEMPLATE_EXTENSION,
};
pub use typography::{TypographyExporter, TypographyOutput};
