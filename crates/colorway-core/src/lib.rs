//! Normalization pipeline from Figma style catalogs to design tokens.
//!
//! The pipeline is a straight line with one join in the middle:
//!
//! 1. **Catalog**: fetch a file's published styles and keep the exportable
//!    ones ([`catalog`]).
//! 2. **Nodes**: fetch the document nodes those styles point at.
//! 3. **Normalize**: classify each node's first fill and emit tokens
//!    ([`classify`], [`normalize`]). Flaws cost one style each, reported
//!    through a [`DiagnosticsSink`].
//! 4. **Variants**: assemble light/dark pairs from twin files or a
//!    single suffixed file, then line tokens up by name ([`variants`]).
//!
//! Text styles run the same loop without the variant step ([`typography`]).
//!
//! Determinism is load-bearing throughout: output order always follows
//! catalog order, so two runs against the same document produce identical
//! token streams and, downstream, byte-identical generated files.
//!
//! # Example
//!
//! ```rust,no_run
//! use colorway_api::HttpClient;
//! use colorway_core::diagnostics::NullSink;
//! use colorway_core::variants::{load_color_variants, VariantSource};
//!
//! let api = HttpClient::new("personal-token").unwrap();
//! let source = VariantSource::SingleFile {
//!     file: "h7bQWC05xysVRz7sSTif2D".to_string(),
//!     suffix: "_dark".to_string(),
//! };
//! let pair = load_color_variants(&api, &source, &mut NullSink).unwrap();
//! println!("{} light colors", pair.light.colors.len());
//! ```

pub mod catalog;
pub mod classify;
pub mod diagnostics;
pub mod error;
pub mod normalize;
pub mod platform;
pub mod token;
pub mod typography;
pub mod variants;

pub use classify::{classify, ClassifiedPaint};
pub use diagnostics::{Diagnostic, DiagnosticsSink, NullSink, RecordingSink, Severity};
pub use error::LoadError;
pub use normalize::normalize;
pub use platform::Platform;
pub use token::{
    AssetPair, ColorSet, ColorToken, GradientStop, GradientToken, TokenName, VariantPair,
};
pub use typography::{TextCase, TextStyle};
pub use variants::{
    load_color_set, load_color_variants, pair_colors, pair_gradients, split_dark_suffix,
    VariantSource, DEFAULT_DARK_SUFFIX,
};
