//! Configuration file loading.
//!
//! The config is one YAML file, `colorway.yaml` by default, with camelCase
//! keys. Output paths are optional throughout: a missing path means that
//! artifact is not generated, so a project exports exactly the files it
//! consumes.
//!
//! ```yaml
//! figma:
//!   lightFileId: shPilWnVdJfo10YF12345
//!   darkFileId: KfF6DnJTWHGZzC912345
//!
//! common:
//!   colors:
//!     useSingleFile: false
//!     darkModeSuffix: "_dark"
//!
//! ios:
//!   nameStyle: camelCase
//!   templatesPath: ./figma-templates
//!   colors:
//!     colorSwift: Sources/UI/UIColor+App.swift
//!     swiftuiColorSwift: Sources/UI/Color+App.swift
//!   gradients:
//!     swiftuiGradientSwift: Sources/UI/Gradients.swift
//!   typography:
//!     fontSwift: Sources/UI/UIFont+App.swift
//!     swiftUIFontSwift: Sources/UI/Font+App.swift
//!     generateLabels: true
//!     labelsDirectory: Sources/UI/Labels
//!     labelStylesSwift: Sources/UI/LabelStyle+App.swift
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use colorway_core::DEFAULT_DARK_SUFFIX;
use colorway_render::NameStyle;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub figma: FigmaConfig,
    #[serde(default)]
    pub common: CommonConfig,
    pub ios: IosConfig,
}

impl Config {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = serde_yaml::from_str(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }
}

/// Which Figma files to export from.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaConfig {
    /// File holding the light appearance, or the only file.
    pub light_file_id: String,
    /// Separate file holding the dark appearance.
    #[serde(default)]
    pub dark_file_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonConfig {
    #[serde(default)]
    pub colors: CommonColorsConfig,
}

/// How dark variants are organized in the source document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonColorsConfig {
    /// Light and dark styles live in the light file, dark ones marked by
    /// a name suffix.
    #[serde(default)]
    pub use_single_file: bool,
    /// The suffix marking dark styles in single-file mode.
    #[serde(default = "default_dark_mode_suffix")]
    pub dark_mode_suffix: String,
}

impl Default for CommonColorsConfig {
    fn default() -> Self {
        Self {
            use_single_file: false,
            dark_mode_suffix: default_dark_mode_suffix(),
        }
    }
}

fn default_dark_mode_suffix() -> String {
    DEFAULT_DARK_SUFFIX.to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IosConfig {
    /// Identifier style for generated Swift members.
    #[serde(default)]
    pub name_style: NameStyle,
    /// Directory of `.jinja` files shadowing the built-in templates.
    #[serde(default)]
    pub templates_path: Option<PathBuf>,
    #[serde(default)]
    pub colors: Option<IosColorsConfig>,
    #[serde(default)]
    pub gradients: Option<IosGradientsConfig>,
    #[serde(default)]
    pub typography: Option<IosTypographyConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IosColorsConfig {
    /// UIKit `UIColor` extension output path.
    #[serde(default)]
    pub color_swift: Option<PathBuf>,
    /// SwiftUI `Color` extension output path.
    #[serde(default)]
    pub swiftui_color_swift: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IosGradientsConfig {
    /// SwiftUI `Gradient` extension output path.
    #[serde(default)]
    pub swiftui_gradient_swift: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IosTypographyConfig {
    /// UIKit `UIFont` extension output path.
    #[serde(default)]
    pub font_swift: Option<PathBuf>,
    /// SwiftUI `Font` extension output path.
    #[serde(default, rename = "swiftUIFontSwift")]
    pub swiftui_font_swift: Option<PathBuf>,
    /// Generate `Label.swift` and `LabelStyle.swift`.
    #[serde(default)]
    pub generate_labels: bool,
    /// Directory the label files land in.
    #[serde(default)]
    pub labels_directory: Option<PathBuf>,
    /// Optional `LabelStyle` factory extension output path.
    #[serde(default)]
    pub label_styles_swift: Option<PathBuf>,
}
