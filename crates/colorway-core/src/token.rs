//! Normalized design tokens and the collections the pipeline passes around.
//!
//! Everything downstream of the Figma wire models works with the types in
//! this module. A token's identity is its [`TokenName`]; two tokens with the
//! same name refer to the same design concept even when their channel values
//! differ between appearance modes.

use std::fmt;

use crate::platform::Platform;

/// The identity of a token as authored in Figma, e.g. `"background/primary"`.
///
/// Token names are compared verbatim. They are not identifiers yet; turning
/// a name into a code identifier happens at render time.
///
/// # Example
///
/// ```rust
/// use colorway_core::TokenName;
///
/// let name = TokenName::new("brand_gradient");
/// assert_eq!(TokenName::stop(name.as_str(), 0).as_str(), "brand_gradient_0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenName(String);

impl TokenName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Name of the synthetic color token for one gradient stop.
    ///
    /// Stops are numbered from zero in paint order.
    pub fn stop(style_name: &str, index: usize) -> Self {
        Self(format!("{style_name}_{index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Strip a trailing appearance suffix, yielding the base name.
    ///
    /// Returns `None` when the name does not end with `suffix`. Matching is
    /// exact and case sensitive.
    pub fn strip_variant_suffix(&self, suffix: &str) -> Option<TokenName> {
        self.0.strip_suffix(suffix).map(TokenName::new)
    }

    /// Whether the name carries the given appearance suffix.
    pub fn has_variant_suffix(&self, suffix: &str) -> bool {
        self.0.ends_with(suffix)
    }
}

impl fmt::Display for TokenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TokenName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TokenName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A solid color token. Channels stay exactly as Figma reported them, in
/// the `0.0..=1.0` range; nothing is premultiplied or quantized.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorToken {
    pub name: TokenName,
    /// Platform restriction parsed from the style description, if any.
    pub platform: Option<Platform>,
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

/// One stop of a gradient token. `color` names a [`ColorToken`] emitted
/// alongside the gradient; the renderer resolves it by name.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    pub color: TokenName,
    pub position: f64,
}

/// A gradient token. Its stop colors live as ordinary color tokens in the
/// same [`ColorSet`], so exports that only understand flat colors still see
/// every channel value.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientToken {
    pub name: TokenName,
    pub platform: Option<Platform>,
    pub stops: Vec<GradientStop>,
}

/// All color-like tokens extracted from one file, in catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorSet {
    pub colors: Vec<ColorToken>,
    pub gradients: Vec<GradientToken>,
}

impl ColorSet {
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.gradients.is_empty()
    }

    /// Drop every token tagged for a different platform. Untagged tokens
    /// are kept.
    pub fn retain_platform(&mut self, platform: Platform) {
        self.colors.retain(|color| platform.admits(color.platform));
        self.gradients
            .retain(|gradient| platform.admits(gradient.platform));
    }
}

/// The light appearance of a file plus, optionally, its dark counterpart.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantPair {
    pub light: ColorSet,
    pub dark: Option<ColorSet>,
}

impl VariantPair {
    /// Apply a platform filter to both appearances.
    pub fn retain_platform(&mut self, platform: Platform) {
        self.light.retain_platform(platform);
        if let Some(dark) = &mut self.dark {
            dark.retain_platform(platform);
        }
    }
}

/// One token across appearance modes: the light value always exists, the
/// dark value only when the source provides it.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetPair<T> {
    pub light: T,
    pub dark: Option<T>,
}

impl<T> AssetPair<T> {
    pub fn new(light: T, dark: Option<T>) -> Self {
        Self { light, dark }
    }
}

// ============================================================================
// Tests
// ============================================================================
