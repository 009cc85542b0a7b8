//! Light/dark variant assembly.
//!
//! Two source layouts exist in the wild. Twin files keep light and dark
//! palettes in separate Figma files with identical token names. Single
//! file keeps both in one file and marks dark tokens with a name suffix,
//! `_dark` by default. Either way the result is a [`VariantPair`], and
//! pairing then lines tokens up by name for the renderer.

use std::collections::{HashMap, HashSet};

use colorway_api::FileApi;

use crate::catalog::{load_fill_styles, load_nodes};
use crate::diagnostics::{Diagnostic, DiagnosticsSink};
use crate::error::LoadError;
use crate::normalize::normalize;
use crate::token::{AssetPair, ColorSet, ColorToken, GradientToken, TokenName, VariantPair};

/// Default name suffix marking dark tokens in single-file documents.
pub const DEFAULT_DARK_SUFFIX: &str = "_dark";

/// Where the light and dark palettes live and how to tell them apart.
#[derive(Debug, Clone)]
pub enum VariantSource {
    /// One file per appearance. `dark` is optional; without it the export
    /// is light only.
    TwinFiles { light: String, dark: Option<String> },
    /// Both appearances in one file, dark tokens marked by `suffix`.
    SingleFile { file: String, suffix: String },
}

/// Load one file's color tokens end to end.
pub fn load_color_set(
    api: &dyn FileApi,
    file_key: &str,
    diagnostics: &mut dyn DiagnosticsSink,
) -> Result<ColorSet, LoadError> {
    let styles = load_fill_styles(api, file_key)?;
    let nodes = load_nodes(api, file_key, &styles)?;
    Ok(normalize(&styles, &nodes, diagnostics))
}

/// Load a light/dark pair according to the source layout.
///
/// Single-file sources always yield `Some` dark set, possibly empty, since
/// the suffix split itself proves the document opted into dark mode.
pub fn load_color_variants(
    api: &dyn FileApi,
    source: &VariantSource,
    diagnostics: &mut dyn DiagnosticsSink,
) -> Result<VariantPair, LoadError> {
    match source {
        VariantSource::TwinFiles { light, dark } => {
            let light = load_color_set(api, light, diagnostics)?;
            let dark = match dark {
                Some(file_key) => Some(load_color_set(api, file_key, diagnostics)?),
                None => None,
            };
            Ok(VariantPair { light, dark })
        }
        VariantSource::SingleFile { file, suffix } => {
            let merged = load_color_set(api, file, diagnostics)?;
            split_dark_suffix(merged, suffix)
        }
    }
}

/// Partition a merged set into light and dark by name suffix.
///
/// Dark tokens are renamed to their base name by stripping exactly the
/// suffix. Relative order inside each partition is preserved. If two dark
/// tokens collapse onto one base name the split fails; the document is
/// ambiguous and no sensible export exists.
///
/// Gradient stop tokens are unaffected: `g_dark` produces stops
/// `g_dark_0`, `g_dark_1`, ... whose names do not end in the suffix, so
/// they stay in the light partition where the renderer's cross-reference
/// lookup finds them.
pub fn split_dark_suffix(merged: ColorSet, suffix: &str) -> Result<VariantPair, LoadError> {
    let mut light = ColorSet::default();
    let mut dark = ColorSet::default();

    for color in merged.colors {
        match color.name.strip_variant_suffix(suffix) {
            Some(base) => dark.colors.push(ColorToken { name: base, ..color }),
            None => light.colors.push(color),
        }
    }

    for gradient in merged.gradients {
        match gradient.name.strip_variant_suffix(suffix) {
            Some(base) => dark.gradients.push(GradientToken { name: base, ..gradient }),
            None => light.gradients.push(gradient),
        }
    }

    ensure_unique(dark.colors.iter().map(|color| &color.name))?;
    ensure_unique(dark.gradients.iter().map(|gradient| &gradient.name))?;

    Ok(VariantPair { light, dark: Some(dark) })
}

fn ensure_unique<'a>(names: impl Iterator<Item = &'a TokenName>) -> Result<(), LoadError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(LoadError::DuplicateDarkName { name: name.clone() });
        }
    }
    Ok(())
}

/// Line up light and dark color tokens by name.
pub fn pair_colors(
    pair: &VariantPair,
    diagnostics: &mut dyn DiagnosticsSink,
) -> Vec<AssetPair<ColorToken>> {
    pair_by_name(
        &pair.light.colors,
        pair.dark.as_ref().map(|set| set.colors.as_slice()),
        |color| &color.name,
        diagnostics,
    )
}

/// Line up light and dark gradient tokens by name.
pub fn pair_gradients(
    pair: &VariantPair,
    diagnostics: &mut dyn DiagnosticsSink,
) -> Vec<AssetPair<GradientToken>> {
    pair_by_name(
        &pair.light.gradients,
        pair.dark.as_ref().map(|set| set.gradients.as_slice()),
        |gradient| &gradient.name,
        diagnostics,
    )
}

/// Pairing core: light tokens drive order, dark tokens attach by name.
/// A dark token with no light counterpart is dropped with a warning; the
/// light set alone decides what gets exported.
fn pair_by_name<T: Clone>(
    light: &[T],
    dark: Option<&[T]>,
    name_of: impl Fn(&T) -> &TokenName,
    diagnostics: &mut dyn DiagnosticsSink,
) -> Vec<AssetPair<T>> {
    let dark = dark.unwrap_or(&[]);
    let dark_by_name: HashMap<&TokenName, &T> =
        dark.iter().map(|token| (name_of(token), token)).collect();

    let mut used: HashSet<&TokenName> = HashSet::new();
    let pairs: Vec<AssetPair<T>> = light
        .iter()
        .map(|token| {
            let name = name_of(token);
            let dark_token = dark_by_name.get(name).map(|found| {
                used.insert(name);
                (*found).clone()
            });
            AssetPair::new(token.clone(), dark_token)
        })
        .collect();

    for token in dark {
        let name = name_of(token);
        if !used.contains(name) {
            diagnostics.record(Diagnostic::UnpairedDark { name: name.clone() });
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingSink;

    fn color(name: &str) -> ColorToken {
        ColorToken {
            name: TokenName::new(name),
            platform: None,
            red: 0.5,
            green: 0.5,
            blue: 0.5,
            alpha: 1.0,
        }
    }

    fn gradient(name: &str, stop_names: &[&str]) -> GradientToken {
        GradientToken {
            name: TokenName::new(name),
            platform: None,
            stops: stop_names
                .iter()
                .enumerate()
                .map(|(index, stop)| crate::token::GradientStop {
                    color: TokenName::new(*stop),
                    position: index as f64,
                })
                .collect(),
        }
    }

    #[test]
    fn split_partitions_by_suffix_and_strips_it() {
        let merged = ColorSet {
            colors: vec![color("button"), color("button_dark"), color("accent")],
            gradients: Vec::new(),
        };

        let pair = split_dark_suffix(merged, "_dark").unwrap();

        let light: Vec<&str> = pair.light.colors.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(light, vec!["button", "accent"]);

        let dark = pair.dark.unwrap();
        let dark_names: Vec<&str> = dark.colors.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(dark_names, vec!["button"]);
    }

    #[test]
    fn split_always_yields_a_dark_set() {
        let merged = ColorSet { colors: vec![color("only_light")], gradients: Vec::new() };
        let pair = split_dark_suffix(merged, "_dark").unwrap();
        let dark = pair.dark.expect("single-file split implies dark mode");
        assert!(dark.is_empty());
    }

    #[test]
    fn split_detects_colliding_dark_names() {
        // Figma allows two styles with the same name; after the strip both
        // land on the same base and the document is ambiguous.
        let merged = ColorSet {
            colors: vec![color("button_dark"), color("accent"), color("button_dark")],
            gradients: Vec::new(),
        };

        let err = split_dark_suffix(merged, "_dark").unwrap_err();
        match err {
            LoadError::DuplicateDarkName { name } => {
                assert_eq!(name.as_str(), "button");
            }
            other => panic!("expected DuplicateDarkName, got {other:?}"),
        }
    }

    #[test]
    fn split_leaves_gradient_stop_references_alone() {
        let merged = ColorSet {
            colors: vec![color("g_dark_0"), color("g_dark_1")],
            gradients: vec![gradient("g_dark", &["g_dark_0", "g_dark_1"])],
        };

        let pair = split_dark_suffix(merged, "_dark").unwrap();

        // Stop tokens stay light; the gradient moves to dark under its
        // base name with references untouched.
        let light: Vec<&str> = pair.light.colors.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(light, vec!["g_dark_0", "g_dark_1"]);

        let dark = pair.dark.unwrap();
        assert_eq!(dark.gradients[0].name.as_str(), "g");
        assert_eq!(dark.gradients[0].stops[0].color.as_str(), "g_dark_0");
    }

    #[test]
    fn pairing_follows_light_order() {
        let pair = VariantPair {
            light: ColorSet {
                colors: vec![color("b"), color("a")],
                gradients: Vec::new(),
            },
            dark: Some(ColorSet {
                colors: vec![color("a"), color("b")],
                gradients: Vec::new(),
            }),
        };

        let pairs = pair_colors(&pair, &mut RecordingSink::new());
        let names: Vec<&str> = pairs.iter().map(|p| p.light.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert!(pairs.iter().all(|p| p.dark.is_some()));
    }

    #[test]
    fn light_without_dark_pairs_as_none() {
        let pair = VariantPair {
            light: ColorSet { colors: vec![color("solo")], gradients: Vec::new() },
            dark: Some(ColorSet::default()),
        };

        let pairs = pair_colors(&pair, &mut RecordingSink::new());
        assert_eq!(pairs.len(), 1);
        assert!(pairs[0].dark.is_none());
    }

    #[test]
    fn dark_without_light_is_dropped_with_warning() {
        let pair = VariantPair {
            light: ColorSet { colors: vec![color("kept")], gradients: Vec::new() },
            dark: Some(ColorSet {
                colors: vec![color("kept"), color("orphan")],
                gradients: Vec::new(),
            }),
        };

        let mut sink = RecordingSink::new();
        let pairs = pair_colors(&pair, &mut sink);

        assert_eq!(pairs.len(), 1);
        assert_eq!(
            sink.diagnostics,
            vec![Diagnostic::UnpairedDark { name: TokenName::new("orphan") }]
        );
    }

    #[test]
    fn no_dark_set_pairs_everything_light_only() {
        let pair = VariantPair {
            light: ColorSet {
                colors: vec![color("one"), color("two")],
                gradients: Vec::new(),
            },
            dark: None,
        };

        let mut sink = RecordingSink::new();
        let pairs = pair_colors(&pair, &mut sink);

        assert_eq!(pairs.len(), 2);
        assert!(pairs.iter().all(|p| p.dark.is_none()));
        assert!(sink.diagnostics.is_empty());
    }

    #[test]
    fn gradients_pair_by_name_too() {
        let pair = VariantPair {
            light: ColorSet {
                colors: Vec::new(),
                gradients: vec![gradient("hero", &["hero_0"])],
            },
            dark: Some(ColorSet {
                colors: Vec::new(),
                gradients: vec![gradient("hero", &["hero_dark_0"])],
            }),
        };

        let pairs = pair_gradients(&pair, &mut RecordingSink::new());
        assert_eq!(pairs.len(), 1);
        let dark = pairs[0].dark.as_ref().unwrap();
        assert_eq!(dark.stops[0].color.as_str(), "hero_dark_0");
    }
}
