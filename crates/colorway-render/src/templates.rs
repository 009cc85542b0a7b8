//! Built-in output templates and user overrides.
//!
//! Every artifact the exporters emit comes from a named template. The
//! built-in set ships embedded in the binary; a project can shadow any of
//! them (or add new names) by pointing the configuration at a directory of
//! `.jinja` files. Overrides work by re-registration: the engine replaces
//! a template when the same name is added again, so the last registration
//! wins and user files always land after the built-ins.

use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::{MiniJinjaEngine, TemplateEngine};
use crate::error::RenderError;

/// Header placed at the top of every generated source file.
pub const GENERATED_HEADER: &str = "\
//
//  Generated by colorway from the design file.
//  Do not edit directly: the file is rewritten on every export.
//";

/// UIKit `UIColor` extension template.
pub const COLORS_UIKIT: &str = "colors.swift";
/// SwiftUI `Color` extension template, bridging the UIKit constants.
pub const COLORS_SWIFTUI: &str = "colors_swiftui.swift";
/// SwiftUI `Gradient` extension template.
pub const GRADIENTS_SWIFTUI: &str = "gradients.swift";
/// UIKit `UIFont` extension template.
pub const FONTS_UIKIT: &str = "fonts.swift";
/// SwiftUI `Font` extension template.
pub const FONTS_SWIFTUI: &str = "fonts_swiftui.swift";
/// `Label` base class plus one subclass per text style.
pub const LABEL: &str = "label.swift";
/// The `LabelStyle` support struct, rendered verbatim.
pub const LABEL_STYLE: &str = "label_style.swift";
/// `LabelStyle` factory extension, one method per text style.
pub const LABEL_STYLES: &str = "label_styles.swift";

/// Extension override files must carry to be picked up.
pub const TEMPLATE_EXTENSION: &str = ".jinja";

/// The built-in templates as `(name, source)` pairs.
pub const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (COLORS_UIKIT, include_str!("../templates/colors.swift.jinja")),
    (
        COLORS_SWIFTUI,
        include_str!("../templates/colors_swiftui.swift.jinja"),
    ),
    (
        GRADIENTS_SWIFTUI,
        include_str!("../templates/gradients.swift.jinja"),
    ),
    (FONTS_UIKIT, include_str!("../templates/fonts.swift.jinja")),
    (
        FONTS_SWIFTUI,
        include_str!("../templates/fonts_swiftui.swift.jinja"),
    ),
    (LABEL, include_str!("../templates/label.swift.jinja")),
    (
        LABEL_STYLE,
        include_str!("../templates/label_style.swift.jinja"),
    ),
    (
        LABEL_STYLES,
        include_str!("../templates/label_styles.swift.jinja"),
    ),
];

/// Registers every built-in template with the engine.
pub fn register_builtins(engine: &mut dyn TemplateEngine) -> Result<(), RenderError> {
    for (name, source) in BUILTIN_TEMPLATES {
        engine.add_template(name, source)?;
    }
    Ok(())
}

/// Returns a [`MiniJinjaEngine`] preloaded with the built-in templates.
pub fn builtin_engine() -> Result<MiniJinjaEngine, RenderError> {
    let mut engine = MiniJinjaEngine::new();
    register_builtins(&mut engine)?;
    Ok(engine)
}

/// What an override scan found, split by whether a name shadowed a
/// previously registered template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedOverrides {
    /// Names that replaced an already registered template.
    pub replaced: Vec<String>,
    /// Names registered for the first time.
    pub added: Vec<String>,
}

impl LoadedOverrides {
    pub fn is_empty(&self) -> bool {
        self.replaced.is_empty() && self.added.is_empty()
    }
}

/// Loads user template overrides from `dir` into the engine.
///
/// Every `*.jinja` file in the directory is registered under its file
/// name with the extension stripped, so `colors.swift.jinja` shadows the
/// built-in `colors.swift` template. Files with other extensions and
/// subdirectories are ignored. Entries are processed in lexicographic
/// order, so repeated runs register in the same order regardless of how
/// the OS lists the directory.
pub fn load_template_overrides(
    engine: &mut dyn TemplateEngine,
    dir: &Path,
) -> Result<LoadedOverrides, RenderError> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let mut loaded = LoadedOverrides::default();
    for path in paths {
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let Some(name) = file_name.strip_suffix(TEMPLATE_EXTENSION) else {
            continue;
        };

        let source = fs::read_to_string(&path)?;
        if engine.has_template(name) {
            loaded.replaced.push(name.to_string());
        } else {
            loaded.added.push(name.to_string());
        }
        engine.add_template(name, &source)?;
    }

    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_engine_registers_every_template() {
        let engine = builtin_engine().unwrap();
        for (name, _) in BUILTIN_TEMPLATES {
            assert!(engine.has_template(name), "missing builtin {name}");
        }
    }

    #[test]
    fn builtin_names_are_unique() {
        let mut names: Vec<&str> = BUILTIN_TEMPLATES.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BUILTIN_TEMPLATES.len());
    }

    #[test]
    fn overrides_shadow_builtins_by_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("colors.swift.jinja"),
            "custom {{ colors | length }}",
        )
        .unwrap();

        let mut engine = builtin_engine().unwrap();
        let loaded = load_template_overrides(&mut engine, dir.path()).unwrap();

        assert_eq!(loaded.replaced, vec!["colors.swift".to_string()]);
        assert!(loaded.added.is_empty());

        let output = engine
            .render_named(COLORS_UIKIT, &serde_json::json!({ "colors": [1, 2, 3] }))
            .unwrap();
        assert_eq!(output, "custom 3");
    }

    #[test]
    fn unknown_names_are_reported_as_added() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("banner.swift.jinja"), "banner").unwrap();

        let mut engine = builtin_engine().unwrap();
        let loaded = load_template_overrides(&mut engine, dir.path()).unwrap();

        assert_eq!(loaded.added, vec!["banner.swift".to_string()]);
        assert!(engine.has_template("banner.swift"));
    }

    #[test]
    fn files_without_the_template_extension_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("README.md"), "notes").unwrap();
        std::fs::write(dir.path().join("colors.swift"), "not a template").unwrap();

        let mut engine = builtin_engine().unwrap();
        let loaded = load_template_overrides(&mut engine, dir.path()).unwrap();

        assert!(loaded.is_empty());
    }

    #[test]
    fn missing_override_directory_is_an_io_error() {
        let mut engine = builtin_engine().unwrap();
        let err = load_template_overrides(&mut engine, Path::new("/nonexistent/overrides"))
            .unwrap_err();
        assert!(matches!(err, RenderError::IoError(_)));
    }
}
