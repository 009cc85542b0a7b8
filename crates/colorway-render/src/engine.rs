//! Template engine abstraction.
//!
//! [`TemplateEngine`] decouples the exporters from the template backend.
//! The default implementation is [`MiniJinjaEngine`]; tests occasionally
//! substitute trivial engines to observe exporter behavior.

use minijinja::{Environment, Value};

use crate::error::RenderError;

/// A template engine that can render templates with data.
///
/// Engines hold a set of named templates. Registering a name twice
/// replaces the earlier source, which is exactly how user overrides
/// shadow the built-in templates.
pub trait TemplateEngine: Send + Sync {
    /// Compiles and renders a one-off template string.
    fn render_template(
        &self,
        template: &str,
        data: &serde_json::Value,
    ) -> Result<String, RenderError>;

    /// Registers a named template, replacing any previous source.
    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError>;

    /// Renders a previously registered template.
    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String, RenderError>;

    /// Whether a template with the given name is registered.
    fn has_template(&self, name: &str) -> bool;
}

/// MiniJinja-based template engine with the colorway filters registered.
///
/// # Example
///
/// ```rust
/// use colorway_render::engine::{MiniJinjaEngine, TemplateEngine};
/// use serde_json::json;
///
/// let engine = MiniJinjaEngine::new();
/// let output = engine
///     .render_template("alpha: {{ alpha | decimal }}", &json!({ "alpha": 1.0 }))
///     .unwrap();
/// assert_eq!(output, "alpha: 1.0");
/// ```
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    /// Creates an empty engine with default filters registered.
    pub fn new() -> Self {
        let mut env = Environment::new();
        // Generated source files end with the newline the template ends
        // with; minijinja would otherwise swallow it.
        env.set_keep_trailing_newline(true);
        register_filters(&mut env);
        Self { env }
    }

    /// Returns a mutable reference to the underlying environment, for
    /// registering extra filters or functions.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render_template(
        &self,
        template: &str,
        data: &serde_json::Value,
    ) -> Result<String, RenderError> {
        let value = Value::from_serialize(data);
        Ok(self.env.render_str(template, value)?)
    }

    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String, RenderError> {
        let template = self.env.get_template(name)?;
        let value = Value::from_serialize(data);
        Ok(template.render(value)?)
    }

    fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }
}

/// Registers colorway's custom filters with a MiniJinja environment.
///
/// Called automatically by [`MiniJinjaEngine::new`].
pub fn register_filters(env: &mut Environment<'static>) {
    // Swift float literals: whole numbers keep a trailing ".0" so the
    // literal stays a Double.
    env.add_filter("decimal", format_decimal);
}

/// Format a float the way the Swift templates need it: shortest form that
/// round-trips, with `.0` appended to whole numbers.
pub fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_inline_template() {
        let engine = MiniJinjaEngine::new();
        let output = engine
            .render_template("Hello, {{ name }}!", &json!({ "name": "World" }))
            .unwrap();
        assert_eq!(output, "Hello, World!");
    }

    #[test]
    fn named_template_round_trip() {
        let mut engine = MiniJinjaEngine::new();
        engine.add_template("greeting", "Hi {{ who }}").unwrap();

        assert!(engine.has_template("greeting"));
        assert!(!engine.has_template("missing"));

        let output = engine.render_named("greeting", &json!({ "who": "there" })).unwrap();
        assert_eq!(output, "Hi there");
    }

    #[test]
    fn re_adding_a_template_replaces_it() {
        let mut engine = MiniJinjaEngine::new();
        engine.add_template("t", "first").unwrap();
        engine.add_template("t", "second").unwrap();

        let output = engine.render_named("t", &serde_json::Value::Null).unwrap();
        assert_eq!(output, "second");
    }

    #[test]
    fn rendering_unknown_name_is_not_found() {
        let engine = MiniJinjaEngine::new();
        let err = engine
            .render_named("ghost", &serde_json::Value::Null)
            .unwrap_err();
        assert!(matches!(err, RenderError::TemplateNotFound(_)));
    }

    #[test]
    fn syntax_errors_surface_as_template_errors() {
        let engine = MiniJinjaEngine::new();
        let err = engine
            .render_template("{{ unclosed", &serde_json::Value::Null)
            .unwrap_err();
        assert!(matches!(err, RenderError::TemplateError(_)));
    }

    #[test]
    fn keeps_the_trailing_newline() {
        let engine = MiniJinjaEngine::new();
        let output = engine
            .render_template("last line\n", &serde_json::Value::Null)
            .unwrap();
        assert_eq!(output, "last line\n");
    }

    // ========================================================================
    // decimal filter
    // ========================================================================

    #[test]
    fn decimal_keeps_whole_numbers_double() {
        assert_eq!(format_decimal(1.0), "1.0");
        assert_eq!(format_decimal(0.0), "0.0");
        assert_eq!(format_decimal(16.0), "16.0");
        assert_eq!(format_decimal(700.0), "700.0");
    }

    #[test]
    fn decimal_keeps_fractions_shortest() {
        assert_eq!(format_decimal(0.5), "0.5");
        assert_eq!(format_decimal(28.8), "28.8");
        assert_eq!(format_decimal(-0.4), "-0.4");
        assert_eq!(format_decimal(0.30000001192092896), "0.30000001192092896");
    }

    #[test]
    fn decimal_filter_is_registered() {
        let engine = MiniJinjaEngine::new();
        let output = engine
            .render_template("{{ x | decimal }}, {{ y | decimal }}", &json!({ "x": 2.0, "y": 0.25 }))
            .unwrap();
        assert_eq!(output, "2.0, 0.25");
    }
}
