//! Error type for rendering operations.
//!
//! [`RenderError`] abstracts over the template engine's own errors so the
//! public API stays stable if the backend ever changes.

use std::fmt;

/// Anything that can go wrong while turning tokens into source files.
#[derive(Debug)]
pub enum RenderError {
    /// Template syntax error or a failure during evaluation.
    TemplateError(String),

    /// A named template is not registered with the engine.
    TemplateNotFound(String),

    /// Render model serialization failed.
    SerializationError(String),

    /// A gradient stop references a color token the export does not
    /// contain. The generated code would not compile, so this is fatal.
    BrokenReference { gradient: String, stop: String },

    /// I/O failure while reading override templates from disk.
    IoError(std::io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::TemplateError(msg) => write!(f, "template error: {}", msg),
            RenderError::TemplateNotFound(name) => write!(f, "template not found: {}", name),
            RenderError::SerializationError(msg) => write!(f, "serialization error: {}", msg),
            RenderError::BrokenReference { gradient, stop } => write!(
                f,
                "gradient `{}` references color `{}` which is not part of the export",
                gradient, stop
            ),
            RenderError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::IoError(err)
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::SerializationError(err.to_string())
    }
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::TemplateNotFound => RenderError::TemplateNotFound(err.to_string()),
            ErrorKind::BadSerialization => RenderError::SerializationError(err.to_string()),
            _ => RenderError::TemplateError(err.to_string()),
        }
    }
}
