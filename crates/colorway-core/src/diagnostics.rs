//! Recoverable pipeline events.
//!
//! The normalizer skips over document flaws it can survive: a catalog entry
//! whose node vanished, a node with no fills, a paint kind we cannot
//! express. Each skip is reported through a [`DiagnosticsSink`] so the
//! caller decides whether that means a log line or a test assertion.

use colorway_api::{NodeId, PaintType};

use crate::token::TokenName;

/// How loud a diagnostic should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Expected noise, e.g. image fills in a color catalog.
    Info,
    /// Document inconsistency worth a human look.
    Warning,
}

/// One recoverable event. The pipeline continues after every one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The style catalog references a node the nodes endpoint did not return.
    MissingNode { style: String, node_id: NodeId },
    /// The style's node has an empty fill stack.
    EmptyFills { style: String },
    /// The style's first fill has a kind the exporter cannot express.
    UnsupportedFill { style: String, kind: PaintType },
    /// A text style's node carries no typographic attributes.
    MissingTextAttributes { style: String },
    /// A dark token has no light counterpart and was dropped from the
    /// export.
    UnpairedDark { name: TokenName },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::UnsupportedFill { .. } => Severity::Info,
            Diagnostic::MissingNode { .. }
            | Diagnostic::EmptyFills { .. }
            | Diagnostic::MissingTextAttributes { .. }
            | Diagnostic::UnpairedDark { .. } => Severity::Warning,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::MissingNode { style, node_id } => {
                write!(f, "style `{style}`: node {node_id} not found in file, skipped")
            }
            Diagnostic::EmptyFills { style } => {
                write!(f, "style `{style}`: node has no fills, skipped")
            }
            Diagnostic::UnsupportedFill { style, kind } => {
                write!(f, "style `{style}`: unsupported fill kind {kind}, skipped")
            }
            Diagnostic::MissingTextAttributes { style } => {
                write!(f, "style `{style}`: node has no text attributes, skipped")
            }
            Diagnostic::UnpairedDark { name } => {
                write!(f, "dark token `{name}` has no light counterpart, dropped")
            }
        }
    }
}

/// Where recoverable events go.
///
/// The CLI forwards them to its logger; tests use [`RecordingSink`] to
/// assert on exactly what was skipped.
pub trait DiagnosticsSink {
    fn record(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics in order. The test-side sink.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub diagnostics: Vec<Diagnostic>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagnosticsSink for RecordingSink {
    fn record(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// Discards everything.
#[derive(Debug, Default)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn record(&mut self, _diagnostic: Diagnostic) {}
}
