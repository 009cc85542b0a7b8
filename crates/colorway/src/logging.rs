//! Logging setup and the diagnostics bridge.

use colorway_core::{Diagnostic, DiagnosticsSink, Severity};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the verbose flag picks
/// between info and debug for colorway's own output.
pub fn init(verbose: bool) {
    let fallback = if verbose { "colorway=debug" } else { "colorway=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

/// Forwards pipeline diagnostics to the log as they are recorded.
///
/// Diagnostics are values in the core crates; this sink is where they
/// become user-visible output.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn record(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity() {
            Severity::Warning => tracing::warn!("{diagnostic}"),
            Severity::Info => tracing::info!("{diagnostic}"),
        }
    }
}
