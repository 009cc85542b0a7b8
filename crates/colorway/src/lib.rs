//! # Colorway - Figma to Swift Token Export
//!
//! The binary is thin orchestration over three library crates:
//! `colorway-api` fetches style catalogs and their nodes, `colorway-core`
//! normalizes them into color, gradient and text tokens, and
//! `colorway-render` turns tokens into Swift source files. This crate
//! adds what a command line run needs on top: argument parsing, the YAML
//! config, logging, and the file writer.
//!
//! Authentication is one environment variable, [`TOKEN_ENV_VAR`], holding
//! a Figma personal access token.

pub mod cli;
pub mod config;
pub mod logging;
pub mod pipeline;
pub mod writer;

use anyhow::Context;
use tracing::info;

use colorway_api::{FileApi, HttpClient};
use colorway_core::DiagnosticsSink;
use colorway_render::GeneratedFile;

use cli::{Cli, Command};
use config::Config;
use logging::TracingSink;

/// Environment variable holding the Figma personal access token.
pub const TOKEN_ENV_VAR: &str = "FIGMA_PERSONAL_TOKEN";

type ExportFn =
    fn(&dyn FileApi, &Config, &mut dyn DiagnosticsSink) -> anyhow::Result<Vec<GeneratedFile>>;

/// Runs the parsed command to completion.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let (args, export) = match &cli.command {
        Command::Colors(args) => (args, pipeline::export_colors as ExportFn),
        Command::Typography(args) => (args, pipeline::export_typography as ExportFn),
    };

    let config = Config::from_file(&args.config)?;
    let api = client_from_env()?;
    let mut diagnostics = TracingSink;

    let files = export(&api, &config, &mut diagnostics)?;
    writer::write_files(&files)?;
    info!("exported {} files", files.len());

    Ok(())
}

/// Builds the Figma client from the token environment variable.
fn client_from_env() -> anyhow::Result<HttpClient> {
    let token = std::env::var(TOKEN_ENV_VAR).with_context(|| {
        format!("{TOKEN_ENV_VAR} is not set; create a personal access token in the Figma account settings")
    })?;
    Ok(HttpClient::new(token)?)
}
