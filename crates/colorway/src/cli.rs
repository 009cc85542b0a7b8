//! Command line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Export design tokens from a Figma file into Swift sources.
#[derive(Parser)]
#[command(name = "colorway")]
#[command(version)]
#[command(about = "Export colors, gradients and typography from Figma to Swift")]
pub struct Cli {
    /// Log debug-level progress
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Export color and gradient styles
    Colors(ExportArgs),

    /// Export text styles: fonts and labels
    Typography(ExportArgs),
}

#[derive(Args)]
pub struct ExportArgs {
    /// Path to the configuration file
    #[arg(short, long, value_name = "CONFIG", default_value = "colorway.yaml")]
    pub config: PathBuf,
}
