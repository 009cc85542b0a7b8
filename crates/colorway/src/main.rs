//! colorway binary entry point.

use clap::Parser;

use colorway::cli::Cli;

fn main() {
    let cli = Cli::parse();
    colorway::logging::init(cli.verbose);

    if let Err(error) = colorway::run(cli) {
        tracing::error!("{error:#}");
        std::process::exit(1);
    }
}
