mod cli;
mod commands;
mod config;
mod logging;

use clap::Parser;
use color_eyre::eyre::Result;

use cli::{Cli, Commands};
use config::BuildConfig;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = BuildConfig::load(cli.config.as_deref())?;
    logging::init(config.log_level, cli.log_level);

    let variants_dir = cli
        .variants_dir
        .clone()
        .unwrap_or_else(|| config.variants_dir());
    tracing::debug!(variants_dir = %variants_dir.display(), "Resolved user variants directory");

    match cli.command.unwrap_or_default() {
        Commands::Build {
            ids,
            out_dir,
            formats,
        } => commands::build::run(&ids, out_dir, &formats, &config, &variants_dir),
        Commands::Check {
            ids,
            verbose,
            strict,
        } => commands::check::run(&ids, verbose, strict, &variants_dir),
        Commands::List => commands::list::run(&variants_dir),
    }
}
