use std::path::PathBuf;

use clap::{Parser, Subcommand};
use unoduetre_document::OutputFormat;

use crate::config::LogLevel;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build theme files (default)
    #[command(alias = "b")]
    Build {
        /// Variant ids to build (all when omitted)
        ids: Vec<String>,

        /// Output directory
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Output format (json, tm-theme); repeatable
        #[arg(short, long = "format", value_parser = parse_format)]
        formats: Vec<OutputFormat>,
    },

    /// Print the contrast report
    #[command(alias = "c")]
    Check {
        /// Variant ids to check (all when omitted)
        ids: Vec<String>,

        /// Show passing checks too
        #[arg(short, long)]
        verbose: bool,

        /// Fail on any check, not only those of enforcing variants
        #[arg(long)]
        strict: bool,
    },

    /// List available variants
    #[command(alias = "ls")]
    List,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Build {
            ids: Vec::new(),
            out_dir: None,
            formats: Vec::new(),
        }
    }
}

/// Generates the uno-due-tre family of editor color themes
#[derive(Debug, Parser)]
#[command(name = "unoduetre", version, verbatim_doc_comment)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, value_parser = parse_log_level)]
    pub log_level: Option<LogLevel>,

    /// Config file (default: ./unoduetre.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory of user variant files
    #[arg(long, global = true)]
    pub variants_dir: Option<PathBuf>,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_str(s).ok_or_else(|| format!("unknown format '{s}' (expected json or tm-theme)"))
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::from_str(s).ok_or_else(|| format!("unknown log level '{s}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_flags() {
        let cli = Cli::parse_from([
            "unoduetre",
            "build",
            "dark",
            "light",
            "-o",
            "dist",
            "--format",
            "json",
            "-f",
            "tm-theme",
        ]);
        let Some(Commands::Build { ids, out_dir, formats }) = cli.command else {
            panic!("expected build");
        };
        assert_eq!(ids, ["dark", "light"]);
        assert_eq!(out_dir, Some(PathBuf::from("dist")));
        assert_eq!(formats, [OutputFormat::Json, OutputFormat::TmTheme]);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["unoduetre", "check", "--strict", "--log-level", "debug"]);
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert!(matches!(cli.command, Some(Commands::Check { strict: true, .. })));
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["unoduetre", "build", "--format", "yaml"]).is_err());
    }
}
