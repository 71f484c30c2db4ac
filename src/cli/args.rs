//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::ReportFormat;

/// nbdeps - Check and install the packages a Jupyter notebook imports.
#[derive(Debug, Parser)]
#[command(name = "nbdeps")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides nbdeps.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show every lookup and scanned import
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check a notebook's imports and offer to install missing packages
    Check(CheckArgs),

    /// List the top-level modules a notebook imports
    Scan(ScanArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Notebook to check
    pub notebook: PathBuf,

    /// Pin a module's install version (repeatable, comma-separated)
    #[arg(long, value_name = "MODULE=VERSION", value_delimiter = ',')]
    pub pin: Vec<String>,

    /// Ignore the built-in version pins
    #[arg(long)]
    pub no_default_pins: bool,

    /// Python interpreter for lookups and pip (default: $NBDEPS_PYTHON, then python3)
    #[arg(long)]
    pub python: Option<String>,

    /// Read installed packages from these directories instead of asking Python
    #[arg(long, value_name = "DIR")]
    pub site_packages: Vec<PathBuf>,

    /// Install every missing module without asking
    #[arg(short, long, conflicts_with = "no_install")]
    pub yes: bool,

    /// Only report; never install
    #[arg(long)]
    pub no_install: bool,

    /// Read answers line by line from stdin even on a terminal
    #[arg(long)]
    pub non_interactive: bool,

    /// Report format
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Also write the report as CSV
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Exit with status 3 if any module was missing
    #[arg(long)]
    pub strict: bool,
}

impl CheckArgs {
    /// Arguments with every option unset.
    pub fn for_notebook(notebook: impl Into<PathBuf>) -> Self {
        Self {
            notebook: notebook.into(),
            pin: Vec::new(),
            no_default_pins: false,
            python: None,
            site_packages: Vec::new(),
            yes: false,
            no_install: false,
            non_interactive: false,
            format: None,
            output: None,
            strict: false,
        }
    }
}

/// Arguments for the `scan` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ScanArgs {
    /// Notebook to scan
    pub notebook: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_check_with_options() {
        let cli = Cli::try_parse_from([
            "nbdeps",
            "--verbose",
            "check",
            "nb.ipynb",
            "--pin",
            "numpy=1.26.4,pandas=2.2.1",
            "--pin",
            "torch=2.2.0",
            "--site-packages",
            "/venv/site-packages",
            "--format",
            "json",
            "--strict",
        ])
        .unwrap();

        assert!(cli.verbose);
        let Commands::Check(args) = cli.command else {
            panic!("Expected check command");
        };
        assert_eq!(args.notebook, PathBuf::from("nb.ipynb"));
        assert_eq!(args.pin, vec!["numpy=1.26.4", "pandas=2.2.1", "torch=2.2.0"]);
        assert_eq!(args.site_packages, vec![PathBuf::from("/venv/site-packages")]);
        assert_eq!(args.format, Some(ReportFormat::Json));
        assert!(args.strict);
    }

    #[test]
    fn yes_conflicts_with_no_install() {
        let result = Cli::try_parse_from(["nbdeps", "check", "nb.ipynb", "--yes", "--no-install"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["nbdeps", "-v", "-q", "scan", "nb.ipynb"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["nbdeps", "scan", "nb.ipynb", "--quiet", "--json"]).unwrap();
        assert!(cli.quiet);
        let Commands::Scan(args) = cli.command else {
            panic!("Expected scan command");
        };
        assert!(args.json);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["nbdeps"]).is_err());
    }

    #[test]
    fn for_notebook_defaults() {
        let args = CheckArgs::for_notebook("nb.ipynb");
        assert!(args.pin.is_empty());
        assert!(!args.yes);
        assert!(args.format.is_none());
    }
}
