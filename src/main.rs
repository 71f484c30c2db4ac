//! nbdeps CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use nbdeps::cli::{Cli, CommandDispatcher, Commands};
use nbdeps::process::is_ci;
use nbdeps::config::ReportFormat;
use nbdeps::ui::{create_ui, OutputMode, StatusStream};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("nbdeps=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nbdeps=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("nbdeps starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let working_dir = std::env::current_dir().unwrap_or_default();

    let is_interactive = match &cli.command {
        Commands::Check(args) => !args.non_interactive && !is_ci(),
        _ => !is_ci(),
    };

    // Keep stdout parseable when it carries JSON.
    let status = match &cli.command {
        Commands::Check(args) if args.format == Some(ReportFormat::Json) => StatusStream::Stderr,
        Commands::Scan(args) if args.json => StatusStream::Stderr,
        _ => StatusStream::Stdout,
    };

    let mut ui = create_ui(is_interactive, output_mode, status);
    let dispatcher = CommandDispatcher::new(working_dir);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
