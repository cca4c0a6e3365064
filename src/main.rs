//! Bookshelf CLI entry point.

use std::process::ExitCode;

use bookshelf::cli::{Cli, CommandDispatcher, ShelfContext};
use bookshelf::config::{load_config, ResolvedPaths};
use bookshelf::ui::{OutputMode, TerminalUI, UserInterface};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so they never mix with command output.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("bookshelf=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bookshelf=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Bookshelf starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            TerminalUI::new(OutputMode::Normal).error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    // Flags win over the config file
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        config.output.map(OutputMode::from).unwrap_or_default()
    };

    let mut ui = TerminalUI::new(output_mode);

    let paths = ResolvedPaths::resolve(&config, cli.data_dir.as_deref(), cli.catalog.as_deref());
    tracing::debug!("Using data dir {:?}", paths.data_dir);

    let ctx = match ShelfContext::open(&paths) {
        Ok(ctx) => ctx,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    let mut dispatcher = CommandDispatcher::new(ctx);

    match dispatcher.dispatch(cli.command.as_ref(), &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
