//! venv-shims CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use venv_shims::cli::{Cli, CommandDispatcher};
use venv_shims::config::Settings;
use venv_shims::shell::is_ci;
use venv_shims::ui::{create_ui, OutputMode};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("venv_shims=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("venv_shims=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("venv-shims starting with args: {:?}", cli);

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let mut ui = create_ui(!is_ci(), OutputMode::from_flags(cli.verbose, cli.quiet));

    let result = Settings::from_cli(&cli)
        .and_then(|settings| CommandDispatcher::new(settings).dispatch(&cli, ui.as_mut()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                ui.error(&format!("  caused by: {}", cause));
                source = cause.source();
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
