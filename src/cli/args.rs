//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Generate per-interpreter virtualenv launchers for pyenv runtimes.
#[derive(Debug, Parser)]
#[command(name = "venv-shims")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Working root for downloads, bin/ and venvs/ (defaults to current directory)
    #[arg(short, long, global = true, env = "VENV_SHIMS_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Directory for generated launchers (defaults to <root>/bin)
    #[arg(long, global = true, env = "VENV_SHIMS_BIN_DIR", value_name = "DIR")]
    pub bin_dir: Option<PathBuf>,

    /// Directory for dedicated environments (defaults to <root>/venvs)
    #[arg(long, global = true, env = "VENV_SHIMS_VENVS_DIR", value_name = "DIR")]
    pub venvs_dir: Option<PathBuf>,

    /// Command that prints one runtime shim path per line
    #[arg(
        long,
        global = true,
        env = "VENV_SHIMS_COMMAND",
        value_name = "CMD",
        default_value = crate::runtime::DEFAULT_SHIMS_COMMAND
    )]
    pub shims_command: String,

    /// HTTP timeout for archive downloads, in seconds
    #[arg(
        long,
        global = true,
        env = "VENV_SHIMS_TIMEOUT",
        value_name = "SECS",
        default_value_t = 300
    )]
    pub timeout: u64,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show final status, warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch releases and write launchers (default if no command specified)
    Generate,

    /// Show which release each runtime would get, without side effects
    Plan(PlanArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `plan` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PlanArgs {
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
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["venv-shims"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.timeout, 300);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "venv-shims",
            "plan",
            "--json",
            "--root",
            "/work",
            "--shims-command",
            "cat shims.txt",
        ])
        .unwrap();

        assert!(matches!(cli.command, Some(Commands::Plan(PlanArgs { json: true }))));
        assert_eq!(cli.root, Some(PathBuf::from("/work")));
        assert_eq!(cli.shims_command, "cat shims.txt");
    }

    #[test]
    fn completions_requires_known_shell() {
        assert!(Cli::try_parse_from(["venv-shims", "completions", "bash"]).is_ok());
        assert!(Cli::try_parse_from(["venv-shims", "completions", "cmd"]).is_err());
    }
}
