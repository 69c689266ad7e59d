//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandDispatcher`] for routing CLI subcommands
//!
//! Commands report failure through [`crate::error::ShimsError`]; `main`
//! turns that into the process exit status.

use crate::cli::args::{Cli, Commands};
use crate::config::Settings;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()>;
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    settings: Settings,
}

impl CommandDispatcher {
    /// Create a new dispatcher for resolved settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Dispatch and execute a command.
    ///
    /// With no subcommand, `generate` runs.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<()> {
        match &cli.command {
            Some(Commands::Generate) | None => {
                super::generate::GenerateCommand::new(self.settings.clone()).execute(ui)
            }
            Some(Commands::Plan(args)) => {
                super::plan::PlanCommand::new(self.settings.clone(), args.clone()).execute(ui)
            }
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
        }
    }
}
