//! Command-line interface for venv-shims.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, PlanArgs};
pub use commands::{Command, CommandDispatcher};
