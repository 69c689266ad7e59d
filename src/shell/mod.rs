//! Subprocess execution and platform detection.

pub mod command;
pub mod platform;

pub use command::{
    execute, execute_checked, run, run_checked, CommandOptions, CommandResult,
};
pub use platform::is_ci;
