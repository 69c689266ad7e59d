//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands. Commands are routed by
//! [`CommandDispatcher`].

pub mod completions;
pub mod dispatcher;
pub mod generate;
pub mod plan;

pub use dispatcher::{Command, CommandDispatcher};
