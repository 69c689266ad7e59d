//! Subprocess execution.
//!
//! Every external program (the version manager, the runtimes themselves,
//! pip) is run to completion with blocking I/O and no timeout.

use crate::error::{Result, ShimsError};
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,
}

impl CommandOptions {
    /// Options that capture both output streams.
    pub fn captured() -> Self {
        Self {
            capture_stdout: true,
            capture_stderr: true,
        }
    }
}

/// Run `program` with `args` directly, without a shell.
pub fn run<S: AsRef<OsStr>>(
    program: &Path,
    args: &[S],
    options: &CommandOptions,
) -> Result<CommandResult> {
    let mut cmd = Command::new(program);
    cmd.args(args);
    spawn(cmd, &display_command(program, args), options)
}

/// Run `program` and fail unless it exits successfully.
pub fn run_checked<S: AsRef<OsStr>>(
    program: &Path,
    args: &[S],
    options: &CommandOptions,
) -> Result<CommandResult> {
    let result = run(program, args, options)?;
    if !result.success {
        return Err(ShimsError::CommandFailed {
            command: display_command(program, args),
            code: result.exit_code,
        });
    }
    Ok(result)
}

/// Execute a command line through `/bin/sh -c`.
///
/// Used for user-configured command strings such as `pyenv shims`.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let mut cmd = Command::new("/bin/sh");
    cmd.arg("-c").arg(command);
    spawn(cmd, command, options)
}

/// Execute a command line and fail unless it exits successfully.
pub fn execute_checked(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let result = execute(command, options)?;
    if !result.success {
        return Err(ShimsError::CommandFailed {
            command: command.to_string(),
            code: result.exit_code,
        });
    }
    Ok(result)
}

fn spawn(mut cmd: Command, label: &str, options: &CommandOptions) -> Result<CommandResult> {
    cmd.stdin(Stdio::null());
    cmd.stdout(if options.capture_stdout {
        Stdio::piped()
    } else {
        Stdio::inherit()
    });
    cmd.stderr(if options.capture_stderr {
        Stdio::piped()
    } else {
        Stdio::inherit()
    });

    tracing::debug!("Running: {}", label);

    let output = cmd.output().map_err(|source| ShimsError::CommandLaunch {
        command: label.to_string(),
        source,
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout,
        stderr,
        success: output.status.success(),
    })
}

fn display_command<S: AsRef<OsStr>>(program: &Path, args: &[S]) -> String {
    let mut parts = vec![program.display().to_string()];
    parts.extend(
        args.iter()
            .map(|a| a.as_ref().to_string_lossy().into_owned()),
    );
    parts.join(" ")
}
