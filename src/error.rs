//! Error types for venv-shims operations.
//!
//! This module defines [`ShimsError`], the error type used throughout the
//! pipeline, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every failure is fatal: the first error aborts the run
//! - An integrity failure maps to its own exit status (see [`ShimsError::exit_code`])
//! - Use `anyhow::Error` (via `ShimsError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Exit status for a downloaded archive whose digest does not match.
pub const INTEGRITY_EXIT_CODE: i32 = 3;

/// Core error type for venv-shims operations.
#[derive(Debug, Error)]
pub enum ShimsError {
    /// Downloaded archive digest differs from the pinned value.
    #[error("The sha256 sum doesn't match for virtualenv-{release} at {path:?}.")]
    IntegrityMismatch { release: String, path: PathBuf },

    /// Archive members do not share a single top-level directory.
    #[error("Archive {path:?} must contain exactly one top-level directory, found: {roots}")]
    ArchiveLayout { path: PathBuf, roots: String },

    /// Runtime version missing from the compatibility table.
    #[error("Unsupported runtime '{runtime}' (version {version}): no compatible virtualenv release")]
    UnsupportedRuntime { runtime: String, version: String },

    /// Subprocess exited with a non-zero status.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Subprocess could not be started.
    #[error("Failed to launch '{command}'")]
    CommandLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Archive download failed.
    #[error("Failed to download {url}: {message}")]
    Download { url: String, message: String },

    /// A runtime reported a version we could not parse.
    #[error("Could not determine version of {runtime:?}: {message}")]
    VersionParse { runtime: PathBuf, message: String },

    /// The tool entry point is absent where it should have been installed.
    #[error("Entry point not found at {path:?}")]
    EntryPointMissing { path: PathBuf },

    /// Release catalog is internally inconsistent.
    #[error("Invalid release catalog: {message}")]
    InvalidCatalog { message: String },

    /// IO error wrapper.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShimsError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::IntegrityMismatch { .. } => INTEGRITY_EXIT_CODE,
            _ => 1,
        }
    }
}

/// Result type alias for venv-shims operations.
pub type Result<T> = std::result::Result<T, ShimsError>;
