//! venv-shims - per-interpreter virtualenv launchers for pyenv runtimes.
//!
//! For every Python runtime the version manager exposes, venv-shims picks a
//! compatible virtualenv release, downloads and verifies its source archive,
//! makes it runnable (directly, or through a dedicated environment) and
//! writes a `virtualenv-<label>` launcher into `bin/`.
//!
//! # Modules
//!
//! - [`archive`] - Download, digest verification and extraction
//! - [`cache`] - Idempotence checks for extracted trees and environments
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Resolved run settings
//! - [`environment`] - Dedicated environments for installed releases
//! - [`error`] - Error types and result aliases
//! - [`provision`] - The end-to-end pipeline
//! - [`releases`] - Pinned releases and the compatibility table
//! - [`runtime`] - Runtime discovery and version probing
//! - [`scripts`] - Launcher generation
//! - [`shell`] - Subprocess execution
//! - [`ui`] - Terminal output and spinners
//!
//! # Example
//!
//! ```
//! use venv_shims::releases::ReleaseCatalog;
//! use venv_shims::runtime::RuntimeVersion;
//!
//! let catalog = ReleaseCatalog::builtin();
//! let release = catalog.resolve("python2.7", RuntimeVersion::new(2, 7)).unwrap();
//! assert_eq!(release.version, "16.7.9");
//! ```

pub mod archive;
pub mod cache;
pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod provision;
pub mod releases;
pub mod runtime;
pub mod scripts;
pub mod shell;
pub mod ui;

pub use error::{Result, ShimsError};
