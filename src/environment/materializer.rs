//! Dedicated environments for releases that must be installed.
//!
//! Newer virtualenv releases are only reliably runnable through the console
//! script pip installs, so each runtime gets its own small environment with
//! the release installed into it. Environments are cached by path and only
//! rebuilt when the entry point is missing.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cache::{entry_point, lookup_environment, CacheLookup};
use crate::error::{Result, ShimsError};
use crate::shell::{run, CommandOptions, CommandResult};

/// Creates environments and installs packages into them.
pub trait EnvironmentBuilder {
    /// Create a fresh environment at `env_dir` using `runtime`.
    fn create(&self, runtime: &Path, env_dir: &Path) -> Result<()>;

    /// Install the package source tree at `source` into `env_dir`.
    fn install(&self, env_dir: &Path, source: &Path) -> Result<()>;
}

/// Builds environments with `<runtime> -m venv` and the environment's pip.
#[derive(Debug, Clone, Copy, Default)]
pub struct VenvBuilder {
    /// Capture tool output instead of passing it through.
    pub quiet: bool,
}

impl VenvBuilder {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    fn options(&self) -> CommandOptions {
        if self.quiet {
            CommandOptions::captured()
        } else {
            CommandOptions::default()
        }
    }

    fn check(&self, result: CommandResult, command: String) -> Result<()> {
        if result.success {
            return Ok(());
        }
        if !result.stderr.trim().is_empty() {
            tracing::warn!("{}", result.stderr.trim());
        }
        Err(ShimsError::CommandFailed {
            command,
            code: result.exit_code,
        })
    }
}

impl EnvironmentBuilder for VenvBuilder {
    fn create(&self, runtime: &Path, env_dir: &Path) -> Result<()> {
        let args = [OsStr::new("-m"), OsStr::new("venv"), env_dir.as_os_str()];
        let result = run(runtime, &args, &self.options())?;
        self.check(
            result,
            format!("{} -m venv {}", runtime.display(), env_dir.display()),
        )
    }

    fn install(&self, env_dir: &Path, source: &Path) -> Result<()> {
        let pip = env_dir.join("bin").join("pip");
        let args = [OsStr::new("install"), source.as_os_str()];
        let result = run(&pip, &args, &self.options())?;
        self.check(
            result,
            format!("{} install {}", pip.display(), source.display()),
        )
    }
}

/// Outcome of materializing an environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialized {
    /// The installed console script.
    pub entry_point: PathBuf,
    /// Whether an existing environment was reused.
    pub cached: bool,
}

/// Ensures a dedicated environment exists per (runtime, release).
pub struct Materializer<'a> {
    venvs_dir: PathBuf,
    builder: &'a dyn EnvironmentBuilder,
}

impl<'a> Materializer<'a> {
    pub fn new(venvs_dir: impl Into<PathBuf>, builder: &'a dyn EnvironmentBuilder) -> Self {
        Self {
            venvs_dir: venvs_dir.into(),
            builder,
        }
    }

    pub fn venvs_dir(&self) -> &Path {
        &self.venvs_dir
    }

    /// Return the entry point for `unpacked` installed under `runtime`,
    /// building the environment on a cache miss.
    pub fn materialize(&self, runtime: &Path, unpacked: &Path) -> Result<Materialized> {
        let env_dir = match lookup_environment(&self.venvs_dir, runtime, unpacked) {
            CacheLookup::Hit(env_dir) => {
                tracing::debug!("Reusing environment {}", env_dir.display());
                return Ok(Materialized {
                    entry_point: entry_point(&env_dir),
                    cached: true,
                });
            }
            CacheLookup::Miss(env_dir) => env_dir,
        };

        if env_dir.exists() {
            tracing::info!("Removing incomplete environment {}", env_dir.display());
            fs::remove_dir_all(&env_dir)?;
        }
        fs::create_dir_all(&env_dir)?;

        tracing::info!(
            "Creating environment {} with {}",
            env_dir.display(),
            runtime.display()
        );
        self.builder.create(runtime, &env_dir)?;
        self.builder.install(&env_dir, unpacked)?;

        let entry = entry_point(&env_dir);
        if !entry.exists() {
            return Err(ShimsError::EntryPointMissing { path: entry });
        }

        Ok(Materialized {
            entry_point: entry,
            cached: false,
        })
    }
}
