//! Runtime discovery through the version manager's shims.

use serde::Serialize;
use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::Result;
use crate::shell::{execute_checked, CommandOptions};

use super::family::runtime_label;
use super::version::{RuntimeVersion, VersionProbe};

/// Default command listing installed shims.
pub const DEFAULT_SHIMS_COMMAND: &str = "pyenv shims";

/// Lists runtime executables provided by a version manager.
pub trait ShimSource {
    fn list_shims(&self) -> Result<Vec<PathBuf>>;
}

/// Lists shims by running a command that prints one path per line.
#[derive(Debug, Clone)]
pub struct CommandShimSource {
    command: String,
}

impl CommandShimSource {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl Default for CommandShimSource {
    fn default() -> Self {
        Self::new(DEFAULT_SHIMS_COMMAND)
    }
}

impl ShimSource for CommandShimSource {
    fn list_shims(&self) -> Result<Vec<PathBuf>> {
        let result = execute_checked(&self.command, &CommandOptions::captured())?;
        Ok(parse_shim_listing(&result.stdout))
    }
}

/// Parse newline-delimited shim paths, ignoring blank lines.
pub fn parse_shim_listing(output: &str) -> Vec<PathBuf> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// A runtime found among the shims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveredRuntime {
    /// Executable basename, e.g. `python3.9`.
    pub name: String,
    /// Full path to the executable.
    pub executable: PathBuf,
    /// Canonical label, e.g. `3.9` or `pypy3`.
    pub label: String,
    /// Version reported by the executable.
    pub version: RuntimeVersion,
}

/// Find every supported runtime among the shims and query its version.
///
/// Unrecognized shim names are skipped. The result is sorted by version
/// (then label and path) and holds one runtime per label: the last one in
/// that order.
pub fn discover(
    shims: &dyn ShimSource,
    probe: &dyn VersionProbe,
) -> Result<Vec<DiscoveredRuntime>> {
    let mut runtimes = Vec::new();

    for executable in shims.list_shims()? {
        let name = match executable.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };
        let Some(label) = runtime_label(&name) else {
            tracing::debug!("Skipping shim {}", executable.display());
            continue;
        };

        let version = probe.probe(&executable)?;
        tracing::debug!("{} reports version {}", executable.display(), version);

        runtimes.push(DiscoveredRuntime {
            name,
            executable,
            label,
            version,
        });
    }

    runtimes.sort_by(|a, b| {
        (a.version, &a.label, &a.executable).cmp(&(b.version, &b.label, &b.executable))
    });

    // Later entries replace earlier ones with the same label, so the
    // highest-sorted runtime owns the launcher.
    let mut seen = HashSet::new();
    let mut kept: Vec<DiscoveredRuntime> = runtimes
        .into_iter()
        .rev()
        .filter(|runtime| {
            let last = seen.insert(runtime.label.clone());
            if !last {
                tracing::debug!(
                    "Ignoring runtime {} for label {}, superseded by a later one",
                    runtime.executable.display(),
                    runtime.label
                );
            }
            last
        })
        .collect();
    kept.reverse();

    Ok(kept)
}
