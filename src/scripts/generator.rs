//! Launcher script generation.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Script file name for a runtime label, e.g. `virtualenv-3.9`.
pub fn script_name(label: &str) -> String {
    format!("virtualenv-{}", label)
}

/// Shell wrapper that runs `entry` with `runtime`, forwarding all arguments.
pub fn render_wrapper(runtime: &Path, entry: &Path) -> String {
    format!(
        "#!/bin/sh\nexec {} {} $*\n",
        runtime.display(),
        entry.display()
    )
}

/// What kind of launcher was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptKind {
    /// A `#!/bin/sh` wrapper script.
    Wrapper,
    /// A symlink to an installed console script.
    Symlink,
}

/// A launcher written to the bin directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedScript {
    pub path: PathBuf,
    pub kind: ScriptKind,
    /// Entry script (wrapper) or link target (symlink).
    pub target: PathBuf,
}

/// Writes launchers into a bin directory, replacing whatever is there.
#[derive(Debug, Clone)]
pub struct ScriptGenerator {
    bin_dir: PathBuf,
}

impl ScriptGenerator {
    pub fn new(bin_dir: impl Into<PathBuf>) -> Self {
        Self {
            bin_dir: bin_dir.into(),
        }
    }

    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    /// Path of the launcher for a runtime label.
    pub fn script_path(&self, label: &str) -> PathBuf {
        self.bin_dir.join(script_name(label))
    }

    /// Write an executable wrapper invoking `entry` with `runtime`.
    pub fn write_wrapper(&self, label: &str, runtime: &Path, entry: &Path) -> Result<GeneratedScript> {
        let path = self.script_path(label);
        remove_existing(&path)?;

        fs::write(&path, render_wrapper(runtime, entry))?;
        make_executable(&path)?;
        tracing::debug!("Wrote wrapper {}", path.display());

        Ok(GeneratedScript {
            path,
            kind: ScriptKind::Wrapper,
            target: entry.to_path_buf(),
        })
    }

    /// Link the launcher to an installed console script.
    pub fn link(&self, label: &str, target: &Path) -> Result<GeneratedScript> {
        let path = self.script_path(label);
        remove_existing(&path)?;

        std::os::unix::fs::symlink(target, &path)?;
        tracing::debug!("Linked {} -> {}", path.display(), target.display());

        Ok(GeneratedScript {
            path,
            kind: ScriptKind::Symlink,
            target: target.to_path_buf(),
        })
    }
}

/// Remove a file or symlink (dangling ones included) if present.
fn remove_existing(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path)?,
        Ok(_) => fs::remove_file(path)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    Ok(())
}
