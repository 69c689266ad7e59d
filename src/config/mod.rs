//! Resolved run settings.
//!
//! Settings come from the command line, with `VENV_SHIMS_*` environment
//! variables as fallbacks (handled by clap). Relative directories are
//! anchored at the root.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::Cli;
use crate::error::Result;
use crate::runtime::DEFAULT_SHIMS_COMMAND;

/// Where and how a run operates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Working root; archives download and unpack here.
    pub root: PathBuf,
    /// Directory receiving `virtualenv-<label>` launchers.
    pub bin_dir: PathBuf,
    /// Directory holding per-runtime environments.
    pub venvs_dir: PathBuf,
    /// Command listing runtime shims.
    pub shims_command: String,
    /// HTTP timeout for downloads.
    pub timeout: Duration,
}

impl Settings {
    /// Default layout under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            bin_dir: root.join("bin"),
            venvs_dir: root.join("venvs"),
            root,
            shims_command: DEFAULT_SHIMS_COMMAND.to_string(),
            timeout: Duration::from_secs(300),
        }
    }

    /// Resolve settings from parsed arguments.
    ///
    /// Without `--root`, the current directory is used.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let root = match &cli.root {
            Some(root) => absolutize(root)?,
            None => std::env::current_dir()?,
        };

        let mut settings = Self::new(&root);
        if let Some(bin_dir) = &cli.bin_dir {
            settings.bin_dir = root.join(bin_dir);
        }
        if let Some(venvs_dir) = &cli.venvs_dir {
            settings.venvs_dir = root.join(venvs_dir);
        }
        settings.shims_command = cli.shims_command.clone();
        settings.timeout = Duration::from_secs(cli.timeout);

        tracing::debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }

    /// Directories that must exist before launchers are written.
    pub fn output_dirs(&self) -> [&Path; 2] {
        [&self.bin_dir, &self.venvs_dir]
    }
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["venv-shims"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn default_layout_under_root() {
        let settings = Settings::from_cli(&parse(&["--root", "/work"])).unwrap();
        assert_eq!(settings.root, PathBuf::from("/work"));
        assert_eq!(settings.bin_dir, PathBuf::from("/work/bin"));
        assert_eq!(settings.venvs_dir, PathBuf::from("/work/venvs"));
        assert_eq!(settings.timeout, Duration::from_secs(300));
    }

    #[test]
    fn relative_dirs_resolve_against_root() {
        let settings = Settings::from_cli(&parse(&[
            "--root",
            "/work",
            "--bin-dir",
            "shims",
            "--venvs-dir",
            "/opt/envs",
        ]))
        .unwrap();
        assert_eq!(settings.bin_dir, PathBuf::from("/work/shims"));
        assert_eq!(settings.venvs_dir, PathBuf::from("/opt/envs"));
    }

    #[test]
    fn relative_root_resolves_against_cwd() {
        let settings = Settings::from_cli(&parse(&["--root", "work"])).unwrap();
        assert!(settings.root.is_absolute());
        assert!(settings.root.ends_with("work"));
    }

    #[test]
    fn overrides_command_and_timeout() {
        let settings = Settings::from_cli(&parse(&[
            "--root",
            "/w",
            "--shims-command",
            "cat list",
            "--timeout",
            "5",
        ]))
        .unwrap();
        assert_eq!(settings.shims_command, "cat list");
        assert_eq!(settings.timeout, Duration::from_secs(5));
    }

    #[test]
    fn output_dirs_are_bin_then_venvs() {
        let settings = Settings::new("/w");
        assert_eq!(
            settings.output_dirs(),
            [Path::new("/w/bin"), Path::new("/w/venvs")]
        );
    }
}
