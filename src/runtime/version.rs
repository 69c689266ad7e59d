//! Runtime versions and how they are queried.

use serde::{Serialize, Serializer};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, ShimsError};
use crate::shell::{run_checked, CommandOptions};

/// Inline program that prints `sys.version_info` as a JSON array.
///
/// Valid on Python 2.7 as well as Python 3 and PyPy.
pub const VERSION_SCRIPT: &str = "import json, sys; print(json.dumps(list(sys.version_info)))";

/// A `(major, minor)` interpreter version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuntimeVersion {
    pub major: u32,
    pub minor: u32,
}

impl RuntimeVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for RuntimeVersion {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (major, minor) = s
            .split_once('.')
            .ok_or_else(|| format!("expected MAJOR.MINOR, got '{}'", s))?;
        let major = major
            .parse()
            .map_err(|_| format!("invalid major version in '{}'", s))?;
        let minor = minor
            .parse()
            .map_err(|_| format!("invalid minor version in '{}'", s))?;
        Ok(Self { major, minor })
    }
}

impl Serialize for RuntimeVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse the output of [`VERSION_SCRIPT`], e.g. `[3, 9, 7, "final", 0]`.
pub fn parse_version_info(output: &str) -> std::result::Result<RuntimeVersion, String> {
    let value: serde_json::Value =
        serde_json::from_str(output.trim()).map_err(|e| format!("invalid JSON: {}", e))?;
    let parts = value
        .as_array()
        .ok_or_else(|| format!("expected a JSON array, got {}", value))?;

    let component = |index: usize| -> std::result::Result<u32, String> {
        parts
            .get(index)
            .and_then(|v| v.as_u64())
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| format!("missing version component {} in {}", index, value))
    };

    Ok(RuntimeVersion::new(component(0)?, component(1)?))
}

/// Determines the version of a runtime executable.
pub trait VersionProbe {
    fn probe(&self, executable: &Path) -> Result<RuntimeVersion>;
}

/// Runs the interpreter itself with [`VERSION_SCRIPT`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InterpreterProbe;

impl VersionProbe for InterpreterProbe {
    fn probe(&self, executable: &Path) -> Result<RuntimeVersion> {
        let result = run_checked(
            executable,
            &["-c", VERSION_SCRIPT],
            &CommandOptions::captured(),
        )?;

        parse_version_info(&result.stdout).map_err(|message| ShimsError::VersionParse {
            runtime: executable.to_path_buf(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_major_dot_minor() {
        assert_eq!(RuntimeVersion::new(3, 10).to_string(), "3.10");
    }

    #[test]
    fn ordering_is_numeric() {
        assert!(RuntimeVersion::new(3, 9) < RuntimeVersion::new(3, 10));
        assert!(RuntimeVersion::new(2, 7) < RuntimeVersion::new(3, 4));
    }

    #[test]
    fn from_str_round_trips_display() {
        let v: RuntimeVersion = "3.10".parse().unwrap();
        assert_eq!(v, RuntimeVersion::new(3, 10));
        assert!("3".parse::<RuntimeVersion>().is_err());
        assert!("three.nine".parse::<RuntimeVersion>().is_err());
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&RuntimeVersion::new(2, 7)).unwrap();
        assert_eq!(json, "\"2.7\"");
    }

    #[test]
    fn parses_version_info_triple() {
        let v = parse_version_info("[3, 9, 7, \"final\", 0]\n").unwrap();
        assert_eq!(v, RuntimeVersion::new(3, 9));
    }

    #[test]
    fn parses_pypy_version_info() {
        let v = parse_version_info("[2, 7, 18, \"final\", 42]").unwrap();
        assert_eq!(v, RuntimeVersion::new(2, 7));
    }

    #[test]
    fn rejects_malformed_version_info() {
        assert!(parse_version_info("Python 3.9.7").is_err());
        assert!(parse_version_info("{\"major\": 3}").is_err());
        assert!(parse_version_info("[3]").is_err());
        assert!(parse_version_info("[\"3\", \"9\"]").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn interpreter_probe_runs_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let exe = temp.path().join("python3.8");
        std::fs::write(&exe, "#!/bin/sh\necho '[3, 8, 12, \"final\", 0]'\n").unwrap();
        std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();

        let version = InterpreterProbe.probe(&exe).unwrap();

        assert_eq!(version, RuntimeVersion::new(3, 8));
    }

    #[cfg(unix)]
    #[test]
    fn interpreter_probe_reports_garbage_output() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let exe = temp.path().join("python3.8");
        std::fs::write(&exe, "#!/bin/sh\necho nope\n").unwrap();
        std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();

        let err = InterpreterProbe.probe(&exe).unwrap_err();

        assert!(matches!(err, ShimsError::VersionParse { .. }));
    }
}
