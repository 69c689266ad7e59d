//! Pinned virtualenv releases.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::{Result, ShimsError};
use crate::runtime::RuntimeVersion;

use super::table::CompatibilityTable;

/// Newest release in the built-in catalog.
pub const NEWEST_RELEASE: &str = "20.14.1";

/// How a release is made runnable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Installation {
    /// Run a script from the unpacked archive with the runtime.
    Script {
        /// Path of the script relative to the unpacked directory.
        entry: String,
    },
    /// Install into a dedicated environment and link its console script.
    Environment,
}

/// A pinned virtualenv release archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IsolationRelease {
    pub version: String,
    pub url: String,
    pub sha256: String,
    pub installation: Installation,
}

impl IsolationRelease {
    /// A release invoked as a standalone script.
    pub fn script(version: &str, url: &str, sha256: &str, entry: &str) -> Self {
        Self {
            version: version.to_string(),
            url: url.to_string(),
            sha256: sha256.to_string(),
            installation: Installation::Script {
                entry: entry.to_string(),
            },
        }
    }

    /// A release installed into a dedicated environment.
    pub fn environment(version: &str, url: &str, sha256: &str) -> Self {
        Self {
            version: version.to_string(),
            url: url.to_string(),
            sha256: sha256.to_string(),
            installation: Installation::Environment,
        }
    }

    pub fn requires_environment(&self) -> bool {
        matches!(self.installation, Installation::Environment)
    }
}

/// Releases plus the table choosing among them.
///
/// Immutable once built; pass an alternate catalog to exercise the
/// pipeline against other archives.
#[derive(Debug, Clone)]
pub struct ReleaseCatalog {
    releases: BTreeMap<String, IsolationRelease>,
    table: CompatibilityTable,
}

impl ReleaseCatalog {
    /// Build a catalog, checking that every table entry names a known release.
    pub fn new(releases: Vec<IsolationRelease>, table: CompatibilityTable) -> Result<Self> {
        let releases: BTreeMap<String, IsolationRelease> = releases
            .into_iter()
            .map(|r| (r.version.clone(), r))
            .collect();

        for (version, release) in table.entries() {
            if !releases.contains_key(release) {
                return Err(ShimsError::InvalidCatalog {
                    message: format!(
                        "runtime {} maps to unknown release '{}'",
                        version, release
                    ),
                });
            }
        }

        Ok(Self { releases, table })
    }

    /// The catalog shipped with this tool.
    pub fn builtin() -> Self {
        let releases = vec![
            IsolationRelease::script(
                "16.7.9",
                "https://files.pythonhosted.org/packages/aa/3b/\
                 213c384c65e17995cccd0f2bb993b7b82c41f62e74c2f8f39c8e60549d86/\
                 virtualenv-16.7.9.tar.gz",
                "0d62c70883c0342d59c11d0ddac0d954d0431321a41ab20851facf2b222598f3",
                "virtualenv.py",
            ),
            IsolationRelease::environment(
                NEWEST_RELEASE,
                "https://files.pythonhosted.org/packages/5f/6c/\
                 d44c403a54ceb4ec5179d1a963c69887d30dc5b300529ce67c05b4f16212/\
                 virtualenv-20.14.1.tar.gz",
                "ef589a79795589aada0c1c5b319486797c03b67ac3984c48c669c0e4f50df3a5",
            ),
        ];

        let table = CompatibilityTable::new()
            .with(RuntimeVersion::new(2, 7), "16.7.9")
            .with(RuntimeVersion::new(3, 4), "16.7.9")
            .with(RuntimeVersion::new(3, 5), "16.7.9")
            .with(RuntimeVersion::new(3, 6), "16.7.9")
            .with(RuntimeVersion::new(3, 7), NEWEST_RELEASE)
            .with(RuntimeVersion::new(3, 8), NEWEST_RELEASE)
            .with(RuntimeVersion::new(3, 9), NEWEST_RELEASE)
            .with(RuntimeVersion::new(3, 10), NEWEST_RELEASE);

        Self {
            releases: releases
                .into_iter()
                .map(|r| (r.version.clone(), r))
                .collect(),
            table,
        }
    }

    /// Look up a release by version.
    pub fn release(&self, version: &str) -> Option<&IsolationRelease> {
        self.releases.get(version)
    }

    /// All releases, ordered by version string.
    pub fn releases(&self) -> impl Iterator<Item = &IsolationRelease> {
        self.releases.values()
    }

    pub fn table(&self) -> &CompatibilityTable {
        &self.table
    }

    /// Release for a runtime of the given version.
    ///
    /// A version outside the table is an error, never silently skipped.
    pub fn resolve(&self, runtime: &str, version: RuntimeVersion) -> Result<&IsolationRelease> {
        self.table
            .resolve(version)
            .and_then(|release| self.releases.get(release))
            .ok_or_else(|| ShimsError::UnsupportedRuntime {
                runtime: runtime.to_string(),
                version: version.to_string(),
            })
    }
}

impl Default for ReleaseCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
