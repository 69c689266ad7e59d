//! Filesystem cache lookups.
//!
//! Repeated runs stay cheap because unpacked archives and dedicated
//! environments are reused when they are already complete on disk. Each
//! check is an explicit lookup returning a [`CacheLookup`] so callers (and
//! tests) see the hit/miss decision and the artifact path together.

pub mod environment;
pub mod extracted;

pub use environment::{entry_point, environment_dir, lookup_environment};
pub use extracted::{existing_tree, lookup_extracted};

use std::path::{Path, PathBuf};

/// Outcome of a cache lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup {
    /// The cached artifact is present and complete.
    Hit(PathBuf),
    /// The artifact must be (re)built at this path.
    Miss(PathBuf),
}

impl CacheLookup {
    /// Whether the lookup found a usable artifact.
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }

    /// The artifact path, regardless of outcome.
    pub fn path(&self) -> &Path {
        match self {
            Self::Hit(path) | Self::Miss(path) => path,
        }
    }
}
