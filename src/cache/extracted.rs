//! Lookup for previously unpacked archives.

use std::collections::{BTreeSet, VecDeque};
use std::fs;
use std::path::Path;

use crate::error::Result;

use super::CacheLookup;

/// Collect every path under `dest_dir/top`, relative to `dest_dir`.
///
/// The walk is breadth-first and does not follow symlinks. Paths use `/`
/// separators and include `top` itself. A missing directory yields an
/// empty set.
pub fn existing_tree(dest_dir: &Path, top: &str) -> Result<BTreeSet<String>> {
    let base = dest_dir.join(top);
    let mut found = BTreeSet::new();
    if !base.is_dir() {
        return Ok(found);
    }

    found.insert(top.to_string());
    let mut queue = VecDeque::from([(base, top.to_string())]);

    while let Some((dir, rel)) = queue.pop_front() {
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let child_rel = format!("{}/{}", rel, name);
            if entry.file_type()?.is_dir() {
                queue.push_back((entry.path(), child_rel.clone()));
            }
            found.insert(child_rel);
        }
    }

    Ok(found)
}

/// Decide whether `dest_dir/top` already holds a complete extraction.
///
/// Hit when every archive member is present on disk. Extra files (build
/// leftovers, egg-info) do not invalidate the tree; missing ones do.
pub fn lookup_extracted(
    dest_dir: &Path,
    top: &str,
    members: &BTreeSet<String>,
) -> Result<CacheLookup> {
    let base = dest_dir.join(top);
    if !base.is_dir() {
        return Ok(CacheLookup::Miss(base));
    }

    let existing = existing_tree(dest_dir, top)?;
    if members.is_subset(&existing) {
        tracing::debug!("Reusing unpacked tree at {}", base.display());
        Ok(CacheLookup::Hit(base))
    } else {
        let missing = members.difference(&existing).count();
        tracing::debug!(
            "Unpacked tree at {} is missing {} member(s)",
            base.display(),
            missing
        );
        Ok(CacheLookup::Miss(base))
    }
}
