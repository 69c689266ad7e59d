//! Tar archive unpacking.
//!
//! Release archives are source distributions: a tar file (usually gzipped)
//! whose members all live under one top-level directory. Unpacking is
//! skipped when that directory already holds every member.

use flate2::read::GzDecoder;
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{Read, Seek};
use std::path::{Component, Path, PathBuf};

use crate::cache::{lookup_extracted, CacheLookup};
use crate::error::{Result, ShimsError};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Member listing of an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveListing {
    /// The single top-level directory shared by all members.
    pub top: String,
    /// Every member path, `/`-separated, without trailing slashes.
    pub members: BTreeSet<String>,
}

/// Read an archive's members and check they share one top-level name.
pub fn read_listing(archive: &Path) -> Result<ArchiveListing> {
    let mut tar = open_archive(archive)?;
    let mut members = BTreeSet::new();

    for entry in tar.entries()? {
        let entry = entry?;
        let kind = entry.header().entry_type();
        if kind.is_pax_global_extensions() || kind.is_pax_local_extensions() {
            continue;
        }
        if let Some(name) = member_name(&entry.path()?) {
            members.insert(name);
        }
    }

    let tops: BTreeSet<&str> = members
        .iter()
        .filter_map(|name| name.split('/').next())
        .collect();

    if tops.len() != 1 {
        let roots = if tops.is_empty() {
            "(none)".to_string()
        } else {
            tops.into_iter().collect::<Vec<_>>().join(", ")
        };
        return Err(ShimsError::ArchiveLayout {
            path: archive.to_path_buf(),
            roots,
        });
    }

    let top = tops
        .into_iter()
        .next()
        .map(String::from)
        .unwrap_or_default();

    Ok(ArchiveListing { top, members })
}

/// Unpack `archive` into `dest_dir` and return the top-level directory.
///
/// An existing directory that already contains every member is reused as
/// is. An incomplete one is removed and the archive extracted fresh.
pub fn unpack_archive(archive: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let listing = read_listing(archive)?;

    let base = match lookup_extracted(dest_dir, &listing.top, &listing.members)? {
        CacheLookup::Hit(base) => return Ok(base),
        CacheLookup::Miss(base) => base,
    };

    if let Ok(meta) = fs::symlink_metadata(&base) {
        tracing::info!("Removing stale {}", base.display());
        if meta.is_dir() {
            fs::remove_dir_all(&base)?;
        } else {
            fs::remove_file(&base)?;
        }
    }

    tracing::info!("Unpacking {} into {}", archive.display(), dest_dir.display());
    open_archive(archive)?.unpack(dest_dir)?;

    Ok(base)
}

/// Open a tar archive, transparently decompressing gzip.
fn open_archive(path: &Path) -> Result<tar::Archive<Box<dyn Read>>> {
    let mut file = File::open(path)?;
    let mut magic = [0u8; 2];
    let read = file.read(&mut magic)?;
    file.rewind()?;

    let reader: Box<dyn Read> = if read == magic.len() && magic == GZIP_MAGIC {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    Ok(tar::Archive::new(reader))
}

/// Normalize a member path to `a/b/c`, dropping `.` components.
fn member_name(path: &Path) -> Option<String> {
    let parts: Vec<String> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}
