//! Release archive handling: download, integrity check, unpack.
//!
//! - [`fetch`] - Download archives by URL, reusing local copies
//! - [`verify`] - SHA-256 digest verification
//! - [`unpack`] - Tar extraction with reuse of complete prior extractions

pub mod fetch;
pub mod unpack;
pub mod verify;

pub use fetch::{archive_filename, ArchiveFetcher};
pub use unpack::{read_listing, unpack_archive, ArchiveListing};
pub use verify::{sha256_file, verify_digest};
