//! Virtualenv releases and runtime compatibility.
//!
//! The built-in [`ReleaseCatalog`] pins each release's archive URL and
//! SHA-256 digest, and a [`CompatibilityTable`] picks the release for each
//! runtime version. Both are plain values handed to the pipeline.

pub mod catalog;
pub mod table;

pub use catalog::{Installation, IsolationRelease, ReleaseCatalog, NEWEST_RELEASE};
pub use table::CompatibilityTable;
