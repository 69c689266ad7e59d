//! Installed runtime discovery.
//!
//! - [`family`] - Which shim names are provisioned and their labels
//! - [`version`] - Runtime versions and the interpreter version probe
//! - [`discovery`] - Listing shims and assembling [`DiscoveredRuntime`]s

pub mod discovery;
pub mod family;
pub mod version;

pub use discovery::{
    discover, parse_shim_listing, CommandShimSource, DiscoveredRuntime, ShimSource,
    DEFAULT_SHIMS_COMMAND,
};
pub use family::runtime_label;
pub use version::{parse_version_info, InterpreterProbe, RuntimeVersion, VersionProbe};
