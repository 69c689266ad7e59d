//! Recognized runtime shim names.

use regex::Regex;
use std::sync::LazyLock;

/// Shim names we provision for: `python2.X`, `python3.X`, `pypy`, `pypy3`.
///
/// The single capture group that matches is the runtime label.
static SHIM_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^python(2\.\d)$|^python(3\.\d+)$|^(pypy)$|^(pypy3)$")
        .expect("shim name pattern is valid")
});

/// Canonical label for a shim name, or `None` if it is not a supported runtime.
///
/// `python3.9` → `3.9`, `python2.7` → `2.7`, `pypy3` → `pypy3`.
pub fn runtime_label(shim_name: &str) -> Option<String> {
    let captures = SHIM_NAME.captures(shim_name)?;
    captures
        .iter()
        .skip(1)
        .flatten()
        .next()
        .map(|m| m.as_str().to_string())
}
