//! Runtime version to release compatibility table.

use std::collections::BTreeMap;

use crate::runtime::RuntimeVersion;

/// Maps runtime versions to the virtualenv release that supports them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompatibilityTable {
    entries: BTreeMap<RuntimeVersion, String>,
}

impl CompatibilityTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, builder style.
    pub fn with(mut self, version: RuntimeVersion, release: impl Into<String>) -> Self {
        self.entries.insert(version, release.into());
        self
    }

    /// Release version for a runtime version, if the table covers it.
    pub fn resolve(&self, version: RuntimeVersion) -> Option<&str> {
        self.entries.get(&version).map(String::as_str)
    }

    /// All entries in ascending runtime version order.
    pub fn entries(&self) -> impl Iterator<Item = (RuntimeVersion, &str)> {
        self.entries.iter().map(|(v, r)| (*v, r.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_versions() {
        let table = CompatibilityTable::new()
            .with(RuntimeVersion::new(2, 7), "16.7.9")
            .with(RuntimeVersion::new(3, 9), "20.14.1");

        assert_eq!(table.resolve(RuntimeVersion::new(2, 7)), Some("16.7.9"));
        assert_eq!(table.resolve(RuntimeVersion::new(3, 9)), Some("20.14.1"));
    }

    #[test]
    fn unknown_version_is_none() {
        let table = CompatibilityTable::new().with(RuntimeVersion::new(3, 9), "20.14.1");
        assert_eq!(table.resolve(RuntimeVersion::new(3, 11)), None);
    }

    #[test]
    fn later_entry_replaces_earlier() {
        let table = CompatibilityTable::new()
            .with(RuntimeVersion::new(3, 9), "a")
            .with(RuntimeVersion::new(3, 9), "b");
        assert_eq!(table.len(), 1);
        assert_eq!(table.resolve(RuntimeVersion::new(3, 9)), Some("b"));
    }

    #[test]
    fn entries_are_ordered() {
        let table = CompatibilityTable::new()
            .with(RuntimeVersion::new(3, 10), "x")
            .with(RuntimeVersion::new(2, 7), "y")
            .with(RuntimeVersion::new(3, 9), "x");
        let versions: Vec<String> = table.entries().map(|(v, _)| v.to_string()).collect();
        assert_eq!(versions, vec!["2.7", "3.9", "3.10"]);
    }
}
