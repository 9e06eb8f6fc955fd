//! Locres document structure definitions

use serde::{Deserialize, Serialize};

use super::version::LocresVersion;

/// Separator between namespace and key in composite keys.
pub const NAMESPACE_SEPARATOR: char = '/';

/// A single localized string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocresEntry {
    /// Key, unique within its namespace in practice (not enforced).
    pub key: String,
    /// The localized text.
    pub value: String,
    /// CRC of the source text, carried verbatim.
    pub source_string_hash: u32,
}

impl LocresEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>, source_string_hash: u32) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            source_string_hash,
        }
    }
}

/// A named group of entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocresNamespace {
    /// Namespace name (may be empty).
    pub name: String,
    pub entries: Vec<LocresEntry>,
}

impl LocresNamespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Append an entry, builder style.
    #[must_use]
    pub fn with_entry(mut self, entry: LocresEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find an entry by exact key.
    pub fn get(&self, key: &str) -> Option<&LocresEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut LocresEntry> {
        self.entries.iter_mut().find(|e| e.key == key)
    }
}

/// An in-memory locres file: ordered namespaces plus the layout it was read with.
///
/// Namespace and entry order is preserved end to end; it decides the on-disk
/// order, string table indices and translation sheet row order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocresDocument {
    pub version: LocresVersion,
    pub namespaces: Vec<LocresNamespace>,
}

impl LocresDocument {
    pub fn new(version: LocresVersion) -> Self {
        Self {
            version,
            namespaces: Vec::new(),
        }
    }

    /// Number of namespaces.
    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    /// Number of entries across all namespaces.
    pub fn total_count(&self) -> usize {
        self.namespaces.iter().map(LocresNamespace::len).sum()
    }

    pub fn push_namespace(&mut self, namespace: LocresNamespace) {
        self.namespaces.push(namespace);
    }

    /// First namespace with the given name.
    pub fn namespace(&self, name: &str) -> Option<&LocresNamespace> {
        self.namespaces.iter().find(|ns| ns.name == name)
    }

    pub fn namespace_mut(&mut self, name: &str) -> Option<&mut LocresNamespace> {
        self.namespaces.iter_mut().find(|ns| ns.name == name)
    }

    /// Iterate over every entry with its composite key, in document order.
    pub fn entries(&self) -> impl Iterator<Item = (String, &LocresEntry)> + '_ {
        self.namespaces.iter().flat_map(|ns| {
            ns.entries
                .iter()
                .map(move |entry| (composite_key(&ns.name, &entry.key), entry))
        })
    }
}

/// Build the `namespace/key` form used by translation sheets.
///
/// Entries of an empty (or whitespace-only) namespace are keyed by their bare key.
pub fn composite_key(namespace: &str, key: &str) -> String {
    if namespace.trim().is_empty() {
        key.to_string()
    } else {
        format!("{namespace}{NAMESPACE_SEPARATOR}{key}")
    }
}

/// Split a composite key into `(namespace, key)`.
///
/// The namespace is everything before the first separator; keys without one
/// belong to the empty namespace.
pub fn split_composite_key(composite: &str) -> (&str, &str) {
    composite
        .split_once(NAMESPACE_SEPARATOR)
        .unwrap_or(("", composite))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LocresDocument {
        let mut doc = LocresDocument::new(LocresVersion::Compact);
        doc.push_namespace(
            LocresNamespace::new("UI")
                .with_entry(LocresEntry::new("OK", "Yes", 1))
                .with_entry(LocresEntry::new("Cancel", "No", 2)),
        );
        doc.push_namespace(LocresNamespace::new("").with_entry(LocresEntry::new("Title", "Game", 3)));
        doc
    }

    #[test]
    fn test_counts() {
        let doc = sample();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.total_count(), 3);
        assert!(!doc.is_empty());
        assert!(LocresDocument::default().is_empty());
    }

    #[test]
    fn test_lookup() {
        let mut doc = sample();
        assert_eq!(doc.namespace("UI").and_then(|ns| ns.get("OK")).map(|e| e.value.as_str()), Some("Yes"));
        assert!(doc.namespace("Missing").is_none());

        doc.namespace_mut("UI").unwrap().get_mut("OK").unwrap().value = "Sure".into();
        assert_eq!(doc.namespaces[0].entries[0].value, "Sure");
    }

    #[test]
    fn test_entries_use_composite_keys() {
        let doc = sample();
        let keys: Vec<String> = doc.entries().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["UI/OK", "UI/Cancel", "Title"]);
    }

    #[test]
    fn test_composite_key_round_trip() {
        assert_eq!(composite_key("Menu", "Start"), "Menu/Start");
        assert_eq!(composite_key("  ", "Start"), "Start");
        assert_eq!(split_composite_key("Menu/Start"), ("Menu", "Start"));
        assert_eq!(split_composite_key("Menu/Sub/Start"), ("Menu", "Sub/Start"));
        assert_eq!(split_composite_key("Start"), ("", "Start"));
    }
}
