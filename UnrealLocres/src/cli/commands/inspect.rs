//! Read-only commands: `info` and `dump`

use std::path::Path;

use anyhow::Context;
use locreslib::formats::locres::{LocresDocument, StringTable, read_locres};

/// Print layout and counts
pub fn info(path: &Path) -> anyhow::Result<()> {
    let document =
        read_locres(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let summary = Summary::of(&document);

    println!("{}:", path.display());
    println!("  Layout: {} (version {})", document.version, document.version.as_u8());
    println!("  Namespaces: {}", summary.namespaces);
    println!("  Entries: {}", summary.entries);
    println!("  Unique strings: {}", summary.unique_strings);
    if summary.empty_values > 0 {
        println!("  Empty values: {}", summary.empty_values);
    }

    if !document.is_empty() {
        println!();
        for namespace in &document.namespaces {
            let name = if namespace.name.is_empty() {
                "(default)"
            } else {
                namespace.name.as_str()
            };
            println!("  {name}: {} entries", namespace.len());
        }
    }

    Ok(())
}

/// Print the document as pretty JSON
pub fn dump(path: &Path) -> anyhow::Result<()> {
    let document =
        read_locres(path).with_context(|| format!("Failed to read {}", path.display()))?;
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
struct Summary {
    namespaces: usize,
    entries: usize,
    unique_strings: usize,
    empty_values: usize,
}

impl Summary {
    fn of(document: &LocresDocument) -> Self {
        // Same dedup the writer applies to the string table
        let mut table = StringTable::new();
        let mut empty_values = 0;
        for (_, entry) in document.entries() {
            table.add(&entry.value);
            if entry.value.is_empty() {
                empty_values += 1;
            }
        }

        Self {
            namespaces: document.len(),
            entries: document.total_count(),
            unique_strings: table.len(),
            empty_values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use locreslib::formats::locres::{LocresEntry, LocresNamespace, LocresVersion, write_locres};
    use tempfile::tempdir;

    fn document() -> LocresDocument {
        let mut doc = LocresDocument::new(LocresVersion::Compact);
        doc.push_namespace(
            LocresNamespace::new("UI")
                .with_entry(LocresEntry::new("OK", "Yes", 1))
                .with_entry(LocresEntry::new("Confirm", "Yes", 2))
                .with_entry(LocresEntry::new("Blank", "", 3)),
        );
        doc.push_namespace(LocresNamespace::new("Empty"));
        doc
    }

    #[test]
    fn test_summary_counts() {
        assert_eq!(
            Summary::of(&document()),
            Summary {
                namespaces: 2,
                entries: 3,
                unique_strings: 2,
                empty_values: 1,
            }
        );
    }

    #[test]
    fn test_info_and_dump_read_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Game.locres");
        write_locres(&path, &document(), LocresVersion::Compact).unwrap();

        info(&path).unwrap();
        dump(&path).unwrap();
        assert!(info(&dir.path().join("missing.locres")).is_err());
    }

    #[test]
    fn test_document_json_shape() {
        let json = serde_json::to_value(document()).unwrap();
        assert_eq!(json["version"], "Compact");
        assert_eq!(json["namespaces"][0]["name"], "UI");
        assert_eq!(json["namespaces"][0]["entries"][0]["value"], "Yes");
    }
}
