//! Deduplicated localized-string table built while writing

use std::collections::HashMap;

/// One unique string and how many entries point at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringTableEntry {
    pub text: String,
    pub ref_count: u32,
}

/// Localized strings in first-seen order, with exact-match dedup.
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    entries: Vec<StringTableEntry>,
    indices: HashMap<String, usize>,
}

impl StringTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a reference to `s`, returning its index.
    ///
    /// A string seen before keeps its index and gains a reference; a new
    /// string is appended with a count of 1.
    pub fn add(&mut self, s: &str) -> usize {
        if let Some(&idx) = self.indices.get(s) {
            self.entries[idx].ref_count += 1;
            return idx;
        }

        let idx = self.entries.len();
        self.entries.push(StringTableEntry {
            text: s.to_string(),
            ref_count: 1,
        });
        self.indices.insert(s.to_string(), idx);
        idx
    }

    /// Get string by index
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.entries.get(idx).map(|e| e.text.as_str())
    }

    /// Get index of a string
    #[must_use]
    pub fn index_of(&self, s: &str) -> Option<usize> {
        self.indices.get(s).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StringTableEntry> {
        self.entries.iter()
    }

    /// Number of unique strings
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
