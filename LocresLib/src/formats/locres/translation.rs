//! Translation workflow support
//!
//! Export a locres document to a plain-text sheet for translators, import
//! the translated sheet back.
//!
//! # Sheet Format
//!
//! One row per line, no header, three fields joined by a separator
//! (`→` by default):
//!
//! ```text
//! Source text→Translated text→Namespace/Key
//! ```
//!
//! A separator inside source or target text is preceded by the escape
//! character (`¶` by default). Carriage returns and line feeds in any field
//! are written as the two-character sequences `\r` and `\n`.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use indexmap::IndexMap;

use super::document::{composite_key, split_composite_key};
use super::{LocresDocument, LocresEntry};
use crate::error::Result;
use crate::hash::str_crc32;

/// Separator and escape characters of a translation sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetFormat {
    /// Field separator.
    pub separator: char,
    /// Character placed before a separator that belongs to the text.
    pub escape: char,
}

impl Default for SheetFormat {
    fn default() -> Self {
        Self {
            separator: '→',
            escape: '¶',
        }
    }
}

/// One sheet row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRow {
    /// Composite `namespace/key`.
    pub key: String,
    /// Text currently in the file.
    pub source: String,
    /// Translation (empty until filled in).
    pub target: String,
}

impl TranslationRow {
    pub fn new(key: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            source: source.into(),
            target: target.into(),
        }
    }

    /// Namespace part of the key (empty when the key has no separator).
    pub fn namespace(&self) -> &str {
        split_composite_key(&self.key).0
    }

    /// Entry key without the namespace prefix.
    pub fn entry_key(&self) -> &str {
        split_composite_key(&self.key).1
    }
}

/// Result of importing translations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportResult {
    /// Rows read from the sheet
    pub total: usize,
    /// Rows with a non-empty translation
    pub translated: usize,
    /// Existing entries whose value was replaced
    pub updated: usize,
    /// New entries appended to an existing namespace
    pub added: usize,
    /// Translated keys that matched neither an entry nor a namespace
    pub unused_keys: Vec<String>,
}

/// Project a document onto sheet rows.
///
/// Entries with an empty value are skipped; the target column starts empty.
pub fn export_rows(document: &LocresDocument) -> Vec<TranslationRow> {
    document
        .entries()
        .filter(|(_, entry)| !entry.value.is_empty())
        .map(|(key, entry)| TranslationRow::new(key, entry.value.clone(), String::new()))
        .collect()
}

/// Export a document to a translation sheet
///
/// # Returns
/// Number of rows written
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn export_for_translation<P: AsRef<Path>>(
    document: &LocresDocument,
    path: P,
    format: SheetFormat,
) -> Result<usize> {
    let rows = export_rows(document);
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_sheet(&mut writer, &rows, format)?;
    writer.flush()?;

    tracing::info!("Exported {} strings to {:?}", rows.len(), path.as_ref());
    Ok(rows.len())
}

/// Import a translation sheet into a document
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn import_translations<P: AsRef<Path>>(
    document: &mut LocresDocument,
    path: P,
    format: SheetFormat,
) -> Result<ImportResult> {
    let file = File::open(path.as_ref())?;
    let rows = read_sheet(BufReader::new(file), format)?;
    tracing::info!("Loaded {} rows from {:?}", rows.len(), path.as_ref());
    Ok(document.apply_translations(&rows))
}

/// Write rows in sheet format.
pub fn write_sheet<W: Write>(writer: &mut W, rows: &[TranslationRow], format: SheetFormat) -> Result<()> {
    let sep = format.separator;
    for row in rows {
        writeln!(
            writer,
            "{}{sep}{}{sep}{}",
            escape_text(&row.source, format),
            escape_text(&row.target, format),
            escape_newlines(&row.key)
        )?;
    }
    Ok(())
}

/// Read rows in sheet format.
///
/// Blank lines and lines with fewer than three fields are skipped.
pub fn read_sheet<R: BufRead>(reader: R, format: SheetFormat) -> Result<Vec<TranslationRow>> {
    let mut rows = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        let fields = split_fields(&line, format);
        if fields.len() < 3 {
            tracing::debug!("Skipping sheet line with {} fields", fields.len());
            continue;
        }

        let mut fields = fields.into_iter();
        let source = fields.next().unwrap_or_default();
        let target = fields.next().unwrap_or_default();
        let key = fields.next().unwrap_or_default();
        rows.push(TranslationRow { key, source, target });
    }
    Ok(rows)
}

impl LocresDocument {
    /// Apply translated rows to the document.
    ///
    /// Rows with an empty target are ignored. Keys match case-insensitively
    /// and the first row for a key wins. A matching entry takes the target as
    /// its value; an unmatched row is appended as a new entry to the first
    /// namespace named like its namespace prefix, with the CRC of its source
    /// text as source hash. Only that first namespace gets the entry, and its
    /// key is the part after `namespace/`, not the full composite key. Rows
    /// left over are reported in [`ImportResult::unused_keys`].
    pub fn apply_translations(&mut self, rows: &[TranslationRow]) -> ImportResult {
        let mut result = ImportResult {
            total: rows.len(),
            ..ImportResult::default()
        };

        let mut pending: IndexMap<String, &TranslationRow> = IndexMap::new();
        for row in rows.iter().filter(|row| !row.target.is_empty()) {
            result.translated += 1;
            pending.entry(fold_key(&row.key)).or_insert(row);
        }

        for namespace in &mut self.namespaces {
            for entry in &mut namespace.entries {
                let key = fold_key(&composite_key(&namespace.name, &entry.key));
                if let Some(row) = pending.shift_remove(&key) {
                    entry.value.clone_from(&row.target);
                    result.updated += 1;
                }
            }
        }

        for namespace in &mut self.namespaces {
            let mut new_rows = Vec::new();
            pending.retain(|_, row| {
                if row.namespace() == namespace.name {
                    new_rows.push(*row);
                    false
                } else {
                    true
                }
            });

            for row in new_rows {
                tracing::debug!("Adding {} to namespace {:?}", row.key, namespace.name);
                namespace.entries.push(LocresEntry::new(
                    row.entry_key(),
                    row.target.clone(),
                    str_crc32(&row.source),
                ));
                result.added += 1;
            }
        }

        result.unused_keys = pending.values().map(|row| row.key.clone()).collect();
        if !result.unused_keys.is_empty() {
            tracing::warn!(
                "{} translations are not used; check their namespaces/keys",
                result.unused_keys.len()
            );
        }

        result
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Ordinal case-insensitive comparison key.
///
/// Each char maps on its own to its simple uppercase form; chars whose
/// uppercase spans several chars (`ß`) are kept as they are.
fn fold_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        })
        .collect()
}

fn escape_newlines(text: &str) -> String {
    text.replace('\r', "\\r").replace('\n', "\\n")
}

fn unescape_newlines(text: &str) -> String {
    text.replace("\\r", "\r").replace("\\n", "\n")
}

/// Escape text for a source/target field
fn escape_text(text: &str, format: SheetFormat) -> String {
    let escaped_sep = format!("{}{}", format.escape, format.separator);
    escape_newlines(&text.replace(format.separator, &escaped_sep))
}

/// Split a line on unescaped separators and unescape each field
fn split_fields(line: &str, format: SheetFormat) -> Vec<String> {
    let parts: Vec<&str> = line.split(format.separator).collect();
    let mut fields = Vec::with_capacity(3);
    let mut current = String::new();

    for (i, part) in parts.iter().enumerate() {
        let is_last = i + 1 == parts.len();
        if let Some(text) = part.strip_suffix(format.escape).filter(|_| !is_last) {
            current.push_str(text);
            current.push(format.separator);
            continue;
        }
        current.push_str(part);
        fields.push(unescape_newlines(&std::mem::take(&mut current)));
    }

    fields
}
