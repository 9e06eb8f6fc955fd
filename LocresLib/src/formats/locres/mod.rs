//! .locres localization resource format
//!
//! Binary format holding per-namespace, per-key localized strings for Unreal
//! Engine games. Four layout generations exist (see [`LocresVersion`]); all of
//! them can be read, and a document can be written back in any of them.
//! Can be converted to/from a translation sheet.

mod document;
mod reader;
pub mod string;
mod string_table;
mod translation;
mod version;
mod writer;

pub use document::{
    LocresDocument, LocresEntry, LocresNamespace, NAMESPACE_SEPARATOR, composite_key,
    split_composite_key,
};
pub use reader::{parse_locres_bytes, read_locres, read_locres_from};
pub use string_table::{StringTable, StringTableEntry};
pub use translation::{
    ImportResult, SheetFormat, TranslationRow, export_for_translation, export_rows,
    import_translations, read_sheet, write_sheet,
};
pub use version::{FingerprintFn, LocresVersion, VersionFeatures};
pub use writer::{serialize_locres, write_locres, write_locres_to};

/// Magic signature opening every file with a header (`Compact` and newer)
pub const LOCRES_MAGIC: [u8; 16] = [
    0x0E, 0x14, 0x74, 0x75, 0x67, 0x4A, 0x03, 0xFC, 0x4A, 0x15, 0x90, 0x9D, 0xC3, 0x37, 0x7F, 0x1B,
];
