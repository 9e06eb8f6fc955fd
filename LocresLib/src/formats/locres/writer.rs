//! `.locres` file writing
//!
//! The header of the table-based layouts points at the string table, which is
//! only known once every entry has been visited. The body is therefore
//! serialized into a buffer first while the table is built; header, body and
//! table are then written out in order with the real offset and entry count,
//! so the sink never has to seek.

use std::io::Write;
use std::path::Path;

use byteorder::{LittleEndian, WriteBytesExt};

use super::string::write_unreal_string;
use super::string_table::StringTable;
use super::{LOCRES_MAGIC, LocresDocument, LocresVersion};
use crate::error::{Error, Result};

/// Write a .locres file to disk in the given layout
///
/// # Errors
/// Returns an error if the document does not fit the format or file writing fails.
pub fn write_locres<P: AsRef<Path>>(
    path: P,
    document: &LocresDocument,
    version: LocresVersion,
) -> Result<()> {
    let path = path.as_ref();
    let bytes = serialize_locres(document, version)?;
    std::fs::write(path, &bytes)?;
    tracing::info!("Wrote {:?}: {version} layout, {} bytes", path, bytes.len());
    Ok(())
}

/// Serialize a document to bytes in the given layout
///
/// # Errors
/// Returns an error if a count or string length overflows its 32-bit field.
pub fn serialize_locres(document: &LocresDocument, version: LocresVersion) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    write_locres_to(&mut output, document, version)?;
    Ok(output)
}

/// Serialize a document into any writer in the given layout
///
/// The table offset in the header is absolute, so the writer must be
/// positioned at the first byte of the file.
///
/// # Errors
/// Returns an error if a count overflows its field or the writer fails.
pub fn write_locres_to<W: Write>(
    writer: &mut W,
    document: &LocresDocument,
    version: LocresVersion,
) -> Result<()> {
    let features = version.features();
    if !features.has_header {
        return write_legacy(writer, document);
    }

    let mut body = Vec::new();
    let mut table = StringTable::new();
    let mut entry_count = 0usize;

    body.write_i32::<LittleEndian>(count_field("namespace", document.len())?)?;

    for namespace in &document.namespaces {
        if let Some(fingerprint) = features.fingerprint {
            body.write_u32::<LittleEndian>(fingerprint(&namespace.name))?;
        }
        write_unreal_string(&mut body, &namespace.name, false)?;
        body.write_i32::<LittleEndian>(count_field("entry", namespace.len())?)?;

        for entry in &namespace.entries {
            if let Some(fingerprint) = features.fingerprint {
                body.write_u32::<LittleEndian>(fingerprint(&entry.key))?;
            }
            write_unreal_string(&mut body, &entry.key, false)?;
            body.write_u32::<LittleEndian>(entry.source_string_hash)?;

            let index = table.add(&entry.value);
            body.write_i32::<LittleEndian>(count_field("string table index", index)?)?;
            entry_count += 1;
        }
    }

    // magic + version byte + table offset [+ entry count]
    let header_len = LOCRES_MAGIC.len() + 1 + 8 + if features.has_hashes { 4 } else { 0 };
    let table_offset = (header_len + body.len()) as i64;

    writer.write_all(&LOCRES_MAGIC)?;
    writer.write_u8(version.as_u8())?;
    writer.write_i64::<LittleEndian>(table_offset)?;
    if features.has_hashes {
        writer.write_i32::<LittleEndian>(count_field("entry", entry_count)?)?;
    }

    writer.write_all(&body)?;

    writer.write_i32::<LittleEndian>(count_field("string table", table.len())?)?;
    for string in table.iter() {
        write_unreal_string(writer, &string.text, false)?;
        if features.has_hashes {
            writer.write_i32::<LittleEndian>(count_field("reference", string.ref_count as usize)?)?;
        }
    }

    tracing::debug!(
        "Serialized {version}: {entry_count} entries, {} unique strings, table at {table_offset}",
        table.len()
    );
    Ok(())
}

/// Headerless layout: values inline, namespace names always UTF-16.
fn write_legacy<W: Write>(writer: &mut W, document: &LocresDocument) -> Result<()> {
    let force_unicode = LocresVersion::Legacy.features().force_unicode_namespace;

    writer.write_i32::<LittleEndian>(count_field("namespace", document.len())?)?;

    for namespace in &document.namespaces {
        write_unreal_string(writer, &namespace.name, force_unicode)?;
        writer.write_i32::<LittleEndian>(count_field("entry", namespace.len())?)?;

        for entry in &namespace.entries {
            write_unreal_string(writer, &entry.key, false)?;
            writer.write_u32::<LittleEndian>(entry.source_string_hash)?;
            write_unreal_string(writer, &entry.value, false)?;
        }
    }

    Ok(())
}

fn count_field(what: &'static str, count: usize) -> Result<i32> {
    i32::try_from(count).map_err(|_| Error::TooManyItems { what, count })
}
