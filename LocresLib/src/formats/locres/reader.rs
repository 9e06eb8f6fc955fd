//! `.locres` file reading and parsing
//!
//! The reader detects the layout from the leading bytes: files starting with
//! [`LOCRES_MAGIC`] carry a version byte, anything else is a headerless
//! `Legacy` file parsed from offset 0. Newer layouts keep their localized
//! strings in a table at the end of the file, so the table is loaded first
//! (seek forward, read, seek back) and entries resolve their values by index.

use std::fs::File;
use std::io::{Cursor, Read, Seek, SeekFrom};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};

use super::string::read_unreal_string;
use super::{LOCRES_MAGIC, LocresDocument, LocresEntry, LocresNamespace, LocresVersion, VersionFeatures};
use crate::error::{Error, Result};

/// Upper bound for capacity reserved from counts read out of the file.
const MAX_PREALLOCATE: usize = 4096;

/// Read a .locres file from disk
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or is truncated.
/// Returns [`Error::UnrecognizedVersion`], [`Error::MalformedString`] or
/// [`Error::MalformedIndex`] if the contents are corrupt.
///
/// [`Error::Io`]: crate::Error::Io
/// [`Error::UnrecognizedVersion`]: crate::Error::UnrecognizedVersion
/// [`Error::MalformedString`]: crate::Error::MalformedString
/// [`Error::MalformedIndex`]: crate::Error::MalformedIndex
pub fn read_locres<P: AsRef<Path>>(path: P) -> Result<LocresDocument> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;

    let document = parse_locres_bytes(&buffer)?;
    tracing::info!(
        "Read {:?}: {} layout, {} namespaces, {} entries",
        path,
        document.version,
        document.len(),
        document.total_count()
    );
    Ok(document)
}

/// Parse .locres data from bytes
///
/// # Errors
///
/// See [`read_locres`].
pub fn parse_locres_bytes(data: &[u8]) -> Result<LocresDocument> {
    let mut cursor = Cursor::new(data);
    read_locres_from(&mut cursor)
}

/// Parse a .locres document from any seekable source.
///
/// Offsets in the file are absolute, so the source must start at the first
/// byte of the file. Nothing is returned unless the whole document parsed.
///
/// # Errors
///
/// See [`read_locres`].
pub fn read_locres_from<R: Read + Seek>(reader: &mut R) -> Result<LocresDocument> {
    let stream_len = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(0))?;

    let version = read_version(reader)?;
    let features = version.features();
    tracing::debug!("Detected locres layout {version} ({stream_len} bytes)");

    let strings = if features.has_shared_table {
        Some(read_string_table(reader, stream_len, features)?)
    } else {
        None
    };

    if features.has_hashes {
        // Informational only; the body is self-describing
        let total = reader.read_i32::<LittleEndian>()?;
        tracing::debug!("Header entry count: {total}");
    }

    let namespace_count = read_count(reader, "namespace count")?;
    let mut document = LocresDocument::new(version);
    document
        .namespaces
        .reserve(namespace_count.min(MAX_PREALLOCATE));

    for _ in 0..namespace_count {
        if features.has_hashes {
            reader.read_u32::<LittleEndian>()?; // namespace hash
        }
        let name = read_unreal_string(reader, stream_len)?;

        let key_count = read_count(reader, "key count")?;
        let mut namespace = LocresNamespace::new(name);
        namespace.entries.reserve(key_count.min(MAX_PREALLOCATE));

        for _ in 0..key_count {
            if features.has_hashes {
                reader.read_u32::<LittleEndian>()?; // key hash
            }
            let key = read_unreal_string(reader, stream_len)?;
            let source_string_hash = reader.read_u32::<LittleEndian>()?;

            let value = match &strings {
                Some(table) => {
                    let index = reader.read_i32::<LittleEndian>()?;
                    usize::try_from(index)
                        .ok()
                        .and_then(|i| table.get(i))
                        .cloned()
                        .ok_or(Error::MalformedIndex {
                            index,
                            count: table.len(),
                        })?
                }
                None => read_unreal_string(reader, stream_len)?,
            };

            namespace.entries.push(LocresEntry {
                key,
                value,
                source_string_hash,
            });
        }

        document.push_namespace(namespace);
    }

    Ok(document)
}

/// Check for the magic and read the version byte, rewinding for `Legacy` files.
fn read_version<R: Read + Seek>(reader: &mut R) -> Result<LocresVersion> {
    let mut magic = Vec::with_capacity(LOCRES_MAGIC.len());
    reader
        .by_ref()
        .take(LOCRES_MAGIC.len() as u64)
        .read_to_end(&mut magic)?;

    if magic == LOCRES_MAGIC {
        LocresVersion::from_u8(reader.read_u8()?)
    } else {
        reader.seek(SeekFrom::Start(0))?;
        Ok(LocresVersion::Legacy)
    }
}

/// Load the localized string table, leaving the reader where it was.
fn read_string_table<R: Read + Seek>(
    reader: &mut R,
    stream_len: u64,
    features: VersionFeatures,
) -> Result<Vec<String>> {
    let raw_offset = reader.read_i64::<LittleEndian>()?;
    let offset = u64::try_from(raw_offset)
        .ok()
        .filter(|&o| o <= stream_len)
        .ok_or(Error::InvalidField {
            field: "string table offset",
            value: raw_offset,
        })?;

    let resume = reader.stream_position()?;
    reader.seek(SeekFrom::Start(offset))?;

    let count = read_count(reader, "string table count")?;
    let mut strings = Vec::with_capacity(count.min(MAX_PREALLOCATE));
    for _ in 0..count {
        strings.push(read_unreal_string(reader, stream_len)?);
        if features.has_hashes {
            reader.read_i32::<LittleEndian>()?; // ref count, recomputed on write
        }
    }
    tracing::debug!("Loaded {} localized strings from offset {offset}", strings.len());

    reader.seek(SeekFrom::Start(resume))?;
    Ok(strings)
}

fn read_count<R: Read>(reader: &mut R, field: &'static str) -> Result<usize> {
    let value = reader.read_i32::<LittleEndian>()?;
    usize::try_from(value).map_err(|_| Error::InvalidField {
        field,
        value: i64::from(value),
    })
}
