//! Error types for `LocresLib`

use thiserror::Error;

/// The error type for `LocresLib` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file or stream operations.
    ///
    /// Reads past the end of a truncated file surface here with
    /// [`std::io::ErrorKind::UnexpectedEof`].
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== LOCRES Format Errors ====================
    /// The version byte following the magic is not a known layout.
    #[error("unrecognized locres version: {0} (supported: 0-3)")]
    UnrecognizedVersion(u8),

    /// A string length field points past the end of the available data.
    #[error("malformed string at offset {offset}: length {length} exceeds remaining {remaining} bytes")]
    MalformedString {
        /// The raw signed length field.
        length: i32,
        /// Stream offset of the length field.
        offset: u64,
        /// Bytes left in the stream after the length field.
        remaining: u64,
    },

    /// A localized string index is outside the string table.
    #[error("malformed string table index {index} (table holds {count} strings)")]
    MalformedIndex {
        /// The index read from the entry.
        index: i32,
        /// Number of strings in the table.
        count: usize,
    },

    /// A count or offset field is negative or otherwise impossible.
    #[error("invalid {field}: {value}")]
    InvalidField {
        /// Name of the header or body field.
        field: &'static str,
        /// The value that was read.
        value: i64,
    },

    /// The document is too large to be described by the 32-bit fields of the format.
    #[error("{what} count {count} does not fit in a 32-bit field")]
    TooManyItems {
        /// What is being counted (namespaces, entries, strings).
        what: &'static str,
        /// The count that overflowed.
        count: usize,
    },

    // ==================== Parsing Errors ====================
    /// A format name (e.g. from the command line) is unknown.
    #[error("unknown locres format '{0}' (expected legacy, compact, optimized or cityhash)")]
    UnknownFormatName(String),
}

/// A specialized Result type for `LocresLib` operations.
pub type Result<T> = std::result::Result<T, Error>;
