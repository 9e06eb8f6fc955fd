//! Length-prefixed engine strings
//!
//! Layout: a signed little-endian `i32` length followed by the characters and
//! one NUL terminator. A positive length counts single-byte characters, a
//! negative length counts UTF-16LE code units. The terminator is included in
//! the count, so a valid writer never emits 0; a reader still accepts 0 as an
//! empty string with nothing following it.

use std::io::{Read, Seek, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{Error, Result};

/// Read one string, refusing lengths that run past `stream_len`.
pub fn read_unreal_string<R: Read + Seek>(reader: &mut R, stream_len: u64) -> Result<String> {
    let offset = reader.stream_position()?;
    let length = reader.read_i32::<LittleEndian>()?;
    if length == 0 {
        return Ok(String::new());
    }

    let remaining = stream_len.saturating_sub(offset + 4);
    let byte_count = if length > 0 {
        u64::from(length.unsigned_abs())
    } else {
        u64::from(length.unsigned_abs()) * 2
    };
    if byte_count > remaining {
        return Err(Error::MalformedString {
            length,
            offset,
            remaining,
        });
    }

    if length > 0 {
        let mut bytes = vec![0u8; byte_count as usize];
        reader.read_exact(&mut bytes)?;
        if bytes.last() == Some(&0) {
            bytes.pop();
        }
        // Single-byte strings are Latin-1; every byte maps to the same code point
        Ok(bytes.into_iter().map(char::from).collect())
    } else {
        let mut units = vec![0u16; length.unsigned_abs() as usize];
        reader.read_u16_into::<LittleEndian>(&mut units)?;
        if units.last() == Some(&0) {
            units.pop();
        }
        Ok(String::from_utf16(&units).unwrap_or_else(|_| {
            tracing::warn!("Unpaired UTF-16 surrogate in string at offset {offset}, replacing");
            String::from_utf16_lossy(&units)
        }))
    }
}

/// Write one string.
///
/// ASCII text is written single-byte unless `force_unicode` is set; anything
/// else is written as UTF-16LE.
pub fn write_unreal_string<W: Write>(writer: &mut W, s: &str, force_unicode: bool) -> Result<()> {
    if !force_unicode && s.is_ascii() {
        let length = string_length(s.len() + 1)?;
        writer.write_i32::<LittleEndian>(length)?;
        writer.write_all(s.as_bytes())?;
        writer.write_u8(0)?;
    } else {
        let units: Vec<u16> = s.encode_utf16().chain(std::iter::once(0)).collect();
        let length = string_length(units.len())?;
        writer.write_i32::<LittleEndian>(-length)?;
        for unit in units {
            writer.write_u16::<LittleEndian>(unit)?;
        }
    }
    Ok(())
}

/// Encode one string to a fresh buffer.
pub fn encode_unreal_string(s: &str, force_unicode: bool) -> Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(4 + s.len() + 1);
    write_unreal_string(&mut buffer, s, force_unicode)?;
    Ok(buffer)
}

fn string_length(count: usize) -> Result<i32> {
    i32::try_from(count).map_err(|_| Error::TooManyItems {
        what: "string character",
        count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn decode(bytes: &[u8]) -> Result<String> {
        let mut cursor = Cursor::new(bytes);
        read_unreal_string(&mut cursor, bytes.len() as u64)
    }

    #[test]
    fn test_ascii_layout() {
        let bytes = encode_unreal_string("OK", false).unwrap();
        assert_eq!(bytes, [3, 0, 0, 0, b'O', b'K', 0]);
    }

    #[test]
    fn test_unicode_layout() {
        let bytes = encode_unreal_string("é", false).unwrap();
        assert_eq!(bytes, [0xFE, 0xFF, 0xFF, 0xFF, 0xE9, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_forced_unicode_layout() {
        let bytes = encode_unreal_string("UI", true).unwrap();
        assert_eq!(&bytes[..4], &(-3i32).to_le_bytes());
        assert_eq!(&bytes[4..], &[b'U', 0, b'I', 0, 0, 0]);
        assert_eq!(decode(&bytes).unwrap(), "UI");
    }

    #[test]
    fn test_empty_string_has_terminator() {
        assert_eq!(encode_unreal_string("", false).unwrap(), [1, 0, 0, 0, 0]);
        let forced = encode_unreal_string("", true).unwrap();
        assert_eq!(&forced[..4], &(-1i32).to_le_bytes());
        assert_eq!(decode(&forced).unwrap(), "");
    }

    #[test]
    fn test_round_trip() {
        for s in ["", "Hello", "Grüße", "日本語", "emoji 🎮 pair", "tab\tand\nnewline"] {
            let bytes = encode_unreal_string(s, false).unwrap();
            assert_eq!(decode(&bytes).unwrap(), s);
        }
    }

    #[test]
    fn test_zero_length_consumes_nothing_more() {
        let bytes = [0u8, 0, 0, 0, 0xAA];
        let mut cursor = Cursor::new(&bytes[..]);
        assert_eq!(read_unreal_string(&mut cursor, 5).unwrap(), "");
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_length_past_end_is_malformed() {
        let bytes = [10u8, 0, 0, 0, b'a', b'b'];
        assert!(matches!(
            decode(&bytes),
            Err(Error::MalformedString { length: 10, offset: 0, remaining: 2 })
        ));

        let bytes = [0xFCu8, 0xFF, 0xFF, 0xFF, b'a', 0, b'b', 0];
        assert!(matches!(decode(&bytes), Err(Error::MalformedString { length: -4, .. })));
    }

    #[test]
    fn test_extreme_negative_length_is_malformed() {
        let bytes = i32::MIN.to_le_bytes();
        assert!(matches!(decode(&bytes), Err(Error::MalformedString { .. })));
    }

    #[test]
    fn test_latin1_bytes_decode_as_code_points() {
        let bytes = [3u8, 0, 0, 0, 0xE9, b'a', 0];
        assert_eq!(decode(&bytes).unwrap(), "éa");
    }
}
