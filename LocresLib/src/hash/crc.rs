//! Engine string CRC
//!
//! The engine hashes strings one character at a time with every character
//! widened to four little-endian bytes, using the standard reflected CRC-32
//! table. That makes it a plain CRC-32 over the UTF-32-ish expansion of the
//! UTF-16 code units, so `crc32fast` does the heavy lifting.

use crc32fast::Hasher;

/// CRC-32 of a string as the engine's `StrCrc32` computes it.
///
/// Used for namespace/key fingerprints in the `Optimized` layout and for the
/// source string hash of entries created from a translation sheet.
#[must_use]
pub fn str_crc32(s: &str) -> u32 {
    let mut hasher = Hasher::new();
    for unit in s.encode_utf16() {
        hasher.update(&u32::from(unit).to_le_bytes());
    }
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_crc32_known_values() {
        assert_eq!(str_crc32(""), 0);
        assert_eq!(str_crc32("OK"), 0xd98ad014);
        assert_eq!(str_crc32("UI"), 0x9ef8357c);
        assert_eq!(str_crc32("Cancel"), 0x38947156);
        assert_eq!(str_crc32("Привет"), 0xacb99705);
    }

    #[test]
    fn test_str_crc32_differs_from_byte_crc() {
        // One character is four bytes here, so this is not crc32("OK")
        assert_ne!(str_crc32("OK"), crc32fast::hash(b"OK"));
    }
}
