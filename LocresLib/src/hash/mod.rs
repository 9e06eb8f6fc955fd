//! Hashing utilities
//!
//! Two fingerprint functions are used as fast lookup keys inside the format:
//! the engine's string CRC ([`str_crc32`]) and a 32-bit fold of `CityHash64`
//! over UTF-16LE text ([`city_hash64_utf16_to_u32`]). Neither is ever checked
//! against content on read.

mod city;
mod crc;

pub use city::city_hash64;
pub use crc::str_crc32;

/// Fold `CityHash64` of the UTF-16LE encoding of `s` into 32 bits.
///
/// Empty strings hash to 0. The fold mirrors the engine's 64-to-32 bit
/// `GetTypeHash`: `low + high * 23` with wrapping arithmetic.
#[must_use]
pub fn city_hash64_utf16_to_u32(s: &str) -> u32 {
    if s.is_empty() {
        return 0;
    }

    let bytes: Vec<u8> = s.encode_utf16().flat_map(u16::to_le_bytes).collect();
    let h = city_hash64(&bytes);
    (h as u32).wrapping_add(((h >> 32) as u32).wrapping_mul(23))
}
