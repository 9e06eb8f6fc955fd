//! Locres layout versions and the features each one carries

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::hash::{city_hash64_utf16_to_u32, str_crc32};

/// Fingerprint function used for namespace and key hashes.
pub type FingerprintFn = fn(&str) -> u32;

/// On-disk layout generation.
///
/// Variants are ordered: every layout is a superset of the ones before it,
/// so comparisons like `version >= LocresVersion::Compact` are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum LocresVersion {
    /// No header, values stored inline.
    Legacy = 0,
    /// Magic header and a deduplicated string table.
    #[default]
    Compact = 1,
    /// Adds CRC namespace/key hashes and string reference counts.
    Optimized = 2,
    /// Same as `Optimized` with `CityHash64` fingerprints over UTF-16 text.
    #[serde(rename = "Optimized_CityHash64_UTF16")]
    OptimizedCityHash64Utf16 = 3,
}

/// Everything the reader and writer need to know about a layout.
#[derive(Debug, Clone, Copy)]
pub struct VersionFeatures {
    /// Magic, version byte and string-table offset precede the body.
    pub has_header: bool,
    /// Values are indices into a shared string table instead of inline strings.
    pub has_shared_table: bool,
    /// Header total entry count, per-namespace/per-key hashes and per-string refcounts.
    pub has_hashes: bool,
    /// Function producing namespace/key hashes (present iff `has_hashes`).
    pub fingerprint: Option<FingerprintFn>,
    /// Legacy files always store namespace names as UTF-16.
    pub force_unicode_namespace: bool,
}

impl LocresVersion {
    /// Every known layout, oldest first.
    pub const ALL: [LocresVersion; 4] = [
        LocresVersion::Legacy,
        LocresVersion::Compact,
        LocresVersion::Optimized,
        LocresVersion::OptimizedCityHash64Utf16,
    ];

    /// The newest layout this library can write.
    pub const LATEST: LocresVersion = LocresVersion::OptimizedCityHash64Utf16;

    /// Parse the version byte that follows the magic.
    pub fn from_u8(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Legacy),
            1 => Ok(Self::Compact),
            2 => Ok(Self::Optimized),
            3 => Ok(Self::OptimizedCityHash64Utf16),
            _ => Err(Error::UnrecognizedVersion(value)),
        }
    }

    /// The version byte written after the magic.
    #[must_use]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Capability lookup for this layout.
    #[must_use]
    pub fn features(self) -> VersionFeatures {
        match self {
            Self::Legacy => VersionFeatures {
                has_header: false,
                has_shared_table: false,
                has_hashes: false,
                fingerprint: None,
                force_unicode_namespace: true,
            },
            Self::Compact => VersionFeatures {
                has_header: true,
                has_shared_table: true,
                has_hashes: false,
                fingerprint: None,
                force_unicode_namespace: false,
            },
            Self::Optimized => VersionFeatures {
                has_header: true,
                has_shared_table: true,
                has_hashes: true,
                fingerprint: Some(str_crc32),
                force_unicode_namespace: false,
            },
            Self::OptimizedCityHash64Utf16 => VersionFeatures {
                has_header: true,
                has_shared_table: true,
                has_hashes: true,
                fingerprint: Some(city_hash64_utf16_to_u32),
                force_unicode_namespace: false,
            },
        }
    }

    /// Short name used on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Compact => "compact",
            Self::Optimized => "optimized",
            Self::OptimizedCityHash64Utf16 => "cityhash",
        }
    }
}

impl fmt::Display for LocresVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Legacy => "Legacy",
            Self::Compact => "Compact",
            Self::Optimized => "Optimized",
            Self::OptimizedCityHash64Utf16 => "Optimized_CityHash64_UTF16",
        };
        f.write_str(label)
    }
}

impl FromStr for LocresVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "0" | "legacy" => Ok(Self::Legacy),
            "1" | "compact" => Ok(Self::Compact),
            "2" | "optimized" => Ok(Self::Optimized),
            "3" | "cityhash" | "optimized_cityhash64_utf16" | "optimizedcityhash64utf16" => {
                Ok(Self::OptimizedCityHash64Utf16)
            }
            _ => Err(Error::UnknownFormatName(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_versions_are_ordered() {
        assert!(LocresVersion::Legacy < LocresVersion::Compact);
        assert!(LocresVersion::Compact < LocresVersion::Optimized);
        assert!(LocresVersion::Optimized < LocresVersion::OptimizedCityHash64Utf16);
    }

    #[test]
    fn test_byte_round_trip() {
        for version in LocresVersion::ALL {
            assert_eq!(LocresVersion::from_u8(version.as_u8()).unwrap(), version);
        }
    }

    #[test]
    fn test_unknown_byte_is_rejected() {
        assert!(matches!(
            LocresVersion::from_u8(4),
            Err(Error::UnrecognizedVersion(4))
        ));
    }

    #[test]
    fn test_features_grow_with_version() {
        let legacy = LocresVersion::Legacy.features();
        assert!(!legacy.has_header && !legacy.has_shared_table && !legacy.has_hashes);
        assert!(legacy.force_unicode_namespace);

        let compact = LocresVersion::Compact.features();
        assert!(compact.has_header && compact.has_shared_table && !compact.has_hashes);
        assert!(compact.fingerprint.is_none());

        for version in [LocresVersion::Optimized, LocresVersion::OptimizedCityHash64Utf16] {
            let features = version.features();
            assert!(features.has_shared_table && features.has_hashes);
            assert!(features.fingerprint.is_some());
        }
    }

    #[test]
    fn test_fingerprint_selection() {
        let crc = LocresVersion::Optimized.features().fingerprint.unwrap();
        let city = LocresVersion::OptimizedCityHash64Utf16.features().fingerprint.unwrap();
        assert_eq!(crc("OK"), str_crc32("OK"));
        assert_eq!(city("OK"), city_hash64_utf16_to_u32("OK"));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Legacy".parse::<LocresVersion>().unwrap(), LocresVersion::Legacy);
        assert_eq!("cityhash".parse::<LocresVersion>().unwrap(), LocresVersion::LATEST);
        assert_eq!(
            "Optimized_CityHash64_UTF16".parse::<LocresVersion>().unwrap(),
            LocresVersion::OptimizedCityHash64Utf16
        );
        assert!("v5".parse::<LocresVersion>().is_err());
    }
}
