//! # LocresLib
//!
//! A pure-Rust library for Unreal Engine localization resources (`.locres`).
//!
//! ## Supported Layouts
//!
//! - **Legacy** - headerless, values stored inline
//! - **Compact** - magic header and a deduplicated string table
//! - **Optimized** - adds CRC namespace/key hashes and string reference counts
//! - **`Optimized_CityHash64_UTF16`** - `CityHash64` hashes over UTF-16 text
//!
//! ## Quick Start
//!
//! ```no_run
//! use locreslib::formats::locres::{read_locres, write_locres, LocresVersion};
//!
//! let mut doc = read_locres("Game.locres")?;
//! for namespace in &mut doc.namespaces {
//!     for entry in &mut namespace.entries {
//!         entry.value = entry.value.to_uppercase();
//!     }
//! }
//! write_locres("Game.new.locres", &doc, LocresVersion::Optimized)?;
//! # Ok::<(), locreslib::Error>(())
//! ```
//!
//! ### Translation Sheets
//!
//! ```no_run
//! use locreslib::formats::locres::{
//!     export_for_translation, import_translations, read_locres, SheetFormat,
//! };
//!
//! let mut doc = read_locres("Game.locres")?;
//! export_for_translation(&doc, "Game.csv", SheetFormat::default())?;
//! // ... translators fill in the second column ...
//! let result = import_translations(&mut doc, "Game.csv", SheetFormat::default())?;
//! println!("updated {} entries", result.updated);
//! # Ok::<(), locreslib::Error>(())
//! ```

pub mod error;
pub mod formats;
pub mod hash;

pub use error::{Error, Result};

/// Commonly used types
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::locres::{
        ImportResult, LocresDocument, LocresEntry, LocresNamespace, LocresVersion, SheetFormat,
        TranslationRow, parse_locres_bytes, read_locres, serialize_locres, write_locres,
    };
}
