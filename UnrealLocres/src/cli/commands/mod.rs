//! Subcommand definitions and dispatch

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::Subcommand;
use locreslib::formats::locres::{LocresVersion, SheetFormat};

pub mod convert;
pub mod inspect;
pub mod sheet;

/// Settings shared by every subcommand.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub quiet: bool,
    pub sheet: SheetFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export localized strings to a translation sheet
    Export {
        /// Source .locres file
        path: PathBuf,

        /// Output sheet (defaults to the source with a .csv extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Apply a translation sheet and write a new .locres file
    Import {
        /// Source .locres file
        path: PathBuf,

        /// Translation sheet
        sheet: PathBuf,

        /// Output file (defaults to the source path + .new)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output layout: legacy, compact, optimized, cityhash (defaults to the source layout)
        #[arg(short, long)]
        format: Option<LocresVersion>,
    },

    /// Re-encode a .locres file in another layout
    Convert {
        /// Source .locres file
        path: PathBuf,

        /// Output layout: legacy, compact, optimized, cityhash
        #[arg(short, long)]
        format: LocresVersion,

        /// Output file (defaults to the source path + .new)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show layout, namespace and entry counts
    Info {
        /// .locres file to inspect
        path: PathBuf,
    },

    /// Print the whole document as JSON
    Dump {
        /// .locres file to dump
        path: PathBuf,
    },
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self, options: Options) -> anyhow::Result<()> {
        match self {
            Commands::Export { path, output } => sheet::export(path, output.as_deref(), options),
            Commands::Import {
                path,
                sheet,
                output,
                format,
            } => sheet::import(path, sheet, output.as_deref(), *format, options),
            Commands::Convert {
                path,
                format,
                output,
            } => convert::execute(path, *format, output.as_deref(), options),
            Commands::Info { path } => inspect::info(path),
            Commands::Dump { path } => inspect::dump(path),
        }
    }
}

/// `Game.locres` -> `Game.locres.new`
pub(crate) fn default_output(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".new");
    PathBuf::from(name)
}
