//! Re-encode a .locres file in another layout

use std::path::Path;

use anyhow::Context;
use locreslib::formats::locres::{LocresVersion, read_locres, write_locres};

use super::{Options, default_output};
use crate::cli::progress::{DISK, GEAR, LOOKING_GLASS, Progress};

pub fn execute(
    path: &Path,
    format: LocresVersion,
    output: Option<&Path>,
    options: Options,
) -> anyhow::Result<()> {
    let output = output.map_or_else(|| default_output(path), Path::to_path_buf);
    let mut progress = Progress::new(3, options.quiet);

    progress.step(&LOOKING_GLASS, &format!("Reading {}...", path.display()));
    let document =
        read_locres(path).with_context(|| format!("Failed to read {}", path.display()))?;

    progress.step(
        &GEAR,
        &format!("Converting {} -> {format}...", document.version),
    );
    if format < document.version {
        tracing::debug!("Downgrading from {} drops its hash fields", document.version);
    }

    progress.step(&DISK, &format!("Writing {}...", output.display()));
    progress
        .spin("Encoding", || write_locres(&output, &document, format))
        .with_context(|| format!("Failed to write {}", output.display()))?;

    progress.note(&format!(
        "{} namespaces, {} entries",
        document.len(),
        document.total_count()
    ));
    progress.finish();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use locreslib::formats::locres::{LocresDocument, LocresEntry, LocresNamespace};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn quiet() -> Options {
        Options {
            quiet: true,
            ..Options::default()
        }
    }

    #[test]
    fn test_convert_to_every_layout() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("Game.locres");
        let mut doc = LocresDocument::new(LocresVersion::Legacy);
        doc.push_namespace(
            LocresNamespace::new("Menu").with_entry(LocresEntry::new("Play", "Jouer", 3)),
        );
        write_locres(&source, &doc, LocresVersion::Legacy).unwrap();

        for format in LocresVersion::ALL {
            let output = dir.path().join(format!("{}.locres", format.name()));
            execute(&source, format, Some(&output), quiet()).unwrap();

            let converted = read_locres(&output).unwrap();
            assert_eq!(converted.version, format);
            assert_eq!(converted.namespaces, doc.namespaces);
        }
    }

    #[test]
    fn test_default_output_path() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("Game.locres");
        write_locres(&source, &LocresDocument::default(), LocresVersion::Compact).unwrap();

        execute(&source, LocresVersion::Optimized, None, quiet()).unwrap();
        let converted = read_locres(dir.path().join("Game.locres.new")).unwrap();
        assert_eq!(converted.version, LocresVersion::Optimized);
    }

    #[test]
    fn test_missing_input_reports_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.locres");
        let err = execute(&missing, LocresVersion::Compact, None, quiet()).unwrap_err();
        assert!(err.to_string().contains("missing.locres"));
    }
}
