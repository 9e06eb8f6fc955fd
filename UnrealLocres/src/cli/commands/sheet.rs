//! CLI commands for translation sheet export and import

use std::path::Path;

use anyhow::Context;
use locreslib::formats::locres::{
    LocresVersion, export_for_translation, import_translations, read_locres, write_locres,
};

use super::{Options, default_output};
use crate::cli::progress::{DISK, DOCUMENT, GEAR, LOOKING_GLASS, Progress};

/// Unused keys listed before the rest are summarized
const MAX_LISTED_KEYS: usize = 5;

/// Export a .locres file to a translation sheet
pub fn export(path: &Path, output: Option<&Path>, options: Options) -> anyhow::Result<()> {
    let output = output.map_or_else(|| path.with_extension("csv"), Path::to_path_buf);
    let mut progress = Progress::new(2, options.quiet);

    progress.step(&LOOKING_GLASS, &format!("Reading {}...", path.display()));
    let document =
        read_locres(path).with_context(|| format!("Failed to read {}", path.display()))?;

    progress.step(&DOCUMENT, &format!("Writing {}...", output.display()));
    let count = export_for_translation(&document, &output, options.sheet)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    progress.note(&format!(
        "Exported {count} of {} entries ({} layout)",
        document.total_count(),
        document.version
    ));
    progress.finish();
    Ok(())
}

/// Apply a translation sheet and write the result
pub fn import(
    path: &Path,
    sheet: &Path,
    output: Option<&Path>,
    format: Option<LocresVersion>,
    options: Options,
) -> anyhow::Result<()> {
    let output = output.map_or_else(|| default_output(path), Path::to_path_buf);
    let mut progress = Progress::new(3, options.quiet);

    progress.step(&LOOKING_GLASS, &format!("Reading {}...", path.display()));
    let mut document =
        read_locres(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let format = format.unwrap_or(document.version);

    progress.step(&GEAR, &format!("Applying {}...", sheet.display()));
    let result = import_translations(&mut document, sheet, options.sheet)
        .with_context(|| format!("Failed to read {}", sheet.display()))?;

    progress.step(&DISK, &format!("Writing {} ({format})...", output.display()));
    write_locres(&output, &document, format)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    progress.note(&format!(
        "{} rows, {} translated: {} updated, {} added",
        result.total, result.translated, result.updated, result.added
    ));
    if !result.unused_keys.is_empty() {
        progress.note(&format!("{} unused:", result.unused_keys.len()));
        for key in result.unused_keys.iter().take(MAX_LISTED_KEYS) {
            progress.note(&format!("  - {key}"));
        }
        if result.unused_keys.len() > MAX_LISTED_KEYS {
            progress.note(&format!(
                "  (and {} more)",
                result.unused_keys.len() - MAX_LISTED_KEYS
            ));
        }
    }
    progress.finish();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use locreslib::formats::locres::{LocresDocument, LocresEntry, LocresNamespace, SheetFormat};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn quiet() -> Options {
        Options {
            quiet: true,
            ..Options::default()
        }
    }

    fn write_source(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("Game.locres");
        let mut doc = LocresDocument::new(LocresVersion::Optimized);
        doc.push_namespace(
            LocresNamespace::new("UI")
                .with_entry(LocresEntry::new("OK", "Yes", 1))
                .with_entry(LocresEntry::new("Cancel", "No", 2)),
        );
        write_locres(&path, &doc, doc.version).unwrap();
        path
    }

    #[test]
    fn test_export_default_path() {
        let dir = tempdir().unwrap();
        let source = write_source(dir.path());

        export(&source, None, quiet()).unwrap();
        let sheet = std::fs::read_to_string(dir.path().join("Game.csv")).unwrap();
        assert_eq!(sheet, "Yes→→UI/OK\nNo→→UI/Cancel\n");
    }

    #[test]
    fn test_export_custom_separator() {
        let dir = tempdir().unwrap();
        let source = write_source(dir.path());
        let output = dir.path().join("sheet.txt");
        let options = Options {
            quiet: true,
            sheet: SheetFormat {
                separator: '\t',
                escape: '\\',
            },
        };

        export(&source, Some(&output), options).unwrap();
        let sheet = std::fs::read_to_string(output).unwrap();
        assert_eq!(sheet, "Yes\t\tUI/OK\nNo\t\tUI/Cancel\n");
    }

    #[test]
    fn test_import_keeps_layout_by_default() {
        let dir = tempdir().unwrap();
        let source = write_source(dir.path());
        let sheet = dir.path().join("Game.csv");
        std::fs::write(&sheet, "Yes→Oui→UI/OK\nHi→Salut→Other/Hello\n").unwrap();

        import(&source, &sheet, None, None, quiet()).unwrap();

        let result = read_locres(dir.path().join("Game.locres.new")).unwrap();
        assert_eq!(result.version, LocresVersion::Optimized);
        let ui = result.namespace("UI").unwrap();
        assert_eq!(ui.get("OK").unwrap().value, "Oui");
        assert_eq!(ui.get("Cancel").unwrap().value, "No");
        assert!(result.namespace("Other").is_none());
    }

    #[test]
    fn test_import_with_format_override() {
        let dir = tempdir().unwrap();
        let source = write_source(dir.path());
        let sheet = dir.path().join("Game.csv");
        let output = dir.path().join("Out.locres");
        std::fs::write(&sheet, "No→Non→UI/Cancel\n").unwrap();

        import(
            &source,
            &sheet,
            Some(&output),
            Some(LocresVersion::Legacy),
            quiet(),
        )
        .unwrap();

        let result = read_locres(&output).unwrap();
        assert_eq!(result.version, LocresVersion::Legacy);
        assert_eq!(result.namespace("UI").unwrap().get("Cancel").unwrap().value, "Non");
    }
}
