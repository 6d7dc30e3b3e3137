//! Build pipeline: variant → palette → document → files.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use unoduetre_document::{DocumentError, OutputFormat};

use crate::palette::build_palette;
use crate::report::{contrast_report, ContrastReport};
use crate::schema::map_palette;
use crate::variant::Variant;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Variant '{id}' failed {} enforced contrast check(s)", .report.failures().count())]
    ContrastFailed { id: String, report: Box<ContrastReport> },

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode variant '{id}': {source}")]
    Document {
        id: String,
        #[source]
        source: DocumentError,
    },
}

/// Result of building one variant.
#[derive(Debug)]
pub struct BuildOutput {
    pub report: ContrastReport,
    pub written: Vec<PathBuf>,
}

/// Encode `variant` in every format without touching the filesystem.
/// Returns `(file name, contents)` pairs.
pub fn render_variant(
    variant: &Variant,
    formats: &[OutputFormat],
) -> Result<(ContrastReport, Vec<(String, String)>), BuildError> {
    let palette = build_palette(variant);
    let report = contrast_report(variant, &palette);

    if report.is_blocking() {
        return Err(BuildError::ContrastFailed {
            id: variant.id.clone(),
            report: Box::new(report),
        });
    }
    for check in report.failures() {
        tracing::warn!(
            variant = %variant.id,
            pair = %check.pair(),
            ratio = check.ratio,
            min = check.min,
            "Contrast below minimum"
        );
    }

    let document_err = |source| BuildError::Document {
        id: variant.id.clone(),
        source,
    };
    let document = map_palette(&palette).map_err(document_err)?;

    let files = formats
        .iter()
        .map(|&format| {
            let contents = document.encode(format, &variant.name).map_err(document_err)?;
            Ok((format!("{}.{}", variant.id, format.extension()), contents))
        })
        .collect::<Result<Vec<_>, BuildError>>()?;

    Ok((report, files))
}

/// Build `variant` into `out_dir`, creating it if needed. Nothing is written
/// when an enforcing variant fails its contrast checks or any format fails
/// to encode.
pub fn build_variant(
    variant: &Variant,
    out_dir: &Path,
    formats: &[OutputFormat],
) -> Result<BuildOutput, BuildError> {
    let (report, files) = render_variant(variant, formats)?;

    fs::create_dir_all(out_dir).map_err(|source| BuildError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(files.len());
    for (file_name, contents) in files {
        let path = out_dir.join(file_name);
        tracing::info!(variant = %variant.id, path = %path.display(), "Saving theme");
        fs::write(&path, contents).map_err(|source| BuildError::Io {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }

    Ok(BuildOutput { report, written })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::get_builtin_variant;

    #[test]
    fn test_render_names_files_by_id() {
        let variant = get_builtin_variant("uno-due-tre").unwrap();
        let (_, files) = render_variant(&variant, &variant.formats).unwrap();
        let names: Vec<_> = files.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["uno-due-tre.json", "uno-due-tre.tmTheme"]);
    }

    #[test]
    fn test_build_creates_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("themes");
        let variant = get_builtin_variant("dark").unwrap();

        let output = build_variant(&variant, &out, &[OutputFormat::Json]).unwrap();
        assert_eq!(output.written, vec![out.join("dark.json")]);
        assert!(out.join("dark.json").is_file());
    }

    #[test]
    fn test_blocking_report_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut variant = get_builtin_variant("miasma").unwrap();
        variant.colors.fg = variant.colors.bg;

        let err = build_variant(&variant, dir.path(), &[OutputFormat::Json]).unwrap_err();
        assert!(matches!(err, BuildError::ContrastFailed { ref id, .. } if id == "miasma"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_write_error_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();
        let variant = get_builtin_variant("light").unwrap();

        let err = build_variant(&variant, &blocker, &[OutputFormat::Json]).unwrap_err();
        assert!(matches!(err, BuildError::Io { ref path, .. } if path == &blocker));
    }
}
