//! User variants from TOML files.
//!
//! A variant file names a built-in `base` and overrides any subset of its
//! fields:
//!
//! ```toml
//! base = "dark"
//! name = "Dark (high contrast)"
//! enforce_contrast = true
//!
//! [colors]
//! bg = "#101010"
//!
//! [contrast]
//! text = 7.0
//! ```
//!
//! Tables are merged key by key. A table that carries a `source` key
//! (`ansi`, `borders`) replaces the base table outright, since its shape
//! depends on the source.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use toml::{Table, Value};

use crate::builtin::get_builtin_variant;
use crate::variant::Variant;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{}: missing `base` variant id", .path.display())]
    MissingBase { path: PathBuf },

    #[error("{}: unknown base variant '{base}'", .path.display())]
    UnknownBase { path: PathBuf, base: String },

    #[error("{}: {message}", .path.display())]
    Invalid { path: PathBuf, message: String },
}

/// Resolve one variant file. `id` becomes the output file stem.
pub fn parse_variant_toml(id: &str, content: &str, path: &Path) -> Result<Variant, LoadError> {
    let mut overrides: Table = toml::from_str(content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let base_id = match overrides.remove("base") {
        Some(Value::String(base)) => base,
        _ => {
            return Err(LoadError::MissingBase {
                path: path.to_path_buf(),
            })
        }
    };
    let base = get_builtin_variant(&base_id).ok_or_else(|| LoadError::UnknownBase {
        path: path.to_path_buf(),
        base: base_id.clone(),
    })?;

    let invalid = |message: String| LoadError::Invalid {
        path: path.to_path_buf(),
        message,
    };

    let mut merged = match Value::try_from(&base).map_err(|e| invalid(e.to_string()))? {
        Value::Table(table) => table,
        _ => return Err(invalid("base variant is not a table".to_string())),
    };
    overrides.insert("id".to_string(), Value::String(id.to_string()));
    merge_tables(&mut merged, overrides);

    Value::Table(merged)
        .try_into::<Variant>()
        .map_err(|e| invalid(e.to_string()))
}

fn merge_tables(base: &mut Table, overrides: Table) {
    for (key, value) in overrides {
        match value {
            Value::Table(table) if !table.contains_key("source") => {
                if let Some(Value::Table(existing)) = base.get_mut(&key) {
                    merge_tables(existing, table);
                } else {
                    base.insert(key, Value::Table(table));
                }
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}

/// Load every `*.toml` file in `dir`, sorted by file name. A missing
/// directory yields nothing.
pub fn load_variants_from_dir(dir: &Path) -> Vec<Result<Variant, LoadError>> {
    if !dir.exists() {
        return Vec::new();
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(source) => {
            return vec![Err(LoadError::Io {
                path: dir.to_path_buf(),
                source,
            })]
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|e| e == "toml"))
        .collect();
    paths.sort();

    paths
        .into_iter()
        .map(|path| {
            let id = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("unknown")
                .to_string();
            let content = fs::read_to_string(&path).map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })?;
            let variant = parse_variant_toml(&id, &content, &path)?;
            tracing::debug!(id = %variant.id, path = %path.display(), "Loaded user variant");
            Ok(variant)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::{AnsiSource, BorderSource};
    use pretty_assertions::assert_eq;
    use unoduetre_color::Color;
    use unoduetre_document::OutputFormat;

    fn parse(content: &str) -> Result<Variant, LoadError> {
        parse_variant_toml("custom", content, Path::new("custom.toml"))
    }

    #[test]
    fn test_base_only_keeps_everything_but_id() {
        let variant = parse("base = \"dark\"").unwrap();
        let mut expected = get_builtin_variant("dark").unwrap();
        expected.id = "custom".to_string();
        assert_eq!(variant, expected);
    }

    #[test]
    fn test_nested_overrides_merge() {
        let variant = parse(
            r##"
base = "light"
name = "Paper"
enforce_contrast = true
formats = ["json", "tm-theme"]

[colors]
bg = "#fafafa"

[contrast]
text = 7.0

[hues]
uno = 10.0
"##,
        )
        .unwrap();
        let base = get_builtin_variant("light").unwrap();

        assert_eq!(variant.name, "Paper");
        assert!(variant.enforce_contrast);
        assert_eq!(variant.formats, vec![OutputFormat::Json, OutputFormat::TmTheme]);
        assert_eq!(variant.colors.bg, Color::new(0xfa, 0xfa, 0xfa));
        assert_eq!(variant.colors.fg, base.colors.fg);
        assert_eq!(variant.contrast.text, 7.0);
        assert_eq!(variant.contrast.ui, base.contrast.ui);
        assert_eq!(variant.hues.uno, 10.0);
        assert_eq!(variant.hues.due, base.hues.due);
    }

    #[test]
    fn test_sourced_tables_replace_wholesale() {
        let variant = parse(
            r##"
base = "ocean"

[borders]
source = "derived"

[ansi]
source = "tinted"
tint = "#336699"
"##,
        )
        .unwrap();
        assert_eq!(variant.borders, BorderSource::Derived);
        assert_eq!(
            variant.ansi,
            AnsiSource::Tinted {
                tint: Color::new(0x33, 0x66, 0x99)
            }
        );
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse("name = \"x\""), Err(LoadError::MissingBase { .. })));
        assert!(matches!(
            parse("base = \"nope\""),
            Err(LoadError::UnknownBase { base, .. }) if base == "nope"
        ));
        assert!(matches!(parse("base = "), Err(LoadError::Parse { .. })));
        assert!(matches!(
            parse("base = \"dark\"\n[colors]\nbg = \"#zzz\""),
            Err(LoadError::Invalid { .. })
        ));
    }

    #[test]
    fn test_error_names_the_file() {
        let err = parse("base = \"nope\"").unwrap_err();
        assert!(err.to_string().contains("custom.toml"));
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b-good.toml"), "base = \"dark\"\nname = \"Good\"").unwrap();
        fs::write(dir.path().join("a-bad.toml"), "base = \"missing\"").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let results = load_variants_from_dir(dir.path());
        assert_eq!(results.len(), 2);
        assert!(results[0].is_err());
        let good = results[1].as_ref().unwrap();
        assert_eq!(good.id, "b-good");
        assert_eq!(good.name, "Good");
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_variants_from_dir(&dir.path().join("nope")).is_empty());
    }
}
