use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use unoduetre_document::OutputFormat;
use unoduetre_theme::{build_variant, print_reports, BuildError};

use crate::config::BuildConfig;

use super::select_variants;

pub fn run(
    ids: &[String],
    out_dir: Option<PathBuf>,
    formats: &[OutputFormat],
    config: &BuildConfig,
    variants_dir: &Path,
) -> Result<()> {
    let variants = select_variants(ids, variants_dir)?;
    let out_dir = out_dir.unwrap_or_else(|| config.out_dir.clone());
    let mut blocked = Vec::new();

    for variant in &variants {
        let formats = if !formats.is_empty() {
            formats
        } else if let Some(ref configured) = config.formats {
            configured.as_slice()
        } else {
            variant.formats.as_slice()
        };

        match build_variant(variant, &out_dir, formats) {
            Ok(output) => {
                for path in output.written {
                    println!("✅ {}", path.display());
                }
            }
            Err(BuildError::ContrastFailed { report, .. }) => {
                print_reports(std::slice::from_ref(report.as_ref()), false);
                blocked.push(variant.id.clone());
            }
            Err(e) => {
                return Err(e).wrap_err_with(|| format!("Failed to build '{}'", variant.id));
            }
        }
    }

    if !blocked.is_empty() {
        eprintln!(
            "\n❌ Not written, contrast checks failed: {}",
            blocked.join(", ")
        );
        std::process::exit(1);
    }

    Ok(())
}
