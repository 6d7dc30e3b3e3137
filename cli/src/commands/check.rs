use std::path::Path;

use color_eyre::eyre::Result;
use unoduetre_theme::{build_palette, contrast_report, print_reports};

use super::select_variants;

pub fn run(ids: &[String], verbose: bool, strict: bool, variants_dir: &Path) -> Result<()> {
    let variants = select_variants(ids, variants_dir)?;
    let reports: Vec<_> = variants
        .iter()
        .map(|variant| contrast_report(variant, &build_palette(variant)))
        .collect();

    print_reports(&reports, verbose);

    let failed = reports.iter().any(|report| {
        if strict {
            !report.passed()
        } else {
            report.is_blocking()
        }
    });
    if failed {
        std::process::exit(1);
    }

    Ok(())
}
