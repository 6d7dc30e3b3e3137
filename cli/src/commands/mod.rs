pub mod build;
pub mod check;
pub mod list;

use std::path::Path;

use color_eyre::eyre::{eyre, Result};
use unoduetre_theme::{get_all_variants, Variant};

/// Variants named by `ids` in the given order, or every variant when `ids`
/// is empty.
pub fn select_variants(ids: &[String], variants_dir: &Path) -> Result<Vec<Variant>> {
    let all = get_all_variants(Some(variants_dir));
    if ids.is_empty() {
        return Ok(all);
    }

    ids.iter()
        .map(|id| {
            all.iter().find(|v| &v.id == id).cloned().ok_or_else(|| {
                eyre!(
                    "Unknown variant '{}'. Run `unoduetre list` to see available variants.",
                    id
                )
            })
        })
        .collect()
}
