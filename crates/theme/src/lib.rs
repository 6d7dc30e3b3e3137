mod builtin;
mod loader;
mod output;
mod palette;
pub mod report;
mod schema;
pub mod tokens;
mod variant;

pub use builtin::{builtin_variants, get_builtin_variant};
pub use loader::{load_variants_from_dir, parse_variant_toml, LoadError};
pub use output::{build_variant, render_variant, BuildError, BuildOutput};
pub use palette::{build_palette, Palette};
pub use report::{contrast_report, print_reports, ContrastCheck, ContrastReport};
pub use schema::{map_palette, ui_sections, Section, Slot};
pub use tokens::token_rules;
pub use variant::{
    ramp, AnsiColors, AnsiSource, BaseColors, BorderSource, HueSet, RampStep, Ramps, Variant,
    RAMP_LEN,
};

use std::path::Path;

/// Built-in variants followed by the user variants in `user_variants_dir`.
/// User files that fail to load are logged and skipped. A user variant
/// whose id matches an earlier one replaces it.
pub fn get_all_variants(user_variants_dir: Option<&Path>) -> Vec<Variant> {
    let mut variants = builtin_variants();
    let Some(dir) = user_variants_dir else {
        return variants;
    };

    for result in load_variants_from_dir(dir) {
        match result {
            Ok(variant) => match variants.iter_mut().find(|v| v.id == variant.id) {
                Some(existing) => *existing = variant,
                None => variants.push(variant),
            },
            Err(e) => tracing::warn!("Skipping user variant: {}", e),
        }
    }
    variants
}

pub fn get_variant_by_id(id: &str, user_variants_dir: Option<&Path>) -> Option<Variant> {
    get_all_variants(user_variants_dir)
        .into_iter()
        .find(|v| v.id == id)
}
