use std::path::Path;

use color_eyre::eyre::Result;
use unoduetre_theme::{builtin_variants, get_all_variants};

pub fn run(variants_dir: &Path) -> Result<()> {
    let builtin_ids: Vec<String> = builtin_variants().into_iter().map(|v| v.id).collect();
    let variants = get_all_variants(Some(variants_dir));

    println!(
        "{:<16} {:<28} {:<6} {:<16} {}",
        "ID", "Name", "Kind", "Hues", "Formats"
    );
    println!("{}", "-".repeat(80));

    for variant in &variants {
        let hues = format!(
            "{}/{}/{}",
            variant.hues.uno, variant.hues.due, variant.hues.tre
        );
        let formats: Vec<_> = variant.formats.iter().map(|f| f.label()).collect();
        let name = if builtin_ids.contains(&variant.id) {
            variant.name.clone()
        } else {
            format!("{} (user)", variant.name)
        };
        println!(
            "{:<16} {:<28} {:<6} {:<16} {}",
            variant.id,
            name,
            variant.kind.label(),
            hues,
            formats.join(", ")
        );
    }

    println!("\nUser variants: {}", variants_dir.display());
    Ok(())
}
