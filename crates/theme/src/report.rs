use std::collections::BTreeMap;

use unoduetre_color::{correct_contrast, Color, ContrastLevel, Correction};
use unoduetre_document::ThemeKind;

use crate::palette::Palette;
use crate::variant::{AnsiColors, Variant};

/// One measured foreground/background pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastCheck {
    pub level: ContrastLevel,
    pub fg_name: String,
    pub bg_name: &'static str,
    pub fg: Color,
    pub bg: Color,
    pub ratio: f64,
    pub min: f64,
    pub pass: bool,
}

impl ContrastCheck {
    fn new(level: ContrastLevel, fg_name: impl Into<String>, fg: Color, bg_name: &'static str, bg: Color, min: f64) -> Self {
        let ratio = fg.contrast(&bg);
        Self {
            level,
            fg_name: fg_name.into(),
            bg_name,
            fg,
            bg,
            ratio,
            min,
            pass: ratio >= min,
        }
    }

    pub fn pair(&self) -> String {
        format!("{} ↔ {}", self.bg_name, self.fg_name)
    }

    /// What correcting the foreground would produce. `met` is false when
    /// the pair cannot reach `min` by lightness alone.
    pub fn suggestion(&self) -> Correction {
        correct_contrast(self.fg, self.bg, self.min)
    }
}

/// All checks for one variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastReport {
    pub variant_id: String,
    pub kind: ThemeKind,
    pub enforced: bool,
    pub checks: Vec<ContrastCheck>,
}

impl ContrastReport {
    pub fn failures(&self) -> impl Iterator<Item = &ContrastCheck> {
        self.checks.iter().filter(|c| !c.pass)
    }

    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.pass)
    }

    /// An enforcing variant with at least one failing check.
    pub fn is_blocking(&self) -> bool {
        self.enforced && !self.passed()
    }
}

/// Measure every pair a finished theme depends on.
pub fn contrast_report(variant: &Variant, palette: &Palette) -> ContrastReport {
    let text = variant.min_ratio(ContrastLevel::Text);
    let ui = variant.min_ratio(ContrastLevel::Ui);
    let decoration = variant.min_ratio(ContrastLevel::Decoration);
    let bg = palette.bg;

    let mut checks = vec![
        ContrastCheck::new(ContrastLevel::Text, "fg", palette.fg, "bg", bg, text),
        ContrastCheck::new(ContrastLevel::Text, "fg", palette.fg, "sidebar_bg", palette.sidebar_bg, text),
        ContrastCheck::new(ContrastLevel::Decoration, "border0", palette.border0, "bg", bg, decoration),
        ContrastCheck::new(ContrastLevel::Ui, "border1", palette.border1, "bg", bg, ui),
        ContrastCheck::new(
            ContrastLevel::Text,
            "statusbar_fg",
            palette.statusbar_fg,
            "statusbar_bg",
            palette.statusbar_bg,
            text,
        ),
    ];

    for (ramp_name, ramp) in [("uno", &palette.uno), ("due", &palette.due), ("tre", &palette.tre)] {
        for (i, &color) in ramp.iter().enumerate() {
            checks.push(ContrastCheck::new(
                ContrastLevel::Text,
                format!("{ramp_name}[{i}]"),
                color,
                "bg",
                bg,
                text,
            ));
        }
    }

    let skipped = AnsiColors::background_slot(palette.kind);
    for (slot, color) in palette.ansi.entries() {
        if slot == skipped {
            continue;
        }
        checks.push(ContrastCheck::new(ContrastLevel::Text, format!("ansi.{slot}"), color, "bg", bg, text));
    }

    for (i, &color) in palette.brackets.iter().enumerate() {
        checks.push(ContrastCheck::new(ContrastLevel::Text, format!("brackets[{i}]"), color, "bg", bg, text));
    }

    ContrastReport {
        variant_id: variant.id.clone(),
        kind: variant.kind,
        enforced: variant.enforce_contrast,
        checks,
    }
}

pub fn print_reports(reports: &[ContrastReport], verbose: bool) {
    let total: usize = reports.iter().map(|r| r.checks.len()).sum();
    let failures: Vec<_> = reports
        .iter()
        .flat_map(|r| r.failures().map(move |c| (r, c)))
        .collect();

    println!("{}", "=".repeat(80));
    println!("CONTRAST CHECK RESULTS");
    println!("{}", "=".repeat(80));

    if failures.is_empty() {
        println!("\n✅ All {} color pairs meet their minimum ratio!", total);
    } else {
        println!("\n❌ FAILURES ({} issues)\n", failures.len());
        println!(
            "{:<16} {:<11} {:<28} {:>8} {:>8}",
            "Variant", "Level", "Pair", "Ratio", "Min"
        );
        println!("{}", "-".repeat(80));

        let mut current = "";
        for (report, check) in &failures {
            let label = if report.variant_id != current {
                current = &report.variant_id;
                current
            } else {
                ""
            };
            println!(
                "{:<16} {:<11} {:<28} {:>6.2}:1 {:>6.2}:1",
                label,
                check.level.label(),
                check.pair(),
                check.ratio,
                check.min
            );
            let suggestion = check.suggestion();
            let hint = if suggestion.met {
                format!("try {} ({} steps)", suggestion.color, suggestion.steps())
            } else {
                "unreachable by lightness".to_string()
            };
            println!(
                "{:16} {:11} bg: {}  fg: {}  {}",
                "", "", check.bg, check.fg, hint
            );
        }
    }

    if verbose {
        let passes: Vec<_> = reports
            .iter()
            .flat_map(|r| r.checks.iter().filter(|c| c.pass).map(move |c| (r, c)))
            .collect();
        if !passes.is_empty() {
            println!("\n✅ PASSING ({} checks)\n", passes.len());
            for (report, check) in passes {
                println!(
                    "{:<16} {:<11} {:<28} {:>6.2}:1",
                    report.variant_id,
                    check.level.label(),
                    check.pair(),
                    check.ratio
                );
            }
        }
    }

    println!("\n{}", "=".repeat(80));
    println!("SUMMARY BY VARIANT");
    println!("{}", "=".repeat(80));

    let mut stats: BTreeMap<&str, (&ContrastReport, usize, usize)> = BTreeMap::new();
    for report in reports {
        let fail = report.failures().count();
        stats.insert(&report.variant_id, (report, report.checks.len() - fail, fail));
    }

    println!(
        "\n{:<16} {:<6} {:>6} {:>6} {:<10}",
        "Variant", "Kind", "Pass", "Fail", "Status"
    );
    println!("{}", "-".repeat(60));

    for (id, (report, pass, fail)) in stats {
        let status = match (fail, report.enforced) {
            (0, _) => "✅ OK".to_string(),
            (n, true) => format!("❌ {} issues (enforced)", n),
            (n, false) => format!("⚠️  {} issues", n),
        };
        println!(
            "{:<16} {:<6} {:>6} {:>6} {}",
            id,
            report.kind.label(),
            pass,
            fail,
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::{builtin_variants, get_builtin_variant};
    use crate::palette::build_palette;
    use pretty_assertions::assert_eq;

    fn report_for(id: &str) -> ContrastReport {
        let variant = get_builtin_variant(id).unwrap();
        contrast_report(&variant, &build_palette(&variant))
    }

    #[test]
    fn test_check_count() {
        // 5 fixed pairs, 15 ramp entries, 7 ansi colors, 3 brackets
        let report = report_for("light");
        assert_eq!(report.checks.len(), 30);
    }

    #[test]
    fn test_background_slot_is_not_checked() {
        let dark = report_for("dark");
        assert!(dark.checks.iter().all(|c| c.fg_name != "ansi.black"));
        assert!(dark.checks.iter().any(|c| c.fg_name == "ansi.white"));

        let light = report_for("light");
        assert!(light.checks.iter().all(|c| c.fg_name != "ansi.white"));
    }

    #[test]
    fn test_check_records_ratio_and_minimum() {
        let report = report_for("light");
        let fg = &report.checks[0];
        assert_eq!(fg.pair(), "bg ↔ fg");
        assert_eq!(fg.level, ContrastLevel::Text);
        assert_eq!(fg.min, 4.5);
        assert_eq!(fg.ratio, fg.fg.contrast(&fg.bg));
        assert_eq!(fg.pass, fg.ratio >= 4.5);
    }

    #[test]
    fn test_enforcing_builtins_pass() {
        for variant in builtin_variants().into_iter().filter(|v| v.enforce_contrast) {
            let report = contrast_report(&variant, &build_palette(&variant));
            let failing: Vec<_> = report.failures().map(|c| c.pair()).collect();
            assert!(failing.is_empty(), "{}: {:?}", variant.id, failing);
            assert!(!report.is_blocking());
        }
    }

    #[test]
    fn test_failing_enforced_report_blocks() {
        let mut variant = get_builtin_variant("miasma").unwrap();
        variant.colors.bg = variant.colors.fg;
        let report = contrast_report(&variant, &build_palette(&variant));
        assert!(!report.passed());
        assert!(report.is_blocking());

        variant.enforce_contrast = false;
        let report = contrast_report(&variant, &build_palette(&variant));
        assert!(!report.is_blocking());
    }

    #[test]
    fn test_suggestion_meets_minimum_when_reachable() {
        let check = ContrastCheck::new(
            ContrastLevel::Text,
            "fg",
            Color::new(0xcc, 0xcc, 0xcc),
            "bg",
            Color::WHITE,
            4.5,
        );
        assert!(!check.pass);
        let suggestion = check.suggestion();
        assert!(suggestion.met);
        assert!(suggestion.color.contrast(&Color::WHITE) >= 4.5);
    }
}
