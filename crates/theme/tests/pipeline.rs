use std::fs;

use pretty_assertions::assert_eq;
use unoduetre_color::hsl;
use unoduetre_document::{OutputFormat, ThemeDocument, ThemeKind};
use unoduetre_theme::{
    build_palette, build_variant, builtin_variants, get_all_variants, get_builtin_variant,
    get_variant_by_id, map_palette, render_variant, ui_sections, BuildError,
};

#[test]
fn rendering_is_byte_identical_across_runs() {
    for variant in builtin_variants() {
        let formats = [OutputFormat::Json, OutputFormat::TmTheme];
        let (_, first) = render_variant(&variant, &formats).unwrap();
        let (_, second) = render_variant(&variant, &formats).unwrap();
        assert_eq!(first, second, "{}", variant.id);
    }
}

#[test]
fn json_output_parses_back_into_the_same_bytes() {
    let variant = get_builtin_variant("nature").unwrap();
    let (_, files) = render_variant(&variant, &[OutputFormat::Json]).unwrap();

    let parsed: ThemeDocument = serde_json::from_str(&files[0].1).unwrap();
    assert_eq!(parsed.kind, ThemeKind::Light);
    assert_eq!(parsed.to_json().unwrap(), files[0].1);
}

#[test]
fn every_defined_key_is_emitted_once() {
    for variant in builtin_variants() {
        let palette = build_palette(&variant);
        let document = map_palette(&palette).unwrap();
        let (_, files) = render_variant(&variant, &[OutputFormat::Json]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&files[0].1).unwrap();
        let colors = json["colors"].as_object().unwrap();

        for section in ui_sections(&palette) {
            for (key, color) in section.slots {
                assert!(document.colors.contains_key(key), "{}: {}", variant.id, key);
                match color {
                    Some(color) => assert_eq!(colors[key], serde_json::json!(color.to_hex())),
                    None => assert!(!colors.contains_key(key)),
                }
            }
        }
    }
}

#[test]
fn classic_strings_rule() {
    let variant = get_builtin_variant("uno-due-tre").unwrap();
    assert_eq!((variant.hues.uno, variant.hues.due, variant.hues.tre), (320.0, 215.0, 125.0));

    let (_, files) = render_variant(&variant, &[OutputFormat::Json]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&files[0].1).unwrap();
    let strings = json["tokenColors"]
        .as_array()
        .unwrap()
        .iter()
        .find(|rule| rule["name"] == "Strings")
        .unwrap();

    assert_eq!(
        strings["settings"],
        serde_json::json!({
            "foreground": hsl(125.0, 95.0, 35.0).to_hex(),
            "fontStyle": ""
        })
    );
}

#[test]
fn classic_ships_both_formats() {
    let dir = tempfile::tempdir().unwrap();
    let variant = get_builtin_variant("uno-due-tre").unwrap();
    let output = build_variant(&variant, dir.path(), &variant.formats).unwrap();

    assert_eq!(
        output.written,
        vec![
            dir.path().join("uno-due-tre.json"),
            dir.path().join("uno-due-tre.tmTheme")
        ]
    );
    let plist = fs::read_to_string(dir.path().join("uno-due-tre.tmTheme")).unwrap();
    assert!(plist.starts_with("<?xml"));
    assert!(plist.contains("<key>settings</key>"));
}

#[test]
fn failing_enforced_variant_is_not_written() {
    let dir = tempfile::tempdir().unwrap();
    let mut variant = get_builtin_variant("miasma").unwrap();
    variant.colors.statusbar_fg = variant.colors.statusbar_bg;

    let err = build_variant(&variant, dir.path(), &[OutputFormat::Json]).unwrap_err();
    let report = match err {
        BuildError::ContrastFailed { report, .. } => report,
        other => panic!("expected a contrast failure, got {other}"),
    };
    let failing: Vec<_> = report.failures().map(|c| c.pair()).collect();
    assert_eq!(failing, ["statusbar_bg ↔ statusbar_fg"]);
    assert!(!dir.path().join("miasma.json").exists());
}

#[test]
fn failing_unenforced_variant_is_still_written() {
    let dir = tempfile::tempdir().unwrap();
    let mut variant = get_builtin_variant("dark").unwrap();
    variant.colors.statusbar_fg = variant.colors.statusbar_bg;

    let output = build_variant(&variant, dir.path(), &[OutputFormat::Json]).unwrap();
    assert!(!output.report.passed());
    assert!(dir.path().join("dark.json").is_file());
}

#[test]
fn user_variants_extend_and_replace_builtins() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("dusk.toml"),
        "base = \"dark\"\nname = \"Dusk\"\n[hues]\ntre = 40.0\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("light.toml"),
        "base = \"light\"\nname = \"Light (custom)\"\n",
    )
    .unwrap();
    fs::write(dir.path().join("broken.toml"), "base = \"dark\"\n[colors]\nbg = 12\n").unwrap();

    let variants = get_all_variants(Some(dir.path()));
    assert_eq!(variants.len(), builtin_variants().len() + 1);

    let light = variants.iter().find(|v| v.id == "light").unwrap();
    assert_eq!(light.name, "Light (custom)");

    let dusk = get_variant_by_id("dusk", Some(dir.path())).unwrap();
    assert_eq!(dusk.hues.tre, 40.0);
    assert_eq!(dusk.kind, ThemeKind::Dark);
    assert!(get_variant_by_id("broken", Some(dir.path())).is_none());
}
