use pretty_assertions::assert_eq;
use unoduetre_color::Color;
use unoduetre_document::*;

fn c(hex: &str) -> Color {
    Color::from_hex(hex).unwrap()
}

fn sample_document() -> ThemeDocument {
    ThemeDocument {
        kind: ThemeKind::Light,
        colors: UiColors::from_entries([
            ("editor.background", Some(c("#ffffff"))),
            ("editor.foreground", Some(c("#3d2937"))),
            ("editorCursor.foreground", Some(c("#cc0000"))),
            ("editor.selectionBackground", Some(c("#f1c40f4d"))),
            ("editor.findMatchBorder", None),
            ("widget.shadow", Some(c("#0000004d"))),
        ])
        .unwrap(),
        token_colors: vec![
            TokenRule {
                name: Some("Comments".into()),
                scope: Scope::joined(&["comment", "punctuation.definition.comment"]),
                settings: TokenSettings::styled(c("#b8a3b2"), FontStyle::NONE),
            },
            TokenRule {
                name: Some("Keywords".into()),
                scope: Scope::joined(&["keyword.control"]),
                settings: TokenSettings::styled(c("#ab0880"), FontStyle::BOLD),
            },
            TokenRule {
                name: None,
                scope: Scope::One("emphasis".into()),
                settings: TokenSettings::style_only(FontStyle::ITALIC),
            },
        ],
    }
}

#[test]
fn json_has_editor_theme_shape() {
    let json = sample_document().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let expected = serde_json::json!({
        "type": "light",
        "colors": {
            "editor.background": "#ffffff",
            "editor.foreground": "#3d2937",
            "editor.selectionBackground": "#f1c40f4d",
            "editorCursor.foreground": "#cc0000",
            "widget.shadow": "#0000004d"
        },
        "tokenColors": [
            {
                "name": "Comments",
                "scope": "comment, punctuation.definition.comment",
                "settings": { "foreground": "#b8a3b2", "fontStyle": "" }
            },
            {
                "name": "Keywords",
                "scope": "keyword.control",
                "settings": { "foreground": "#ab0880", "fontStyle": "bold" }
            },
            {
                "scope": "emphasis",
                "settings": { "fontStyle": "italic" }
            }
        ]
    });
    assert_eq!(value, expected);
}

#[test]
fn json_is_pretty_printed_with_sorted_color_keys() {
    let json = sample_document().to_json().unwrap();
    assert!(json.starts_with("{\n  \"type\": \"light\",\n  \"colors\": {\n"));

    let positions: Vec<usize> = [
        "\"editor.background\"",
        "\"editor.foreground\"",
        "\"editor.selectionBackground\"",
        "\"editorCursor.foreground\"",
        "\"widget.shadow\"",
    ]
    .iter()
    .map(|k| json.find(k).unwrap())
    .collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
    assert!(!json.contains("findMatchBorder"));
}

#[test]
fn json_round_trips_through_serde() {
    let doc = sample_document();
    let parsed: ThemeDocument = serde_json::from_str(&doc.to_json().unwrap()).unwrap();

    assert_eq!(parsed.kind, doc.kind);
    assert_eq!(parsed.token_colors, doc.token_colors);
    assert_eq!(parsed.colors.get("widget.shadow"), Some(c("#0000004d")));
    assert!(!parsed.colors.contains_key("editor.findMatchBorder"));
}

#[test]
fn tm_theme_has_global_settings_first() {
    let xml = sample_document().to_tm_theme("Uno Due Tre").unwrap();
    assert!(xml.contains("<plist"));

    let value: plist::Value = plist::from_bytes(xml.as_bytes()).unwrap();
    let root = value.as_dictionary().unwrap();
    assert_eq!(root.get("name").unwrap().as_string(), Some("Uno Due Tre"));
    assert_eq!(
        root.get("semanticClass").unwrap().as_string(),
        Some("theme.light.uno_due_tre")
    );

    let settings = root.get("settings").unwrap().as_array().unwrap();
    assert_eq!(settings.len(), 4);

    let globals = settings[0]
        .as_dictionary()
        .unwrap()
        .get("settings")
        .unwrap()
        .as_dictionary()
        .unwrap();
    assert_eq!(globals.get("background").unwrap().as_string(), Some("#ffffff"));
    assert_eq!(globals.get("foreground").unwrap().as_string(), Some("#3d2937"));
    assert_eq!(globals.get("caret").unwrap().as_string(), Some("#cc0000"));
    assert_eq!(globals.get("selection").unwrap().as_string(), Some("#f1c40f4d"));
    assert!(globals.get("lineHighlight").is_none());
}

#[test]
fn tm_theme_rules_mirror_token_colors() {
    let xml = sample_document().to_tm_theme("Uno Due Tre").unwrap();
    let value: plist::Value = plist::from_bytes(xml.as_bytes()).unwrap();
    let settings = value
        .as_dictionary()
        .unwrap()
        .get("settings")
        .unwrap()
        .as_array()
        .unwrap();

    let comments = settings[1].as_dictionary().unwrap();
    assert_eq!(comments.get("name").unwrap().as_string(), Some("Comments"));
    assert_eq!(
        comments.get("scope").unwrap().as_string(),
        Some("comment, punctuation.definition.comment")
    );
    let style = comments.get("settings").unwrap().as_dictionary().unwrap();
    assert_eq!(style.get("foreground").unwrap().as_string(), Some("#b8a3b2"));
    assert_eq!(style.get("fontStyle").unwrap().as_string(), Some(""));

    let emphasis = settings[3].as_dictionary().unwrap();
    assert!(emphasis.get("name").is_none());
    let style = emphasis.get("settings").unwrap().as_dictionary().unwrap();
    assert!(style.get("foreground").is_none());
    assert_eq!(style.get("fontStyle").unwrap().as_string(), Some("italic"));
}

#[test]
fn output_format_parsing() {
    assert_eq!(OutputFormat::from_str("json"), Some(OutputFormat::Json));
    assert_eq!(OutputFormat::from_str("tm-theme"), Some(OutputFormat::TmTheme));
    assert_eq!(OutputFormat::from_str("PLIST"), Some(OutputFormat::TmTheme));
    assert_eq!(OutputFormat::from_str("yaml"), None);
    assert_eq!(OutputFormat::TmTheme.extension(), "tmTheme");
}
