//! Output encodings of a [`ThemeDocument`].

use plist::{Dictionary, Value};
use serde::{Deserialize, Serialize};

use crate::{DocumentError, ThemeDocument};

/// Workbench keys that feed the global settings block of a TextMate theme,
/// as `(tmTheme key, workbench key)`.
const TM_GLOBALS: &[(&str, &str)] = &[
    ("background", "editor.background"),
    ("foreground", "editor.foreground"),
    ("caret", "editorCursor.foreground"),
    ("selection", "editor.selectionBackground"),
    ("inactiveSelection", "editor.inactiveSelectionBackground"),
    ("lineHighlight", "editor.lineHighlightBackground"),
    ("findHighlight", "editor.findMatchBackground"),
    ("invisibles", "editorWhitespace.foreground"),
    ("guide", "editorIndentGuide.background"),
    ("activeGuide", "editorIndentGuide.activeBackground"),
    ("bracketsForeground", "editorBracketMatch.border"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// VS Code color theme JSON
    Json,
    /// TextMate / Sublime property list
    TmTheme,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::TmTheme => "tmTheme",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::TmTheme => "tm-theme",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "tm-theme" | "tmtheme" | "plist" => Some(OutputFormat::TmTheme),
            _ => None,
        }
    }
}

impl ThemeDocument {
    /// Pretty-printed JSON with two space indentation.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// XML property list in the `.tmTheme` layout: the first element of the
    /// `settings` array holds editor-wide colors, the rest one rule each.
    pub fn to_tm_theme(&self, name: &str) -> Result<String, DocumentError> {
        let mut buf = Vec::new();
        self.to_plist_value(name).to_writer_xml(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    pub fn encode(&self, format: OutputFormat, name: &str) -> Result<String, DocumentError> {
        match format {
            OutputFormat::Json => self.to_json(),
            OutputFormat::TmTheme => self.to_tm_theme(name),
        }
    }

    fn to_plist_value(&self, name: &str) -> Value {
        let mut globals = Dictionary::new();
        for &(tm_key, ui_key) in TM_GLOBALS {
            if let Some(color) = self.colors.get(ui_key) {
                globals.insert(tm_key.to_string(), Value::String(color.to_hex()));
            }
        }

        let mut global_entry = Dictionary::new();
        global_entry.insert("settings".to_string(), Value::Dictionary(globals));

        let mut settings = vec![Value::Dictionary(global_entry)];
        for rule in &self.token_colors {
            let mut style = Dictionary::new();
            if let Some(fg) = rule.settings.foreground {
                style.insert("foreground".to_string(), Value::String(fg.to_hex()));
            }
            if let Some(font_style) = rule.settings.font_style {
                style.insert("fontStyle".to_string(), Value::String(font_style.to_string()));
            }

            let mut entry = Dictionary::new();
            if let Some(ref rule_name) = rule.name {
                entry.insert("name".to_string(), Value::String(rule_name.clone()));
            }
            entry.insert("scope".to_string(), Value::String(rule.scope.to_joined()));
            entry.insert("settings".to_string(), Value::Dictionary(style));
            settings.push(Value::Dictionary(entry));
        }

        let mut root = Dictionary::new();
        root.insert("name".to_string(), Value::String(name.to_string()));
        root.insert("settings".to_string(), Value::Array(settings));
        root.insert(
            "semanticClass".to_string(),
            Value::String(format!(
                "theme.{}.{}",
                self.kind,
                name.to_lowercase().replace(' ', "_")
            )),
        );
        root.insert("colorSpaceName".to_string(), Value::String("sRGB".to_string()));
        Value::Dictionary(root)
    }
}
