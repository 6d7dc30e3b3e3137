use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use unoduetre_color::Color;

use crate::DocumentError;

/// Base appearance the editor derives its fallback colors from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Light,
    Dark,
}

impl ThemeKind {
    pub fn label(&self) -> &'static str {
        match self {
            ThemeKind::Light => "light",
            ThemeKind::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeKind::Dark)
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Workbench color map keyed by the editor's color identifiers.
///
/// A `None` value marks a key the theme knows about but deliberately leaves
/// to the editor's default. Such keys are kept here so the full key set can
/// be inspected, and are omitted when serialized. Iteration (and therefore
/// output) is sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiColors(BTreeMap<String, Option<Color>>);

impl UiColors {
    /// Build from `(key, value)` pairs, rejecting a key that appears twice.
    pub fn from_entries<K, I>(entries: I) -> Result<Self, DocumentError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Option<Color>)>,
    {
        let mut map = BTreeMap::new();
        for (key, value) in entries {
            let key = key.into();
            if map.contains_key(&key) {
                return Err(DocumentError::DuplicateKey(key));
            }
            map.insert(key, value);
        }
        Ok(Self(map))
    }

    /// Color pinned for `key`, if any.
    pub fn get(&self, key: &str) -> Option<Color> {
        self.0.get(key).copied().flatten()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Pinned entries only, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> {
        self.0
            .iter()
            .filter_map(|(k, v)| v.map(|color| (k.as_str(), color)))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for UiColors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let pinned: Vec<_> = self.iter().collect();
        let mut map = serializer.serialize_map(Some(pinned.len()))?;
        for (key, color) in pinned {
            map.serialize_entry(key, &color)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for UiColors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<String, Color>::deserialize(deserializer)?;
        Ok(Self(map.into_iter().map(|(k, v)| (k, Some(v))).collect()))
    }
}

/// Font style flags of a token rule. Serialized as the space separated
/// list the editor expects; no flags at all is the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FontStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
}

impl FontStyle {
    pub const NONE: FontStyle = FontStyle {
        bold: false,
        italic: false,
        underline: false,
        strikethrough: false,
    };
    pub const BOLD: FontStyle = FontStyle {
        bold: true,
        ..Self::NONE
    };
    pub const ITALIC: FontStyle = FontStyle {
        italic: true,
        ..Self::NONE
    };
    pub const UNDERLINE: FontStyle = FontStyle {
        underline: true,
        ..Self::NONE
    };
    pub const STRIKETHROUGH: FontStyle = FontStyle {
        strikethrough: true,
        ..Self::NONE
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    fn words(&self) -> Vec<&'static str> {
        [
            (self.bold, "bold"),
            (self.italic, "italic"),
            (self.underline, "underline"),
            (self.strikethrough, "strikethrough"),
        ]
        .into_iter()
        .filter_map(|(on, word)| on.then_some(word))
        .collect()
    }

    pub fn parse(s: &str) -> Result<Self, DocumentError> {
        let mut style = Self::NONE;
        for word in s.split_whitespace() {
            match word {
                "bold" => style.bold = true,
                "italic" => style.italic = true,
                "underline" => style.underline = true,
                "strikethrough" => style.strikethrough = true,
                other => return Err(DocumentError::UnknownFontStyle(other.to_string())),
            }
        }
        Ok(style)
    }
}

impl std::ops::BitOr for FontStyle {
    type Output = FontStyle;

    fn bitor(self, rhs: FontStyle) -> FontStyle {
        FontStyle {
            bold: self.bold || rhs.bold,
            italic: self.italic || rhs.italic,
            underline: self.underline || rhs.underline,
            strikethrough: self.strikethrough || rhs.strikethrough,
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words().join(" "))
    }
}

impl Serialize for FontStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for FontStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// One or more scope selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scope {
    One(String),
    Many(Vec<String>),
}

impl Scope {
    /// Join selectors into a single comma separated selector string.
    pub fn joined<S: AsRef<str>>(selectors: &[S]) -> Self {
        let parts: Vec<&str> = selectors.iter().map(AsRef::as_ref).collect();
        Scope::One(parts.join(", "))
    }

    pub fn to_joined(&self) -> String {
        match self {
            Scope::One(s) => s.clone(),
            Scope::Many(v) => v.join(", "),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Scope::One(s) => s.trim().is_empty(),
            Scope::Many(v) => v.iter().all(|s| s.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenSettings {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub foreground: Option<Color>,
    #[serde(rename = "fontStyle", skip_serializing_if = "Option::is_none", default)]
    pub font_style: Option<FontStyle>,
}

impl TokenSettings {
    /// Foreground plus font style; the style is always emitted, even when
    /// empty, so a rule can reset styling inherited from a broader scope.
    pub fn styled(foreground: Color, font_style: FontStyle) -> Self {
        Self {
            foreground: Some(foreground),
            font_style: Some(font_style),
        }
    }

    /// Font style only, keeping whatever foreground applies already.
    pub fn style_only(font_style: FontStyle) -> Self {
        Self {
            foreground: None,
            font_style: Some(font_style),
        }
    }
}

/// Syntax highlighting rule: selector(s) and the style they receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRule {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    pub scope: Scope,
    pub settings: TokenSettings,
}

/// A complete editor color theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDocument {
    /// Base theme (light or dark)
    #[serde(rename = "type")]
    pub kind: ThemeKind,
    /// Workbench colors
    pub colors: UiColors,
    /// Syntax highlighting rules
    #[serde(rename = "tokenColors")]
    pub token_colors: Vec<TokenRule>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn c(hex: &str) -> Color {
        Color::from_hex(hex).unwrap()
    }

    #[test]
    fn test_ui_colors_rejects_duplicate_keys() {
        let result = UiColors::from_entries([
            ("panel.border", Some(c("#cccccc"))),
            ("panel.background", Some(c("#ffffff"))),
            ("panel.border", Some(c("#dddddd"))),
        ]);
        assert!(matches!(result, Err(DocumentError::DuplicateKey(k)) if k == "panel.border"));
    }

    #[test]
    fn test_ui_colors_omits_unset_keys_when_serialized() {
        let colors = UiColors::from_entries([
            ("notifications.border", None),
            ("focusBorder", Some(c("#1f8a2b"))),
            ("badge.background", Some(c("#0000004d"))),
        ])
        .unwrap();

        assert!(colors.contains_key("notifications.border"));
        assert_eq!(colors.get("notifications.border"), None);
        assert_eq!(colors.len(), 3);

        let json = serde_json::to_string(&colors).unwrap();
        assert_eq!(
            json,
            r##"{"badge.background":"#0000004d","focusBorder":"#1f8a2b"}"##
        );
    }

    #[test]
    fn test_font_style_strings() {
        assert_eq!(FontStyle::NONE.to_string(), "");
        assert_eq!(FontStyle::BOLD.to_string(), "bold");
        assert_eq!((FontStyle::BOLD | FontStyle::ITALIC).to_string(), "bold italic");
        assert_eq!(FontStyle::parse("italic  underline").unwrap(), FontStyle::ITALIC | FontStyle::UNDERLINE);
        assert!(matches!(
            FontStyle::parse("bold wavy"),
            Err(DocumentError::UnknownFontStyle(w)) if w == "wavy"
        ));
    }

    #[test]
    fn test_scope_joining() {
        let scope = Scope::joined(&["comment", "punctuation.definition.comment"]);
        assert_eq!(scope, Scope::One("comment, punctuation.definition.comment".into()));
        assert!(Scope::joined::<&str>(&[]).is_empty());
        assert_eq!(
            Scope::Many(vec!["a".into(), "b".into()]).to_joined(),
            "a, b"
        );
    }

    #[test]
    fn test_token_settings_serialization() {
        let styled = TokenSettings::styled(c("#04ae13"), FontStyle::NONE);
        assert_eq!(
            serde_json::to_value(styled).unwrap(),
            serde_json::json!({"foreground": "#04ae13", "fontStyle": ""})
        );

        let only = TokenSettings::style_only(FontStyle::ITALIC);
        assert_eq!(
            serde_json::to_value(only).unwrap(),
            serde_json::json!({"fontStyle": "italic"})
        );
    }
}
