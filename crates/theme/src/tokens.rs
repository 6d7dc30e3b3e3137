//! Syntax highlighting rules.
//!
//! Rules are emitted in table order; when scopes overlap the editor lets a
//! later rule win.

use unoduetre_color::Color;
use unoduetre_document::{FontStyle, Scope, TokenRule, TokenSettings};

use crate::palette::Palette;

/// Where a category takes its foreground from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxRole {
    Fg,
    Uno(usize),
    Due(usize),
    Tre(usize),
    Red,
}

impl SyntaxRole {
    pub fn resolve(&self, p: &Palette) -> Color {
        match *self {
            SyntaxRole::Fg => p.fg,
            SyntaxRole::Uno(i) => p.uno[i],
            SyntaxRole::Due(i) => p.due[i],
            SyntaxRole::Tre(i) => p.tre[i],
            SyntaxRole::Red => p.red,
        }
    }
}

/// A named group of scopes sharing one style. Categories without a role
/// only set the font style.
#[derive(Debug, Clone, Copy)]
pub struct TokenCategory {
    pub name: &'static str,
    pub scopes: &'static [&'static str],
    pub role: Option<SyntaxRole>,
    pub style: FontStyle,
}

const fn category(
    name: &'static str,
    role: SyntaxRole,
    style: FontStyle,
    scopes: &'static [&'static str],
) -> TokenCategory {
    TokenCategory {
        name,
        scopes,
        role: Some(role),
        style,
    }
}

const fn style_only(name: &'static str, style: FontStyle, scopes: &'static [&'static str]) -> TokenCategory {
    TokenCategory {
        name,
        scopes,
        role: None,
        style,
    }
}

use FontStyle as F;
use SyntaxRole::{Due, Fg, Red, Tre, Uno};

pub const TOKEN_CATEGORIES: &[TokenCategory] = &[
    category(
        "Default",
        Fg,
        F::NONE,
        &[
            "meta.embedded",
            "source.groovy.embedded",
            "meta.template.expression",
            "meta.interpolation",
        ],
    ),
    category("Parameter", Due(2), F::NONE, &["variable.parameter.function"]),
    category(
        "Comments",
        Uno(4),
        F::NONE,
        &["comment", "punctuation.definition.comment"],
    ),
    category(
        "Punctuation",
        Uno(3),
        F::NONE,
        &[
            "punctuation.definition.string",
            "punctuation.definition.variable",
            "punctuation.definition.parameters",
            "punctuation.definition.array",
            "punctuation.terminator",
        ],
    ),
    category(
        "Delimiters",
        Uno(4),
        F::NONE,
        &[
            "punctuation.separator",
            "punctuation.section",
            "meta.brace",
            "meta.delimiter",
        ],
    ),
    category(
        "Operators",
        Uno(2),
        F::NONE,
        &["keyword.operator", "storage.type.function.arrow"],
    ),
    category(
        "Keywords",
        Uno(0),
        F::BOLD,
        &[
            "keyword.control",
            "keyword.import",
            "keyword.function",
            "keyword.package",
            "keyword.interface",
            "keyword.map",
            "keyword.var",
            "keyword.other",
            "keyword.type",
        ],
    ),
    category(
        "Variables",
        Due(2),
        F::NONE,
        &["variable.declaration", "variable.parameter", "variable.other"],
    ),
    category("Search", Uno(1), F::BOLD, &["entity.name.filename.find-in-files"]),
    category(
        "Search Line",
        Due(0),
        F::BOLD,
        &["constant.numeric.line-number.match.find-in-files"],
    ),
    category(
        "Functions",
        Due(1),
        F::BOLD,
        &[
            "entity.name.function",
            "meta.require",
            "support.function.any-method",
        ],
    ),
    category(
        "Classes",
        Due(1),
        F::BOLD,
        &[
            "support.class",
            "entity.name.class",
            "entity.name.type.class",
            "entity.name.type.module",
            "entity.other.inherited-class",
        ],
    ),
    category("Methods", Due(1), F::NONE, &["keyword.other.special-method"]),
    category("Storage", Uno(0), F::BOLD, &["storage"]),
    category("Support", Uno(1), F::NONE, &["support"]),
    category(
        "Strings",
        Tre(0),
        F::NONE,
        &[
            "string",
            "punctuation.definition.string",
            "support.constant.property-value",
        ],
    ),
    category("Numbers", Due(0), F::NONE, &["constant.numeric"]),
    category("Symbols", Due(0), F::NONE, &["constant.other.symbol"]),
    category("Boolean", Due(0), F::NONE, &["constant.language.boolean"]),
    category(
        "Constants",
        Due(0),
        F::NONE,
        &["constant", "support.constant", "variable.language"],
    ),
    category(
        "Tags",
        Due(0),
        F::NONE,
        &["entity.name.tag", "punctuation.definition.tag"],
    ),
    category("Attributes", Due(0), F::NONE, &["entity.other.attribute-name"]),
    category(
        "Attribute IDs",
        Due(0),
        F::NONE,
        &["entity.other.attribute-name.id", "punctuation.definition.entity"],
    ),
    category(
        "Selector",
        Uno(1),
        F::NONE,
        &["meta.selector", "meta.object-literal.key"],
    ),
    category(
        "Headings",
        Due(0),
        F::BOLD,
        &[
            "markup.heading punctuation.definition.heading",
            "entity.name.section",
        ],
    ),
    category("Units", Due(2), F::NONE, &["keyword.other.unit"]),
    category(
        "Bold",
        Uno(1),
        F::BOLD,
        &["markup.bold", "punctuation.definition.bold"],
    ),
    category(
        "Italic",
        Uno(1),
        F::ITALIC,
        &["markup.italic", "punctuation.definition.italic"],
    ),
    category(
        "Code",
        Uno(2),
        F::NONE,
        &["markup.raw.inline", "markup.inline.raw"],
    ),
    category("Link Text", Uno(3), F::BOLD, &["string.other.link"]),
    category(
        "Link Url",
        Due(0),
        F::NONE,
        &["meta.link", "markup.underline.link"],
    ),
    category("Lists", Due(2), F::NONE, &["markup.list"]),
    category("Quotes", Uno(3), F::NONE, &["markup.quote"]),
    category("Separator", Uno(3), F::NONE, &["meta.separator"]),
    category("Inserted", Due(1), F::NONE, &["markup.inserted"]),
    category("Deleted", Red, F::NONE, &["markup.deleted"]),
    category("Changed", Uno(3), F::NONE, &["markup.changed"]),
    category("Colors", Due(2), F::NONE, &["constant.other.color"]),
    category("Regular Expressions", Uno(2), F::NONE, &["string.regexp"]),
    category("Escape Characters", Uno(2), F::NONE, &["constant.character.escape"]),
    category(
        "Embedded",
        Uno(1),
        F::NONE,
        &["punctuation.section.embedded", "variable.interpolation"],
    ),
    category("Illegal", Red, F::BOLD, &["invalid", "invalid.illegal"]),
    category("Broken", Red, F::BOLD, &["invalid.broken"]),
    category("Deprecated", Red, F::BOLD, &["invalid.deprecated"]),
    category("Unimplemented", Red, F::BOLD, &["invalid.unimplemented"]),
    style_only("Underline", F::UNDERLINE, &["markup.underline"]),
    style_only("Strikethrough", F::STRIKETHROUGH, &["markup.strikethrough"]),
];

/// Token rules for `palette` from the built-in category table.
pub fn token_rules(palette: &Palette) -> Vec<TokenRule> {
    build_rules(TOKEN_CATEGORIES, palette)
}

/// Resolve `categories` against `palette`, dropping any without a scope.
pub fn build_rules(categories: &[TokenCategory], palette: &Palette) -> Vec<TokenRule> {
    categories
        .iter()
        .map(|c| TokenRule {
            name: Some(c.name.to_string()),
            scope: Scope::joined(c.scopes),
            settings: match c.role {
                Some(role) => TokenSettings::styled(role.resolve(palette), c.style),
                None => TokenSettings::style_only(c.style),
            },
        })
        .filter(|rule| !rule.scope.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::get_builtin_variant;
    use crate::palette::build_palette;
    use pretty_assertions::assert_eq;
    use unoduetre_color::hsl;

    fn rule<'a>(rules: &'a [TokenRule], name: &str) -> &'a TokenRule {
        rules
            .iter()
            .find(|r| r.name.as_deref() == Some(name))
            .unwrap()
    }

    #[test]
    fn test_strings_use_first_tre_entry_without_style() {
        let palette = build_palette(&get_builtin_variant("uno-due-tre").unwrap());
        let rules = token_rules(&palette);
        let strings = rule(&rules, "Strings");

        assert_eq!(strings.settings.foreground, Some(hsl(125.0, 95.0, 35.0)));
        assert_eq!(strings.settings.font_style, Some(FontStyle::NONE));
        assert_eq!(
            serde_json::to_value(strings.settings).unwrap()["fontStyle"],
            serde_json::json!("")
        );
    }

    #[test]
    fn test_keywords_are_bold_first_uno_entry() {
        let palette = build_palette(&get_builtin_variant("light").unwrap());
        let rules = token_rules(&palette);
        let keywords = rule(&rules, "Keywords");
        assert_eq!(keywords.settings.foreground, Some(palette.uno[0]));
        assert_eq!(keywords.settings.font_style, Some(FontStyle::BOLD));
        assert!(keywords.scope.to_joined().starts_with("keyword.control, keyword.import"));
    }

    #[test]
    fn test_broken_code_is_bold_red() {
        let palette = build_palette(&get_builtin_variant("dark").unwrap());
        let rules = token_rules(&palette);
        for name in ["Illegal", "Broken", "Deprecated", "Unimplemented"] {
            let r = rule(&rules, name);
            assert_eq!(r.settings.foreground, Some(palette.red));
            assert_eq!(r.settings.font_style, Some(FontStyle::BOLD));
        }
    }

    #[test]
    fn test_style_only_rules_have_no_foreground() {
        let palette = build_palette(&get_builtin_variant("light").unwrap());
        let rules = token_rules(&palette);
        let underline = rule(&rules, "Underline");
        assert_eq!(underline.settings.foreground, None);
        assert_eq!(underline.settings.font_style, Some(FontStyle::UNDERLINE));
    }

    #[test]
    fn test_rules_keep_table_order() {
        let palette = build_palette(&get_builtin_variant("light").unwrap());
        let names: Vec<_> = token_rules(&palette)
            .into_iter()
            .filter_map(|r| r.name)
            .collect();
        let expected: Vec<_> = TOKEN_CATEGORIES.iter().map(|c| c.name.to_string()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_empty_scopes_are_dropped() {
        let palette = build_palette(&get_builtin_variant("light").unwrap());
        let table = [
            category("Kept", Fg, F::NONE, &["source"]),
            category("Dropped", Fg, F::NONE, &[]),
        ];
        let rules = build_rules(&table, &palette);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].name.as_deref(), Some("Kept"));
    }

    #[test]
    fn test_ramp_indices_are_in_range() {
        let palette = build_palette(&get_builtin_variant("ocean").unwrap());
        for c in TOKEN_CATEGORIES {
            if let Some(role) = c.role {
                role.resolve(&palette);
            }
        }
    }
}
