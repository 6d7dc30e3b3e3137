//! Palette derivation: literal variant colors in, contrast-corrected named
//! colors out.

use unoduetre_color::{fix_contrast, hsl, mix, Color, ContrastLevel, Hsla};
use unoduetre_document::ThemeKind;

use crate::variant::{ramp, AnsiColors, AnsiSource, BorderSource, Variant, RAMP_LEN};

/// Share of the tint mixed into each anchor of a tinted ANSI set.
const ANSI_TINT_PERCENT: f64 = 20.0;

/// Every named color the schema mapper reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub kind: ThemeKind,

    pub fg: Color,
    pub bg: Color,
    pub t_fg: Color,
    pub accent0: Color,
    pub accent1: Color,

    pub yellow: Color,
    pub orange: Color,
    pub blue: Color,
    pub purple: Color,
    pub red: Color,
    pub cyan: Color,

    pub input_bg: Color,
    pub titlebar_bg: Color,
    pub sidebar_bg: Color,
    pub activity_bar_bg: Color,
    pub statusbar_bg: Color,
    pub statusbar_fg: Color,
    pub widget_bg: Color,
    pub widget_border: Color,

    pub active_selection_bg: Color,
    /// Text drawn on `active_selection_bg`.
    pub active_selection_fg: Color,
    pub inactive_selection_bg: Color,
    pub text_selection_bg: Color,
    pub accent_focus_bg: Color,
    pub line_highlight_bg: Color,

    pub bracket_match_bg: Color,
    pub bracket_match_border: Color,
    pub ruler: Color,

    pub ansi: AnsiColors,

    pub border0: Color,
    pub border1: Color,
    pub border_status: Color,
    pub shadow0: Color,
    pub shadow1: Color,

    pub uno: [Color; RAMP_LEN],
    pub due: [Color; RAMP_LEN],
    pub tre: [Color; RAMP_LEN],
    pub brackets: [Color; 3],
}

/// Derive the full palette of `variant`. Pure: the same variant always
/// yields the same palette.
pub fn build_palette(variant: &Variant) -> Palette {
    let base = &variant.colors;
    let bg = base.bg;
    let text = variant.min_ratio(ContrastLevel::Text);
    let ui = variant.min_ratio(ContrastLevel::Ui);
    let decoration = variant.min_ratio(ContrastLevel::Decoration);

    let ui_accent = |color: Color| fix_contrast(color, bg, ui);

    let (border0, border1) = match variant.borders {
        BorderSource::Derived => (fix_contrast(bg, bg, decoration), fix_contrast(bg, bg, ui)),
        BorderSource::Literal { border0, border1 } => (border0, border1),
    };

    let hues = variant.hues;
    let raw_uno = ramp(hues.uno, &variant.ramps.uno);
    let raw_due = ramp(hues.due, &variant.ramps.due);
    let raw_tre = ramp(hues.tre, &variant.ramps.tre);
    let syntax = |raw: [Color; RAMP_LEN]| match variant.syntax_contrast {
        Some(level) => {
            let ratio = variant.min_ratio(level);
            raw.map(|c| fix_contrast(c, bg, ratio))
        }
        None => raw,
    };

    Palette {
        kind: variant.kind,

        fg: base.fg,
        bg,
        t_fg: fix_contrast(base.t_fg.unwrap_or(bg), bg, text),
        accent0: base.accent0,
        accent1: base.accent1,

        yellow: ui_accent(base.yellow),
        orange: ui_accent(base.orange),
        blue: ui_accent(base.blue),
        purple: ui_accent(base.purple),
        red: ui_accent(base.red),
        cyan: ui_accent(base.cyan),

        input_bg: base.input_bg,
        titlebar_bg: base.titlebar_bg,
        sidebar_bg: base.sidebar_bg,
        activity_bar_bg: base.activity_bar_bg,
        statusbar_bg: base.statusbar_bg,
        statusbar_fg: base.statusbar_fg,
        widget_bg: base.widget_bg,
        widget_border: base.widget_border,

        active_selection_bg: base.active_selection_bg,
        active_selection_fg: fix_contrast(bg, base.active_selection_bg, text),
        inactive_selection_bg: base.inactive_selection_bg,
        text_selection_bg: base.text_selection_bg,
        accent_focus_bg: base.accent_focus_bg,
        line_highlight_bg: base.line_highlight_bg,

        bracket_match_bg: base.bracket_match_bg,
        bracket_match_border: base.bracket_match_border,
        ruler: base.ruler,

        ansi: ansi_colors(variant.kind, variant.ansi, bg, text),

        border0,
        border1,
        border_status: fix_contrast(bg, base.statusbar_bg, decoration),
        shadow0: shadow0(bg),
        shadow1: shadow1(bg),

        uno: syntax(raw_uno),
        due: syntax(raw_due),
        tre: syntax(raw_tre),
        brackets: [raw_uno[1], raw_due[1], raw_tre[1]].map(|c| fix_contrast(c, bg, text)),
    }
}

fn ansi_colors(kind: ThemeKind, source: AnsiSource, bg: Color, min_ratio: f64) -> AnsiColors {
    let fix = |c: Color| fix_contrast(c, bg, min_ratio);
    match source {
        AnsiSource::Tinted { tint } => {
            let tinted = |h: f64, s: f64, l: f64| fix(mix(hsl(h, s, l), tint, ANSI_TINT_PERCENT));
            match kind {
                ThemeKind::Light => AnsiColors {
                    black: tinted(0.0, 0.0, 0.0),
                    red: tinted(0.0, 75.0, 45.0),
                    green: tinted(135.0, 60.0, 40.0),
                    yellow: tinted(30.0, 75.0, 55.0),
                    blue: tinted(250.0, 75.0, 55.0),
                    magenta: tinted(310.0, 70.0, 50.0),
                    cyan: tinted(180.0, 75.0, 40.0),
                    white: hsl(0.0, 0.0, 90.0),
                },
                ThemeKind::Dark => AnsiColors {
                    black: hsl(0.0, 0.0, 20.0),
                    red: tinted(0.0, 75.0, 65.0),
                    green: tinted(135.0, 65.0, 65.0),
                    yellow: tinted(30.0, 75.0, 75.0),
                    blue: tinted(250.0, 75.0, 75.0),
                    magenta: tinted(310.0, 75.0, 75.0),
                    cyan: tinted(180.0, 75.0, 65.0),
                    white: tinted(0.0, 0.0, 95.0),
                },
            }
        }
        AnsiSource::Literal(colors) => {
            let (black, white) = match kind {
                ThemeKind::Light => (fix(colors.black), colors.white),
                ThemeKind::Dark => (colors.black, fix(colors.white)),
            };
            AnsiColors {
                black,
                red: fix(colors.red),
                green: fix(colors.green),
                yellow: fix(colors.yellow),
                blue: fix(colors.blue),
                magenta: fix(colors.magenta),
                cyan: fix(colors.cyan),
                white,
            }
        }
    }
}

/// Toolbar and scrollbar shadow: the background, darker and mostly opaque.
fn shadow0(bg: Color) -> Color {
    let hsl = bg.to_hsl();
    let drop = if bg.is_dark() { 50.0 } else { 30.0 };
    Hsla {
        l: hsl.l - drop,
        a: 0.8,
        ..hsl
    }
    .to_color()
}

/// Widget drop shadow.
fn shadow1(bg: Color) -> Color {
    let hsl = bg.to_hsl();
    Hsla {
        l: hsl.l - 50.0,
        a: 0.6,
        ..hsl
    }
    .to_color()
}
