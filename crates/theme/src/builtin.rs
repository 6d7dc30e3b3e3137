use unoduetre_color::{dilute, gray, hsl, hsla, Color, ContrastLevel, ContrastTable};
use unoduetre_document::{OutputFormat, ThemeKind};

use crate::variant::{
    AnsiColors, AnsiSource, BaseColors, BorderSource, HueSet, RampStep, Ramps, Variant, RAMP_LEN,
};

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::new(r, g, b)
}

const WHITE: Color = Color::WHITE;
const BLACK: Color = Color::BLACK;
const TRANSPARENT: Color = Color::TRANSPARENT;

/// Accents shared by the light variants.
struct Accents {
    yellow: Color,
    orange: Color,
    blue: Color,
    purple: Color,
    red: Color,
    cyan: Color,
}

const LIGHT_ACCENTS: Accents = Accents {
    yellow: rgb(0xf1, 0xc4, 0x0f),
    orange: rgb(0xe6, 0x7e, 0x22),
    blue: rgb(0x34, 0x98, 0xdb),
    purple: rgb(0x9b, 0x59, 0xb6),
    red: rgb(0xcc, 0x00, 0x00),
    cyan: rgb(0x00, 0xbc, 0xd4),
};

const DARK_ACCENTS: Accents = Accents {
    yellow: rgb(0xfc, 0xd4, 0x35),
    orange: rgb(0xf7, 0x9e, 0x51),
    blue: rgb(0x8c, 0xd1, 0xff),
    purple: rgb(0xe1, 0xa2, 0xf9),
    red: rgb(0xff, 0x66, 0x66),
    cyan: rgb(0x5b, 0xf1, 0xff),
};

/// Terminal colors of the older light and dark variants.
const CLASSIC_ANSI: AnsiColors = AnsiColors {
    black: rgb(0x31, 0x36, 0x4a),
    red: rgb(0xa9, 0x1b, 0x1c),
    green: rgb(0x00, 0xa3, 0x37),
    yellow: rgb(0xcc, 0x84, 0x10),
    blue: rgb(0x39, 0xb8, 0x98),
    magenta: rgb(0xd9, 0x52, 0x78),
    cyan: rgb(0x7f, 0x96, 0x08),
    white: rgb(0xe6, 0xe6, 0xe6),
};

const VIVID_RAMP: [RampStep; RAMP_LEN] = [
    RampStep::new(0.0, 95.0, 35.0),
    RampStep::new(0.0, 75.0, 45.0),
    RampStep::new(0.0, 55.0, 55.0),
    RampStep::new(0.0, 35.0, 65.0),
    RampStep::new(0.0, 25.0, 70.0),
];

const DRIFTING_RAMP: [RampStep; RAMP_LEN] = [
    RampStep::new(0.0, 80.0, 65.0),
    RampStep::new(4.0, 70.0, 60.0),
    RampStep::new(12.0, 40.0, 50.0),
    RampStep::new(16.0, 30.0, 45.0),
    RampStep::new(20.0, 25.0, 42.0),
];

/// Gray ramp tinted toward `hue`.
fn tinted_gray(hue: f64, saturation: f64) -> impl Fn(f64) -> Color {
    move |l| hsl(hue, saturation, l)
}

fn dark_tinted_base(hues: HueSet, bg_hue: f64, accent1_hue: f64, selection_hue: f64) -> BaseColors {
    let gray = tinted_gray(bg_hue, 40.0);
    BaseColors {
        fg: hsl(bg_hue, 80.0, 90.0),
        bg: gray(18.0),
        accent0: hsl(hues.due, 70.0, 40.0),
        accent1: hsl(accent1_hue, 100.0, 60.0),
        yellow: DARK_ACCENTS.yellow,
        orange: DARK_ACCENTS.orange,
        blue: DARK_ACCENTS.blue,
        purple: DARK_ACCENTS.purple,
        red: DARK_ACCENTS.red,
        cyan: DARK_ACCENTS.cyan,
        t_fg: Some(hsl(bg_hue, 90.0, 90.0)),
        input_bg: gray(14.0),
        titlebar_bg: gray(12.0),
        sidebar_bg: gray(15.0),
        activity_bar_bg: gray(14.0),
        statusbar_bg: gray(12.0),
        statusbar_fg: gray(96.0),
        widget_bg: gray(25.0),
        widget_border: gray(60.0),
        active_selection_bg: hsla(selection_hue, 50.0, 50.0, 60.0),
        inactive_selection_bg: hsla(selection_hue, 50.0, 50.0, 30.0),
        text_selection_bg: hsla(selection_hue, 50.0, 50.0, 30.0),
        accent_focus_bg: hsl(selection_hue, 35.0, 35.0),
        line_highlight_bg: gray(15.0),
        bracket_match_bg: hsla(hues.tre, 100.0, 60.0, 20.0),
        bracket_match_border: hsla(hues.tre, 100.0, 60.0, 80.0),
        ruler: hsla(bg_hue, 60.0, 70.0, 10.0),
    }
}

fn light_tinted_base(hues: HueSet, bg_hue: f64, accent1: Color) -> BaseColors {
    let gray = tinted_gray(bg_hue, 30.0);
    BaseColors {
        fg: hsl(bg_hue, 80.0, 25.0),
        bg: gray(94.0),
        accent0: hsl(hues.tre, 70.0, 40.0),
        accent1,
        yellow: LIGHT_ACCENTS.yellow,
        orange: LIGHT_ACCENTS.orange,
        blue: LIGHT_ACCENTS.blue,
        purple: LIGHT_ACCENTS.purple,
        red: LIGHT_ACCENTS.red,
        cyan: LIGHT_ACCENTS.cyan,
        t_fg: Some(hsl(bg_hue, 80.0, 25.0)),
        input_bg: gray(98.0),
        titlebar_bg: gray(88.0),
        sidebar_bg: gray(92.0),
        activity_bar_bg: gray(90.0),
        statusbar_bg: gray(20.0),
        statusbar_fg: gray(96.0),
        widget_bg: gray(98.0),
        widget_border: gray(50.0),
        active_selection_bg: hsl(hues.tre, 50.0, 50.0),
        inactive_selection_bg: hsl(hues.tre, 40.0, 80.0),
        text_selection_bg: hsla(hues.tre, 50.0, 50.0, 30.0),
        accent_focus_bg: hsl(hues.tre, 50.0, 80.0),
        line_highlight_bg: gray(92.0),
        bracket_match_bg: dilute(LIGHT_ACCENTS.cyan, 35.0),
        bracket_match_border: TRANSPARENT,
        ruler: hsla(bg_hue, 60.0, 30.0, 10.0),
    }
}

/// The classic light theme, kept as the reference output and the only
/// variant that also ships as a TextMate theme.
fn classic() -> Variant {
    let hues = HueSet::new(320.0, 215.0, 125.0);
    let yellow = LIGHT_ACCENTS.yellow;
    Variant {
        id: "uno-due-tre".into(),
        name: "Uno Due Tre".into(),
        kind: ThemeKind::Light,
        hues,
        ramps: Ramps::uniform(VIVID_RAMP),
        syntax_contrast: None,
        colors: BaseColors {
            fg: hsl(hues.uno, 20.0, 20.0),
            bg: WHITE,
            accent0: hsl(hues.tre, 70.0, 40.0),
            accent1: LIGHT_ACCENTS.red,
            yellow,
            orange: LIGHT_ACCENTS.orange,
            blue: LIGHT_ACCENTS.blue,
            purple: LIGHT_ACCENTS.purple,
            red: LIGHT_ACCENTS.red,
            cyan: LIGHT_ACCENTS.cyan,
            t_fg: Some(rgb(0x5c, 0x66, 0x8e)),
            input_bg: WHITE,
            titlebar_bg: gray(86.0),
            sidebar_bg: gray(95.0),
            activity_bar_bg: gray(92.0),
            statusbar_bg: gray(20.0),
            statusbar_fg: WHITE,
            widget_bg: gray(98.0),
            widget_border: gray(80.0),
            active_selection_bg: hsl(hues.tre, 50.0, 50.0),
            inactive_selection_bg: hsl(hues.tre, 40.0, 80.0),
            text_selection_bg: dilute(yellow, 30.0),
            accent_focus_bg: hsl(hues.tre, 50.0, 80.0),
            line_highlight_bg: dilute(yellow, 10.0),
            bracket_match_bg: dilute(LIGHT_ACCENTS.cyan, 20.0),
            bracket_match_border: TRANSPARENT,
            ruler: dilute(BLACK, 10.0),
        },
        ansi: AnsiSource::Literal(AnsiColors {
            black: rgb(0x5c, 0x66, 0x8e),
            white: rgb(0xfa, 0xfa, 0xfa),
            ..CLASSIC_ANSI
        }),
        borders: BorderSource::Literal {
            border0: gray(85.0),
            border1: gray(80.0),
        },
        contrast: ContrastTable::default(),
        enforce_contrast: false,
        formats: vec![OutputFormat::Json, OutputFormat::TmTheme],
    }
}

fn light() -> Variant {
    let hues = HueSet::new(320.0, 215.0, 125.0);
    let yellow = LIGHT_ACCENTS.yellow;
    Variant {
        id: "light".into(),
        name: "Uno Due Tre Light".into(),
        kind: ThemeKind::Light,
        hues,
        ramps: Ramps::uniform(VIVID_RAMP),
        syntax_contrast: Some(ContrastLevel::Text),
        colors: BaseColors {
            fg: hsl(hues.uno, 20.0, 20.0),
            bg: gray(98.0),
            accent0: hsl(hues.tre, 70.0, 40.0),
            accent1: LIGHT_ACCENTS.red,
            yellow,
            orange: LIGHT_ACCENTS.orange,
            blue: LIGHT_ACCENTS.blue,
            purple: LIGHT_ACCENTS.purple,
            red: LIGHT_ACCENTS.red,
            cyan: LIGHT_ACCENTS.cyan,
            t_fg: Some(rgb(0x5c, 0x66, 0x8e)),
            input_bg: WHITE,
            titlebar_bg: gray(92.0),
            sidebar_bg: gray(96.0),
            activity_bar_bg: gray(94.0),
            statusbar_bg: gray(25.0),
            statusbar_fg: gray(96.0),
            widget_bg: WHITE,
            widget_border: dilute(BLACK, 15.0),
            active_selection_bg: hsl(hues.tre, 50.0, 50.0),
            inactive_selection_bg: hsl(hues.tre, 40.0, 80.0),
            text_selection_bg: dilute(yellow, 30.0),
            accent_focus_bg: hsl(hues.tre, 50.0, 80.0),
            line_highlight_bg: dilute(yellow, 10.0),
            bracket_match_bg: dilute(LIGHT_ACCENTS.cyan, 35.0),
            bracket_match_border: TRANSPARENT,
            ruler: dilute(BLACK, 10.0),
        },
        ansi: AnsiSource::Literal(CLASSIC_ANSI),
        borders: BorderSource::Derived,
        contrast: ContrastTable::default(),
        enforce_contrast: false,
        formats: vec![OutputFormat::Json],
    }
}

fn dark() -> Variant {
    let hues = HueSet::new(70.0, 30.0, 160.0);
    let steps = [0.0, 5.0, 10.0, 15.0, 20.0].map(|shift| RampStep::new(shift, 100.0, 75.0));
    Variant {
        id: "dark".into(),
        name: "Uno Due Tre Dark".into(),
        kind: ThemeKind::Dark,
        hues,
        ramps: Ramps::uniform(steps),
        syntax_contrast: Some(ContrastLevel::Text),
        colors: BaseColors {
            fg: WHITE,
            bg: gray(25.0),
            accent0: hsl(hues.tre, 70.0, 40.0),
            accent1: rgb(0xff, 0x88, 0x88),
            yellow: LIGHT_ACCENTS.yellow,
            orange: LIGHT_ACCENTS.orange,
            blue: LIGHT_ACCENTS.blue,
            purple: LIGHT_ACCENTS.purple,
            red: rgb(0xff, 0x88, 0x88),
            cyan: LIGHT_ACCENTS.cyan,
            t_fg: Some(hsl(hues.uno, 40.0, 90.0)),
            input_bg: gray(20.0),
            titlebar_bg: gray(20.0),
            sidebar_bg: gray(22.0),
            activity_bar_bg: gray(20.0),
            statusbar_bg: gray(15.0),
            statusbar_fg: gray(90.0),
            widget_bg: gray(30.0),
            widget_border: gray(50.0),
            active_selection_bg: hsl(hues.tre, 40.0, 50.0),
            inactive_selection_bg: hsl(hues.tre, 20.0, 40.0),
            text_selection_bg: hsla(hues.tre, 40.0, 50.0, 40.0),
            accent_focus_bg: hsl(hues.tre, 40.0, 50.0),
            line_highlight_bg: dilute(WHITE, 7.0),
            bracket_match_bg: dilute(LIGHT_ACCENTS.cyan, 35.0),
            bracket_match_border: TRANSPARENT,
            ruler: dilute(WHITE, 10.0),
        },
        ansi: AnsiSource::Literal(CLASSIC_ANSI),
        borders: BorderSource::Derived,
        contrast: ContrastTable::default(),
        enforce_contrast: false,
        formats: vec![OutputFormat::Json],
    }
}

fn nature() -> Variant {
    let hues = HueSet::new(287.0, 327.0, 179.0);
    let bg_hue = 80.0;
    let gray = tinted_gray(bg_hue, 30.0);
    let yellow = LIGHT_ACCENTS.yellow;
    Variant {
        id: "nature".into(),
        name: "Uno Due Tre Nature".into(),
        kind: ThemeKind::Light,
        hues,
        ramps: Ramps::uniform(VIVID_RAMP),
        syntax_contrast: Some(ContrastLevel::Text),
        colors: BaseColors {
            fg: hsl(bg_hue, 70.0, 20.0),
            bg: gray(94.0),
            accent0: hsl(hues.tre, 70.0, 40.0),
            accent1: LIGHT_ACCENTS.red,
            yellow,
            orange: LIGHT_ACCENTS.orange,
            blue: LIGHT_ACCENTS.blue,
            purple: LIGHT_ACCENTS.purple,
            red: LIGHT_ACCENTS.red,
            cyan: LIGHT_ACCENTS.cyan,
            t_fg: Some(hsl(hues.uno, 80.0, 30.0)),
            input_bg: gray(98.0),
            titlebar_bg: gray(88.0),
            sidebar_bg: gray(92.0),
            activity_bar_bg: gray(90.0),
            statusbar_bg: gray(96.0),
            statusbar_fg: gray(40.0),
            widget_bg: gray(98.0),
            widget_border: dilute(BLACK, 15.0),
            active_selection_bg: hsl(hues.tre, 50.0, 50.0),
            inactive_selection_bg: hsl(hues.tre, 40.0, 80.0),
            text_selection_bg: hsla(hues.tre, 50.0, 50.0, 30.0),
            accent_focus_bg: hsl(hues.tre, 50.0, 80.0),
            line_highlight_bg: dilute(yellow, 10.0),
            bracket_match_bg: dilute(LIGHT_ACCENTS.cyan, 35.0),
            bracket_match_border: TRANSPARENT,
            ruler: hsla(bg_hue, 60.0, 30.0, 10.0),
        },
        ansi: AnsiSource::Literal(AnsiColors {
            white: gray(96.0),
            ..CLASSIC_ANSI
        }),
        borders: BorderSource::Derived,
        contrast: ContrastTable::default(),
        enforce_contrast: false,
        formats: vec![OutputFormat::Json],
    }
}

fn midnight() -> Variant {
    let hues = HueSet::new(140.0, 190.0, 330.0);
    let bg_hue = 260.0;
    let gray = tinted_gray(bg_hue, 40.0);
    Variant {
        id: "midnight".into(),
        name: "Uno Due Tre Midnight".into(),
        kind: ThemeKind::Dark,
        hues,
        ramps: Ramps::uniform(DRIFTING_RAMP),
        syntax_contrast: Some(ContrastLevel::Text),
        colors: BaseColors {
            bg: gray(20.0),
            sidebar_bg: gray(16.0),
            line_highlight_bg: gray(16.0),
            ..dark_tinted_base(hues, bg_hue, 40.0, hues.due)
        },
        ansi: AnsiSource::Tinted {
            tint: hsl(bg_hue, 80.0, 50.0),
        },
        borders: BorderSource::Derived,
        contrast: ContrastTable::default(),
        enforce_contrast: false,
        formats: vec![OutputFormat::Json],
    }
}

fn ocean() -> Variant {
    let hues = HueSet::new(160.0, 200.0, 30.0);
    let bg_hue = 220.0;
    let gray = tinted_gray(bg_hue, 40.0);
    Variant {
        id: "ocean".into(),
        name: "Uno Due Tre Ocean".into(),
        kind: ThemeKind::Dark,
        hues,
        ramps: Ramps::uniform(DRIFTING_RAMP),
        syntax_contrast: Some(ContrastLevel::Text),
        colors: dark_tinted_base(hues, bg_hue, 40.0, hues.due),
        ansi: AnsiSource::Tinted {
            tint: hsl(bg_hue, 80.0, 50.0),
        },
        borders: BorderSource::Literal {
            border0: gray(30.0),
            border1: gray(38.0),
        },
        contrast: ContrastTable::default(),
        enforce_contrast: false,
        formats: vec![OutputFormat::Json],
    }
}

fn sprinkles() -> Variant {
    let hues = HueSet::new(320.0, 45.0, 170.0);
    let bg_hue = 280.0;
    let gray = tinted_gray(bg_hue, 35.0);
    Variant {
        id: "sprinkles".into(),
        name: "Uno Due Tre Sprinkles".into(),
        kind: ThemeKind::Dark,
        hues,
        ramps: Ramps::uniform([
            RampStep::new(0.0, 80.0, 75.0),
            RampStep::new(0.0, 60.0, 70.0),
            RampStep::new(0.0, 50.0, 60.0),
            RampStep::new(0.0, 40.0, 55.0),
            RampStep::new(0.0, 30.0, 50.0),
        ]),
        syntax_contrast: Some(ContrastLevel::Text),
        colors: BaseColors {
            accent0: hsl(hues.tre, 70.0, 40.0),
            bg: gray(18.0),
            input_bg: gray(14.0),
            titlebar_bg: gray(12.0),
            sidebar_bg: gray(15.0),
            activity_bar_bg: gray(14.0),
            statusbar_bg: gray(12.0),
            widget_bg: gray(25.0),
            line_highlight_bg: gray(15.0),
            ..dark_tinted_base(hues, bg_hue, 170.0, hues.tre)
        },
        ansi: AnsiSource::Tinted {
            tint: hsl(bg_hue, 80.0, 50.0),
        },
        borders: BorderSource::Literal {
            border0: gray(22.0),
            border1: gray(32.0),
        },
        contrast: ContrastTable::default(),
        enforce_contrast: false,
        formats: vec![OutputFormat::Json],
    }
}

fn bubblegum() -> Variant {
    let hues = HueSet::new(290.0, 330.0, 180.0);
    let bg_hue = 300.0;
    Variant {
        id: "bubblegum".into(),
        name: "Uno Due Tre Bubble Gum".into(),
        kind: ThemeKind::Light,
        hues,
        ramps: Ramps::uniform([
            RampStep::new(0.0, 95.0, 35.0),
            RampStep::new(0.0, 75.0, 45.0),
            RampStep::new(0.0, 50.0, 60.0),
            RampStep::new(0.0, 35.0, 70.0),
            RampStep::new(0.0, 25.0, 72.0),
        ]),
        syntax_contrast: Some(ContrastLevel::Text),
        colors: light_tinted_base(hues, bg_hue, hsl(200.0, 45.0, 40.0)),
        ansi: AnsiSource::Tinted {
            tint: hsl(bg_hue, 80.0, 50.0),
        },
        borders: BorderSource::Derived,
        contrast: ContrastTable::default(),
        enforce_contrast: false,
        formats: vec![OutputFormat::Json],
    }
}

fn periwinkle() -> Variant {
    let hues = HueSet::new(290.0, 200.0, 110.0);
    let bg_hue = 240.0;
    let gray = tinted_gray(bg_hue, 30.0);
    Variant {
        id: "periwinkle".into(),
        name: "Uno Due Tre Periwinkle".into(),
        kind: ThemeKind::Light,
        hues,
        ramps: Ramps::uniform([
            RampStep::new(0.0, 95.0, 35.0),
            RampStep::new(0.0, 75.0, 45.0),
            RampStep::new(0.0, 50.0, 60.0),
            RampStep::new(0.0, 25.0, 70.0),
            RampStep::new(0.0, 20.0, 72.0),
        ]),
        syntax_contrast: Some(ContrastLevel::Text),
        colors: light_tinted_base(hues, bg_hue, hsl(320.0, 80.0, 40.0)),
        ansi: AnsiSource::Tinted {
            tint: hsl(bg_hue, 80.0, 50.0),
        },
        borders: BorderSource::Literal {
            border0: gray(80.0),
            border1: gray(72.0),
        },
        contrast: ContrastTable::default(),
        enforce_contrast: false,
        formats: vec![OutputFormat::Json],
    }
}

/// Dark green variant with hand-picked syntax colors and a contrast gate:
/// building it fails outright when any checked pair is short of its ratio.
fn miasma() -> Variant {
    let hues = HueSet::new(60.0, 30.0, 310.0);
    let bg_hue = 160.0;

    let bg0 = hsl(bg_hue, 40.0, 14.0);
    let bg1 = hsl(bg_hue, 40.0, 10.0);
    let fg = hsl(bg_hue, 60.0, 80.0);
    let border0 = hsl(bg_hue, 40.0, 24.0);
    let border1 = hsl(bg_hue, 40.0, 40.0);
    let due2 = hsl(hues.due, 80.0, 57.0);
    let tre1 = hsl(hues.tre, 90.0, 81.75);

    // The fourth and fifth uno entries carry the background hue: they
    // color punctuation and comments.
    let alt_shift = bg_hue - hues.uno;

    Variant {
        id: "miasma".into(),
        name: "Miasma".into(),
        kind: ThemeKind::Dark,
        hues,
        ramps: Ramps {
            uno: [
                RampStep::new(0.0, 60.0, 49.0),
                RampStep::new(0.0, 50.0, 73.0),
                RampStep::new(0.0, 30.0, 46.5),
                RampStep::new(alt_shift, 40.0, 46.0),
                RampStep::new(alt_shift, 15.0, 60.0),
            ],
            due: [
                RampStep::new(0.0, 90.0, 70.5),
                RampStep::new(0.0, 100.0, 82.0),
                RampStep::new(0.0, 80.0, 57.0),
                RampStep::new(0.0, 70.0, 50.0),
                RampStep::new(0.0, 60.0, 45.0),
            ],
            tre: [
                RampStep::new(0.0, 90.0, 81.75),
                RampStep::new(0.0, 100.0, 89.5),
                RampStep::new(0.0, 70.0, 71.0),
                RampStep::new(0.0, 60.0, 65.0),
                RampStep::new(0.0, 50.0, 60.0),
            ],
        },
        syntax_contrast: Some(ContrastLevel::Text),
        colors: BaseColors {
            fg,
            bg: bg0,
            accent0: tre1,
            accent1: tre1,
            yellow: hsl(hues.uno, 58.0, 76.0),
            orange: hsl(hues.due, 100.0, 60.0),
            blue: hsl(220.0, 71.0, 69.0),
            purple: hsl(hues.tre, 56.0, 77.0),
            red: rgb(0xff, 0x44, 0x44),
            cyan: hsl(180.0, 64.0, 68.0),
            t_fg: Some(fg),
            input_bg: bg0,
            titlebar_bg: bg1,
            sidebar_bg: bg1,
            activity_bar_bg: bg1,
            statusbar_bg: bg1,
            statusbar_fg: fg,
            widget_bg: bg1,
            widget_border: border0,
            active_selection_bg: fg,
            inactive_selection_bg: bg0,
            text_selection_bg: dilute(due2, 30.0),
            accent_focus_bg: dilute(border1, 25.0),
            line_highlight_bg: bg1,
            bracket_match_bg: dilute(due2, 15.0),
            bracket_match_border: dilute(due2, 50.0),
            ruler: dilute(border0, 50.0),
        },
        ansi: AnsiSource::Literal(AnsiColors {
            black: hsl(bg_hue, 35.0, 26.0),
            red: hsl(340.0, 67.0, 68.0),
            green: hsl(bg_hue, 64.0, 68.0),
            yellow: hsl(hues.uno, 58.0, 76.0),
            blue: hsl(220.0, 71.0, 69.0),
            magenta: hsl(hues.tre, 56.0, 77.0),
            cyan: hsl(180.0, 64.0, 68.0),
            white: hsl(hues.due, 80.0, 92.0),
        }),
        borders: BorderSource::Literal { border0, border1 },
        contrast: ContrastTable {
            decoration: 1.0,
            ..ContrastTable::default()
        },
        enforce_contrast: true,
        formats: vec![OutputFormat::Json],
    }
}

pub fn builtin_variants() -> Vec<Variant> {
    vec![
        classic(),
        light(),
        dark(),
        nature(),
        midnight(),
        ocean(),
        sprinkles(),
        bubblegum(),
        periwinkle(),
        miasma(),
    ]
}

pub fn get_builtin_variant(id: &str) -> Option<Variant> {
    builtin_variants().into_iter().find(|v| v.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_ids_are_unique() {
        let variants = builtin_variants();
        let ids: HashSet<_> = variants.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids.len(), variants.len());
        assert_eq!(variants.len(), 10);
    }

    #[test]
    fn test_builtin_kind_matches_background() {
        for v in builtin_variants() {
            assert_eq!(
                v.kind.is_dark(),
                v.colors.bg.is_dark(),
                "{} background {}",
                v.id,
                v.colors.bg
            );
        }
    }

    #[test]
    fn test_classic_ships_tm_theme() {
        let classic = get_builtin_variant("uno-due-tre").unwrap();
        assert!(classic.formats.contains(&OutputFormat::TmTheme));
        assert_eq!(classic.syntax_contrast, None);
        assert_eq!(classic.colors.bg, WHITE);
        assert_eq!(
            (classic.hues.uno, classic.hues.due, classic.hues.tre),
            (320.0, 215.0, 125.0)
        );
    }

    #[test]
    fn test_only_miasma_enforces_contrast() {
        let enforcing: Vec<_> = builtin_variants()
            .into_iter()
            .filter(|v| v.enforce_contrast)
            .map(|v| v.id)
            .collect();
        assert_eq!(enforcing, vec!["miasma".to_string()]);
    }

    #[test]
    fn test_get_builtin_variant_unknown() {
        assert!(get_builtin_variant("solarized").is_none());
    }
}
