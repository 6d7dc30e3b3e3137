//! Variant configuration types.
//!
//! A variant is plain data; every built-in theme and every user theme file
//! resolves to one of these records:
//! - `HueSet` - the three base hues that give a theme its identity
//! - `RampStep` / `Ramps` - how a hue expands into five syntax colors
//! - `BaseColors` - literal surface, accent and selection colors
//! - `AnsiSource` / `BorderSource` - derived or literal terminal colors and borders
//! - `Variant` - everything above plus contrast policy and output formats

use serde::{Deserialize, Serialize};
use unoduetre_color::{hsl, Color, ContrastLevel, ContrastTable};
use unoduetre_document::{OutputFormat, ThemeKind};

/// Number of colors a syntax ramp expands into.
pub const RAMP_LEN: usize = 5;

/// Base hues, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HueSet {
    pub uno: f64,
    pub due: f64,
    pub tre: f64,
}

impl HueSet {
    pub const fn new(uno: f64, due: f64, tre: f64) -> Self {
        Self { uno, due, tre }
    }
}

/// One entry of a syntax ramp, relative to the ramp's hue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RampStep {
    #[serde(default)]
    pub hue_shift: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl RampStep {
    pub const fn new(hue_shift: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue_shift,
            saturation,
            lightness,
        }
    }

    pub fn apply(&self, hue: f64) -> Color {
        hsl(hue + self.hue_shift, self.saturation, self.lightness)
    }
}

/// Expand `hue` through `steps`.
pub fn ramp(hue: f64, steps: &[RampStep; RAMP_LEN]) -> [Color; RAMP_LEN] {
    steps.map(|step| step.apply(hue))
}

/// Ramp shapes for each of the three hues.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ramps {
    pub uno: [RampStep; RAMP_LEN],
    pub due: [RampStep; RAMP_LEN],
    pub tre: [RampStep; RAMP_LEN],
}

impl Ramps {
    /// The same shape for all three hues.
    pub const fn uniform(steps: [RampStep; RAMP_LEN]) -> Self {
        Self {
            uno: steps,
            due: steps,
            tre: steps,
        }
    }
}

/// Literal colors a variant pins before any derivation happens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseColors {
    pub fg: Color,
    pub bg: Color,
    pub accent0: Color,
    pub accent1: Color,

    pub yellow: Color,
    pub orange: Color,
    pub blue: Color,
    pub purple: Color,
    pub red: Color,
    pub cyan: Color,

    /// Terminal foreground; derived from `bg` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t_fg: Option<Color>,

    pub input_bg: Color,
    pub titlebar_bg: Color,
    pub sidebar_bg: Color,
    pub activity_bar_bg: Color,
    pub statusbar_bg: Color,
    pub statusbar_fg: Color,
    pub widget_bg: Color,
    pub widget_border: Color,

    pub active_selection_bg: Color,
    pub inactive_selection_bg: Color,
    pub text_selection_bg: Color,
    pub accent_focus_bg: Color,
    pub line_highlight_bg: Color,

    pub bracket_match_bg: Color,
    pub bracket_match_border: Color,
    pub ruler: Color,
}

/// The eight terminal colors. Bright slots reuse them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsiColors {
    pub black: Color,
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
    pub magenta: Color,
    pub cyan: Color,
    pub white: Color,
}

impl AnsiColors {
    pub fn entries(&self) -> [(&'static str, Color); 8] {
        [
            ("black", self.black),
            ("red", self.red),
            ("green", self.green),
            ("yellow", self.yellow),
            ("blue", self.blue),
            ("magenta", self.magenta),
            ("cyan", self.cyan),
            ("white", self.white),
        ]
    }

    /// Name of the slot that sits closest to the background and is left
    /// out of contrast correction: white on light themes, black on dark.
    pub fn background_slot(kind: ThemeKind) -> &'static str {
        match kind {
            ThemeKind::Light => "white",
            ThemeKind::Dark => "black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum AnsiSource {
    /// Fixed anchors for the theme kind, mixed 20% toward `tint`.
    Tinted { tint: Color },
    Literal(AnsiColors),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum BorderSource {
    /// Background pushed to the decoration / ui contrast levels.
    Derived,
    Literal { border0: Color, border1: Color },
}

/// A complete theme variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// Output file stem.
    pub id: String,
    pub name: String,
    pub kind: ThemeKind,
    pub hues: HueSet,
    pub ramps: Ramps,
    /// Level the syntax ramps are corrected to; `None` keeps them as is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntax_contrast: Option<ContrastLevel>,
    pub colors: BaseColors,
    pub ansi: AnsiSource,
    pub borders: BorderSource,
    #[serde(default)]
    pub contrast: ContrastTable,
    /// Abort the build when a contrast check fails.
    #[serde(default)]
    pub enforce_contrast: bool,
    #[serde(default = "default_formats")]
    pub formats: Vec<OutputFormat>,
}

fn default_formats() -> Vec<OutputFormat> {
    vec![OutputFormat::Json]
}

impl Variant {
    pub fn min_ratio(&self, level: ContrastLevel) -> f64 {
        self.contrast.min_ratio(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ramp_applies_hue_shift() {
        let steps = [
            RampStep::new(0.0, 100.0, 75.0),
            RampStep::new(5.0, 100.0, 75.0),
            RampStep::new(10.0, 100.0, 75.0),
            RampStep::new(15.0, 100.0, 75.0),
            RampStep::new(20.0, 100.0, 75.0),
        ];
        let colors = ramp(70.0, &steps);
        assert_eq!(colors[0], hsl(70.0, 100.0, 75.0));
        assert_eq!(colors[4], hsl(90.0, 100.0, 75.0));
    }

    #[test]
    fn test_ramp_hue_wraps() {
        let steps = [RampStep::new(20.0, 80.0, 50.0); RAMP_LEN];
        assert_eq!(ramp(350.0, &steps)[0], hsl(10.0, 80.0, 50.0));
    }

    #[test]
    fn test_background_slot() {
        assert_eq!(AnsiColors::background_slot(ThemeKind::Light), "white");
        assert_eq!(AnsiColors::background_slot(ThemeKind::Dark), "black");
    }

    #[test]
    fn test_sources_serialize_with_tag() {
        let borders = BorderSource::Literal {
            border0: Color::new(0x22, 0x22, 0x22),
            border1: Color::new(0x33, 0x33, 0x33),
        };
        let json = serde_json::to_value(borders).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"source": "literal", "border0": "#222222", "border1": "#333333"})
        );

        let derived: BorderSource = serde_json::from_value(serde_json::json!({"source": "derived"})).unwrap();
        assert_eq!(derived, BorderSource::Derived);
    }
}
