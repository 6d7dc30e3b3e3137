//! WCAG contrast measurement and lightness-based contrast correction.

use serde::{Deserialize, Serialize};

use crate::{Color, Hsla};

/// Lightness points moved per iteration of [`correct_contrast`].
const LIGHTNESS_STEP: f64 = 1.0;

/// Usage class of a foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastLevel {
    /// Body text and syntax colors.
    Text,
    /// UI chrome: accents, input borders, icons.
    Ui,
    /// Separators and other purely decorative lines.
    Decoration,
}

impl ContrastLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ContrastLevel::Text => "text",
            ContrastLevel::Ui => "ui",
            ContrastLevel::Decoration => "decoration",
        }
    }
}

/// Minimum contrast ratio for each [`ContrastLevel`].
///
/// Defaults follow WCAG AA (4.5 for text, 3.0 for UI components). The
/// decoration ratio is not a WCAG value; variants disagree on it, so it is
/// configurable like the others.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContrastTable {
    pub text: f64,
    pub ui: f64,
    pub decoration: f64,
}

impl Default for ContrastTable {
    fn default() -> Self {
        Self {
            text: 4.5,
            ui: 3.0,
            decoration: 1.75,
        }
    }
}

impl ContrastTable {
    pub fn min_ratio(&self, level: ContrastLevel) -> f64 {
        match level {
            ContrastLevel::Text => self.text,
            ContrastLevel::Ui => self.ui,
            ContrastLevel::Decoration => self.decoration,
        }
    }
}

/// Which way lightness moved during a correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Lighter,
    Darker,
}

/// Outcome of [`correct_contrast`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correction {
    pub color: Color,
    pub direction: Direction,
    /// Lightness of the input on the rounded HSL scale.
    pub from_lightness: f64,
    /// Lightness of the returned color on the same scale.
    pub to_lightness: f64,
    /// False when the lightness bound was hit before the ratio was reached.
    pub met: bool,
}

impl Correction {
    pub fn steps(&self) -> u32 {
        ((self.to_lightness - self.from_lightness).abs() / LIGHTNESS_STEP) as u32
    }
}

impl Color {
    /// Convert sRGB channel to linear for luminance calculation.
    fn linearize(val: u8) -> f64 {
        let v = val as f64 / 255.0;
        if v <= 0.04045 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    }

    /// Calculate relative luminance (0.0 = black, 1.0 = white). Alpha is
    /// ignored.
    pub fn luminance(&self) -> f64 {
        0.2126 * Self::linearize(self.r)
            + 0.7152 * Self::linearize(self.g)
            + 0.0722 * Self::linearize(self.b)
    }

    /// Perceived brightness (0.0 - 1.0) using the YIQ weighting.
    pub fn brightness(&self) -> f64 {
        (self.r as f64 * 299.0 + self.g as f64 * 587.0 + self.b as f64 * 114.0) / 1000.0 / 255.0
    }

    pub fn is_dark(&self) -> bool {
        self.brightness() < 0.5
    }

    /// WCAG contrast ratio between two colors (1:1 to 21:1), floored to two
    /// decimals. Every minimum-ratio comparison goes through this value.
    pub fn contrast(&self, other: &Color) -> f64 {
        let l1 = self.luminance();
        let l2 = other.luminance();
        let lighter = l1.max(l2);
        let darker = l1.min(l2);
        ((lighter + 0.05) / (darker + 0.05) * 100.0).floor() / 100.0
    }
}

/// Move `fg`'s lightness away from `bg` one point at a time until the pair
/// reaches `min_ratio`.
///
/// A dark background pushes the foreground toward lightness 100, a light one
/// toward 0. The walk stops at that bound even if the ratio is still short;
/// the returned color is then the extreme, which callers accept as best
/// effort. Hue, saturation and alpha are kept.
pub fn correct_contrast(fg: Color, bg: Color, min_ratio: f64) -> Correction {
    let direction = if bg.is_dark() {
        Direction::Lighter
    } else {
        Direction::Darker
    };
    let mut hsl = fg.to_hsl();
    let from_lightness = hsl.l;

    if fg.contrast(&bg) >= min_ratio {
        return Correction {
            color: fg,
            direction,
            from_lightness,
            to_lightness: from_lightness,
            met: true,
        };
    }

    let at_bound = |hsl: &Hsla| match direction {
        Direction::Lighter => hsl.l >= 100.0,
        Direction::Darker => hsl.l <= 0.0,
    };

    let mut color = hsl.to_color();
    while color.contrast(&bg) < min_ratio && !at_bound(&hsl) {
        hsl.l = match direction {
            Direction::Lighter => (hsl.l + LIGHTNESS_STEP).min(100.0),
            Direction::Darker => (hsl.l - LIGHTNESS_STEP).max(0.0),
        };
        color = hsl.to_color();
    }

    Correction {
        color,
        direction,
        from_lightness,
        to_lightness: hsl.l,
        met: color.contrast(&bg) >= min_ratio,
    }
}

/// [`correct_contrast`] without the bookkeeping.
pub fn fix_contrast(fg: Color, bg: Color, min_ratio: f64) -> Color {
    correct_contrast(fg, bg, min_ratio).color
}
