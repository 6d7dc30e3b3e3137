//! Core color types.
//!
//! This module defines the two representations the theme pipeline works in:
//! - `Color` - 8-bit RGBA, the form every palette entry is stored and emitted in
//! - `Hsla` - hue/saturation/lightness/alpha, the form colors are derived and
//!   adjusted in

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("Invalid color \"{0}\" (expected #rgb, #rgba, #rrggbb or #rrggbbaa hex)")]
    InvalidHex(String),
}

/// RGBA color representation.
///
/// Each component is a value from 0-255. An alpha of 255 is fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Create a new opaque color from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA components.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color string (e.g., "#ffffff", "#ffffff80", "#fff" or "fff").
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex(hex.to_string());
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let short = |i: usize| -> Result<u8, ColorError> {
            let v = u8::from_str_radix(&digits[i..i + 1], 16).map_err(|_| invalid())?;
            Ok(v * 17)
        };
        let long = |i: usize| -> Result<u8, ColorError> {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid())
        };

        match digits.len() {
            3 => Ok(Self::new(short(0)?, short(1)?, short(2)?)),
            4 => Ok(Self::rgba(short(0)?, short(1)?, short(2)?, short(3)?)),
            6 => Ok(Self::new(long(0)?, long(2)?, long(4)?)),
            8 => Ok(Self::rgba(long(0)?, long(2)?, long(4)?, long(6)?)),
            _ => Err(invalid()),
        }
    }

    /// Convert to hex string. Opaque colors use "#rrggbb", anything else
    /// "#rrggbbaa".
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Alpha as a fraction in [0, 1].
    pub fn alpha(&self) -> f64 {
        self.a as f64 / 255.0
    }

    /// Same color with a different alpha channel.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Convert to HSL. Hue, saturation and lightness are rounded to whole
    /// numbers and alpha to three decimals, so stepping lightness by one
    /// point always lands on a value this conversion can produce.
    pub fn to_hsl(&self) -> Hsla {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        let (h, s) = if delta == 0.0 {
            (0.0, 0.0)
        } else {
            let s = delta / (1.0 - (2.0 * l - 1.0).abs());
            let h = if max == r {
                ((g - b) / delta).rem_euclid(6.0)
            } else if max == g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };
            (h * 60.0, s)
        };

        Hsla {
            h: h.round() % 360.0,
            s: (s * 100.0).round(),
            l: (l * 100.0).round(),
            a: (self.alpha() * 1000.0).round() / 1000.0,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(128, 128, 128)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Hue/saturation/lightness/alpha.
///
/// `h` is in degrees [0, 360), `s` and `l` are percentages [0, 100] and `a`
/// is a fraction [0, 1]. Out-of-range values are accepted here and
/// normalised by [`Hsla::to_color`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Hsla {
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// Wrap the hue into [0, 360) and clamp the other channels.
    pub fn normalized(self) -> Self {
        Self {
            h: if self.h.is_finite() {
                self.h.rem_euclid(360.0)
            } else {
                0.0
            },
            s: self.s.clamp(0.0, 100.0),
            l: self.l.clamp(0.0, 100.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Convert to RGBA. Goes through HSV and rounds channels half away from
    /// zero, so `hsl(0, 0, 50)` is `#808080`.
    pub fn to_color(self) -> Color {
        let Hsla { h, s, l, a } = self.normalized();

        let chroma = s * (if l < 50.0 { l } else { 100.0 - l }) / 100.0;
        let sv = if chroma > 0.0 {
            2.0 * chroma / (l + chroma)
        } else {
            0.0
        };
        let v = (l + chroma) / 100.0;

        let sector = h / 60.0;
        let i = sector.floor();
        let f = sector - i;
        let p = v * (1.0 - sv);
        let q = v * (1.0 - f * sv);
        let t = v * (1.0 - (1.0 - f) * sv);

        let (r, g, b) = match i as u8 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Color::rgba(
            channel(r * 255.0),
            channel(g * 255.0),
            channel(b * 255.0),
            channel(a * 255.0),
        )
    }
}

fn channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
