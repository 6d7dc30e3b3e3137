//! Color algebra for theme generation.
//!
//! Colors are derived in HSL space, blended and diluted, and finally pushed
//! through [`fix_contrast`] so foregrounds stay legible on their background.

pub mod contrast;
mod types;

pub use contrast::{
    correct_contrast, fix_contrast, ContrastLevel, ContrastTable, Correction, Direction,
};
pub use types::{Color, ColorError, Hsla};

/// Opaque color from hue (degrees, wrapped), saturation and lightness
/// (percent, clamped).
pub fn hsl(h: f64, s: f64, l: f64) -> Color {
    Hsla::new(h, s, l, 1.0).to_color()
}

/// [`hsl`] with an opacity given in percent.
pub fn hsla(h: f64, s: f64, l: f64, percent: f64) -> Color {
    dilute(hsl(h, s, l), percent)
}

/// Neutral gray at lightness `l`.
pub fn gray(l: f64) -> Color {
    hsl(0.0, 0.0, l)
}

/// Apply an opacity to a color, replacing its alpha channel.
///
/// 100 (or more) returns the color unchanged and 0 (or less) makes it fully
/// transparent.
pub fn dilute(color: Color, percent: f64) -> Color {
    if percent >= 100.0 {
        return color;
    }
    let alpha = (percent.max(0.0) / 100.0 * 255.0).round() as u8;
    color.with_alpha(alpha)
}

/// Linear interpolation from `a` (percent = 0) to `b` (percent = 100),
/// channel by channel, alpha included.
pub fn mix(a: Color, b: Color, percent: f64) -> Color {
    let t = percent.clamp(0.0, 100.0) / 100.0;
    let lerp = |x: u8, y: u8| -> u8 {
        (x as f64 * (1.0 - t) + y as f64 * t)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    Color::rgba(
        lerp(a.r, b.r),
        lerp(a.g, b.g),
        lerp(a.b, b.b),
        lerp(a.a, b.a),
    )
}

/// Raise lightness by `amount` points (clamped to 100).
pub fn lighten(color: Color, amount: f64) -> Color {
    let hsl = color.to_hsl();
    Hsla {
        l: (hsl.l + amount).clamp(0.0, 100.0),
        ..hsl
    }
    .to_color()
}

/// Lower lightness by `amount` points (clamped to 0).
pub fn darken(color: Color, amount: f64) -> Color {
    lighten(color, -amount)
}
