//! Conversion of foreign color types into [`RgbaColor`].
//!
//! Anything that can hand the engine an sRGB color implements [`IntoRgba`].
//! A conversion that cannot produce a meaningful color returns `None` and the
//! engine reports "no result" instead of computing on garbage.

use csscolorparser::Color as CssColor;
use palette::{Srgb, Srgba};
use tracing::warn;

use crate::rgba::RgbaColor;

/// Conversion into the engine's color representation.
pub trait IntoRgba {
    /// The color in 8-bit sRGB scale, or `None` if it has no sRGB form.
    fn to_rgba(&self) -> Option<RgbaColor>;
}

impl IntoRgba for RgbaColor {
    fn to_rgba(&self) -> Option<RgbaColor> {
        Some(*self)
    }
}

impl<T: IntoRgba + ?Sized> IntoRgba for &T {
    fn to_rgba(&self) -> Option<RgbaColor> {
        (**self).to_rgba()
    }
}

impl IntoRgba for Srgb<u8> {
    fn to_rgba(&self) -> Option<RgbaColor> {
        Some(RgbaColor::opaque(
            self.red as f64,
            self.green as f64,
            self.blue as f64,
        ))
    }
}

impl IntoRgba for Srgba<u8> {
    fn to_rgba(&self) -> Option<RgbaColor> {
        Some(RgbaColor::new(
            self.red as f64,
            self.green as f64,
            self.blue as f64,
            self.alpha as f64 / 255.0,
        ))
    }
}

impl IntoRgba for Srgb<f32> {
    fn to_rgba(&self) -> Option<RgbaColor> {
        from_unit_channels(self.red, self.green, self.blue, 1.0)
    }
}

impl IntoRgba for Srgba<f32> {
    fn to_rgba(&self) -> Option<RgbaColor> {
        from_unit_channels(self.red, self.green, self.blue, self.alpha)
    }
}

impl IntoRgba for CssColor {
    fn to_rgba(&self) -> Option<RgbaColor> {
        from_unit_channels(self.r as f32, self.g as f32, self.b as f32, self.a as f32)
    }
}

/// Slack below a hundredth that is still treated as an exact hundredth.
///
/// Single precision cannot hold `n / 255` exactly, so scaling back would
/// otherwise round a plain 8-bit channel up to `n.01`.
const HUNDREDTHS_EPSILON: f64 = 1e-3;

/// Build a color from normalized (0.0-1.0) channels.
///
/// Color channels are scaled to 0-255, clamped, and rounded up to two
/// decimals. Alpha is clamped to 0-1. Non-finite input has no sRGB form.
pub fn from_unit_channels(red: f32, green: f32, blue: f32, alpha: f32) -> Option<RgbaColor> {
    if ![red, green, blue, alpha].iter().all(|c| c.is_finite()) {
        warn!(red, green, blue, alpha, "input color not representable in sRGB");
        return None;
    }

    Some(RgbaColor::new(
        scale_channel(red),
        scale_channel(green),
        scale_channel(blue),
        (alpha as f64).clamp(0.0, 1.0),
    ))
}

fn scale_channel(component: f32) -> f64 {
    let value = component as f64 * 255.0;
    if value > 255.0 {
        255.0
    } else if value <= 0.0 {
        0.0
    } else {
        (value * 100.0 - HUNDREDTHS_EPSILON).ceil() / 100.0
    }
}

/// Parse a color in any CSS syntax (hex, `rgb()`, `hsl()`, named, ...).
///
/// Goes through [`IntoRgba`], so a parsed string and the equivalent
/// [`CssColor`] value always convert to the same color.
pub fn parse_color(input: &str) -> Result<RgbaColor, String> {
    let css_color: CssColor = input
        .parse()
        .map_err(|e| format!("Invalid color '{}': {}", input, e))?;

    css_color
        .to_rgba()
        .ok_or_else(|| format!("Invalid color '{}': not representable in sRGB", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_channel_clamps_out_of_gamut() {
        assert_eq!(scale_channel(1.5), 255.0);
        assert_eq!(scale_channel(-1.5), 0.0);
    }

    #[test]
    fn scale_channel_rounds_up_to_hundredths() {
        // 0.5 * 255 = 127.5 exactly
        assert_eq!(scale_channel(0.5), 127.5);
        assert!(scale_channel(0.3) >= 0.3 * 255.0 - 1e-4);
    }

    #[test]
    fn scale_channel_restores_8bit_values() {
        for byte in 0u8..=255 {
            assert_eq!(scale_channel(byte as f32 / 255.0), byte as f64);
        }
    }
}
