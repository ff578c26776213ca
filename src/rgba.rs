//! RGBA color type with WCAG 2.0 luminance and contrast math.
//!
//! Channels use the 8-bit sRGB scale (red/green/blue in 0.0-255.0) with a
//! normalized alpha (0.0-1.0). Values are taken as given: clamping is the
//! job of whoever produces the color (see [`crate::convert`]).

use float_cmp::approx_eq;
use serde::{Deserialize, Serialize};

use crate::conformance::{ConformanceLevel, ElementType};

/// Channel value at or below which the sRGB transfer curve is linear.
const LINEAR_THRESHOLD: f64 = 0.03928;
const LINEAR_DIVISOR: f64 = 12.92;
const GAMMA_OFFSET: f64 = 0.055;
const GAMMA_SCALE: f64 = 1.055;
const GAMMA_EXPONENT: f64 = 2.4;

/// Luminance coefficients for sRGB primaries.
const COEF_R: f64 = 0.2126;
const COEF_G: f64 = 0.7152;
const COEF_B: f64 = 0.0722;

/// Flare term added to both luminances in the contrast ratio.
const FLARE: f64 = 0.05;

/// A color in the 8-bit sRGB scale with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbaColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl RgbaColor {
    /// Opaque white.
    pub const WHITE: Self = Self::new(255.0, 255.0, 255.0, 1.0);

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create an opaque color.
    pub const fn opaque(red: f64, green: f64, blue: f64) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Relative luminance as defined by WCAG 2.0 (technique G17).
    ///
    /// Returns 0.0 for black and 1.0 for white.
    pub fn relative_luminance(&self) -> f64 {
        COEF_R * linearize(self.red / 255.0)
            + COEF_G * linearize(self.green / 255.0)
            + COEF_B * linearize(self.blue / 255.0)
    }

    /// Composite this color over `other` using `fraction` as coverage.
    ///
    /// Each channel becomes `fraction * self + (1 - fraction) * other`. The
    /// result is always opaque.
    pub fn blended(&self, fraction: f64, other: &RgbaColor) -> RgbaColor {
        let mix = |own: f64, theirs: f64| fraction * own + (1.0 - fraction) * theirs;

        RgbaColor::new(
            mix(self.red, other.red),
            mix(self.green, other.green),
            mix(self.blue, other.blue),
            1.0,
        )
    }

    /// WCAG contrast ratio of a foreground drawn on a background.
    ///
    /// A translucent foreground is first blended onto the background using its
    /// own alpha. The background's alpha is ignored and it is treated as
    /// opaque.
    ///
    /// The result lies in `[1.0, 21.0]`.
    ///
    /// # Example
    ///
    /// ```
    /// use wcag_colors::rgba::RgbaColor;
    ///
    /// let ratio = RgbaColor::contrast_ratio(&RgbaColor::BLACK, &RgbaColor::WHITE);
    /// assert_eq!(ratio, 21.0);
    /// ```
    pub fn contrast_ratio(foreground: &RgbaColor, background: &RgbaColor) -> f64 {
        let foreground = if foreground.alpha < 1.0 {
            foreground.blended(foreground.alpha, background)
        } else {
            *foreground
        };

        let l_fg = foreground.relative_luminance();
        let l_bg = background.relative_luminance();

        (l_fg.max(l_bg) + FLARE) / (l_fg.min(l_bg) + FLARE)
    }

    /// Whether the pair reaches at least `level` for the given element type.
    pub fn is_valid_color_combination(
        foreground: &RgbaColor,
        element: ElementType,
        background: &RgbaColor,
        level: ConformanceLevel,
    ) -> bool {
        let ratio = Self::contrast_ratio(foreground, background);
        ConformanceLevel::classify(ratio, element) >= level
    }

    /// Whether this is (within float tolerance) [`RgbaColor::WHITE`].
    pub fn is_white(&self) -> bool {
        self.approx_eq(&Self::WHITE)
    }

    /// Whether this is (within float tolerance) [`RgbaColor::BLACK`].
    pub fn is_black(&self) -> bool {
        self.approx_eq(&Self::BLACK)
    }

    /// Channel-wise comparison with a small absolute tolerance.
    pub fn approx_eq(&self, other: &RgbaColor) -> bool {
        approx_eq!(f64, self.red, other.red, epsilon = 1e-9)
            && approx_eq!(f64, self.green, other.green, epsilon = 1e-9)
            && approx_eq!(f64, self.blue, other.blue, epsilon = 1e-9)
            && approx_eq!(f64, self.alpha, other.alpha, epsilon = 1e-9)
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    ///
    /// Channels are rounded and clamped to the 8-bit range for display.
    pub fn to_hex(&self) -> String {
        let byte = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        let (r, g, b) = (byte(self.red), byte(self.green), byte(self.blue));

        if self.alpha < 1.0 {
            let a = byte(self.alpha * 255.0);
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}")
        }
    }
}

impl Default for RgbaColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl std::fmt::Display for RgbaColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// sRGB transfer function: gamma-encoded channel (0.0-1.0) to linear light.
#[inline]
fn linearize(channel: f64) -> f64 {
    if channel <= LINEAR_THRESHOLD {
        channel / LINEAR_DIVISOR
    } else {
        ((channel + GAMMA_OFFSET) / GAMMA_SCALE).powf(GAMMA_EXPONENT)
    }
}
