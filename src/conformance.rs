//! WCAG conformance levels and the element categories they are graded for.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// WCAG conformance level, ordered `Failed < A < AA < AAA`.
///
/// [`ConformanceLevel::classify`] only ever yields `Failed`, `AA` or `AAA`.
/// `A` exists as a comparison target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConformanceLevel {
    /// No level of conformance reached.
    #[serde(rename = "failed", alias = "Failed")]
    Failed,
    /// Minimum level of conformance.
    #[serde(alias = "a")]
    A,
    /// Medium level, includes the success criteria of A.
    #[serde(alias = "aa")]
    AA,
    /// Highest level, includes the success criteria of A and AA.
    #[serde(alias = "aaa")]
    AAA,
}

impl ConformanceLevel {
    /// Grade a contrast ratio for the given element type.
    ///
    /// The element's minimum threshold is checked first. Only when it is met
    /// does the ratio get tested against the stricter AAA threshold, which
    /// UI components do not have.
    pub fn classify(contrast_ratio: f64, element: ElementType) -> Self {
        let thresholds = element.thresholds();

        if contrast_ratio < thresholds.aa {
            return Self::Failed;
        }

        match thresholds.aaa {
            Some(aaa) if contrast_ratio >= aaa => Self::AAA,
            _ => Self::AA,
        }
    }

    /// Integer rank: failed=0, A=1, AA=2, AAA=3.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Failed => 0,
            Self::A => 1,
            Self::AA => 2,
            Self::AAA => 3,
        }
    }

    /// Display text of the level.
    pub const fn text(self) -> &'static str {
        match self {
            Self::Failed => "failed",
            Self::A => "A",
            Self::AA => "AA",
            Self::AAA => "AAA",
        }
    }

    /// Whether this level satisfies the `required` one.
    pub fn meets(self, required: ConformanceLevel) -> bool {
        self >= required
    }
}

impl std::fmt::Display for ConformanceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

impl FromStr for ConformanceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "failed" => Ok(Self::Failed),
            "a" => Ok(Self::A),
            "aa" => Ok(Self::AA),
            "aaa" => Ok(Self::AAA),
            other => Err(format!("Unknown conformance level '{}'", other)),
        }
    }
}

/// Contrast ratios an element type needs for AA and (if any) AAA.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub aa: f64,
    pub aaa: Option<f64>,
}

/// What the foreground color of a pair is used for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    /// Regular text below 18pt, or bold text below 14pt.
    #[default]
    SmallFont,
    /// Text of at least 18pt, or bold text of at least 14pt.
    LargeFont,
    /// Graphical objects and user interface components.
    UiComponents,
}

impl ElementType {
    pub const ALL: [ElementType; 3] = [Self::SmallFont, Self::LargeFont, Self::UiComponents];

    /// WCAG 2.0 thresholds (SC 1.4.3, 1.4.6, 1.4.11).
    pub const fn thresholds(self) -> Thresholds {
        match self {
            Self::SmallFont => Thresholds {
                aa: 4.5,
                aaa: Some(7.0),
            },
            Self::LargeFont => Thresholds {
                aa: 3.0,
                aaa: Some(4.5),
            },
            Self::UiComponents => Thresholds { aa: 3.0, aaa: None },
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::SmallFont => "small_font",
            Self::LargeFont => "large_font",
            Self::UiComponents => "ui_components",
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Size and weight of a font, as far as WCAG cares.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontProps {
    /// Size in points.
    pub font_size: f64,
    pub is_bold: bool,
}

impl FontProps {
    pub const fn new(font_size: f64, is_bold: bool) -> Self {
        Self { font_size, is_bold }
    }

    /// At least 18pt, or at least 14pt and bold.
    pub fn is_large_text(&self) -> bool {
        self.font_size >= 18.0 || (self.font_size >= 14.0 && self.is_bold)
    }
}

impl From<FontProps> for ElementType {
    fn from(props: FontProps) -> Self {
        if props.is_large_text() {
            Self::LargeFont
        } else {
            Self::SmallFont
        }
    }
}

/// Coarse font size presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSize {
    /// Regular font below 18pt.
    Small,
    /// Bold font of at least 14pt.
    BoldSmall,
    /// Font of at least 18pt.
    Large,
}

impl FontSize {
    pub const fn font_props(self) -> FontProps {
        match self {
            Self::Small => FontProps::new(14.0, false),
            Self::BoldSmall => FontProps::new(14.0, true),
            Self::Large => FontProps::new(18.0, false),
        }
    }
}

impl From<FontSize> for ElementType {
    fn from(size: FontSize) -> Self {
        size.font_props().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_ordered() {
        for element in ElementType::ALL {
            let t = element.thresholds();
            if let Some(aaa) = t.aaa {
                assert!(aaa > t.aa, "{element}: AAA must be stricter than AA");
            }
        }
    }

    #[test]
    fn rank_matches_ordering() {
        let levels = [
            ConformanceLevel::Failed,
            ConformanceLevel::A,
            ConformanceLevel::AA,
            ConformanceLevel::AAA,
        ];
        for pair in levels.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].rank() < pair[1].rank());
        }
    }
}
