//! Contrast engine: ratios, black/white picking and candidate selection.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[cfg(debug_assertions)]
use tracing::instrument;

use crate::conformance::{ConformanceLevel, ElementType};
use crate::convert::IntoRgba;
use crate::rgba::RgbaColor;

/// Luminance above which black is preferred over white.
pub const DEFAULT_LUMINANCE_THRESHOLD: f64 = 0.179;

/// Which side of the pair a list of candidates stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateRole {
    /// Candidates are text/element colors drawn on the fixed background.
    Foreground,
    /// Candidates are backgrounds under the fixed foreground.
    Background,
}

/// A candidate that passed [`ContrastEngine::select_first_conforming`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// Position of the candidate in the input list.
    pub index: usize,
    pub color: RgbaColor,
    pub contrast_ratio: f64,
    pub level: ConformanceLevel,
}

/// WCAG contrast operations with a configurable black/white threshold.
///
/// The engine is an immutable value; share it freely across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastEngine {
    luminance_threshold: f64,
}

impl Default for ContrastEngine {
    fn default() -> Self {
        Self::new(DEFAULT_LUMINANCE_THRESHOLD)
    }
}

impl ContrastEngine {
    pub const fn new(luminance_threshold: f64) -> Self {
        Self {
            luminance_threshold,
        }
    }

    pub const fn luminance_threshold(&self) -> f64 {
        self.luminance_threshold
    }

    /// Contrast ratio of `foreground` drawn on `background`.
    pub fn contrast_ratio(&self, foreground: &RgbaColor, background: &RgbaColor) -> f64 {
        RgbaColor::contrast_ratio(foreground, background)
    }

    /// Level reached by the pair for the given element type.
    pub fn conformance(
        &self,
        foreground: &RgbaColor,
        background: &RgbaColor,
        element: ElementType,
    ) -> ConformanceLevel {
        ConformanceLevel::classify(self.contrast_ratio(foreground, background), element)
    }

    pub fn is_valid_color_combination(
        &self,
        foreground: &RgbaColor,
        element: ElementType,
        background: &RgbaColor,
        level: ConformanceLevel,
    ) -> bool {
        RgbaColor::is_valid_color_combination(foreground, element, background, level)
    }

    /// Black or white, whichever reads better on `background`.
    pub fn pick_contrasting_color(&self, background: &RgbaColor) -> RgbaColor {
        self.by_luminance(background)
    }

    /// Black or white background, whichever suits `foreground` better.
    ///
    /// A translucent foreground is blended onto both candidates and the one
    /// with the higher ratio wins; on a tie black is kept. An opaque
    /// foreground uses the luminance threshold.
    pub fn pick_contrasting_background(&self, foreground: &RgbaColor) -> RgbaColor {
        if foreground.alpha < 1.0 {
            let on_white = self.contrast_ratio(foreground, &RgbaColor::WHITE);
            let on_black = self.contrast_ratio(foreground, &RgbaColor::BLACK);
            debug!(on_white, on_black, "translucent foreground");

            if on_white > on_black {
                RgbaColor::WHITE
            } else {
                RgbaColor::BLACK
            }
        } else {
            self.by_luminance(foreground)
        }
    }

    fn by_luminance(&self, color: &RgbaColor) -> RgbaColor {
        if color.relative_luminance() > self.luminance_threshold {
            RgbaColor::BLACK
        } else {
            RgbaColor::WHITE
        }
    }

    /// First candidate, in the given order, that reaches `level` against `fixed`.
    ///
    /// Candidates are a priority list: the first one that passes is returned
    /// even if a later one has more contrast.
    #[cfg_attr(debug_assertions, instrument(skip(self, candidates), fields(count = candidates.len())))]
    pub fn select_first_conforming(
        &self,
        candidates: &[RgbaColor],
        fixed: &RgbaColor,
        role: CandidateRole,
        element: ElementType,
        level: ConformanceLevel,
    ) -> Option<Selection> {
        candidates.iter().enumerate().find_map(|(index, candidate)| {
            let (ratio, achieved) = self.grade(candidate, fixed, role, element);

            if achieved >= level {
                debug!(index, ratio, %achieved, "candidate conforms");
                Some(Selection {
                    index,
                    color: *candidate,
                    contrast_ratio: ratio,
                    level: achieved,
                })
            } else {
                None
            }
        })
    }

    fn grade(
        &self,
        candidate: &RgbaColor,
        fixed: &RgbaColor,
        role: CandidateRole,
        element: ElementType,
    ) -> (f64, ConformanceLevel) {
        let (fg, bg) = match role {
            CandidateRole::Foreground => (candidate, fixed),
            CandidateRole::Background => (fixed, candidate),
        };
        let ratio = self.contrast_ratio(fg, bg);
        (ratio, ConformanceLevel::classify(ratio, element))
    }

    /// First text color from `colors` that conforms on `background`.
    ///
    /// Returns `None` when nothing conforms, or when the background or a
    /// candidate reached before a match cannot be converted.
    pub fn first_conforming_foreground<'a, T, B>(
        &self,
        colors: &'a [T],
        element: ElementType,
        background: &B,
        level: ConformanceLevel,
    ) -> Option<&'a T>
    where
        T: IntoRgba,
        B: IntoRgba + ?Sized,
    {
        self.first_conforming(colors, background, CandidateRole::Foreground, element, level)
    }

    /// First background from `colors` under which `foreground` conforms.
    ///
    /// Same conversion rules as [`Self::first_conforming_foreground`].
    pub fn first_conforming_background<'a, T, F>(
        &self,
        colors: &'a [T],
        foreground: &F,
        element: ElementType,
        level: ConformanceLevel,
    ) -> Option<&'a T>
    where
        T: IntoRgba,
        F: IntoRgba + ?Sized,
    {
        self.first_conforming(colors, foreground, CandidateRole::Background, element, level)
    }

    fn first_conforming<'a, T, C>(
        &self,
        colors: &'a [T],
        fixed: &C,
        role: CandidateRole,
        element: ElementType,
        level: ConformanceLevel,
    ) -> Option<&'a T>
    where
        T: IntoRgba,
        C: IntoRgba + ?Sized,
    {
        let Some(fixed) = fixed.to_rgba() else {
            warn!(?role, "fixed color not convertible to sRGB");
            return None;
        };

        for (index, color) in colors.iter().enumerate() {
            let Some(candidate) = color.to_rgba() else {
                warn!(index, "candidate not convertible to sRGB, aborting search");
                return None;
            };
            let (ratio, achieved) = self.grade(&candidate, &fixed, role, element);
            if achieved >= level {
                debug!(index, ratio, %achieved, "candidate conforms");
                return Some(color);
            }
        }

        None
    }

    /// [`Self::pick_contrasting_color`] for any convertible color.
    pub fn text_color_for<C: IntoRgba + ?Sized>(&self, background: &C) -> Option<RgbaColor> {
        background
            .to_rgba()
            .map(|bg| self.pick_contrasting_color(&bg))
    }

    /// [`Self::pick_contrasting_background`] for any convertible color.
    pub fn background_color_for<C: IntoRgba + ?Sized>(&self, foreground: &C) -> Option<RgbaColor> {
        foreground
            .to_rgba()
            .map(|fg| self.pick_contrasting_background(&fg))
    }
}
