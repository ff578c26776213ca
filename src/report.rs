//! Serializable results printed by the command line front-end.

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::conformance::{ConformanceLevel, ElementType};
use crate::engine::{CandidateRole, ContrastEngine, Selection};
use crate::rgba::RgbaColor;

/// Level reached for one element type.
#[derive(Debug, Clone, Serialize)]
pub struct LevelEntry {
    pub element: ElementType,
    pub level: ConformanceLevel,
}

/// Contrast of a pair, graded for every element type.
#[derive(Debug, Clone, Serialize)]
pub struct RatioReport {
    pub foreground: String,
    pub background: String,
    pub contrast_ratio: f64,
    pub levels: Vec<LevelEntry>,
}

impl RatioReport {
    pub fn new(engine: &ContrastEngine, foreground: &RgbaColor, background: &RgbaColor) -> Self {
        let contrast_ratio = engine.contrast_ratio(foreground, background);
        let levels = ElementType::ALL
            .into_iter()
            .map(|element| LevelEntry {
                element,
                level: ConformanceLevel::classify(contrast_ratio, element),
            })
            .collect();

        Self {
            foreground: foreground.to_hex(),
            background: background.to_hex(),
            contrast_ratio,
            levels,
        }
    }
}

/// Pass/fail of a pair against a required level.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub foreground: String,
    pub background: String,
    pub element: ElementType,
    pub contrast_ratio: f64,
    pub achieved: ConformanceLevel,
    pub required: ConformanceLevel,
    pub passes: bool,
}

impl CheckReport {
    pub fn new(
        engine: &ContrastEngine,
        foreground: &RgbaColor,
        background: &RgbaColor,
        element: ElementType,
        required: ConformanceLevel,
    ) -> Self {
        let contrast_ratio = engine.contrast_ratio(foreground, background);
        let achieved = ConformanceLevel::classify(contrast_ratio, element);

        Self {
            foreground: foreground.to_hex(),
            background: background.to_hex(),
            element,
            contrast_ratio,
            achieved,
            required,
            passes: achieved >= required,
        }
    }
}

/// Black or white pick for a given color.
#[derive(Debug, Clone, Serialize)]
pub struct PickReport {
    pub input: String,
    pub role: CandidateRole,
    pub picked: String,
    pub contrast_ratio: f64,
}

impl PickReport {
    /// `role` is the side of the pair the picked color plays.
    pub fn new(engine: &ContrastEngine, input: &RgbaColor, role: CandidateRole) -> Self {
        let (picked, contrast_ratio) = match role {
            CandidateRole::Foreground => {
                let picked = engine.pick_contrasting_color(input);
                (picked, engine.contrast_ratio(&picked, input))
            }
            CandidateRole::Background => {
                let picked = engine.pick_contrasting_background(input);
                (picked, engine.contrast_ratio(input, &picked))
            }
        };

        Self {
            input: input.to_hex(),
            role,
            picked: picked.to_hex(),
            contrast_ratio,
        }
    }
}

/// Outcome of a first-conforming search over a candidate list.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionReport {
    pub fixed: String,
    pub role: CandidateRole,
    pub element: ElementType,
    pub required: ConformanceLevel,
    /// Candidate as given on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achieved: Option<ConformanceLevel>,
}

impl SelectionReport {
    pub fn new(
        fixed: &RgbaColor,
        role: CandidateRole,
        element: ElementType,
        required: ConformanceLevel,
        inputs: &[String],
        selection: Option<Selection>,
    ) -> Self {
        Self {
            fixed: fixed.to_hex(),
            role,
            element,
            required,
            selected: selection.and_then(|s| inputs.get(s.index).cloned()),
            index: selection.map(|s| s.index),
            contrast_ratio: selection.map(|s| s.contrast_ratio),
            achieved: selection.map(|s| s.level),
        }
    }

    pub fn found(&self) -> bool {
        self.index.is_some()
    }
}

/// Ratio truncated to two decimals for display.
///
/// Rounding would print `4.50` for a pair at 4.497 that fails AA.
pub fn display_ratio(contrast_ratio: f64) -> f64 {
    (contrast_ratio * 100.0).floor() / 100.0
}

/// Human readable rendering for [`OutputFormat::Text`].
pub trait TextReport {
    fn to_text(&self) -> String;
}

impl TextReport for RatioReport {
    fn to_text(&self) -> String {
        let mut out = format!(
            "{} on {}: {:.2}:1",
            self.foreground,
            self.background,
            display_ratio(self.contrast_ratio)
        );
        for entry in &self.levels {
            out.push_str(&format!("\n  {:<14} {}", entry.element.name(), entry.level));
        }
        out
    }
}

impl TextReport for CheckReport {
    fn to_text(&self) -> String {
        format!(
            "{} on {}: {:.2}:1, {} for {} (required {}): {}",
            self.foreground,
            self.background,
            display_ratio(self.contrast_ratio),
            self.achieved,
            self.element,
            self.required,
            if self.passes { "pass" } else { "fail" }
        )
    }
}

impl TextReport for PickReport {
    fn to_text(&self) -> String {
        let role = match self.role {
            CandidateRole::Foreground => "text",
            CandidateRole::Background => "background",
        };
        format!(
            "{} {} for {} ({:.2}:1)",
            self.picked,
            role,
            self.input,
            display_ratio(self.contrast_ratio)
        )
    }
}

impl TextReport for SelectionReport {
    fn to_text(&self) -> String {
        match (&self.selected, self.contrast_ratio, self.achieved) {
            (Some(selected), Some(ratio), Some(achieved)) => format!(
                "{} ({:.2}:1, {} for {})",
                selected,
                display_ratio(ratio),
                achieved,
                self.element
            ),
            _ => format!(
                "no candidate reaches {} for {} against {}",
                self.required, self.element, self.fixed
            ),
        }
    }
}

/// Render a report in the requested format.
pub fn render<R>(report: &R, format: OutputFormat) -> Result<String, String>
where
    R: Serialize + TextReport,
{
    match format {
        OutputFormat::Text => Ok(report.to_text()),
        OutputFormat::Json => serde_json::to_string_pretty(report).map_err(|e| e.to_string()),
        OutputFormat::Yaml => serde_yaml::to_string(report)
            .map(|s| s.trim_end().to_string())
            .map_err(|e| e.to_string()),
    }
}
