//! CLI argument parsing and command handling.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::{CheckOverrides, ConfigOverrides, EngineOverrides};
use crate::conformance::{ConformanceLevel, ElementType, FontProps};
use crate::logging::DEFAULT_LOG_LEVEL;

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable text (default)
    #[default]
    Text,
    /// Pretty printed JSON
    Json,
    /// YAML
    Yaml,
}

/// CLI-compatible element type enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ElementArg {
    /// Regular text below 18pt (bold below 14pt)
    SmallFont,
    /// Text of at least 18pt, or bold of at least 14pt
    LargeFont,
    /// Graphical objects and UI components
    UiComponents,
}

impl From<ElementArg> for ElementType {
    fn from(arg: ElementArg) -> Self {
        match arg {
            ElementArg::SmallFont => ElementType::SmallFont,
            ElementArg::LargeFont => ElementType::LargeFont,
            ElementArg::UiComponents => ElementType::UiComponents,
        }
    }
}

/// CLI-compatible conformance level enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    /// Level A
    #[value(name = "a")]
    A,
    /// Level AA
    #[value(name = "aa")]
    Aa,
    /// Level AAA
    #[value(name = "aaa")]
    Aaa,
}

impl From<LevelArg> for ConformanceLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::A => ConformanceLevel::A,
            LevelArg::Aa => ConformanceLevel::AA,
            LevelArg::Aaa => ConformanceLevel::AAA,
        }
    }
}

/// Validate a CSS color argument without converting it yet.
fn css_color(s: &str) -> Result<String, String> {
    s.parse::<csscolorparser::Color>()
        .map(|_| s.to_string())
        .map_err(|e| e.to_string())
}

/// WCAG 2.0 contrast ratios, conformance levels and accessible color picking.
#[derive(Parser, Debug)]
#[command(name = "wcag-colors")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Load configuration from TOML file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Relative luminance above which black is picked over white (default 0.179)
    #[arg(long, value_name = "LUMINANCE", global = true)]
    pub luminance_threshold: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Append logs to this file instead of stderr
    #[arg(long, value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (RUST_LOG takes precedence)
    #[arg(long, value_name = "LEVEL", default_value = DEFAULT_LOG_LEVEL, global = true)]
    pub log_level: String,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Contrast ratio of a pair and the level it reaches per element type
    Ratio {
        /// Foreground color in any CSS format (hex, rgb(), hsl(), named)
        #[arg(value_parser = css_color)]
        foreground: String,
        /// Background color in any CSS format (alpha is ignored)
        #[arg(value_parser = css_color)]
        background: String,
    },

    /// Check a pair against a conformance level (exit code 1 on failure)
    Check {
        #[arg(value_parser = css_color)]
        foreground: String,
        #[arg(value_parser = css_color)]
        background: String,
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Black or white text color for a background
    TextColor {
        #[arg(value_parser = css_color)]
        background: String,
    },

    /// Black or white background for a text color
    BackgroundColor {
        #[arg(value_parser = css_color)]
        foreground: String,
    },

    /// First text color, in the given order, that conforms on a background
    PickForeground {
        /// Background the text is drawn on
        #[arg(short, long, value_parser = css_color)]
        background: String,
        #[command(flatten)]
        target: TargetArgs,
        /// Candidate colors, most preferred first
        #[arg(required = true, value_parser = css_color)]
        candidates: Vec<String>,
    },

    /// First background, in the given order, under which a text color conforms
    PickBackground {
        /// Text color drawn on the background
        #[arg(short, long, value_parser = css_color)]
        foreground: String,
        #[command(flatten)]
        target: TargetArgs,
        /// Candidate colors, most preferred first
        #[arg(required = true, value_parser = css_color)]
        candidates: Vec<String>,
    },
}

/// Element type and required level for checks and picks.
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// What the foreground is used for (default from config: small-font)
    #[arg(short, long, value_enum)]
    pub element: Option<ElementArg>,

    /// Text size in points, derives the element type instead of --element
    #[arg(long, value_name = "POINTS", conflicts_with = "element")]
    pub font_size: Option<f64>,

    /// The text is bold (with --font-size)
    #[arg(long, requires = "font_size")]
    pub bold: bool,

    /// Required conformance level (default from config: aa)
    #[arg(short, long, value_enum, ignore_case = true)]
    pub level: Option<LevelArg>,
}

impl TargetArgs {
    /// Element type given explicitly or through font properties.
    pub fn element_type(&self) -> Option<ElementType> {
        match (self.element, self.font_size) {
            (Some(element), _) => Some(element.into()),
            (None, Some(size)) => Some(FontProps::new(size, self.bold).into()),
            (None, None) => None,
        }
    }

    pub fn level(&self) -> Option<ConformanceLevel> {
        self.level.map(Into::into)
    }
}

impl Cli {
    /// Target arguments of the selected command, if it has any.
    pub fn target(&self) -> Option<&TargetArgs> {
        match &self.command {
            Some(Command::Check { target, .. })
            | Some(Command::PickForeground { target, .. })
            | Some(Command::PickBackground { target, .. }) => Some(target),
            _ => None,
        }
    }

    /// Convert CLI args to config overrides for Figment merging.
    ///
    /// Only fields that are explicitly set on the CLI are serialized, so
    /// TOML and environment settings stay in effect otherwise.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let target = self.target();

        ConfigOverrides {
            engine: EngineOverrides {
                luminance_threshold: self.luminance_threshold,
            },
            check: CheckOverrides {
                element: target.and_then(TargetArgs::element_type),
                level: target.and_then(TargetArgs::level),
            },
        }
    }
}
