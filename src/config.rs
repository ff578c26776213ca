//! TOML configuration with environment and command line layering.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::conformance::{ConformanceLevel, ElementType};
use crate::engine::{ContrastEngine, DEFAULT_LUMINANCE_THRESHOLD};

/// Prefix of environment variables read by [`WcagConfig::figment`].
pub const ENV_PREFIX: &str = "WCAG_";

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading/writing file
    Io(std::io::Error),
    /// TOML parsing error
    Parse(toml::de::Error),
    /// TOML serialization error
    Serialize(toml::ser::Error),
    /// Layered extraction failed
    Extract(figment::Error),
    /// Luminance threshold not a finite value in 0.0-1.0
    InvalidThreshold(f64),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "TOML parse error: {}", e),
            Self::Serialize(e) => write!(f, "TOML serialize error: {}", e),
            Self::Extract(e) => write!(f, "Configuration error: {}", e),
            Self::InvalidThreshold(v) => {
                write!(f, "Invalid luminance threshold {} (expected 0.0-1.0)", v)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Extract(e)
    }
}

/// Root configuration structure for TOML files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WcagConfig {
    /// Engine tuning
    pub engine: EngineConfig,
    /// Defaults for checks and candidate picking
    pub check: CheckConfig,
}

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Relative luminance above which black is chosen over white
    pub luminance_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            luminance_threshold: DEFAULT_LUMINANCE_THRESHOLD,
        }
    }
}

/// Default element type and level when a command does not give them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    pub element: ElementType,
    pub level: ConformanceLevel,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            element: ElementType::SmallFont,
            level: ConformanceLevel::AA,
        }
    }
}

/// Values set explicitly on the command line.
///
/// Unset fields are skipped during serialization so they do not shadow
/// lower layers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    pub engine: EngineOverrides,
    pub check: CheckOverrides,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EngineOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub luminance_threshold: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<ElementType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<ConformanceLevel>,
}

impl WcagConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Layers: defaults, then the TOML file (if any), then `WCAG_*` env vars.
    ///
    /// Nested keys use a double underscore, e.g.
    /// `WCAG_ENGINE__LUMINANCE_THRESHOLD=0.2`.
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(WcagConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Extract the layered configuration with command line overrides on top.
    pub fn extract(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(path)
            .merge(Serialized::defaults(overrides))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.engine.luminance_threshold;
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::InvalidThreshold(threshold));
        }
        Ok(())
    }

    /// Build the engine described by this configuration.
    pub fn engine(&self) -> ContrastEngine {
        ContrastEngine::new(self.engine.luminance_threshold)
    }
}
