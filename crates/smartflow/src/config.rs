//! Layout configuration.
//!
//! The global gap can be loaded from TOML:
//!
//! ```toml
//! [gap]
//! x = 7.0
//! y = 12.0
//! ```
//!
//! Missing keys fall back to their defaults, so an empty document is a valid
//! configuration.
//!
//! ```
//! use smartflow::config::FlowConfig;
//!
//! let config = FlowConfig::from_toml_str("[gap]\ny = 12.0\n").unwrap();
//! assert_eq!(config.gap.x, 7.0);
//! assert_eq!(config.gap.y, 12.0);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layout::{DEFAULT_GAP, Gap};

/// Configuration for a [`SmartFlowLayout`](crate::layout::SmartFlowLayout).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Global spacing between widgets and rows.
    pub gap: GapConfig,
}

/// The `[gap]` table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GapConfig {
    /// Horizontal spacing between widgets.
    pub x: f32,
    /// Vertical spacing between rows.
    pub y: f32,
}

impl Default for GapConfig {
    fn default() -> Self {
        Self {
            x: DEFAULT_GAP.x,
            y: DEFAULT_GAP.y,
        }
    }
}

impl From<GapConfig> for Gap {
    fn from(config: GapConfig) -> Self {
        Gap::new(config.x, config.y)
    }
}

impl FlowConfig {
    /// Parse and validate a configuration from a TOML string.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|e| Error::parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(target: "smartflow::config", path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::serialize(e.to_string()))
    }

    /// Check that every gap is finite and not negative.
    pub fn validate(&self) -> Result<()> {
        check_gap("gap.x", self.gap.x)?;
        check_gap("gap.y", self.gap.y)
    }
}

fn check_gap(field: &str, value: f32) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::invalid_value(field, "must be finite"));
    }
    if value < 0.0 {
        return Err(Error::invalid_value(field, format!("must not be negative, got {value}")));
    }
    Ok(())
}
