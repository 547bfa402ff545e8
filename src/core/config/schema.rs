//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$TSTRIP_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/tstrip/config.toml`
//! 3. `~/.tstrip/config.toml` (canonical write location)
//!
//! # Validation
//!
//! Config values are validated after parsing: palettes must be non-empty
//! and every entry a `#rrggbb` color.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::Color;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// [bridges]
/// palette = ["#ff0000", "#0000ff", "#ffffff"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Bridge defaults
    pub bridges: Option<BridgeConfig>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(bridges) = &self.bridges {
            bridges.validate()?;
        }
        Ok(())
    }
}

/// Bridge defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BridgeConfig {
    /// Colors handed to new bridges, in preference order
    pub palette: Option<Vec<String>>,
}

impl BridgeConfig {
    /// Validate the bridge configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(palette) = &self.palette {
            if palette.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "bridge palette cannot be empty".to_string(),
                ));
            }
            for entry in palette {
                Color::parse(entry).map_err(|e| {
                    ConfigError::InvalidValue(format!("invalid bridge palette entry: {}", e))
                })?;
            }
        }
        Ok(())
    }

    /// Parsed palette colors, skipping anything that does not parse.
    pub fn colors(&self) -> Vec<Color> {
        self.palette
            .iter()
            .flatten()
            .filter_map(|c| Color::parse(c).ok())
            .collect()
    }
}
