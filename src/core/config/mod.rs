//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$TSTRIP_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/tstrip/config.toml`
//! 3. `~/.tstrip/config.toml` (canonical write location)
//!
//! # Example
//!
//! ```no_run
//! use terminalstrip::core::config::Config;
//! use terminalstrip::core::strip::TerminalStrip;
//!
//! let config = Config::load().unwrap().config;
//! let strip = TerminalStrip::new("plant", "cabinet 1", "X1").with_palette(config.palette());
//! println!("{} bridge colors", strip.palette().colors().len());
//! ```

pub mod schema;

pub use schema::{BridgeConfig, GlobalConfig};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use super::bridge::BridgePalette;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TSTRIP_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Effective configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed or
    /// fails validation. Missing config files are not an error.
    pub fn load() -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();
        let path = Self::find_global(&mut warnings);
        match path {
            Some(path) => {
                let mut result = Self::load_from(&path)?;
                result.warnings.splice(0..0, warnings);
                Ok(result)
            }
            None => Ok(ConfigLoadResult {
                config: Config::default(),
                warnings,
            }),
        }
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<ConfigLoadResult, ConfigError> {
        let global = Self::read_global_config(path)?;
        global.validate()?;
        debug!("loaded config from {}", path.display());

        Ok(ConfigLoadResult {
            config: Config {
                global,
                global_path: Some(path.to_path_buf()),
            },
            warnings: Vec::new(),
        })
    }

    /// Locate the global config file, if any.
    fn find_global(warnings: &mut Vec<ConfigWarning>) -> Option<PathBuf> {
        // 1. Check $TSTRIP_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
            warnings.push(ConfigWarning {
                message: format!("{} points at a missing file", CONFIG_ENV),
                path,
            });
        }

        // 2. Check $XDG_CONFIG_HOME/tstrip/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("tstrip/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.tstrip/config.toml
        let path = dirs::home_dir()?.join(".tstrip/config.toml");
        path.exists().then_some(path)
    }

    /// Read and parse a global config file.
    fn read_global_config(path: &Path) -> Result<GlobalConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical path for global config.
    ///
    /// Returns `~/.tstrip/config.toml`.
    pub fn global_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".tstrip/config.toml"))
    }

    /// Write global config atomically to its canonical location.
    pub fn write_global(config: &GlobalConfig) -> Result<PathBuf, ConfigError> {
        let path = Self::global_config_path()?;
        Self::write_to(&path, config)?;
        Ok(path)
    }

    /// Validate and write a global config file atomically.
    ///
    /// Creates parent directories if needed. Writes to a temp file next to
    /// `path`, then renames it over.
    pub fn write_to(path: &Path, config: &GlobalConfig) -> Result<(), ConfigError> {
        config.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    /// Palette for new bridges.
    ///
    /// Defaults to red, blue, white, dark gray, black if not configured.
    pub fn palette(&self) -> BridgePalette {
        let colors = self
            .global
            .bridges
            .as_ref()
            .map(BridgeConfig::colors)
            .unwrap_or_default();
        BridgePalette::new(colors)
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }
}
