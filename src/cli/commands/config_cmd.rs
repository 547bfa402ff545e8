//! config command - Get, set, or list configuration values

use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};

use crate::cli::Context;
use crate::core::config::{BridgeConfig, Config, CONFIG_ENV};
use crate::ui::output;

const PALETTE_KEY: &str = "bridges.palette";

fn load(ctx: &Context) -> Result<Config> {
    let result = Config::load().context("Failed to load config")?;
    for warning in &result.warnings {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            ctx.verbosity(),
        );
    }
    Ok(result.config)
}

fn palette_value(config: &Config) -> String {
    config
        .palette()
        .colors()
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Get a configuration value.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let config = load(ctx)?;

    match key {
        PALETTE_KEY | "palette" => println!("{}", palette_value(&config)),
        _ => bail!("Unknown configuration key: {}", key),
    }
    Ok(())
}

/// Set a configuration value.
///
/// Writes to the file the config was loaded from, then `$TSTRIP_CONFIG`,
/// then the canonical global location.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let current = load(ctx)?;
    let mut global = current.global.clone();

    match key {
        PALETTE_KEY | "palette" => {
            let palette = value
                .split(',')
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect();
            global.bridges = Some(BridgeConfig {
                palette: Some(palette),
            });
        }
        _ => bail!("Unknown configuration key: {}", key),
    }

    let target = current
        .global_config_loaded_from()
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
    let path = match target {
        Some(path) => {
            Config::write_to(&path, &global).context("Failed to write config")?;
            path
        }
        None => Config::write_global(&global).context("Failed to write config")?,
    };

    output::success(
        format!("Set {} = {} in {}", key, value, path.display()),
        ctx.verbosity(),
    );
    Ok(())
}

/// List all configuration values.
pub fn list(ctx: &Context) -> Result<()> {
    let config = load(ctx)?;

    println!("# Global Configuration");
    match config.global_config_loaded_from() {
        Some(path) => println!("# loaded from {}", path.display()),
        None => println!("# no config file, using defaults"),
    }
    println!("{} = {}", PALETTE_KEY, palette_value(&config));

    Ok(())
}
