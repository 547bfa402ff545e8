//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Loads the strip document through [`load_strip`]
//! 3. Formats and displays output
//!
//! Problems recovered while loading are reported as warnings by every
//! command that reads a document.

mod completion;
mod config_cmd;
mod normalize;
mod show;
mod verify;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use normalize::normalize;
pub use show::show;
pub use verify::verify;

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use log::debug;

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use crate::core::strip::TerminalStrip;
use crate::core::xml::LoadResult;
use crate::ui::output;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Show { file, json } => show::show(ctx, &file, json),
        Command::Verify { file } => verify::verify(ctx, &file),
        Command::Normalize { file, output } => {
            normalize::normalize(ctx, &file, output.as_deref())
        }
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value } => config_cmd::set(ctx, &key, &value),
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Read and parse a strip document, reporting recovered problems.
pub(crate) fn load_strip(ctx: &Context, path: &Path) -> Result<LoadResult> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    let result = TerminalStrip::from_xml(&text)
        .with_context(|| format!("Failed to load '{}'", path.display()))?;

    for warning in &result.warnings {
        output::warn(warning, ctx.verbosity());
    }
    debug!(
        "loaded '{}' with {} warning(s)",
        path.display(),
        result.warnings.len()
    );
    Ok(result)
}
