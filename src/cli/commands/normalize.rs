//! normalize command - Rewrite a terminal strip document in canonical form

use std::io::Write;
use std::path::Path;

use anyhow::{Context as _, Result};
use log::debug;
use tempfile::NamedTempFile;

use super::load_strip;
use crate::cli::Context;
use crate::ui::output;

/// Write `text` to a temp file next to `target`, then move it over.
///
/// The temp file is removed again if any step fails.
fn write_atomic(target: &Path, text: &str) -> Result<()> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in '{}'", dir.display()))?;
    temp.write_all(text.as_bytes())
        .with_context(|| format!("Failed to write '{}'", temp.path().display()))?;
    temp.persist(target)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace '{}'", target.display()))?;
    Ok(())
}

/// Load a strip document and write it back, to `out` if given.
pub fn normalize(ctx: &Context, path: &Path, out: Option<&Path>) -> Result<()> {
    let loaded = load_strip(ctx, path)?;
    let xml = loaded.strip.to_xml().context("Failed to serialize strip")?;

    let target = out.unwrap_or(path);
    write_atomic(target, &xml)?;
    debug!("normalized '{}' into '{}'", path.display(), target.display());

    output::success(
        format!(
            "Wrote {} ({} warning(s) recovered)",
            target.display(),
            loaded.warnings.len()
        ),
        ctx.verbosity(),
    );
    Ok(())
}
