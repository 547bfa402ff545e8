//! verify command - Check a terminal strip document

use std::path::Path;

use anyhow::{bail, Result};

use super::load_strip;
use crate::cli::Context;
use crate::core::verify::fast_verify;
use crate::ui::output;

/// Load a strip document and check its invariants.
///
/// Fails if the document needed any recovery or the loaded strip does not
/// verify.
pub fn verify(ctx: &Context, path: &Path) -> Result<()> {
    let loaded = load_strip(ctx, path)?;
    let result = fast_verify(&loaded.strip);

    for error in &result.errors {
        output::error(error);
    }

    if !result.ok {
        bail!(
            "'{}' failed verification with {} error(s)",
            path.display(),
            result.errors.len()
        );
    }
    if !loaded.is_clean() {
        bail!(
            "'{}' needed {} recovery step(s)",
            path.display(),
            loaded.warnings.len()
        );
    }

    output::success(
        format!(
            "{}: ok ({} physical, {} real terminal(s), {} bridge(s))",
            path.display(),
            loaded.strip.physical_terminal_count(),
            loaded.strip.real_terminal_count(),
            loaded.strip.bridges().len()
        ),
        ctx.verbosity(),
    );
    Ok(())
}
