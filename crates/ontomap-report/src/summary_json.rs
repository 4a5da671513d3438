//! Machine-readable run summary.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use ontomap_model::RunSummary;

/// Write the run summary as pretty-printed JSON.
pub fn write_summary_json(path: &Path, summary: &RunSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).context("serialize run summary")?;
    std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "wrote run summary");
    Ok(())
}
