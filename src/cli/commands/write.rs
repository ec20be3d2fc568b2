use anyhow::{Context, Result};
use filekit::{WriteMode, write_txt_from_lines};
use std::path::Path;
use tracing::info;

pub fn execute(file: &Path, lines: &[String], mode: &str) -> Result<()> {
    let mode: WriteMode = mode.parse()?;

    write_txt_from_lines(lines, file, mode)
        .with_context(|| format!("Failed to write {}", file.display()))?;

    info!("Wrote {} lines to {} ({})", lines.len(), file.display(), mode);
    Ok(())
}
