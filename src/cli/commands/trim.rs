use anyhow::{Context, Result};
use filekit::{delete_last_n_lines_from_txt, line_count_from_signed};
use std::path::Path;
use tracing::info;

pub fn execute(file: &Path, count: i64) -> Result<()> {
    let count = line_count_from_signed(count)?;

    delete_last_n_lines_from_txt(file, count)
        .with_context(|| format!("Failed to trim {}", file.display()))?;

    info!("Deleted up to {} lines from {}", count, file.display());
    Ok(())
}
