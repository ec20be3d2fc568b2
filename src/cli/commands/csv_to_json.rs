use anyhow::{Context, Result};
use filekit::{read_csv_as_row_dicts, write_json_with_indent};
use std::path::Path;
use tracing::info;

pub fn execute(input: &Path, output: &Path, indent: usize) -> Result<()> {
    let rows = read_csv_as_row_dicts(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    write_json_with_indent(&rows, output, indent)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Converted {} rows to {}", rows.len(), output.display());
    Ok(())
}
