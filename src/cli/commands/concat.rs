use anyhow::{Context, Result};
use filekit::{
    collect_input_files, read_concatenated_row_dicts, union_headers,
    without_file, write_csv_from_concatenated_csvs, write_csv_from_row_dicts,
};
use std::path::{Path, PathBuf};
use tracing::info;

pub fn execute(
    paths: &[PathBuf],
    output: &Path,
    include: &[String],
    exclude: &[String],
    use_union_headers: bool,
) -> Result<()> {
    let inputs = without_file(collect_input_files(paths, include, exclude)?, output);
    if inputs.is_empty() {
        anyhow::bail!("No CSV files found in the given paths");
    }

    info!("Concatenating {} files", inputs.len());

    let rows_written = if use_union_headers {
        let rows = read_concatenated_row_dicts(&inputs)?;
        let headers = union_headers(&rows, None);
        write_csv_from_row_dicts(&rows, output, Some(headers.as_slice()))
            .with_context(|| format!("Failed to write {}", output.display()))?;
        rows.len()
    } else {
        write_csv_from_concatenated_csvs(&inputs, output)
            .with_context(|| format!("Failed to write {}", output.display()))?
    };

    println!(
        "Wrote {} rows from {} files to {}",
        rows_written,
        inputs.len(),
        output.display()
    );
    Ok(())
}
