use crate::error::Result;
use crate::io::csv::{RowDict, read_csv_as_row_dicts, write_csv_from_row_dicts};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Reads every input in order and concatenates their rows.
///
/// Rows keep their order within each file and files keep the order they
/// were given in. Headers are not checked for consistency across files.
#[instrument(skip_all, fields(inputs = input_paths.len()))]
pub fn read_concatenated_row_dicts<P: AsRef<Path>>(input_paths: &[P]) -> Result<Vec<RowDict>> {
    let mut rows = Vec::new();

    for input in input_paths {
        let input = input.as_ref();
        let file_rows = read_csv_as_row_dicts(input)?;
        debug!("Read {} rows from {}", file_rows.len(), input.display());
        rows.extend(file_rows);
    }

    Ok(rows)
}

/// Concatenates the CSV files at `input_paths` into `output_path`.
///
/// The output header is inferred from the first row across all inputs.
/// Every input is read before the output is opened, so a missing input
/// leaves the output untouched. Returns the number of data rows written.
#[instrument(skip_all, fields(inputs = input_paths.len(), output = %output_path.as_ref().display()))]
pub fn write_csv_from_concatenated_csvs<P: AsRef<Path>>(
    input_paths: &[P],
    output_path: impl AsRef<Path>,
) -> Result<usize> {
    let output_path = output_path.as_ref();
    let rows = read_concatenated_row_dicts(input_paths)?;

    write_csv_from_row_dicts(&rows, output_path, None)?;

    info!(
        "Concatenated {} files into {} ({} rows)",
        input_paths.len(),
        output_path.display(),
        rows.len()
    );
    Ok(rows.len())
}
