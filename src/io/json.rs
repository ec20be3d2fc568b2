use crate::config::DEFAULT_JSON_INDENT;
use crate::error::{FileIoError, Result};
use crate::io::file_operations::{create_truncated, ensure_parent_dir, open_existing};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::PrettyFormatter;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, instrument};

/// Parses the whole file as JSON.
///
/// Use `serde_json::Value` as `T` when the shape of the document is not known.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let reader = BufReader::new(open_existing(path)?);

    serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            FileIoError::from_io(path, e.into())
        } else {
            FileIoError::parse(path, "JSON", e)
        }
    })
}

/// Writes `value` as pretty-printed JSON, replacing any existing content.
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: impl AsRef<Path>) -> Result<()> {
    write_json_with_indent(value, path, DEFAULT_JSON_INDENT)
}

#[instrument(skip_all, fields(path = %path.as_ref().display(), indent = indent))]
pub fn write_json_with_indent<T: Serialize + ?Sized>(
    value: &T,
    path: impl AsRef<Path>,
    indent: usize,
) -> Result<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;

    let indent_bytes = " ".repeat(indent);
    let mut writer = BufWriter::new(create_truncated(path)?);
    let mut serializer = serde_json::Serializer::with_formatter(
        &mut writer,
        PrettyFormatter::with_indent(indent_bytes.as_bytes()),
    );

    value.serialize(&mut serializer).map_err(|e| {
        if e.is_io() {
            FileIoError::from_io(path, e.into())
        } else {
            FileIoError::Serialize {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        }
    })?;
    writer.flush().map_err(|e| FileIoError::from_io(path, e))?;

    debug!("Wrote JSON to {}", path.display());
    Ok(())
}
