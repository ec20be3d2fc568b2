//! CSV files as sequences of header-keyed row-dicts.
//!
//! ```text
//!     As .csv:  >>  As row-dicts:
//!     --------  >>  -------------------------------
//!     Foo,Bar   >>  [
//!     abc,123   >>      { "Foo": "abc", "Bar": "123" },
//!     3.1,$%^   >>      { "Foo": "3.1", "Bar": "$%^" },
//!               >>  ]
//! ```

use crate::error::{FileIoError, Result};
use crate::io::file_operations::{create_truncated, ensure_parent_dir, open_existing};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::{HashMap, HashSet};
use std::io::BufWriter;
use std::path::Path;
use tracing::{debug, instrument, warn};

/// Insertion-ordered mapping from column header to cell value.
///
/// Inserting an existing key replaces its value without moving it. Two
/// row-dicts are equal when they hold the same keys with the same values,
/// regardless of order.
#[derive(Debug, Clone, Default)]
pub struct RowDict {
    entries: Vec<(String, String)>,
}

impl RowDict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for RowDict {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for RowDict {}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RowDict {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = RowDict::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

impl Serialize for RowDict {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

fn csv_error(path: &Path, error: ::csv::Error) -> FileIoError {
    if error.is_io_error() {
        match error.into_kind() {
            ::csv::ErrorKind::Io(source) => FileIoError::from_io(path, source),
            other => FileIoError::parse(path, "CSV", format!("{:?}", other)),
        }
    } else {
        FileIoError::parse(path, "CSV", error)
    }
}

/// Reads the file as CSV, using the first record as the header row.
///
/// Every later record becomes one [`RowDict`], in file order. Records whose
/// field count differs from the header are reported as parse errors.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_csv_as_row_dicts(path: impl AsRef<Path>) -> Result<Vec<RowDict>> {
    let path = path.as_ref();
    let file = open_existing(path)?;
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(file);

    let headers = reader.headers().map_err(|e| csv_error(path, e))?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(path, e))?;
        let mut row = RowDict::with_capacity(headers.len());
        for (header, value) in headers.iter().zip(record.iter()) {
            row.insert(header, value);
        }
        rows.push(row);
    }

    debug!("Read {} rows with {} columns", rows.len(), headers.len());
    Ok(rows)
}

/// Writes a header row followed by one record per row-dict.
///
/// A non-empty `ordered_headers` is used verbatim as the column order;
/// otherwise the columns are the keys of the first row-dict. Keys missing
/// from a row are written as empty cells and keys outside the header are
/// dropped.
#[instrument(skip_all, fields(path = %path.as_ref().display(), rows = row_dicts.len()))]
pub fn write_csv_from_row_dicts(
    row_dicts: &[RowDict],
    path: impl AsRef<Path>,
    ordered_headers: Option<&[String]>,
) -> Result<()> {
    let path = path.as_ref();

    let headers: Vec<String> = match ordered_headers {
        Some(headers) if !headers.is_empty() => headers.to_vec(),
        _ => match row_dicts.first() {
            Some(first) => first.keys().map(str::to_string).collect(),
            None => {
                return Err(FileIoError::EmptyInput(format!(
                    "no rows and no headers to write to {}",
                    path.display()
                )));
            }
        },
    };
    if headers.is_empty() {
        return Err(FileIoError::EmptyInput(format!(
            "first row has no columns to use as the header of {}",
            path.display()
        )));
    }

    let positions: HashMap<&str, usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.as_str(), i))
        .collect();
    let dropped = row_dicts
        .iter()
        .flat_map(|row| row.keys())
        .filter(|key| !positions.contains_key(key))
        .count();
    if dropped > 0 {
        warn!(
            "Dropping {} cells whose keys are not in the header of {}",
            dropped,
            path.display()
        );
    }

    ensure_parent_dir(path)?;
    let file = create_truncated(path)?;
    let mut writer = ::csv::Writer::from_writer(BufWriter::new(file));

    writer
        .write_record(&headers)
        .map_err(|e| csv_error(path, e))?;
    let mut record: Vec<&str> = vec![""; headers.len()];
    for row in row_dicts {
        record.fill("");
        for (key, value) in row.iter() {
            if let Some(&i) = positions.get(key) {
                record[i] = value;
            }
        }
        writer
            .write_record(&record)
            .map_err(|e| csv_error(path, e))?;
    }
    writer.flush().map_err(|e| FileIoError::from_io(path, e))?;

    debug!("Wrote {} rows with {} columns", row_dicts.len(), headers.len());
    Ok(())
}

/// Preferred headers first, then every other key in first-seen order.
pub fn union_headers(row_dicts: &[RowDict], preferred: Option<&[String]>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut headers = Vec::new();

    let preferred = preferred.unwrap_or_default().iter().map(String::as_str);
    for key in preferred.chain(row_dicts.iter().flat_map(|row| row.keys())) {
        if seen.insert(key) {
            headers.push(key.to_string());
        }
    }

    headers
}
