use crate::error::{FileIoError, Result};
use std::fs::{self, File, OpenOptions};
use std::path::Path;

/// Opens an existing file for reading, reporting a missing path as `FileNotFound`.
pub fn open_existing(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| FileIoError::from_io(path, e))
}

pub fn create_truncated(path: &Path) -> Result<File> {
    File::create(path).map_err(|e| FileIoError::from_io(path, e))
}

pub fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| FileIoError::from_io(path, e))
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| FileIoError::from_io(parent, e))
        }
        _ => Ok(()),
    }
}
