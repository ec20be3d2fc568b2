use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileIoError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to parse {format} in {}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        format: &'static str,
        message: String,
    },

    #[error("Invalid write mode: {0} (expected 'overwrite' or 'append')")]
    InvalidMode(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {}: {message}", .path.display())]
    Serialize { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, FileIoError>;

impl FileIoError {
    /// Maps an IO error for `path`, turning `NotFound` into [`FileIoError::FileNotFound`].
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            FileIoError::FileNotFound(path.to_path_buf())
        } else {
            FileIoError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub fn parse(path: &Path, format: &'static str, message: impl ToString) -> Self {
        FileIoError::Parse {
            path: path.to_path_buf(),
            format,
            message: message.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FileIoError::FileNotFound(_))
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, FileIoError::Parse { .. })
    }
}
