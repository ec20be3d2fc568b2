//! Line-oriented text file helpers.
//!
//! Reading splits on universal newlines (`\n`, `\r\n` and a lone `\r`) and
//! strips the terminator from every line. Writing joins lines with `\n` and
//! never appends a trailing newline.

use crate::error::{FileIoError, Result};
use crate::io::file_operations::{create_truncated, open_append, open_existing};
use std::collections::VecDeque;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate the file, creating it if needed.
    #[default]
    Overwrite,
    /// Add to the end of the file, creating it if needed.
    Append,
}

impl FromStr for WriteMode {
    type Err = FileIoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "overwrite" => Ok(WriteMode::Overwrite),
            "append" => Ok(WriteMode::Append),
            other => Err(FileIoError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteMode::Overwrite => f.write_str("overwrite"),
            WriteMode::Append => f.write_str("append"),
        }
    }
}

/// Lazy, single-pass iterator over the lines of a text file.
///
/// Created by [`read_txt_as_line_generator`]. The underlying handle is closed
/// when the iterator is dropped.
pub struct TextLines<R = BufReader<File>> {
    reader: R,
    path: PathBuf,
    buf: Vec<u8>,
    pending: VecDeque<String>,
    finished: bool,
}

impl<R: BufRead> TextLines<R> {
    pub fn new(reader: R, path: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            path: path.into(),
            buf: Vec::new(),
            pending: VecDeque::new(),
            finished: false,
        }
    }

    fn read_next_chunk(&mut self) -> Result<bool> {
        self.buf.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(|e| FileIoError::from_io(&self.path, e))?;
        if read == 0 {
            return Ok(false);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }

        let text = std::str::from_utf8(&self.buf)
            .map_err(|e| FileIoError::parse(&self.path, "UTF-8 text", e))?;

        // A lone '\r' inside the chunk is a line break of its own.
        self.pending.extend(text.split('\r').map(str::to_string));
        Ok(true)
    }
}

impl<R: BufRead> Iterator for TextLines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }
            if self.finished {
                return None;
            }
            match self.read_next_chunk() {
                Ok(true) => continue,
                Ok(false) => {
                    self.finished = true;
                    return None;
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_txt_as_line_generator(path: impl AsRef<Path>) -> Result<TextLines> {
    let path = path.as_ref();
    let file = open_existing(path)?;
    Ok(TextLines::new(BufReader::new(file), path))
}

#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_txt_as_line_list(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let lines = read_txt_as_line_generator(path)?.collect::<Result<Vec<_>>>()?;
    debug!("Read {} lines", lines.len());
    Ok(lines)
}

/// Writes `lines` joined by `\n`, without a trailing newline.
///
/// In [`WriteMode::Append`] the content is added directly after whatever the
/// file already ends with; no separator is inserted.
#[instrument(skip_all, fields(path = %path.as_ref().display(), mode = %mode))]
pub fn write_txt_from_lines<I>(lines: I, path: impl AsRef<Path>, mode: WriteMode) -> Result<()>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let path = path.as_ref();
    let file = match mode {
        WriteMode::Overwrite => create_truncated(path)?,
        WriteMode::Append => open_append(path)?,
    };
    let mut writer = BufWriter::new(file);
    let io_err = |e: std::io::Error| FileIoError::from_io(path, e);

    let mut count = 0usize;
    for line in lines {
        if count > 0 {
            writer.write_all(b"\n").map_err(io_err)?;
        }
        writer.write_all(line.as_ref().as_bytes()).map_err(io_err)?;
        count += 1;
    }
    writer.flush().map_err(io_err)?;

    debug!("Wrote {} lines", count);
    Ok(())
}

/// Converts a caller-supplied signed count into a line count.
pub fn line_count_from_signed(n: i64) -> Result<usize> {
    usize::try_from(n).map_err(|_| {
        FileIoError::InvalidArgument(format!("line count must not be negative, got {}", n))
    })
}

/// Removes the last `n` lines from the file in place.
///
/// The remaining lines are rewritten joined by `\n` without a trailing
/// newline. Deleting zero lines leaves the file untouched.
#[instrument(skip_all, fields(path = %path.as_ref().display(), n = n))]
pub fn delete_last_n_lines_from_txt(path: impl AsRef<Path>, n: usize) -> Result<()> {
    let path = path.as_ref();
    let mut lines = read_txt_as_line_list(path)?;
    if n == 0 {
        return Ok(());
    }

    let keep = lines.len().saturating_sub(n);
    debug!("Keeping {} of {} lines", keep, lines.len());
    lines.truncate(keep);

    write_txt_from_lines(&lines, path, WriteMode::Overwrite)
}
