//! Small helpers for reading and writing text, JSON and CSV files.
//!
//! Every helper opens its file, does its work and releases the handle before
//! returning. Nothing is shared between calls.

pub mod config;
pub mod core;
pub mod error;
pub mod io;

pub use crate::core::{
    PatternMatcher, collect_input_files, read_concatenated_row_dicts, without_file,
    write_csv_from_concatenated_csvs,
};
pub use error::{FileIoError, Result};
pub use io::{
    RowDict, TextLines, WriteMode, delete_last_n_lines_from_txt, line_count_from_signed,
    read_csv_as_row_dicts, read_json, read_txt_as_line_generator, read_txt_as_line_list,
    union_headers, write_csv_from_row_dicts, write_json, write_json_with_indent,
    write_txt_from_lines,
};
