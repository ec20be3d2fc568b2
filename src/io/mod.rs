pub mod csv;
pub mod file_operations;
pub mod json;
pub mod text;

pub use self::csv::{RowDict, read_csv_as_row_dicts, union_headers, write_csv_from_row_dicts};
pub use json::{read_json, write_json, write_json_with_indent};
pub use text::{
    TextLines, WriteMode, delete_last_n_lines_from_txt, line_count_from_signed,
    read_txt_as_line_generator, read_txt_as_line_list, write_txt_from_lines,
};
