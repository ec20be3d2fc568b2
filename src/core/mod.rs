pub mod csv_concat;
pub mod file_collector;
pub mod pattern_matcher;

pub use csv_concat::{read_concatenated_row_dicts, write_csv_from_concatenated_csvs};
pub use file_collector::{collect_input_files, without_file};
pub use pattern_matcher::PatternMatcher;
