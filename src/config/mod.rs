pub mod defaults;

pub use defaults::{DEFAULT_CSV_INCLUDE_PATTERNS, DEFAULT_JSON_INDENT, SKIPPED_DIRECTORIES};
