/// Spaces per nesting level used by `write_json`.
pub const DEFAULT_JSON_INDENT: usize = 4;

pub const DEFAULT_CSV_INCLUDE_PATTERNS: &[&str] = &["*.csv"];

/// Directory names never descended into when collecting inputs.
pub const SKIPPED_DIRECTORIES: &[&str] = &[
    ".git",
    ".svn",
    ".hg",
    "node_modules",
    "__pycache__",
    ".venv",
    "target",
];
