use clap::{Parser, Subcommand};
use filekit::config::DEFAULT_JSON_INDENT;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "filekit")]
#[command(version, about = "Read, write, trim and concatenate text, JSON and CSV files")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Concatenate CSV files into one, in the order given
    Concat {
        /// CSV files or directories to search for CSV files
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output CSV file
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Patterns selecting files inside directories (default: *.csv)
        #[arg(short = 'i', long)]
        include: Vec<String>,

        /// Patterns to exclude inside directories
        #[arg(short = 'e', long)]
        exclude: Vec<String>,

        /// Use every column seen in any input instead of the first row's columns
        #[arg(long)]
        union_headers: bool,
    },
    /// Delete the last lines of a text file
    Trim {
        /// Text file to modify in place
        file: PathBuf,

        /// Number of lines to delete
        #[arg(allow_hyphen_values = true)]
        count: i64,
    },
    /// Print the lines of a text file
    Lines {
        /// Text file to read
        file: PathBuf,

        /// Stop after this many lines
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Write lines to a text file
    Write {
        /// Text file to write
        file: PathBuf,

        /// Lines to write, joined by newlines
        lines: Vec<String>,

        /// Write mode: overwrite or append
        #[arg(short = 'm', long, default_value = "overwrite")]
        mode: String,
    },
    /// Convert a CSV file into a JSON array of row objects
    CsvToJson {
        /// CSV file to read
        input: PathBuf,

        /// JSON file to write
        output: PathBuf,

        /// Spaces per indentation level
        #[arg(long, default_value_t = DEFAULT_JSON_INDENT)]
        indent: usize,
    },
}
