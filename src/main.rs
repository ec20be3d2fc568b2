mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Commands::Concat {
            paths,
            output,
            include,
            exclude,
            union_headers,
        } => cli::commands::concat::execute(&paths, &output, &include, &exclude, union_headers),
        Commands::Trim { file, count } => cli::commands::trim::execute(&file, count),
        Commands::Lines { file, limit } => cli::commands::lines::execute(&file, limit),
        Commands::Write { file, lines, mode } => {
            cli::commands::write::execute(&file, &lines, &mode)
        }
        Commands::CsvToJson {
            input,
            output,
            indent,
        } => cli::commands::csv_to_json::execute(&input, &output, indent),
    }
}
