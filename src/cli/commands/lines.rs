use anyhow::Result;
use filekit::read_txt_as_line_generator;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub fn execute(file: &Path, limit: Option<usize>) -> Result<()> {
    let lines = read_txt_as_line_generator(file)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for line in lines.take(limit.unwrap_or(usize::MAX)) {
        writeln!(out, "{}", line?)?;
    }

    out.flush()?;
    Ok(())
}
