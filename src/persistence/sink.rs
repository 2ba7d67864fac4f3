// * Sink Writer: one probe URL per line, to a file or stdout.

use crate::config::ConfigError;
use crate::persistence::dedup::DomainParameterMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    File(PathBuf),
}

impl Sink {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Sink::Stdout, Sink::File)
    }

    pub fn describe(&self) -> String {
        match self {
            Sink::Stdout => "stdout".to_string(),
            Sink::File(path) => path.display().to_string(),
        }
    }

    // * Files are created or truncated here, before any fetching starts.
    pub fn open(&self) -> Result<Box<dyn Write + Send>, ConfigError> {
        match self {
            Sink::Stdout => Ok(Box::new(io::stdout())),
            Sink::File(path) => File::create(path)
                .map(|f| Box::new(f) as Box<dyn Write + Send>)
                .map_err(|source| ConfigError::OutputOpen {
                    path: path.clone(),
                    source,
                }),
        }
    }
}

/// Writes every retained probe URL, one per line. Returns the line count.
pub fn write_probe_urls<W: Write>(map: &DomainParameterMap, writer: W) -> io::Result<usize> {
    let mut out = BufWriter::new(writer);
    let mut written = 0;

    for probe in map.probe_urls() {
        writeln!(out, "{}", probe)?;
        written += 1;
    }

    out.flush()?;
    Ok(written)
}
