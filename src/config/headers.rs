// * Header configuration loading
// * Turns "Name: value" strings and a JSON header file into a HeaderSet overlay.

use crate::config::ConfigError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

/// On-disk header file: a flat JSON object of header name -> value.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct HeaderFile(BTreeMap<String, String>);

/// Parses a single `Name: value` header string.
///
/// Returns `None` for malformed input (no `:` separator or an empty name).
pub fn parse_header_line(line: &str) -> Option<(String, String)> {
    let (name, value) = line.split_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), value.trim().to_string()))
}

/// Parses header strings, skipping malformed entries with a warning.
/// A single string may hold several headers separated by newlines.
pub fn parse_header_args<S: AsRef<str>>(args: &[S]) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();

    for line in args.iter().flat_map(|a| a.as_ref().lines()) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_header_line(line) {
            Some((name, value)) => {
                headers.insert(name, value);
            }
            None => warn!(header = line, "Skipping malformed header (expected `Name: value`)"),
        }
    }

    headers
}

/// Loads a JSON header file. Any read or format problem is fatal.
pub fn load_header_file(path: &Path) -> Result<BTreeMap<String, String>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::HeaderFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed: HeaderFile =
        serde_json::from_str(&raw).map_err(|source| ConfigError::HeaderFileFormat {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(parsed.0)
}
