use crate::config::constants::DEFAULT_SCHEME_PREFIX;
use crate::config::ConfigError;
use std::path::Path;
use url::Url;

// * Turns one raw target line into an absolute URL.
// * Lines already carrying the https:// prefix pass through verbatim; anything
// * else gets it prepended. No further validation: a malformed host simply
// * fails at fetch time.
pub fn normalize_target(line: &str) -> String {
    if line.starts_with(DEFAULT_SCHEME_PREFIX) {
        line.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME_PREFIX, line)
    }
}

// * Trims every line, skips blanks, normalizes the rest in input order.
pub fn normalize_targets<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(normalize_target)
        .collect()
}

// * Reads the target list once at startup.
pub fn read_targets(path: &Path) -> Result<Vec<String>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::TargetsRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(normalize_targets(raw.lines()))
}

// * Authority (host[:port]) of a URL, the deduplication scope.
// * The port only appears when explicit and not the scheme default.
pub fn domain_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;

    match parsed.port() {
        Some(port) => Some(format!("{}:{}", host, port)),
        None => Some(host.to_string()),
    }
}

// * Probe URL for one parameter on one source page.
pub fn probe_url(source: &str, param: &str) -> String {
    format!("{}?{}=", source, param)
}
