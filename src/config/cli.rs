use crate::config::constants::{DEFAULT_LOG_LEVEL, DEFAULT_TIMEOUT_SECS, DEFAULT_WORKERS};
use crate::config::headers::{load_header_file, parse_header_args};
use crate::config::{Config, ConfigError};
use crate::network::identity::HeaderSet;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Discover candidate request parameters on a list of target pages.
#[derive(Debug, Parser)]
#[command(name = "param-hunter", version)]
#[command(about = "Discover candidate HTTP request parameters and emit probe URLs", long_about = None)]
pub struct Cli {
    /// File listing one target per line (scheme defaults to https://).
    pub targets: PathBuf,

    /// Output file for probe URLs; stdout when omitted.
    pub output: Option<PathBuf>,

    /// Extra request header as `Name: value`. Repeatable.
    #[arg(short = 'H', long = "header", value_name = "NAME: VALUE")]
    pub headers: Vec<String>,

    /// JSON file holding an object of header name -> value.
    #[arg(long, value_name = "PATH")]
    pub headers_file: Option<PathBuf>,

    /// Number of targets processed concurrently.
    #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Per-request timeout in seconds.
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Cli {
    /// Resolves the parsed arguments into a run configuration.
    ///
    /// Header precedence: defaults < headers file < `--header` flags.
    pub fn into_config(self) -> Result<Config, ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::InvalidWorkers);
        }

        let mut headers = HeaderSet::with_defaults();
        if let Some(path) = &self.headers_file {
            headers.merge(load_header_file(path)?);
        }
        headers.merge(parse_header_args(&self.headers));

        Ok(Config {
            targets_path: self.targets,
            output: self.output,
            headers,
            workers: self.workers,
            timeout: Duration::from_secs(self.timeout),
            log_level: self.log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["param-hunter", "targets.txt"]).unwrap();
        let config = cli.into_config().unwrap();

        assert_eq!(config.workers, DEFAULT_WORKERS);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(config.output.is_none());
        assert_eq!(config.headers.get("Accept-Language"), Some("en-US,en;q=0.9"));
    }

    #[test]
    fn test_header_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "param-hunter",
            "targets.txt",
            "out.txt",
            "-H",
            "User-Agent: scanner/1.0",
            "--header",
            "Cookie: a=b",
            "-w",
            "4",
        ])
        .unwrap();
        let config = cli.into_config().unwrap();

        assert_eq!(config.headers.get("User-Agent"), Some("scanner/1.0"));
        assert_eq!(config.headers.get("Cookie"), Some("a=b"));
        assert_eq!(config.workers, 4);
        assert_eq!(config.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let cli = Cli::try_parse_from(["param-hunter", "targets.txt", "-w", "0"]).unwrap();
        assert!(matches!(cli.into_config(), Err(ConfigError::InvalidWorkers)));
    }
}
