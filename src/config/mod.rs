// * Run configuration: CLI parsing, header loading and tunable constants.

pub mod cli;
pub mod constants;
pub mod headers;

pub use cli::Cli;

use crate::network::identity::HeaderSet;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Fatal configuration problems. Any of these aborts the run before fetching.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read header file {path}: {source}")]
    HeaderFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Header file {path} must be a JSON object of string values: {source}")]
    HeaderFileFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot read target list {path}: {source}")]
    TargetsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot open output {path}: {source}")]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Worker count must be at least 1")]
    InvalidWorkers,

    #[error("HTTP client construction failed: {0}")]
    Client(#[from] reqwest::Error),
}

/// Fully resolved configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub targets_path: PathBuf,
    pub output: Option<PathBuf>,
    pub headers: HeaderSet,
    pub workers: usize,
    pub timeout: Duration,
    pub log_level: String,
}
