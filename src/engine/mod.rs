// * The discovery engine: target normalization, the bounded worker pool, and
// * the top-level run that ties fetch, extraction, dedup and output together.

pub mod dispatcher;
pub mod normalization;

pub use dispatcher::{summarize, Dispatcher, PageParams};
pub use normalization::{domain_of, normalize_target, normalize_targets, probe_url, read_targets};

use crate::config::{Config, ConfigError};
use crate::network::client::Fetcher;
use crate::ops::telemetry::{Reporter, RunStats};
use crate::persistence::{write_probe_urls, DomainParameterMap, Sink};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed writing probe URLs to {destination}: {source}")]
    Write {
        destination: String,
        #[source]
        source: std::io::Error,
    },
}

/// Runs the pool over `targets` and folds the ordered results into the
/// per-domain map. `probe_urls` in the returned stats is the retained count.
pub async fn discover(dispatcher: &Dispatcher, targets: Vec<String>) -> (DomainParameterMap, RunStats) {
    let pages = dispatcher.run(targets).await;
    let map = DomainParameterMap::from_pages(&pages);

    let mut stats = summarize(&pages);
    stats.probe_urls = map.len();
    (map, stats)
}

/// One full invocation: read targets, open the sink, fetch, dedupe, write.
/// Configuration problems surface before the first request is sent.
pub async fn run(config: &Config, reporter: &Reporter) -> Result<RunStats, RunError> {
    let targets = read_targets(&config.targets_path)?;
    let sink = Sink::from_path(config.output.clone());
    let writer = sink.open()?;
    let fetcher = Fetcher::new(config.timeout, reporter.clone()).map_err(ConfigError::from)?;

    info!(
        parent: reporter.span(),
        targets = targets.len(),
        workers = config.workers,
        headers = config.headers.len(),
        "Starting parameter discovery"
    );

    let dispatcher = Dispatcher::new(fetcher, config.headers.clone(), config.workers);
    let (map, mut stats) = discover(&dispatcher, targets).await;

    let destination = sink.describe();
    stats.probe_urls = write_probe_urls(&map, writer).map_err(|source| RunError::Write {
        destination: destination.clone(),
        source,
    })?;

    reporter.run_finished(&stats, &destination);
    Ok(stats)
}
