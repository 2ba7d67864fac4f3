// * Telemetry - JSON logging and the run-scoped Reporter
// * The library never logs through ambient state of its own: every event is
// * parented to the span of the Reporter handed in by the caller.

use crate::network::errors::FetchError;
use serde::Serialize;
use tracing::{debug, info, info_span, warn, Span};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with JSON formatting on stderr.
///
/// `RUST_LOG` wins over `level` when set. Stdout is left free for probe URLs.
///
/// # Example
/// ```ignore
/// use param_hunter::ops::telemetry;
///
/// telemetry::init_tracing("info");
/// ```
pub fn init_tracing(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .init();
}

/// Aggregate counters for one invocation, computed after all units complete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub targets: usize,
    pub pages_fetched: usize,
    pub pages_failed: usize,
    pub candidates: usize,
    pub probe_urls: usize,
}

/// Run-scoped reporter passed explicitly into the fetcher and the pipeline.
#[derive(Debug, Clone)]
pub struct Reporter {
    span: Span,
}

impl Reporter {
    pub fn new(workers: usize) -> Self {
        Self {
            span: info_span!("param_hunt", workers),
        }
    }

    /// A reporter whose events have no parent span. Used by tests.
    pub fn detached() -> Self {
        Self { span: Span::none() }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn fetch_failed(&self, url: &str, err: &FetchError) {
        warn!(
            parent: &self.span,
            url,
            error = %err,
            timeout = err.is_timeout(),
            "Fetch failed"
        );
    }

    pub fn page_scanned(&self, url: &str, candidates: usize, kept: usize) {
        debug!(parent: &self.span, url, candidates, kept, "Page scanned");
    }

    pub fn unit_aborted(&self, url: &str, reason: &str) {
        warn!(parent: &self.span, url, reason, "Unit of work aborted, contributing no parameters");
    }

    pub fn nothing_fetched(&self, targets: usize) {
        warn!(parent: &self.span, targets, "No target could be fetched");
    }

    pub fn run_finished(&self, stats: &RunStats, destination: &str) {
        info!(
            parent: &self.span,
            targets = stats.targets,
            pages_fetched = stats.pages_fetched,
            pages_failed = stats.pages_failed,
            candidates = stats.candidates,
            probe_urls = stats.probe_urls,
            destination,
            "Probe URLs written"
        );
    }
}
