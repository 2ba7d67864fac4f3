// * Pipeline Orchestrator
// * One unit of work per target: fetch -> extract -> filter -> probe URLs.
// * Units run on spawned tasks, at most `workers` in flight. Results come back
// * in submission order (`buffered`, never `buffer_unordered`): the domain
// * deduplicator's first-wins tie-break depends on it.

use crate::engine::normalization::probe_url;
use crate::network::client::Fetcher;
use crate::network::identity::HeaderSet;
use crate::ops::telemetry::{Reporter, RunStats};
use crate::refinery::{retain_valid, ParamExtractor};
use futures::stream::{self, StreamExt};
use std::collections::BTreeMap;
use std::sync::Arc;
use url::Url;

/// Result of one unit of work.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageParams {
    pub target: String,
    pub fetched: bool,
    /// Raw candidates before filtering
    pub candidates: usize,
    /// Surviving parameter -> probe URL
    pub probes: BTreeMap<String, String>,
}

impl PageParams {
    fn unfetched(target: String) -> Self {
        Self {
            target,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dispatcher {
    fetcher: Fetcher,
    extractor: ParamExtractor,
    headers: Arc<HeaderSet>,
    workers: usize,
}

impl Dispatcher {
    pub fn new(fetcher: Fetcher, headers: HeaderSet, workers: usize) -> Self {
        Self {
            extractor: ParamExtractor::new(fetcher.clone()),
            fetcher,
            headers: Arc::new(headers),
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    fn reporter(&self) -> &Reporter {
        self.fetcher.reporter()
    }

    // * A single unit of work. Owns its whole working set; never fails.
    pub async fn process(&self, target: String) -> PageParams {
        let headers = self.headers.to_header_map(&target);

        let Some(body) = self.fetcher.fetch_or_log(&target, &headers).await else {
            return PageParams::unfetched(target);
        };

        let base = match Url::parse(&target) {
            Ok(url) => url,
            Err(e) => {
                self.reporter().unit_aborted(&target, &e.to_string());
                return PageParams::unfetched(target);
            }
        };

        let raw = self.extractor.extract(&body, &base, &headers).await;
        let candidates = raw.len();
        let kept = retain_valid(raw);
        self.reporter().page_scanned(&target, candidates, kept.len());

        let probes = kept
            .into_iter()
            .map(|param| {
                let probe = probe_url(&target, &param);
                (param, probe)
            })
            .collect();

        PageParams {
            target,
            fetched: true,
            candidates,
            probes,
        }
    }

    // * Runs every target through the bounded pool; output order == input order.
    pub async fn run(&self, targets: Vec<String>) -> Vec<PageParams> {
        stream::iter(targets)
            .map(|target| {
                let unit = self.clone();
                let reporter = self.reporter().clone();
                let fallback = target.clone();
                async move {
                    match tokio::spawn(async move { unit.process(target).await }).await {
                        Ok(page) => page,
                        Err(e) => {
                            // ! A panicking unit must not take the others down
                            reporter.unit_aborted(&fallback, &e.to_string());
                            PageParams::unfetched(fallback)
                        }
                    }
                }
            })
            .buffered(self.workers)
            .collect()
            .await
    }
}

/// Aggregates unit results; `probe_urls` is filled in once written.
pub fn summarize(pages: &[PageParams]) -> RunStats {
    let pages_fetched = pages.iter().filter(|p| p.fetched).count();
    RunStats {
        targets: pages.len(),
        pages_fetched,
        pages_failed: pages.len() - pages_fetched,
        candidates: pages.iter().map(|p| p.candidates).sum(),
        probe_urls: 0,
    }
}
