// * Result consolidation: per-domain deduplication and the output sink.

pub mod dedup;
pub mod sink;

// * Re-exports for convenient access
pub use dedup::{DedupResult, DomainParameterMap};
pub use sink::{write_probe_urls, Sink};
