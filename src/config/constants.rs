// * Configuration Constants
// * Central location for all configurable thresholds and timeouts

// * Scheme prepended to target lines that do not already carry it
pub const DEFAULT_SCHEME_PREFIX: &str = "https://";

// * Worker pool size when none is configured
pub const DEFAULT_WORKERS: usize = 10;

// * Per-request timeout in seconds (pages and nested scripts alike)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// * Log filter used when RUST_LOG is unset
pub const DEFAULT_LOG_LEVEL: &str = "info";

// * Default request identity, overridable through the header merge
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/94.0.4606.71 Safari/537.36";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
pub const DEFAULT_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8";
