// * The Refinery: turns a fetched page into filtered parameter candidates.

pub mod filter;
pub mod js_patterns;
pub mod params;

// * Re-exports for convenient access
pub use filter::is_valid;
pub use js_patterns::{extract_js_params, JsPattern};
pub use params::{scan_document, ParamExtractor, PageScan};

use std::collections::HashSet;

/// Drops candidates rejected by the filter.
pub fn retain_valid(candidates: HashSet<String>) -> HashSet<String> {
    candidates.into_iter().filter(|c| is_valid(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retain_valid() {
        let raw: HashSet<String> = ["id", "ids[]", "filter[name]", "page"]
            .into_iter()
            .map(String::from)
            .collect();

        let kept = retain_valid(raw);
        assert_eq!(kept.len(), 2);
        assert!(kept.contains("id"));
        assert!(kept.contains("page"));
    }
}
