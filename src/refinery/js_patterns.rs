// * JS-text heuristic
// * Pulls parameter-like names out of inline or external script text.
// * Two independent patterns, unioned:
// *   1. query-like tokens: a name preceded by `?` or `&` and followed by `=`
// *   2. call-like tokens: an identifier immediately followed by `(`
// ! Pattern 2 is intentionally over-inclusive (it matches `if(`, `fetch(`,
// ! every helper call...). Recall over precision; do not tighten it.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static PATTERN_QUERY_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&](\w+)=").expect("Invalid query key regex"));

static PATTERN_CALL_SITE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Za-z_]\w*)\(").expect("Invalid call site regex"));

/// Which script-text pattern to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsPattern {
    QueryKey,
    CallSite,
}

impl JsPattern {
    pub const ALL: [JsPattern; 2] = [JsPattern::QueryKey, JsPattern::CallSite];

    fn regex(self) -> &'static Regex {
        match self {
            JsPattern::QueryKey => &PATTERN_QUERY_KEY,
            JsPattern::CallSite => &PATTERN_CALL_SITE,
        }
    }
}

/// Collects the first capture group of every match of one pattern
pub fn extract_pattern(pattern: JsPattern, text: &str) -> HashSet<String> {
    pattern
        .regex()
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Runs every pattern over the script text and unions the matches
pub fn extract_js_params(text: &str) -> HashSet<String> {
    JsPattern::ALL
        .iter()
        .flat_map(|p| extract_pattern(*p, text))
        .collect()
}
