// * Parameter candidate extraction
// * Three independent heuristics, unioned into one set:
// *   1. DOM attributes: `name` of input/textarea/select/form (+ hidden inputs)
// *   2. Link queries: every query key of every `a[href]`
// *   3. Scripts: JS-text heuristic over inline text or the fetched `src`

use crate::network::client::Fetcher;
use crate::refinery::js_patterns::extract_js_params;
use reqwest::header::HeaderMap;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;
use url::Url;

// * Precompiled selectors
static SELECTOR_FORM_FIELDS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("input, textarea, select, form").unwrap());
// * Overlaps with the selector above
static SELECTOR_HIDDEN_INPUTS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"input[type="hidden"]"#).unwrap());
static SELECTOR_ANCHORS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").unwrap());
static SELECTOR_SCRIPTS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("script").unwrap());

/// Everything learned from the document itself, before any nested fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageScan {
    pub candidates: HashSet<String>,
    /// External scripts to fetch, resolved and in document order, no repeats
    pub script_sources: Vec<Url>,
}

/// Parses the document and runs every heuristic that needs no network.
///
/// Kept synchronous: the parsed DOM never lives across an await point.
pub fn scan_document(body: &str, base: &Url) -> PageScan {
    let document = Html::parse_document(body);
    let mut scan = PageScan::default();

    // * Heuristic 1: form field names
    for selector in [&*SELECTOR_FORM_FIELDS, &*SELECTOR_HIDDEN_INPUTS] {
        for element in document.select(selector) {
            if let Some(name) = element.value().attr("name").filter(|n| !n.is_empty()) {
                scan.candidates.insert(name.to_string());
            }
        }
    }

    // * Heuristic 2: query keys of links, values discarded
    for anchor in document.select(&SELECTOR_ANCHORS) {
        if let Some(href) = anchor.value().attr("href") {
            scan.candidates.extend(link_query_keys(href, base));
        }
    }

    // * Heuristic 3: inline scripts now, external ones queued for fetching
    for script in document.select(&SELECTOR_SCRIPTS) {
        match script.value().attr("src").map(str::trim).filter(|s| !s.is_empty()) {
            Some(src) => match base.join(src) {
                Ok(resolved) => {
                    if !scan.script_sources.contains(&resolved) {
                        scan.script_sources.push(resolved);
                    }
                }
                Err(e) => debug!(src, error = %e, "Unresolvable script source skipped"),
            },
            None => {
                let text: String = script.text().collect();
                scan.candidates.extend(extract_js_params(&text));
            }
        }
    }

    scan
}

/// Query keys of one href, resolved against the page URL.
pub fn link_query_keys(href: &str, base: &Url) -> Vec<String> {
    match base.join(href.trim()) {
        Ok(url) => url
            .query_pairs()
            .map(|(k, _)| k.into_owned())
            .filter(|k| !k.is_empty())
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Runs all three heuristics, fetching referenced scripts through the
/// shared fetcher with the caller's headers.
#[derive(Debug, Clone)]
pub struct ParamExtractor {
    fetcher: Fetcher,
}

impl ParamExtractor {
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// Candidate names found in `body`. A failed script fetch only loses that
    /// script's candidates.
    pub async fn extract(&self, body: &str, base: &Url, headers: &HeaderMap) -> HashSet<String> {
        let PageScan {
            mut candidates,
            script_sources,
        } = scan_document(body, base);

        for src in script_sources {
            if let Some(js) = self.fetcher.fetch_or_log(src.as_str(), headers).await {
                candidates.extend(extract_js_params(&js));
            }
        }

        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://shop.test/catalog/index.html").unwrap()
    }

    #[test]
    fn test_input_name_is_collected() {
        let scan = scan_document(r#"<form><input name="x"></form>"#, &base());
        assert!(scan.candidates.contains("x"));
    }

    #[test]
    fn test_all_form_field_kinds() {
        let html = r#"
            <form name="checkout" action="/buy">
                <input type="text" name="qty">
                <input type="hidden" name="csrf_token" value="abc">
                <textarea name="note"></textarea>
                <select name="size"><option>M</option></select>
                <input type="submit" value="Go">
                <input name="">
            </form>
        "#;
        let scan = scan_document(html, &base());

        for name in ["checkout", "qty", "csrf_token", "note", "size"] {
            assert!(scan.candidates.contains(name), "missing {}", name);
        }
        assert!(!scan.candidates.contains(""));
        assert_eq!(scan.candidates.len(), 5);
    }

    #[test]
    fn test_link_query_keys() {
        let scan = scan_document(r#"<a href="/p?a=1&b=2">p</a>"#, &base());
        assert!(scan.candidates.contains("a"));
        assert!(scan.candidates.contains("b"));
        // * Values are discarded
        assert!(!scan.candidates.contains("1"));
    }

    #[test]
    fn test_relative_and_blank_valued_links() {
        let keys = link_query_keys("item.html?id=&ref", &base());
        assert_eq!(keys, vec!["id".to_string(), "ref".to_string()]);

        assert!(link_query_keys("#top", &base()).is_empty());
        assert!(link_query_keys("/plain/path", &base()).is_empty());
    }

    #[test]
    fn test_inline_script_heuristic() {
        let html = r#"<script>var u = "/search?term=" + t; render(u);</script>"#;
        let scan = scan_document(html, &base());

        assert!(scan.candidates.contains("term"));
        assert!(scan.candidates.contains("render"));
        assert!(scan.script_sources.is_empty());
    }

    #[test]
    fn test_external_scripts_are_resolved_once() {
        let html = r#"
            <script src="/static/app.js"></script>
            <script src="https://cdn.test/lib.js"></script>
            <script src="/static/app.js"></script>
            <script src="">init();</script>
        "#;
        let scan = scan_document(html, &base());

        let sources: Vec<&str> = scan.script_sources.iter().map(Url::as_str).collect();
        assert_eq!(
            sources,
            vec!["https://shop.test/static/app.js", "https://cdn.test/lib.js"]
        );
        // * Blank src falls back to the inline text
        assert!(scan.candidates.contains("init"));
    }

    #[test]
    fn test_empty_document() {
        let scan = scan_document("", &base());
        assert!(scan.candidates.is_empty());
        assert!(scan.script_sources.is_empty());
    }
}
