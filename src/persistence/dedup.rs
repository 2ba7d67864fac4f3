// * Domain deduplication
// * Merges per-page probe mappings into one domain -> parameter -> probe URL map.
// * Exactly one probe URL survives per (domain, parameter): the first recorded.
// * Merge order is the dispatcher's submission order, so the winner is stable.

use crate::engine::dispatcher::PageParams;
use crate::engine::normalization::domain_of;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Outcome of recording one (parameter, probe URL) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DedupResult {
    Unique,
    Duplicate { kept: String },
    /// Probe URL without a parseable authority; dropped
    NoDomain,
}

/// Domain -> parameter -> first probe URL recorded for that pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainParameterMap {
    domains: BTreeMap<String, BTreeMap<String, String>>,
}

impl DomainParameterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map from unit results, in the order given
    pub fn from_pages<'a, I>(pages: I) -> Self
    where
        I: IntoIterator<Item = &'a PageParams>,
    {
        let mut map = Self::new();
        for page in pages {
            map.merge_page(page);
        }
        map
    }

    /// Records a pair unless its domain already holds that parameter
    pub fn record(&mut self, param: &str, probe: &str) -> DedupResult {
        let Some(domain) = domain_of(probe) else {
            tracing::debug!(probe, "Probe URL has no authority, dropped");
            return DedupResult::NoDomain;
        };

        match self.domains.entry(domain).or_default().entry(param.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(probe.to_string());
                DedupResult::Unique
            }
            Entry::Occupied(existing) => DedupResult::Duplicate {
                kept: existing.get().clone(),
            },
        }
    }

    /// Merges one page's mapping; returns how many pairs were new
    pub fn merge_page(&mut self, page: &PageParams) -> usize {
        page.probes
            .iter()
            .filter(|(param, probe)| self.record(param, probe) == DedupResult::Unique)
            .count()
    }

    pub fn get(&self, domain: &str, param: &str) -> Option<&str> {
        self.domains
            .get(domain)
            .and_then(|params| params.get(param))
            .map(String::as_str)
    }

    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.domains.keys().map(String::as_str)
    }

    pub fn params_for(&self, domain: &str) -> Option<&BTreeMap<String, String>> {
        self.domains.get(domain)
    }

    /// Flattened probe URLs: domains first, then parameters within each
    pub fn probe_urls(&self) -> impl Iterator<Item = &str> {
        self.domains
            .values()
            .flat_map(|params| params.values().map(String::as_str))
    }

    /// Total retained (domain, parameter) pairs
    pub fn len(&self) -> usize {
        self.domains.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::normalization::probe_url;

    fn page(target: &str, params: &[&str]) -> PageParams {
        PageParams {
            target: target.to_string(),
            fetched: true,
            candidates: params.len(),
            probes: params
                .iter()
                .map(|p| (p.to_string(), probe_url(target, p)))
                .collect(),
        }
    }

    #[test]
    fn test_same_domain_keeps_first_page() {
        let pages = vec![
            page("https://shop.test/a", &["q"]),
            page("https://shop.test/b", &["q"]),
        ];
        let map = DomainParameterMap::from_pages(&pages);

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("shop.test", "q"), Some("https://shop.test/a?q="));
    }

    #[test]
    fn test_distinct_domains_keep_both() {
        let pages = vec![
            page("https://one.test/", &["q"]),
            page("https://two.test/", &["q"]),
        ];
        let map = DomainParameterMap::from_pages(&pages);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("one.test", "q"), Some("https://one.test/?q="));
        assert_eq!(map.get("two.test", "q"), Some("https://two.test/?q="));
    }

    #[test]
    fn test_port_is_part_of_domain() {
        let pages = vec![
            page("https://app.test/", &["id"]),
            page("https://app.test:8443/", &["id"]),
        ];
        let map = DomainParameterMap::from_pages(&pages);

        assert_eq!(map.domains().collect::<Vec<_>>(), vec!["app.test", "app.test:8443"]);
    }

    #[test]
    fn test_record_reports_duplicates() {
        let mut map = DomainParameterMap::new();
        assert_eq!(map.record("id", "https://a.test/x?id="), DedupResult::Unique);
        assert_eq!(
            map.record("id", "https://a.test/y?id="),
            DedupResult::Duplicate {
                kept: "https://a.test/x?id=".to_string()
            }
        );
        assert_eq!(map.record("id", "not a url?id="), DedupResult::NoDomain);
    }

    #[test]
    fn test_merge_page_counts_new_pairs() {
        let mut map = DomainParameterMap::new();
        assert_eq!(map.merge_page(&page("https://a.test/1", &["a", "b"])), 2);
        assert_eq!(map.merge_page(&page("https://a.test/2", &["b", "c"])), 1);
        assert_eq!(map.probe_urls().count(), 3);
    }

    #[test]
    fn test_unfetched_pages_contribute_nothing() {
        let empty = PageParams {
            target: "https://down.test/".to_string(),
            ..Default::default()
        };
        let map = DomainParameterMap::from_pages([&empty]);
        assert!(map.is_empty());
    }
}
