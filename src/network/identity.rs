use crate::config::constants::{DEFAULT_ACCEPT, DEFAULT_ACCEPT_LANGUAGE, DEFAULT_USER_AGENT};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, REFERER};
use std::collections::BTreeMap;
use tracing::warn;

// * HeaderSet is the request identity sent with every fetch of a run.
// * Keys are kept exactly as supplied; collisions are resolved on the exact key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: BTreeMap<String, String>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    // * The fixed browser-like identity. Referer is not part of it: it is
    // * bound per target in `to_header_map`.
    pub fn with_defaults() -> Self {
        let mut set = Self::new();
        set.insert("User-Agent", DEFAULT_USER_AGENT);
        set.insert("Accept-Language", DEFAULT_ACCEPT_LANGUAGE);
        set.insert("Accept", DEFAULT_ACCEPT);
        set
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    // * Caller-supplied values take precedence on key collision.
    // ! HTTP names are case-insensitive on the wire: an override evicts any
    // ! existing entry that differs from it only in letter case.
    pub fn merge<I>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (name, value) in overrides {
            self.entries.retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
            self.entries.insert(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    // * Builds the wire headers for one target. Referer is applied last and
    // * always points at the target page, whatever the merge supplied.
    // ! Entries that are not valid HTTP header tokens are dropped with a warning.
    pub fn to_header_map(&self, referer: &str) -> HeaderMap {
        let mut headers = HeaderMap::with_capacity(self.entries.len() + 1);

        for (name, value) in &self.entries {
            let parsed = HeaderName::from_bytes(name.as_bytes())
                .ok()
                .zip(HeaderValue::from_str(value).ok());
            match parsed {
                Some((name, value)) => {
                    headers.insert(name, value);
                }
                None => warn!(header = %name, "Skipping header that is not a valid HTTP token"),
            }
        }

        match HeaderValue::from_str(referer) {
            Ok(value) => {
                headers.insert(REFERER, value);
            }
            Err(_) => warn!(referer, "Target URL is not a valid Referer value"),
        }

        headers
    }
}

impl FromIterator<(String, String)> for HeaderSet {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
