use crate::network::errors::{FetchError, FetchOutcome};
use crate::ops::telemetry::Reporter;
use reqwest::header::HeaderMap;
use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

// * Single-attempt HTTP GET engine shared by page and script fetches.
#[derive(Debug, Clone)]
pub struct Fetcher {
    inner: Client,
    reporter: Reporter,
}

impl Fetcher {
    // * Builds the client with a bounded per-request timeout.
    // * Redirects are not followed: a 3xx is a failed fetch for this pipeline.
    // ! Targets that only answer through a hop (http -> https, apex -> www)
    // ! yield no parameters; list the final URL in the target file instead.
    pub fn new(timeout: Duration, reporter: Reporter) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .redirect(Policy::none())
            .timeout(timeout)
            .build()?;

        Ok(Self {
            inner: client,
            reporter,
        })
    }

    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    // * Performs exactly one GET. Only 200 OK counts as success.
    pub async fn fetch(&self, url: &str, headers: &HeaderMap) -> FetchOutcome {
        let parsed = Url::parse(url).map_err(|_| FetchError::InvalidUrl(url.to_string()))?;

        let resp = self.inner.get(parsed).headers(headers.clone()).send().await?;
        let status = resp.status();

        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(resp.text().await?)
    }

    // * Boundary variant: the failure is reported here and collapses to None.
    pub async fn fetch_or_log(&self, url: &str, headers: &HeaderMap) -> Option<String> {
        match self.fetch(url, headers).await {
            Ok(body) => Some(body),
            Err(e) => {
                self.reporter.fetch_failed(url, &e);
                None
            }
        }
    }
}
