use thiserror::Error;

// * Unified failure type for a single fetch. Never fatal to the pipeline.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    // * Anything but 200 OK, redirects included
    #[error("HTTP {0} is not 200 OK")]
    Status(u16),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Reqwest(e) if e.is_timeout())
    }
}

// * Body on success, typed failure otherwise.
pub type FetchOutcome = Result<String, FetchError>;
