pub mod client;
pub mod errors;
pub mod identity;

pub use client::Fetcher;
pub use errors::{FetchError, FetchOutcome};
pub use identity::HeaderSet;
