//! Candidate HTTP parameter discovery.
//!
//! Fetches a list of target pages with a bounded worker pool, extracts
//! parameter-like names from form fields, link queries and script text, and
//! emits one probe URL (`<page>?<param>=`) per distinct (domain, parameter).

pub mod config;
pub mod engine;
pub mod network;
pub mod ops;
pub mod persistence;
pub mod refinery;
