//! Error types for the sieve-query crate.
//!
//! Running a search never fails; these errors only surface while turning
//! untrusted input (JSON bodies, config files, query-string values) into
//! a [`SearchRequest`](crate::SearchRequest) or [`SearchOptions`](crate::SearchOptions).

use thiserror::Error;

/// Errors that can occur when building search requests or options.
#[derive(Debug, Error)]
pub enum SieveError {
    /// Sort direction string was neither `asc` nor `desc`.
    #[error("invalid sort direction '{0}': expected 'asc' or 'desc'")]
    InvalidSortDirection(String),

    /// A search request could not be decoded from JSON.
    #[error("invalid search request: {0}")]
    InvalidRequest(#[source] serde_json::Error),

    /// Search options could not be decoded from JSON.
    #[error("invalid search options: {0}")]
    InvalidOptions(#[source] serde_json::Error),
}

/// Result type for sieve operations.
pub type Result<T> = std::result::Result<T, SieveError>;
