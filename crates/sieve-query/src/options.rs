//! Per-endpoint search configuration.
//!
//! [`SearchOptions`] holds what the serving code, not the client, decides:
//! the fallback page size, the default sort, and the ceiling on how many
//! rows one request may ask for. It deserializes from JSON so these can
//! live in a config file:
//!
//! ```
//! use sieve_query::{SearchOptions, SortDirection, SortSpec};
//!
//! let options = SearchOptions::from_json(r#"{
//!     "fallbackLimit": 50,
//!     "maxLimit": 500,
//!     "defaultSort": { "kind": "set", "column": "createdAt", "direction": "desc" }
//! }"#).unwrap();
//!
//! assert_eq!(options.fallback_limit, 50);
//! assert_eq!(options.default_sort, SortSpec::new("createdAt", SortDirection::Desc));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SieveError};
use crate::ordering::{SortDirection, SortSpec};
use crate::request::SearchRequest;

/// Defaults and limits applied when running a [`SearchRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    /// Page size used when the request has neither a limit nor a page
    /// size. `0` leaves such requests unbounded.
    pub fallback_limit: usize,
    /// Sort used when the request has no sort column.
    pub default_sort: SortSpec,
    /// Ceiling enforced by [`SearchOptions::cap`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_limit: Option<usize>,
}

impl SearchOptions {
    /// Creates options with no fallback, no default sort and no ceiling.
    pub fn new() -> Self {
        SearchOptions::default()
    }

    /// Decodes options from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(SieveError::InvalidOptions)
    }

    /// Sets the fallback page size.
    pub fn with_fallback_limit(mut self, fallback_limit: usize) -> Self {
        self.fallback_limit = fallback_limit;
        self
    }

    /// Sets the default sort column and direction.
    pub fn with_default_sort(mut self, column: impl Into<String>, ascending: bool) -> Self {
        self.default_sort = SortSpec::new(column, SortDirection::from_ascending(ascending));
        self
    }

    /// Sets the default sort from a [`SortSpec`].
    pub fn with_sort_spec(mut self, spec: SortSpec) -> Self {
        self.default_sort = spec;
        self
    }

    /// Sets the ceiling enforced by [`SearchOptions::cap`].
    pub fn with_max_limit(mut self, max_limit: usize) -> Self {
        self.max_limit = Some(max_limit);
        self
    }

    /// Applies the configured ceiling to `request`, returning its limit.
    ///
    /// Intended for requests decoded from untrusted input, before they
    /// are run.
    pub fn cap(&self, request: &mut SearchRequest) -> usize {
        match self.max_limit {
            Some(max_limit) => request.cap_limit(max_limit),
            None => request.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_inert() {
        let options = SearchOptions::new();
        assert_eq!(options.fallback_limit, 0);
        assert_eq!(options.default_sort, SortSpec::NotSet);
        assert_eq!(options.max_limit, None);
    }

    #[test]
    fn builders() {
        let options = SearchOptions::new()
            .with_fallback_limit(25)
            .with_default_sort("name", true)
            .with_max_limit(100);
        assert_eq!(options.fallback_limit, 25);
        assert_eq!(
            options.default_sort,
            SortSpec::new("name", SortDirection::Asc)
        );
        assert_eq!(options.max_limit, Some(100));

        let cleared = options.with_sort_spec(SortSpec::NotSet);
        assert!(!cleared.default_sort.is_set());
    }

    #[test]
    fn cap_uses_ceiling_when_configured() {
        let mut request = SearchRequest::default().with_limit(1_000);
        assert_eq!(SearchOptions::new().cap(&mut request), 1_000);
        assert_eq!(SearchOptions::new().with_max_limit(200).cap(&mut request), 200);
        assert_eq!(request.limit, 200);
    }

    #[test]
    fn json_partial_and_invalid() {
        let options = SearchOptions::from_json(r#"{"fallbackLimit": 10}"#).unwrap();
        assert_eq!(options.fallback_limit, 10);
        assert_eq!(options.default_sort, SortSpec::NotSet);

        let not_set = SearchOptions::from_json(r#"{"defaultSort": {"kind": "notSet"}}"#).unwrap();
        assert_eq!(not_set.default_sort, SortSpec::NotSet);

        let err = SearchOptions::from_json(r#"{"fallbackLimit": -1}"#).unwrap_err();
        assert!(matches!(err, SieveError::InvalidOptions(_)));
    }
}
