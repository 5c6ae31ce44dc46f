//! The search request: one round-trippable search/sort/paginate query.
//!
//! A [`SearchRequest`] is built per incoming request, run once with
//! [`SearchRequest::get_items`], and can then be serialized back to the
//! caller. After a run it describes exactly what was executed: a sort
//! column filled in from the defaults and a limit filled in from the
//! fallback stay on the request.
//!
//! # Example
//!
//! ```
//! use sieve_query::{Number, SearchOptions, SearchRequest, Value};
//!
//! struct Product {
//!     name: String,
//!     stock: u32,
//! }
//!
//! fn accessor<'a>(product: &'a Product, field: &str) -> Value<'a> {
//!     match field {
//!         "name" => Value::String(&product.name),
//!         "stock" => Value::Number(Number::from(product.stock)),
//!         _ => Value::None,
//!     }
//! }
//!
//! let products = vec![
//!     Product { name: "Blue mug".into(), stock: 4 },
//!     Product { name: "Red mug".into(), stock: 0 },
//!     Product { name: "Blue plate".into(), stock: 9 },
//! ];
//!
//! let mut request = SearchRequest::default()
//!     .with_term("blue")
//!     .with_search_columns(["name"]);
//! let options = SearchOptions::new()
//!     .with_fallback_limit(25)
//!     .with_default_sort("stock", false);
//!
//! let page = request.get_items(&products, accessor, &options);
//! assert_eq!(page.total, 2);
//! assert_eq!(page.items[0].name, "Blue plate");
//!
//! // The request now reflects what actually ran
//! assert_eq!(request.sort_column.as_deref(), Some("stock"));
//! assert!(request.is_descending());
//! assert_eq!(request.limit, 25);
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Result, SieveError};
use crate::options::SearchOptions;
use crate::ordering::{SortDirection, SortSpec};
use crate::pagination::{self, PageWindow};
use crate::search::{ResolvedQuery, SearchPage};
use crate::term::Term;
use crate::value::Value;

/// Description of one search/filter/sort/paginate request.
///
/// On the wire the field names are camelCase and every field is
/// optional:
///
/// ```json
/// { "term": "acme", "searchColumns": ["name"], "exactMatch": false,
///   "sortColumn": "name", "sortDirection": "asc",
///   "limit": 20, "offset": 0, "pageIndex": 0, "pageSize": 0 }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    /// What to look for. A blank term disables filtering.
    pub term: Term,
    /// Record fields the term is matched against. `None` or empty
    /// disables filtering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_columns: Option<Vec<String>>,
    /// Full equality instead of case-insensitive containment for strings.
    pub exact_match: bool,
    /// Column to sort by; `None` keeps input order.
    #[serde(with = "sort_column_wire")]
    pub sort_column: Option<String>,
    /// Direction applied to `sort_column`.
    pub sort_direction: SortDirection,
    /// Maximum number of records in offset/limit mode; `0` means unset.
    pub limit: usize,
    /// Number of records skipped in offset/limit mode.
    pub offset: usize,
    /// Zero-based page in page mode.
    pub page_index: usize,
    /// Page size; non-zero switches to page mode.
    pub page_size: usize,
}

impl SearchRequest {
    /// Creates a request from positional fields.
    ///
    /// An empty `sort_column` leaves the request unsorted.
    pub fn new(
        term: impl Into<Term>,
        sort_column: &str,
        sort_direction: SortDirection,
        limit: usize,
        offset: usize,
        exact_match: bool,
    ) -> Self {
        SearchRequest {
            term: term.into(),
            sort_column: (!sort_column.is_empty()).then(|| sort_column.to_string()),
            sort_direction,
            limit,
            offset,
            exact_match,
            ..SearchRequest::default()
        }
    }

    /// Decodes a request from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(SieveError::InvalidRequest)
    }

    /// Encodes this request as a JSON object.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(SieveError::InvalidRequest)
    }

    // ========================================================================
    // Builders
    // ========================================================================

    /// Sets the search term.
    pub fn with_term(mut self, term: impl Into<Term>) -> Self {
        self.term = term.into();
        self
    }

    /// Sets the columns the term is matched against.
    pub fn with_search_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Selects exact (`true`) or substring (`false`) string matching.
    pub fn with_exact_match(mut self, exact_match: bool) -> Self {
        self.exact_match = exact_match;
        self
    }

    /// Sets the sort column and direction.
    pub fn with_sort(mut self, column: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_column = Some(column.into());
        self.sort_direction = direction;
        self
    }

    /// Sets the offset/limit limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the offset/limit offset.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the zero-based page index.
    pub fn with_page_index(mut self, page_index: usize) -> Self {
        self.page_index = page_index;
        self
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Resets every field to its zero value.
    pub fn clear(&mut self) {
        *self = SearchRequest::default();
    }

    /// Returns `true` if the sort direction is ascending.
    pub fn is_ascending(&self) -> bool {
        self.sort_direction.is_asc()
    }

    /// Returns `true` if the sort direction is descending.
    pub fn is_descending(&self) -> bool {
        self.sort_direction.is_desc()
    }

    /// Offset of the window this request resolves to.
    pub fn calculated_offset(&self) -> usize {
        PageWindow::resolve(self, 0).offset
    }

    /// Size of the window this request resolves to; `0` means unbounded.
    pub fn calculated_page_size(&self) -> usize {
        PageWindow::resolve(self, 0).size
    }

    /// Bounds the requested limit by an application ceiling.
    ///
    /// A `max_allowed` of zero means no ceiling. Otherwise an unset limit
    /// becomes `max_allowed`, a larger one is lowered to it, and a
    /// non-zero page size is bounded the same way. Returns the new limit.
    pub fn cap_limit(&mut self, max_allowed: usize) -> usize {
        self.limit = pagination::cap(self.limit, max_allowed);
        if self.page_size > 0 {
            self.page_size = pagination::cap(self.page_size, max_allowed);
        }
        self.limit
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Resolves defaults without touching `self`.
    ///
    /// The returned query carries a copy of this request with the sort
    /// default applied (only if no sort column is set) and the fallback
    /// limit filled in (only in offset/limit mode with no limit set).
    pub fn resolve(&self, options: &SearchOptions) -> ResolvedQuery {
        let mut resolved = self.clone();

        if let SortSpec::Set { column, direction } = &options.default_sort {
            if resolved.sort_column.is_none() {
                trace!(column = %column, direction = %direction, "applying default sort");
                resolved.sort_column = Some(column.clone());
                resolved.sort_direction = *direction;
            } else {
                trace!(default_column = %column, "keeping requested sort over default");
            }
        }

        let window = PageWindow::resolve(&resolved, options.fallback_limit);
        if resolved.page_size == 0 && resolved.limit == 0 && window.size > 0 {
            resolved.limit = window.size;
        }

        ResolvedQuery::new(resolved, window)
    }

    /// Runs this request over `items` and returns the page plus the total
    /// match count.
    ///
    /// The resolved sort and limit are written back onto `self` so the
    /// request can be echoed to the caller as executed.
    pub fn get_items<'a, T, F>(
        &mut self,
        items: &'a [T],
        accessor: F,
        options: &SearchOptions,
    ) -> SearchPage<'a, T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        let resolved = self.resolve(options);
        let page = resolved.execute(items, accessor);
        *self = resolved.into_request();
        page
    }
}

/// Wire form of the sort column: unset travels as `""`.
mod sort_column_wire {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        column: &Option<String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(column.as_deref().unwrap_or_default())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let column = Option::<String>::deserialize(deserializer)?;
        Ok(column.filter(|c| !c.is_empty()))
    }
}
