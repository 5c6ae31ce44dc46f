//! Sieve - search, sort and paginate in-memory record collections.
//!
//! Sieve serves list and table endpoints from a plain slice of records.
//! One [`SearchRequest`] carries everything a client can ask for:
//!
//! - A search term (one value or a list) matched against a set of columns
//! - Exact or case-insensitive substring matching for strings
//! - A sort column and direction
//! - Offset/limit or page index/page size pagination
//!
//! Running a request returns the requested page together with the total
//! number of matches, so callers can render "page 3 of N".
//!
//! # Quick Start
//!
//! ```rust
//! use sieve_query::{Number, SearchOptions, SearchRequest, SortDirection, Value};
//!
//! struct User {
//!     name: String,
//!     logins: u32,
//! }
//!
//! fn accessor<'a>(user: &'a User, field: &str) -> Value<'a> {
//!     match field {
//!         "name" => Value::String(&user.name),
//!         "logins" => Value::Number(Number::from(user.logins)),
//!         _ => Value::None,
//!     }
//! }
//!
//! let users = vec![
//!     User { name: "ada".into(), logins: 12 },
//!     User { name: "grace".into(), logins: 40 },
//!     User { name: "adele".into(), logins: 3 },
//! ];
//!
//! let mut request = SearchRequest::new("ad", "logins", SortDirection::Desc, 1, 0, false)
//!     .with_search_columns(["name"]);
//!
//! let page = request.get_items(&users, accessor, &SearchOptions::new());
//! assert_eq!(page.total, 2);
//! assert_eq!(page.items.len(), 1);
//! assert_eq!(page.items[0].name, "ada");
//! ```
//!
//! # Pipeline
//!
//! ```text
//! resolve sort default → filter → sort → resolve window → slice
//! ```
//!
//! - **Sort default**: applied only when the request has no sort column.
//! - **Filter**: a record is kept if any search column matches any term
//!   entry. No columns or a blank term keeps everything.
//! - **Sort**: stable; strings compare ordinally, numbers numerically.
//! - **Window**: `page_size > 0` means page mode (`page_index * page_size`),
//!   otherwise `offset`/`limit` with the fallback limit when `limit` is 0.
//!   A size of 0 returns everything from the offset on.
//!
//! [`SearchRequest::resolve`] performs the resolution without side
//! effects; [`SearchRequest::get_items`] also writes the resolved sort and
//! limit back onto the request.

mod error;
mod matcher;
mod options;
mod ordering;
mod pagination;
mod request;
mod search;
mod term;
mod traits;
mod value;

pub use error::{Result, SieveError};
pub use matcher::{matches_request, FieldMatcher};
pub use options::SearchOptions;
pub use ordering::{compare_values, sort_records, SortDirection, SortSpec};
pub use pagination::PageWindow;
pub use request::SearchRequest;
pub use search::{ResolvedQuery, SearchPage};
pub use term::{Term, TermValue};
pub use traits::{SearchTimestamp, Searchable};
pub use value::{Number, Timestamp, Value};

#[cfg(feature = "derive")]
pub use sieve_macros::Searchable;
