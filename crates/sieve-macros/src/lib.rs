//! Derive macro for sieve-query.
//!
//! - [`Searchable`] - Generate field accessors so records can be searched
//!   and sorted by name

mod searchable;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Searchable` trait for record structs.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `String` | Text field; any `AsRef<str>` type |
/// | `Number` | Numeric field; any type with `Number: From<T>` |
/// | `Date` | Date field; requires a `SearchTimestamp` impl |
/// | `Bool` | Boolean field |
/// | `skip` | Exclude this field |
/// | `rename = "..."` | Use a custom name in requests |
/// | `ty = "..."` | Kind given as a string literal |
///
/// Fields without a kind are not exposed.
///
/// # Generated Code
///
/// 1. Field name constants (e.g. `Customer::NAME`, `Customer::CREATED_AT`)
/// 2. An implementation of `Searchable::search_field_value()`
///
/// # Example
///
/// ```ignore
/// use sieve_macros::Searchable;
/// use sieve_query::{SearchOptions, SearchRequest, Searchable as _};
///
/// #[derive(Searchable)]
/// struct Customer {
///     #[search(String)]
///     name: String,
///
///     #[search(Number)]
///     orders: u32,
///
///     #[search(Date, rename = "createdAt")]
///     created_at: i64,
///
///     #[search(skip)]
///     password_hash: String,
/// }
///
/// let mut request = SearchRequest::default()
///     .with_term("acme")
///     .with_search_columns([Customer::NAME]);
/// let page = request.get_items(&customers, Customer::accessor, &SearchOptions::new());
/// ```
#[proc_macro_derive(Searchable, attributes(search))]
pub fn searchable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    searchable::searchable_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
