//! Multi-column, kind-aware term matching.
//!
//! A record is kept when any configured column matches any term entry.
//! A column/term pair only matches when both are of the same kind:
//!
//! | Field  | Term   | `exact_match = true` | `exact_match = false`               |
//! |--------|--------|----------------------|-------------------------------------|
//! | String | String | full equality        | case-insensitive substring          |
//! | Number | Number | numeric equality     | numeric equality                    |
//! | Bool   | Bool   | equality             | equality                            |
//! | Date   | Date   | equality             | equality                            |
//! | other  | other  | no match             | no match                            |

use crate::request::SearchRequest;
use crate::term::TermValue;
use crate::value::Value;

/// Decides whether records pass a request's search term.
#[derive(Debug, Clone)]
pub struct FieldMatcher<'q> {
    columns: &'q [String],
    needles: Vec<Needle<'q>>,
    exact: bool,
}

/// A term entry prepared for matching.
#[derive(Debug, Clone)]
enum Needle<'q> {
    /// String compared for full equality.
    Exact(&'q str),
    /// Lowercased string searched for inside the lowercased field.
    Substring(String),
    /// Number, bool or date, always compared for equality.
    Scalar(&'q TermValue),
}

impl<'q> FieldMatcher<'q> {
    /// Builds the matcher for `request`.
    ///
    /// Returns `None` when the request asks for no filtering: no search
    /// columns, or a term without content.
    pub fn for_request(request: &'q SearchRequest) -> Option<Self> {
        let columns = request.search_columns.as_deref().unwrap_or_default();
        if columns.is_empty() || !request.term.has_content() {
            return None;
        }

        let exact = request.exact_match;
        let needles = request
            .term
            .effective_values()
            .map(|term| match term {
                TermValue::String(s) if exact => Needle::Exact(s),
                TermValue::String(s) => Needle::Substring(s.to_lowercase()),
                _ => Needle::Scalar(term),
            })
            .collect();

        Some(FieldMatcher {
            columns,
            needles,
            exact,
        })
    }

    /// Returns `true` if any column of `item` matches any term entry.
    pub fn matches<T, F>(&self, item: &T, accessor: &F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        self.columns.iter().any(|column| {
            let field = accessor(item, column);
            if field.is_none() {
                return false;
            }
            // Folded once per column, shared by every substring needle
            let folded = match &field {
                Value::String(haystack) if !self.exact => haystack.to_lowercase(),
                _ => String::new(),
            };
            self.needles
                .iter()
                .any(|needle| match_pair(&field, &folded, needle))
        })
    }
}

fn match_pair(field: &Value<'_>, folded: &str, needle: &Needle<'_>) -> bool {
    match (field, needle) {
        (Value::String(haystack), Needle::Exact(term)) => haystack == term,
        (Value::String(_), Needle::Substring(term)) => folded.contains(term.as_str()),

        // Non-string kinds have no substring notion
        (Value::Number(field), Needle::Scalar(TermValue::Number(term))) => {
            field.numeric_eq(*term)
        }
        (Value::Bool(field), Needle::Scalar(TermValue::Bool(term))) => field == term,
        (Value::Date(field), Needle::Scalar(TermValue::Date(term))) => field == term,

        // Kind mismatch contributes no match
        _ => false,
    }
}

/// Returns `true` if `item` passes the search term of `request`.
///
/// Requests without filter intent keep every record.
pub fn matches_request<T, F>(request: &SearchRequest, item: &T, accessor: &F) -> bool
where
    for<'a> F: Fn(&'a T, &str) -> Value<'a>,
{
    match FieldMatcher::for_request(request) {
        Some(matcher) => matcher.matches(item, accessor),
        None => true,
    }
}
