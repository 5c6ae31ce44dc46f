//! Query execution: filter, sort, then slice.

use tracing::debug;

use crate::matcher::FieldMatcher;
use crate::ordering::sort_records;
use crate::pagination::PageWindow;
use crate::request::SearchRequest;
use crate::value::Value;

/// A request with every default resolved, ready to run.
///
/// Produced by [`SearchRequest::resolve`]. Running it never changes it, so
/// the same resolved query over the same records always yields the same
/// page.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedQuery {
    request: SearchRequest,
    window: PageWindow,
}

impl ResolvedQuery {
    pub(crate) fn new(request: SearchRequest, window: PageWindow) -> Self {
        ResolvedQuery { request, window }
    }

    /// The request as it will be executed.
    pub fn request(&self) -> &SearchRequest {
        &self.request
    }

    /// The window the sorted matches are sliced to.
    pub fn window(&self) -> PageWindow {
        self.window
    }

    /// Consumes the query, returning the resolved request for persisting.
    pub fn into_request(self) -> SearchRequest {
        self.request
    }

    /// Runs the query over `items`.
    ///
    /// `items` is never reordered; the page borrows from it.
    pub fn execute<'a, T, F>(&self, items: &'a [T], accessor: F) -> SearchPage<'a, T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        let mut matches: Vec<&'a T> = match FieldMatcher::for_request(&self.request) {
            Some(matcher) => items
                .iter()
                .filter(|item| matcher.matches(*item, &accessor))
                .collect(),
            None => items.iter().collect(),
        };
        let total = matches.len();

        if let Some(column) = &self.request.sort_column {
            sort_records(
                &mut matches,
                column,
                self.request.sort_direction,
                &accessor,
            );
        }

        let range = self.window.range(total);
        matches.truncate(range.end);
        matches.drain(..range.start);

        debug!(
            scanned = items.len(),
            total,
            offset = self.window.offset,
            size = self.window.size,
            returned = matches.len(),
            "search executed"
        );

        SearchPage {
            items: matches,
            total,
        }
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage<'a, T> {
    /// Records in the requested window, in sorted order.
    pub items: Vec<&'a T>,
    /// Number of records that matched before pagination.
    pub total: usize,
}

impl<'a, T> SearchPage<'a, T> {
    /// Number of records on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if this page holds no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Splits the page into `(records, total)`.
    pub fn into_parts(self) -> (Vec<&'a T>, usize) {
        (self.items, self.total)
    }

    /// Clones the page's records into an owned vector.
    pub fn cloned(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().map(|item| (*item).clone()).collect()
    }
}
