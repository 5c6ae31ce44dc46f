//! Pagination window resolution.
//!
//! A request can paginate two ways: `offset`/`limit`, or
//! `page_index`/`page_size`. Page-based input wins whenever `page_size` is
//! non-zero. A window size of zero means "everything from the offset on".

use serde::{Deserialize, Serialize};

use crate::request::SearchRequest;

/// The concrete `(offset, size)` used to slice the sorted matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageWindow {
    /// Number of matches skipped.
    pub offset: usize,
    /// Maximum number of matches returned; `0` means unbounded.
    pub size: usize,
}

impl PageWindow {
    /// Resolves the window for `request`.
    ///
    /// `fallback_limit` is only consulted in offset/limit mode when the
    /// request carries no limit; `0` means no fallback.
    pub fn resolve(request: &SearchRequest, fallback_limit: usize) -> Self {
        if request.page_size > 0 {
            return PageWindow {
                offset: request.page_index.saturating_mul(request.page_size),
                size: request.page_size,
            };
        }

        let size = if request.limit > 0 {
            request.limit
        } else {
            fallback_limit
        };

        PageWindow {
            offset: request.offset,
            size,
        }
    }

    /// Returns `true` if the window has no upper bound.
    pub fn is_unbounded(&self) -> bool {
        self.size == 0
    }

    /// Index range of this window within a collection of `len` items.
    pub fn range(&self, len: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(len);
        let end = if self.is_unbounded() {
            len
        } else {
            start.saturating_add(self.size).min(len)
        };
        start..end
    }

    /// Zero-based page number of this window, for "page 3 of N" displays.
    ///
    /// An unbounded window is always page 0.
    pub fn page_index(&self) -> usize {
        if self.is_unbounded() {
            0
        } else {
            self.offset / self.size
        }
    }

    /// Number of pages needed to show `total` matches.
    pub fn page_count(&self, total: usize) -> usize {
        if self.is_unbounded() {
            usize::from(total > 0)
        } else {
            total.div_ceil(self.size)
        }
    }

    /// Slices `items` to this window.
    pub fn apply<'s, T>(&self, items: &'s [T]) -> &'s [T] {
        &items[self.range(items.len())]
    }
}

/// Bounds `candidate` by `max_allowed`.
///
/// A `max_allowed` of zero means there is no ceiling. An unbounded
/// candidate (zero) is replaced by the ceiling.
pub fn cap(candidate: usize, max_allowed: usize) -> usize {
    if max_allowed == 0 {
        candidate
    } else if candidate == 0 {
        max_allowed
    } else {
        candidate.min(max_allowed)
    }
}
