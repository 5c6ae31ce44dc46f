//! Sort direction, sort defaults and the sort engine.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SieveError;
use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl SortDirection {
    /// Direction for an "ascending?" flag.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }

    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, SortDirection::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, SortDirection::Desc)
    }

    /// Applies this direction to an ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Returns the wire name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = SieveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(SieveError::InvalidSortDirection(s.to_string())),
        }
    }
}

/// Default sort handed to a search, applied only when the request has no
/// sort column of its own.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SortSpec {
    /// No default; an unsorted request stays in input order.
    #[default]
    NotSet,
    /// Sort by `column` in `direction`.
    Set {
        column: String,
        direction: SortDirection,
    },
}

impl SortSpec {
    /// Creates a default sort on `column`.
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        SortSpec::Set {
            column: column.into(),
            direction,
        }
    }

    /// Creates a default sort from a column and an "ascending?" flag.
    ///
    /// `None` for the column yields [`SortSpec::NotSet`].
    pub fn from_column(column: Option<&str>, ascending: bool) -> Self {
        match column {
            Some(column) => SortSpec::new(column, SortDirection::from_ascending(ascending)),
            None => SortSpec::NotSet,
        }
    }

    /// Returns `true` if a default sort is present.
    pub fn is_set(&self) -> bool {
        matches!(self, SortSpec::Set { .. })
    }
}

/// Compares two field values of the same kind.
///
/// Strings compare ordinally, numbers numerically. Returns `None` for
/// mismatched kinds. Missing values and `NaN` sort after present numbers.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Option<Ordering> {
    match (a, b) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Number(a), Value::Number(b)) => match (a.is_nan(), b.is_nan()) {
            (false, false) => a.compare(*b),
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Greater),
            (false, true) => Some(Ordering::Less),
        },
        (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),

        (Value::None, Value::None) => Some(Ordering::Equal),
        (Value::None, _) => Some(Ordering::Greater),
        (_, Value::None) => Some(Ordering::Less),

        _ => None,
    }
}

/// Stably sorts `records` by `column`.
///
/// Pairs that cannot be compared keep their relative order.
pub fn sort_records<T, F>(
    records: &mut [&T],
    column: &str,
    direction: SortDirection,
    accessor: &F,
) where
    for<'a> F: Fn(&'a T, &str) -> Value<'a>,
{
    // slice::sort_by is a stable merge sort
    records.sort_by(|a, b| {
        let ordering = compare_values(&accessor(*a, column), &accessor(*b, column))
            .unwrap_or(Ordering::Equal);
        direction.apply(ordering)
    });
}
