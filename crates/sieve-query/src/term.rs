//! Search terms.
//!
//! A [`Term`] is what the caller is looking for: one value or a list of
//! values, any of which may match. Terms own their data so they can live
//! in a [`SearchRequest`](crate::SearchRequest) and travel over the wire.

use serde::{Deserialize, Serialize, Serializer};

use crate::value::{Number, Timestamp};

/// A single owned term value.
///
/// Mirrors the kinds of [`Value`](crate::Value); a term only ever matches a
/// field of the same kind.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawTermValue")]
pub enum TermValue {
    /// Text to look for.
    String(String),
    /// Number to look for.
    Number(Number),
    /// Boolean to look for.
    Bool(bool),
    /// Date to look for.
    Date(Timestamp),
}

impl TermValue {
    /// Returns `true` for an empty string term, which carries no filter intent.
    pub fn is_blank(&self) -> bool {
        matches!(self, TermValue::String(s) if s.is_empty())
    }
}

// Dates have no JSON form of their own; they go out as their millisecond
// number and come back as `Number`.
impl Serialize for TermValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TermValue::String(s) => serializer.serialize_str(s),
            TermValue::Number(n) => n.serialize(serializer),
            TermValue::Bool(b) => serializer.serialize_bool(*b),
            TermValue::Date(t) => serializer.serialize_i64(t.as_millis()),
        }
    }
}

// `null` decodes as a blank entry, the same as an absent term.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTermValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl From<RawTermValue> for TermValue {
    fn from(raw: RawTermValue) -> Self {
        match raw {
            RawTermValue::Null => TermValue::String(String::new()),
            RawTermValue::Bool(b) => TermValue::Bool(b),
            RawTermValue::Number(n) => TermValue::Number(n),
            RawTermValue::String(s) => TermValue::String(s),
        }
    }
}

impl From<String> for TermValue {
    fn from(s: String) -> Self {
        TermValue::String(s)
    }
}

impl From<&str> for TermValue {
    fn from(s: &str) -> Self {
        TermValue::String(s.to_string())
    }
}

impl From<Number> for TermValue {
    fn from(n: Number) -> Self {
        TermValue::Number(n)
    }
}

impl From<bool> for TermValue {
    fn from(b: bool) -> Self {
        TermValue::Bool(b)
    }
}

impl From<Timestamp> for TermValue {
    fn from(t: Timestamp) -> Self {
        TermValue::Date(t)
    }
}

macro_rules! term_value_from_number {
    ($($source:ty),*) => {
        $(
            impl From<$source> for TermValue {
                fn from(n: $source) -> Self {
                    TermValue::Number(Number::from(n))
                }
            }
        )*
    };
}

term_value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// The search term of a request: a single value or a list of alternatives.
///
/// On the wire a term is either a bare scalar (`"acme"`, `42`, `true`) or
/// an array of scalars (`["acme", "globex"]`). `null`, alone or inside
/// an array, carries no filter intent.
///
/// ```
/// use sieve_query::Term;
///
/// assert!(!Term::default().has_content());
/// assert!(Term::from("acme").has_content());
/// assert!(!Term::from(Vec::<String>::new()).has_content());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Term {
    /// A single value.
    One(TermValue),
    /// Alternatives; a record matches if any entry matches.
    Many(Vec<TermValue>),
}

impl Default for Term {
    fn default() -> Self {
        Term::One(TermValue::String(String::new()))
    }
}

impl Term {
    /// All entries of this term, blank ones included.
    pub fn values(&self) -> &[TermValue] {
        match self {
            Term::One(value) => std::slice::from_ref(value),
            Term::Many(values) => values,
        }
    }

    /// Entries that carry filter intent.
    pub fn effective_values(&self) -> impl Iterator<Item = &TermValue> {
        self.values().iter().filter(|value| !value.is_blank())
    }

    /// Returns `true` if at least one entry carries filter intent.
    pub fn has_content(&self) -> bool {
        self.effective_values().next().is_some()
    }
}

impl From<TermValue> for Term {
    fn from(value: TermValue) -> Self {
        Term::One(value)
    }
}

impl From<Vec<TermValue>> for Term {
    fn from(values: Vec<TermValue>) -> Self {
        Term::Many(values)
    }
}

macro_rules! term_from {
    ($($source:ty),*) => {
        $(
            impl From<$source> for Term {
                fn from(value: $source) -> Self {
                    Term::One(TermValue::from(value))
                }
            }

            impl From<Vec<$source>> for Term {
                fn from(values: Vec<$source>) -> Self {
                    Term::Many(values.into_iter().map(TermValue::from).collect())
                }
            }
        )*
    };
}

term_from!(&str, String, Number, bool, Timestamp);
term_from!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
