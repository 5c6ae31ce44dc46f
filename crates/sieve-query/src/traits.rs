//! Traits for record access.
//!
//! [`Searchable`] is implemented by the `#[derive(Searchable)]` macro (or by
//! hand) so a record type can be searched without writing a free accessor
//! function.

use crate::value::{Timestamp, Value};

/// Trait for record types that can be searched and sorted by field name.
///
/// # Manual Implementation
///
/// ```
/// use sieve_query::{Number, Searchable, Value};
///
/// struct Customer {
///     name: String,
///     orders: u32,
/// }
///
/// impl Searchable for Customer {
///     fn search_field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::String(&self.name),
///             "orders" => Value::Number(Number::from(self.orders)),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Searchable {
    /// Returns the value of a field, or [`Value::None`] if the record has
    /// no such field.
    fn search_field_value(&self, field: &str) -> Value<'_>;

    /// Accessor function usable with [`SearchRequest::get_items`].
    ///
    /// ```ignore
    /// let page = request.get_items(&customers, Customer::accessor, &options);
    /// ```
    ///
    /// [`SearchRequest::get_items`]: crate::SearchRequest::get_items
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.search_field_value(field)
    }
}

/// Conversion of date-like field types into a [`Timestamp`].
///
/// Used by the derive macro for fields marked `#[search(Date)]`.
pub trait SearchTimestamp {
    /// Converts this value to a [`Timestamp`].
    fn search_timestamp(&self) -> Timestamp;
}

impl SearchTimestamp for Timestamp {
    fn search_timestamp(&self) -> Timestamp {
        *self
    }
}

impl SearchTimestamp for i64 {
    fn search_timestamp(&self) -> Timestamp {
        Timestamp::from_millis(*self)
    }
}

impl SearchTimestamp for u64 {
    fn search_timestamp(&self) -> Timestamp {
        Timestamp::from_millis(i64::try_from(*self).unwrap_or(i64::MAX))
    }
}

impl SearchTimestamp for std::time::SystemTime {
    fn search_timestamp(&self) -> Timestamp {
        match self.duration_since(std::time::UNIX_EPOCH) {
            Ok(since) => {
                Timestamp::from_millis(i64::try_from(since.as_millis()).unwrap_or(i64::MAX))
            }
            Err(before) => Timestamp::from_millis(
                i64::try_from(before.duration().as_millis()).map_or(i64::MIN, |ms| -ms),
            ),
        }
    }
}
