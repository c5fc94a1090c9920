//! TableRow trait for records displayed by a table.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use super::Value;

/// Trait for records that can be displayed as rows in a [`DataTable`](crate::table::DataTable).
///
/// The key identifies a row across filtering, sorting and data refreshes, so
/// selection stays attached to the same record when the visible set changes.
///
/// # Example
///
/// ```
/// use datatable_lib::model::{TableRow, Value};
///
/// #[derive(Clone)]
/// struct Client {
///     id: String,
///     name: String,
///     cash_percent: f64,
/// }
///
/// impl TableRow for Client {
///     type Key = String;
///
///     fn key(&self) -> String {
///         self.id.clone()
///     }
///
///     fn value(&self, column_id: &str) -> Value {
///         match column_id {
///             "name" => Value::from(self.name.as_str()),
///             "cashPercent" => Value::from(self.cash_percent),
///             _ => Value::Null,
///         }
///     }
/// }
/// ```
pub trait TableRow: Clone + Send + Sync + 'static {
    /// The key type used to identify this row.
    type Key: Clone + Eq + Hash + Debug + Display + Send + Sync + 'static;

    /// Return the unique, stable key for this row.
    fn key(&self) -> Self::Key;

    /// Return the value of the given column for this row.
    ///
    /// Unknown column ids should return [`Value::Null`].
    fn value(&self, column_id: &str) -> Value;
}
