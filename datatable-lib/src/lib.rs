//! Configuration-driven data table engine
//!
//! A headless grid: sorting, tab/chip/column/advanced filtering, global search,
//! identity-keyed selection, column visibility, pagination and action menus,
//! all driven by one [`TableConfig`](table::TableConfig) value.
//!
//! # Example
//!
//! ```
//! use datatable_lib::column::ColumnSpec;
//! use datatable_lib::model::{TableRow, Value};
//! use datatable_lib::table::{DataTable, SortRequest, TableConfig};
//!
//! #[derive(Clone, Debug)]
//! struct Household {
//!     id: u32,
//!     name: String,
//!     aum: i64,
//! }
//!
//! impl TableRow for Household {
//!     type Key = u32;
//!
//!     fn key(&self) -> u32 {
//!         self.id
//!     }
//!
//!     fn value(&self, column_id: &str) -> Value {
//!         match column_id {
//!             "name" => Value::from(self.name.as_str()),
//!             "aum" => Value::from(self.aum),
//!             _ => Value::Null,
//!         }
//!     }
//! }
//!
//! let rows = vec![
//!     Household { id: 1, name: "Adams".into(), aum: 30 },
//!     Household { id: 2, name: "Baker".into(), aum: 10 },
//! ];
//! let columns = vec![ColumnSpec::new("name", "Household"), ColumnSpec::new("aum", "AUM")];
//!
//! let mut table = DataTable::new(columns, rows, TableConfig::default()).unwrap();
//! table.set_sort("aum", SortRequest::Toggle);
//!
//! let names: Vec<_> = table.visible_rows().iter().map(|h| h.name.clone()).collect();
//! assert_eq!(names, ["Baker", "Adams"]);
//! ```

pub mod action;
pub mod column;
pub mod error;
pub mod filter;
pub mod model;
pub mod table;
pub mod toolbar;

pub use error::{ConfigError, ParseError};
pub use model::{TableRow, Value};
pub use table::{DataTable, TableConfig};
