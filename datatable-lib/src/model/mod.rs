//! Row and cell value model

mod row;
mod value;

pub use row::TableRow;
pub use value::Value;
