//! Column metadata model.
//!
//! A column is a static description: how to read the cell value
//! (`id`, the accessor key), how to label it, and what the header may offer
//! (sorting, text search, facet filtering, hiding).

mod meta;
mod spec;

pub use meta::{Alignment, ColumnMeta, FilterOption, FilterType};
pub use spec::{CellRenderer, ColumnSpec, Header, HeaderContext, HeaderRenderer};
