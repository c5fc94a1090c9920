//! Table engine: configuration, view state and the derived row pipeline.

mod config;
mod engine;
mod pagination;
mod render;
mod selection;
mod sort;
mod state;

pub use config::{FilterChangeHandler, FooterRenderer, SortChangeHandler, TableConfig};
pub use engine::DataTable;
pub use pagination::Pagination;
pub use render::{Body, CheckState, FooterCounts, HeaderCell, LayoutColumn, RenderedCell, RenderedRow};
pub use selection::{Selection, SelectionMode};
pub use sort::{ColumnSort, SortDirection, SortRequest};
pub use state::{FilterState, ViewState};
