//! Toolbar and column header controller.
//!
//! Translates user gestures (clicking a tab, typing in the search box,
//! editing the advanced filter panel, picking a facet in a header menu) into
//! calls on a [`DataTable`](crate::table::DataTable), and builds the view
//! models those widgets display. Holds only transient UI state.

mod controller;
mod draft;
mod header;

pub use controller::{BulkMenu, ChipView, ColumnToggle, MenuItem, TabView, Toolbar};
pub use draft::{AdvancedFilterDraft, ConditionDraft, DraftRow, parse_operand};
pub use header::{HeaderKind, HeaderMenu, OptionItem, SortItem, header_kind, header_menu};
