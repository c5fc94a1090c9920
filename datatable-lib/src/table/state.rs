//! View state owned by a table.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::Hash;

use serde::Serialize;

use super::{ColumnSort, Pagination, Selection};
use crate::filter::{AdvancedFilter, ColumnFilter};

/// Everything the filter pipeline reads from the view state.
///
/// Passed to `on_filter_change` after any filter mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterState {
    /// Header filters by column id.
    pub column_filters: BTreeMap<String, ColumnFilter>,
    /// Global search text, as typed.
    pub global_filter: String,
    /// Id of the active tab (empty when there are no tabs).
    pub active_tab: String,
    /// Ids of the active chips.
    pub active_chips: BTreeSet<String>,
    /// Committed advanced conditions.
    pub advanced_filters: Vec<AdvancedFilter>,
}

impl FilterState {
    /// Number of column filters plus advanced conditions in effect.
    pub fn active_filter_count(&self) -> usize {
        self.column_filters.len() + self.advanced_filters.len()
    }
}

/// Mutable view state: sorting, filters, visibility, selection, pagination.
#[derive(Debug, Clone)]
pub struct ViewState<K: Clone + Eq + Hash> {
    /// At most one entry.
    pub sorting: Vec<ColumnSort>,
    pub filters: FilterState,
    pub column_visibility: HashMap<String, bool>,
    pub selection: Selection<K>,
    pub pagination: Pagination,
}

impl<K: Clone + Eq + Hash> ViewState<K> {
    /// Whether a column is visible. Unknown columns count as visible.
    pub fn is_visible(&self, column_id: &str) -> bool {
        self.column_visibility
            .get(column_id)
            .copied()
            .unwrap_or(true)
    }

    /// The active sort, if any.
    pub fn sort(&self) -> Option<&ColumnSort> {
        self.sorting.first()
    }
}
