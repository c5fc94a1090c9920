//! The table engine.

use std::collections::{BTreeSet, HashSet};

use super::sort::sort_rows;
use super::{
    CheckState, ColumnSort, FilterState, Pagination, Selection, SelectionMode, SortDirection,
    SortRequest, TableConfig, ViewState,
};
use crate::action::invoke_row_action;
use crate::column::ColumnSpec;
use crate::error::ConfigError;
use crate::filter::{AdvancedFilter, ColumnFilter, matches_global_search};
use crate::model::TableRow;

/// A headless data table.
///
/// Owns the columns, the dataset, the configuration and the view state.
/// Every derived view (`filtered_rows`, `visible_rows`, counts, rendering)
/// is recomputed from those on demand.
///
/// Setters are no-ops when the matching feature is disabled or when they
/// name an unknown column, tab, chip or row. Change callbacks fire only when
/// the state actually changed.
pub struct DataTable<T: TableRow> {
    columns: Vec<ColumnSpec>,
    data: Vec<T>,
    config: TableConfig<T>,
    state: ViewState<T::Key>,
    loading: bool,
}

impl<T: TableRow> DataTable<T> {
    /// Create a table, validating the columns, the configuration and row key
    /// uniqueness.
    pub fn new(
        columns: Vec<ColumnSpec>,
        data: Vec<T>,
        config: TableConfig<T>,
    ) -> Result<Self, ConfigError> {
        validate(&columns, &config)?;
        row_keys(&data)?;

        let column_visibility = columns
            .iter()
            .map(|column| (column.id.clone(), column.meta.default_visible))
            .collect();
        let state = ViewState {
            sorting: Vec::new(),
            filters: initial_filters(&config),
            column_visibility,
            selection: Selection::with_mode(selection_mode(&config)),
            pagination: Pagination::new(config.default_page_size),
        };

        log::debug!(
            "Created table with {} columns and {} rows",
            columns.len(),
            data.len()
        );

        Ok(Self {
            loading: config.loading,
            columns,
            data,
            config,
            state,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn column(&self, id: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|column| column.id == id)
    }

    /// Columns currently shown, in declaration order.
    pub fn visible_columns(&self) -> Vec<&ColumnSpec> {
        self.columns
            .iter()
            .filter(|column| self.state.is_visible(&column.id))
            .collect()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn config(&self) -> &TableConfig<T> {
        &self.config
    }

    pub fn state(&self) -> &ViewState<T::Key> {
        &self.state
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.state.filters
    }

    pub fn sorting(&self) -> &[ColumnSort] {
        &self.state.sorting
    }

    /// Current sort direction of a column.
    pub fn sort_direction(&self, column_id: &str) -> Option<SortDirection> {
        self.state
            .sort()
            .filter(|sort| sort.id == column_id)
            .map(ColumnSort::direction)
    }

    pub fn column_filter(&self, column_id: &str) -> Option<&ColumnFilter> {
        self.state.filters.column_filters.get(column_id)
    }

    pub fn selection(&self) -> &Selection<T::Key> {
        &self.state.selection
    }

    pub fn is_selected(&self, key: &T::Key) -> bool {
        self.state.selection.is_selected(key)
    }

    pub fn is_visible(&self, column_id: &str) -> bool {
        self.state.is_visible(column_id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn row(&self, key: &T::Key) -> Option<&T> {
        self.data.iter().find(|row| &row.key() == key)
    }

    // =========================================================================
    // Derived rows
    // =========================================================================

    /// Rows after tab, chips, column filters, advanced filters, global search
    /// and sorting. Not paginated.
    pub fn filtered_rows(&self) -> Vec<&T> {
        let mut rows: Vec<&T> = self.data.iter().filter(|row| self.passes_filters(row)).collect();
        if let Some(sort) = self.state.sort() {
            sort_rows(&mut rows, sort);
        }
        log::trace!("Filtered {} of {} rows", rows.len(), self.data.len());
        rows
    }

    /// The rows to display: [`filtered_rows`](Self::filtered_rows) sliced to
    /// the current page when pagination is enabled.
    pub fn visible_rows(&self) -> Vec<&T> {
        let rows = self.filtered_rows();
        if !self.config.enable_pagination {
            return rows;
        }
        let range = self.state.pagination.range(rows.len());
        rows[range].to_vec()
    }

    /// Selected rows in the filtered view, across all pages.
    pub fn selected_rows(&self) -> Vec<&T> {
        if self.state.selection.is_empty() {
            return Vec::new();
        }
        self.filtered_rows()
            .into_iter()
            .filter(|row| self.state.selection.is_selected(&row.key()))
            .collect()
    }

    /// Matching row count per tab, over the full dataset.
    pub fn tab_counts(&self) -> Vec<(&str, usize)> {
        let on_error = self.config.on_predicate_error.as_ref();
        self.config
            .tabs
            .iter()
            .map(|tab| {
                let count = self.data.iter().filter(|row| tab.matches(row, on_error)).count();
                (tab.id.as_str(), count)
            })
            .collect()
    }

    /// Matching row count per chip on its own, over the full dataset.
    pub fn chip_counts(&self) -> Vec<(&str, usize)> {
        let on_error = self.config.on_predicate_error.as_ref();
        self.config
            .filter_chips
            .iter()
            .map(|chip| {
                let count = self.data.iter().filter(|row| chip.matches(row, on_error)).count();
                (chip.id.as_str(), count)
            })
            .collect()
    }

    fn passes_filters(&self, row: &T) -> bool {
        let filters = &self.state.filters;
        let on_error = self.config.on_predicate_error.as_ref();

        if self.config.enable_tabs {
            let tab = self.config.find_tab(&filters.active_tab);
            if tab.is_some_and(|tab| !tab.matches(row, on_error)) {
                return false;
            }
        }

        if self.config.enable_filter_chips {
            let chips_pass = self
                .config
                .filter_chips
                .iter()
                .filter(|chip| filters.active_chips.contains(&chip.id))
                .all(|chip| chip.matches(row, on_error));
            if !chips_pass {
                return false;
            }
        }

        let columns_pass = filters
            .column_filters
            .iter()
            .all(|(column_id, filter)| filter.matches(&row.value(column_id)));
        if !columns_pass {
            return false;
        }

        let advanced_pass = filters
            .advanced_filters
            .iter()
            .all(|advanced| advanced.condition.matches(&row.value(&advanced.column)));
        if !advanced_pass {
            return false;
        }

        matches_global_search(row, &self.columns, &filters.global_filter)
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    /// Apply a sort gesture to a column. Sorting a new column replaces the old sort.
    pub fn set_sort(&mut self, column_id: &str, request: SortRequest) {
        if !self.config.enable_sorting {
            log::debug!("Sorting disabled, ignoring sort on '{}'", column_id);
            return;
        }
        match self.column(column_id) {
            Some(column) if column.meta.sortable => {}
            Some(_) => {
                log::debug!("Column '{}' is not sortable", column_id);
                return;
            }
            None => {
                log::debug!("Ignoring sort on unknown column '{}'", column_id);
                return;
            }
        }

        let current = self.sort_direction(column_id);
        let sorting = match request.resolve(current) {
            Some(direction) => vec![ColumnSort {
                id: column_id.to_string(),
                desc: direction == SortDirection::Desc,
            }],
            None if current.is_none() => return,
            None => Vec::new(),
        };
        if sorting == self.state.sorting {
            return;
        }

        log::debug!("Sorting changed: {:?}", sorting);
        self.state.sorting = sorting;
        if let Some(handler) = &self.config.on_sort_change {
            handler(&self.state.sorting);
        }
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Set or clear (`None`) the header filter of a column.
    ///
    /// An empty multi-select or blank search clears the filter.
    pub fn set_column_filter(&mut self, column_id: &str, filter: Option<ColumnFilter>) {
        if self.column(column_id).is_none() {
            log::debug!("Ignoring filter on unknown column '{}'", column_id);
            return;
        }
        let filter = filter.and_then(ColumnFilter::normalized);
        let column_filters = &mut self.state.filters.column_filters;
        if column_filters.get(column_id) == filter.as_ref() {
            return;
        }
        match filter {
            Some(filter) => {
                column_filters.insert(column_id.to_string(), filter);
            }
            None => {
                column_filters.remove(column_id);
            }
        }
        self.filters_changed();
    }

    /// Set the global search text.
    pub fn set_global_filter(&mut self, text: impl Into<String>) {
        if !self.config.enable_global_search {
            log::debug!("Global search disabled");
            return;
        }
        let text = text.into();
        if self.state.filters.global_filter == text {
            return;
        }
        self.state.filters.global_filter = text;
        self.filters_changed();
    }

    /// Switch to another tab. Other filters, search and selection are kept.
    pub fn set_active_tab(&mut self, tab_id: &str) {
        if !self.config.enable_tabs {
            log::debug!("Tabs disabled");
            return;
        }
        if self.config.find_tab(tab_id).is_none() {
            log::debug!("Ignoring unknown tab '{}'", tab_id);
            return;
        }
        if self.state.filters.active_tab == tab_id {
            return;
        }
        self.state.filters.active_tab = tab_id.to_string();
        self.filters_changed();
    }

    /// Activate or deactivate a chip.
    pub fn toggle_filter_chip(&mut self, chip_id: &str) {
        if !self.config.enable_filter_chips {
            log::debug!("Filter chips disabled");
            return;
        }
        if self.config.find_chip(chip_id).is_none() {
            log::debug!("Ignoring unknown chip '{}'", chip_id);
            return;
        }
        let chips = &mut self.state.filters.active_chips;
        if !chips.remove(chip_id) {
            chips.insert(chip_id.to_string());
        }
        self.filters_changed();
    }

    /// Replace the advanced filter list. Entries on unknown columns are dropped.
    pub fn set_advanced_filters(&mut self, filters: Vec<AdvancedFilter>) {
        if !self.config.enable_advanced_filters {
            log::debug!("Advanced filters disabled");
            return;
        }
        let filters: Vec<AdvancedFilter> = filters
            .into_iter()
            .filter(|filter| {
                let known = self.column(&filter.column).is_some();
                if !known {
                    log::debug!("Dropping advanced filter on unknown column '{}'", filter.column);
                }
                known
            })
            .collect();
        if self.state.filters.advanced_filters == filters {
            return;
        }
        self.state.filters.advanced_filters = filters;
        self.filters_changed();
    }

    fn filters_changed(&mut self) {
        self.state.pagination.page_index = 0;
        log::debug!(
            "Filters changed: {} column, {} advanced, tab '{}'",
            self.state.filters.column_filters.len(),
            self.state.filters.advanced_filters.len(),
            self.state.filters.active_tab
        );
        if let Some(handler) = &self.config.on_filter_change {
            handler(&self.state.filters);
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Toggle the selection of one row.
    pub fn toggle_row_selected(&mut self, key: &T::Key) {
        if self.state.selection.mode == SelectionMode::None {
            log::debug!("Row selection disabled");
            return;
        }
        if self.row(key).is_none() {
            log::debug!("Ignoring selection of unknown row '{}'", key);
            return;
        }
        if self.state.selection.toggle(key.clone()) {
            self.selection_changed();
        }
    }

    /// Select every row of the current page, or deselect them if all are selected.
    pub fn toggle_all_selected(&mut self) {
        let keys: Vec<T::Key> = self.visible_rows().iter().map(|row| row.key()).collect();
        if self.state.selection.toggle_all(&keys) {
            self.selection_changed();
        }
    }

    /// State of the "select all" checkbox for the current page.
    pub fn page_selection_state(&self) -> CheckState {
        let keys: Vec<T::Key> = self.visible_rows().iter().map(|row| row.key()).collect();
        let selected = keys
            .iter()
            .filter(|key| self.state.selection.is_selected(key))
            .count();
        match selected {
            0 => CheckState::Unchecked,
            n if n == keys.len() => CheckState::Checked,
            _ => CheckState::Indeterminate,
        }
    }

    pub fn clear_selection(&mut self) {
        if self.state.selection.clear() {
            self.selection_changed();
        }
    }

    fn selection_changed(&self) {
        log::debug!("Selection changed: {} selected", self.state.selection.len());
        if let Some(handler) = &self.config.on_selection_change {
            let rows: Vec<T> = self.selected_rows().into_iter().cloned().collect();
            handler(&rows);
        }
    }

    // =========================================================================
    // Columns
    // =========================================================================

    /// Show or hide a column. Columns that are not hideable stay visible.
    pub fn set_column_visibility(&mut self, column_id: &str, visible: bool) {
        if !self.config.enable_column_visibility {
            log::debug!("Column visibility disabled");
            return;
        }
        let Some(column) = self.column(column_id) else {
            log::debug!("Ignoring visibility of unknown column '{}'", column_id);
            return;
        };
        if !visible && !column.meta.hideable {
            log::debug!("Column '{}' cannot be hidden", column_id);
            return;
        }
        self.state
            .column_visibility
            .insert(column_id.to_string(), visible);
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    pub fn pagination(&self) -> Pagination {
        let total = self.filtered_rows().len();
        Pagination {
            page_index: self.state.pagination.clamped_index(total),
            page_size: self.state.pagination.page_size,
        }
    }

    pub fn page_count(&self) -> usize {
        if !self.config.enable_pagination {
            return 1;
        }
        self.state.pagination.page_count(self.filtered_rows().len())
    }

    pub fn can_next_page(&self) -> bool {
        self.config.enable_pagination && self.state.pagination.can_next(self.filtered_rows().len())
    }

    pub fn can_previous_page(&self) -> bool {
        self.config.enable_pagination
            && self.state.pagination.can_previous(self.filtered_rows().len())
    }

    /// Change the page size and go back to the first page. Zero is ignored.
    pub fn set_page_size(&mut self, size: usize) {
        if size == 0 {
            log::debug!("Ignoring page size 0");
            return;
        }
        self.state.pagination = Pagination::new(size);
    }

    /// Jump to a page, clamped to the last page.
    pub fn set_page_index(&mut self, index: usize) {
        let last = self.page_count() - 1;
        self.state.pagination.page_index = index.min(last);
    }

    pub fn next_page(&mut self) {
        if self.can_next_page() {
            let current = self.pagination().page_index;
            self.state.pagination.page_index = current + 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.can_previous_page() {
            let current = self.pagination().page_index;
            self.state.pagination.page_index = current - 1;
        }
    }

    // =========================================================================
    // Data, config, rows
    // =========================================================================

    /// Replace the dataset. Selected keys with no matching row are dropped.
    ///
    /// Rejects a dataset with duplicate row keys and keeps the current one.
    pub fn set_data(&mut self, data: Vec<T>) -> Result<(), ConfigError> {
        let keys = row_keys(&data)?;
        self.data = data;
        if self.state.selection.retain(|key| keys.contains(key)) {
            self.selection_changed();
        }
        Ok(())
    }

    /// Replace the configuration.
    ///
    /// The active tab, chips and pagination are reset from the new value.
    /// Sorting, column filters, search and selection are kept.
    pub fn set_config(&mut self, config: TableConfig<T>) -> Result<(), ConfigError> {
        validate(&self.columns, &config)?;

        let filters = initial_filters(&config);
        self.state.filters.active_tab = filters.active_tab;
        self.state.filters.active_chips = filters.active_chips;
        self.state.pagination = Pagination::new(config.default_page_size);

        let mode = selection_mode(&config);
        if mode != self.state.selection.mode {
            self.state.selection = Selection::with_mode(mode);
        }

        self.loading = config.loading;
        self.config = config;
        log::debug!("Table config replaced");
        Ok(())
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Report a click on a row to `on_row_click`. Returns false for unknown rows.
    pub fn click_row(&self, key: &T::Key) -> bool {
        let Some(row) = self.row(key) else {
            log::debug!("Ignoring click on unknown row '{}'", key);
            return false;
        };
        if let Some(handler) = &self.config.on_row_click {
            handler(row);
        }
        true
    }

    /// Invoke a row action (or submenu item) on a row.
    pub fn invoke_row_action(&self, key: &T::Key, action_id: &str) -> bool {
        match self.row(key) {
            Some(row) => invoke_row_action(&self.config.row_actions, action_id, row),
            None => {
                log::debug!("Ignoring action '{}' on unknown row '{}'", action_id, key);
                false
            }
        }
    }

    /// Invoke a bulk action with the selected rows of the filtered view.
    pub fn invoke_bulk_action(&self, action_id: &str) -> bool {
        let Some(action) = self.config.bulk_actions.iter().find(|a| a.id == action_id) else {
            log::debug!("Ignoring unknown bulk action '{}'", action_id);
            return false;
        };
        let rows: Vec<T> = self.selected_rows().into_iter().cloned().collect();
        action.invoke(&rows)
    }

    /// Invoke a new-item action.
    pub fn invoke_new_item_action(&self, action_id: &str) -> bool {
        match self.config.new_item_actions.iter().find(|a| a.id == action_id) {
            Some(action) => {
                action.invoke();
                true
            }
            None => {
                log::debug!("Ignoring unknown new-item action '{}'", action_id);
                false
            }
        }
    }
}

impl<T: TableRow + std::fmt::Debug> std::fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataTable")
            .field("columns", &self.columns)
            .field("rows", &self.data.len())
            .field("config", &self.config)
            .field("state", &self.state)
            .finish()
    }
}

fn selection_mode<T>(config: &TableConfig<T>) -> SelectionMode {
    match (config.enable_row_selection, config.enable_multi_row_selection) {
        (false, _) => SelectionMode::None,
        (true, true) => SelectionMode::Multi,
        (true, false) => SelectionMode::Single,
    }
}

fn initial_filters<T>(config: &TableConfig<T>) -> FilterState {
    let active_tab = match config.tabs.first() {
        Some(tab) if config.enable_tabs => tab.id.clone(),
        _ => String::new(),
    };
    let active_chips: BTreeSet<String> = if config.enable_filter_chips {
        config
            .filter_chips
            .iter()
            .filter(|chip| chip.active)
            .map(|chip| chip.id.clone())
            .collect()
    } else {
        BTreeSet::new()
    };
    FilterState {
        active_tab,
        active_chips,
        ..FilterState::default()
    }
}

fn validate<T>(columns: &[ColumnSpec], config: &TableConfig<T>) -> Result<(), ConfigError> {
    let mut column_ids = HashSet::new();
    for column in columns {
        if !column_ids.insert(column.id.as_str()) {
            return Err(ConfigError::DuplicateColumn(column.id.clone()));
        }
        let meta = &column.meta;
        if meta.filterable && meta.filter_type.needs_options() && meta.filter_options.is_empty() {
            return Err(ConfigError::MissingFilterOptions {
                column: column.id.clone(),
                filter_type: meta.filter_type,
            });
        }
    }

    check_unique("tab", config.tabs.iter().map(|tab| tab.id.as_str()))?;
    check_unique("chip", config.filter_chips.iter().map(|chip| chip.id.as_str()))?;
    check_unique(
        "row action",
        config.row_actions.iter().flat_map(|action| action.ids()),
    )?;
    check_unique(
        "bulk action",
        config.bulk_actions.iter().map(|action| action.id.as_str()),
    )?;
    check_unique(
        "new item action",
        config.new_item_actions.iter().map(|action| action.id.as_str()),
    )?;

    if config.default_page_size == 0 || config.page_size_options.contains(&0) {
        return Err(ConfigError::InvalidPageSize);
    }

    for chip in &config.filter_chips {
        if let Some(column) = &chip.column {
            if !column_ids.contains(column.as_str()) {
                return Err(ConfigError::unknown_column(
                    format!("chip '{}'", chip.id),
                    column.as_str(),
                ));
            }
        }
    }

    Ok(())
}

/// Collect the row keys, failing on the first repeated one.
fn row_keys<T: TableRow>(data: &[T]) -> Result<HashSet<T::Key>, ConfigError> {
    let mut keys = HashSet::with_capacity(data.len());
    for row in data {
        let key = row.key();
        if keys.contains(&key) {
            return Err(ConfigError::DuplicateRowKey(key.to_string()));
        }
        keys.insert(key);
    }
    Ok(keys)
}

fn check_unique<'a>(
    kind: &'static str,
    ids: impl IntoIterator<Item = &'a str>,
) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ConfigError::duplicate(kind, id));
        }
    }
    Ok(())
}
