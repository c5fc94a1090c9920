//! Table configuration

use std::fmt;
use std::sync::Arc;

use super::{ColumnSort, FilterState, FooterCounts};
use crate::action::{BulkAction, BulkHandler, NewItemAction, RowAction, RowHandler};
use crate::filter::{FilterChip, PredicateErrorHandler, PredicateFailure, Tab};

/// Called with the new sorting state.
pub type SortChangeHandler = Arc<dyn Fn(&[ColumnSort]) + Send + Sync>;

/// Called with the new filter state.
pub type FilterChangeHandler = Arc<dyn Fn(&FilterState) + Send + Sync>;

/// Produces the footer text from the live counts.
pub type FooterRenderer = Arc<dyn Fn(&FooterCounts) -> String + Send + Sync>;

/// Declarative configuration of a [`DataTable`](super::DataTable).
///
/// Immutable for the lifetime of a table; supply a new value with
/// [`DataTable::set_config`](super::DataTable::set_config).
///
/// # Example
///
/// ```
/// use datatable_lib::filter::{FilterChip, Tab};
/// use datatable_lib::table::TableConfig;
/// # #[derive(Clone)]
/// # struct Household { aum: i64 }
///
/// let config: TableConfig<Household> = TableConfig::default()
///     .with_row_selection(true)
///     .with_global_search(true)
///     .with_pagination(true)
///     .with_page_size(20)
///     .with_tabs(vec![
///         Tab::new("all", "All Households"),
///         Tab::new("large", "AUM > 100M").filter(|h: &Household| h.aum > 100_000_000),
///     ])
///     .with_filter_chips(vec![FilterChip::new("cash", "High Cash")]);
///
/// assert!(config.enable_tabs);
/// assert_eq!(config.default_page_size, 20);
/// ```
pub struct TableConfig<T> {
    /// Show a checkbox column and allow selecting rows.
    ///
    /// Default: false
    pub enable_row_selection: bool,

    /// Allow more than one selected row.
    ///
    /// Default: true
    pub enable_multi_row_selection: bool,

    /// Default: true
    pub enable_sorting: bool,

    pub enable_column_visibility: bool,
    pub enable_global_search: bool,
    pub enable_pagination: bool,
    pub enable_tabs: bool,
    pub enable_filter_chips: bool,
    pub enable_advanced_filters: bool,

    /// Default: "Search..."
    pub search_placeholder: String,

    /// Default: 10
    pub default_page_size: usize,

    /// Default: 10, 20, 30, 50, 100
    pub page_size_options: Vec<usize>,

    pub tabs: Vec<Tab<T>>,
    pub filter_chips: Vec<FilterChip<T>>,
    pub row_actions: Vec<RowAction<T>>,

    /// Number of data columns shown before the actions column.
    ///
    /// Default: 1
    pub row_actions_position: usize,

    pub bulk_actions: Vec<BulkAction<T>>,
    pub new_item_actions: Vec<NewItemAction>,

    pub on_row_click: Option<RowHandler<T>>,
    pub on_selection_change: Option<BulkHandler<T>>,
    pub on_sort_change: Option<SortChangeHandler>,
    pub on_filter_change: Option<FilterChangeHandler>,
    pub on_predicate_error: Option<PredicateErrorHandler>,

    /// Custom footer text.
    pub footer: Option<FooterRenderer>,

    /// Default: "No results."
    pub empty_state: String,

    pub loading: bool,

    /// Default: "Loading..."
    pub loading_text: String,

    pub sticky_header: bool,
}

impl<T> Default for TableConfig<T> {
    fn default() -> Self {
        Self {
            enable_row_selection: false,
            enable_multi_row_selection: true,
            enable_sorting: true,
            enable_column_visibility: false,
            enable_global_search: false,
            enable_pagination: false,
            enable_tabs: false,
            enable_filter_chips: false,
            enable_advanced_filters: false,
            search_placeholder: "Search...".to_string(),
            default_page_size: 10,
            page_size_options: vec![10, 20, 30, 50, 100],
            tabs: Vec::new(),
            filter_chips: Vec::new(),
            row_actions: Vec::new(),
            row_actions_position: 1,
            bulk_actions: Vec::new(),
            new_item_actions: Vec::new(),
            on_row_click: None,
            on_selection_change: None,
            on_sort_change: None,
            on_filter_change: None,
            on_predicate_error: None,
            footer: None,
            empty_state: "No results.".to_string(),
            loading: false,
            loading_text: "Loading...".to_string(),
            sticky_header: false,
        }
    }
}

impl<T> TableConfig<T> {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_row_selection(mut self, enabled: bool) -> Self {
        self.enable_row_selection = enabled;
        self
    }

    pub fn with_multi_row_selection(mut self, enabled: bool) -> Self {
        self.enable_multi_row_selection = enabled;
        self
    }

    pub fn with_sorting(mut self, enabled: bool) -> Self {
        self.enable_sorting = enabled;
        self
    }

    pub fn with_column_visibility(mut self, enabled: bool) -> Self {
        self.enable_column_visibility = enabled;
        self
    }

    pub fn with_global_search(mut self, enabled: bool) -> Self {
        self.enable_global_search = enabled;
        self
    }

    pub fn with_pagination(mut self, enabled: bool) -> Self {
        self.enable_pagination = enabled;
        self
    }

    pub fn with_advanced_filters(mut self, enabled: bool) -> Self {
        self.enable_advanced_filters = enabled;
        self
    }

    pub fn with_search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    pub fn with_page_size(mut self, size: usize) -> Self {
        self.default_page_size = size;
        self
    }

    pub fn with_page_size_options(mut self, options: impl Into<Vec<usize>>) -> Self {
        self.page_size_options = options.into();
        self
    }

    /// Sets the tabs and enables the tab bar.
    pub fn with_tabs(mut self, tabs: Vec<Tab<T>>) -> Self {
        self.tabs = tabs;
        self.enable_tabs = true;
        self
    }

    /// Sets the quick-filter chips and enables the chip row.
    pub fn with_filter_chips(mut self, chips: Vec<FilterChip<T>>) -> Self {
        self.filter_chips = chips;
        self.enable_filter_chips = true;
        self
    }

    pub fn with_row_actions(mut self, actions: Vec<RowAction<T>>) -> Self {
        self.row_actions = actions;
        self
    }

    pub fn with_row_actions_position(mut self, position: usize) -> Self {
        self.row_actions_position = position;
        self
    }

    pub fn with_bulk_actions(mut self, actions: Vec<BulkAction<T>>) -> Self {
        self.bulk_actions = actions;
        self
    }

    pub fn with_new_item_actions(mut self, actions: Vec<NewItemAction>) -> Self {
        self.new_item_actions = actions;
        self
    }

    pub fn on_row_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.on_row_click = Some(Arc::new(handler));
        self
    }

    pub fn on_selection_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&[T]) + Send + Sync + 'static,
    {
        self.on_selection_change = Some(Arc::new(handler));
        self
    }

    pub fn on_sort_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&[ColumnSort]) + Send + Sync + 'static,
    {
        self.on_sort_change = Some(Arc::new(handler));
        self
    }

    pub fn on_filter_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&FilterState) + Send + Sync + 'static,
    {
        self.on_filter_change = Some(Arc::new(handler));
        self
    }

    pub fn on_predicate_error<F>(mut self, handler: F) -> Self
    where
        F: Fn(&PredicateFailure) + Send + Sync + 'static,
    {
        self.on_predicate_error = Some(Arc::new(handler));
        self
    }

    pub fn with_footer<F>(mut self, footer: F) -> Self
    where
        F: Fn(&FooterCounts) -> String + Send + Sync + 'static,
    {
        self.footer = Some(Arc::new(footer));
        self
    }

    pub fn with_empty_state(mut self, text: impl Into<String>) -> Self {
        self.empty_state = text.into();
        self
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn with_loading_text(mut self, text: impl Into<String>) -> Self {
        self.loading_text = text.into();
        self
    }

    pub fn with_sticky_header(mut self, sticky: bool) -> Self {
        self.sticky_header = sticky;
        self
    }

    /// Whether the row selection column is shown.
    pub fn selection_enabled(&self) -> bool {
        self.enable_row_selection
    }

    pub fn find_tab(&self, id: &str) -> Option<&Tab<T>> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    pub fn find_chip(&self, id: &str) -> Option<&FilterChip<T>> {
        self.filter_chips.iter().find(|chip| chip.id == id)
    }
}

impl<T> Clone for TableConfig<T> {
    fn clone(&self) -> Self {
        Self {
            enable_row_selection: self.enable_row_selection,
            enable_multi_row_selection: self.enable_multi_row_selection,
            enable_sorting: self.enable_sorting,
            enable_column_visibility: self.enable_column_visibility,
            enable_global_search: self.enable_global_search,
            enable_pagination: self.enable_pagination,
            enable_tabs: self.enable_tabs,
            enable_filter_chips: self.enable_filter_chips,
            enable_advanced_filters: self.enable_advanced_filters,
            search_placeholder: self.search_placeholder.clone(),
            default_page_size: self.default_page_size,
            page_size_options: self.page_size_options.clone(),
            tabs: self.tabs.clone(),
            filter_chips: self.filter_chips.clone(),
            row_actions: self.row_actions.clone(),
            row_actions_position: self.row_actions_position,
            bulk_actions: self.bulk_actions.clone(),
            new_item_actions: self.new_item_actions.clone(),
            on_row_click: self.on_row_click.clone(),
            on_selection_change: self.on_selection_change.clone(),
            on_sort_change: self.on_sort_change.clone(),
            on_filter_change: self.on_filter_change.clone(),
            on_predicate_error: self.on_predicate_error.clone(),
            footer: self.footer.clone(),
            empty_state: self.empty_state.clone(),
            loading: self.loading,
            loading_text: self.loading_text.clone(),
            sticky_header: self.sticky_header,
        }
    }
}

impl<T> fmt::Debug for TableConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableConfig")
            .field("enable_row_selection", &self.enable_row_selection)
            .field("enable_multi_row_selection", &self.enable_multi_row_selection)
            .field("enable_sorting", &self.enable_sorting)
            .field("enable_column_visibility", &self.enable_column_visibility)
            .field("enable_global_search", &self.enable_global_search)
            .field("enable_pagination", &self.enable_pagination)
            .field("enable_tabs", &self.enable_tabs)
            .field("enable_filter_chips", &self.enable_filter_chips)
            .field("enable_advanced_filters", &self.enable_advanced_filters)
            .field("default_page_size", &self.default_page_size)
            .field("tabs", &self.tabs)
            .field("filter_chips", &self.filter_chips)
            .field("row_actions", &self.row_actions)
            .field("bulk_actions", &self.bulk_actions)
            .field("new_item_actions", &self.new_item_actions)
            .finish_non_exhaustive()
    }
}
