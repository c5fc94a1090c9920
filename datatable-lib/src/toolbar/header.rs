//! Column header menus and gestures.

use super::{ConditionDraft, Toolbar};
use crate::column::{ColumnSpec, FilterType};
use crate::filter::{ColumnFilter, Operator};
use crate::model::{TableRow, Value};
use crate::table::{DataTable, SortDirection, SortRequest};

/// What a column header renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    /// Static label.
    Plain,
    /// Label that toggles sorting when clicked.
    SortButton,
    /// Dropdown menu with sort, search and filter entries.
    Menu,
}

/// A sort entry of a header menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortItem {
    pub label: &'static str,
    pub request: SortRequest,
    pub active: bool,
}

/// A facet entry of a header menu.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionItem {
    pub value: Value,
    pub label: String,
    pub icon: Option<String>,
    pub checked: bool,
}

/// The dropdown of a column header.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderMenu {
    pub column_id: String,
    /// Empty when the column is not sortable.
    pub sort_items: Vec<SortItem>,
    /// Current header search text, when the column is searchable.
    pub search: Option<String>,
    /// Facet options, for select-style filters.
    pub options: Vec<OptionItem>,
    /// Whether picking an option toggles it instead of replacing the filter.
    pub multi_select: bool,
    /// Show the "Advanced Filter..." entry.
    pub condition: bool,
    /// Show the "Clear Filter" entry.
    pub can_clear: bool,
}

fn is_sortable<T: TableRow>(table: &DataTable<T>, column: &ColumnSpec) -> bool {
    table.config().enable_sorting && column.meta.sortable
}

/// Decide how a column header renders. `None` for unknown columns.
pub fn header_kind<T: TableRow>(table: &DataTable<T>, column_id: &str) -> Option<HeaderKind> {
    let column = table.column(column_id)?;
    let kind = if column.meta.filterable || column.meta.searchable {
        HeaderKind::Menu
    } else if is_sortable(table, column) {
        HeaderKind::SortButton
    } else {
        HeaderKind::Plain
    };
    Some(kind)
}

/// Build the dropdown for a column header. `None` unless it renders as a menu.
pub fn header_menu<T: TableRow>(table: &DataTable<T>, column_id: &str) -> Option<HeaderMenu> {
    if header_kind(table, column_id)? != HeaderKind::Menu {
        return None;
    }
    let column = table.column(column_id)?;
    let meta = &column.meta;
    let filter = table.column_filter(column_id);

    let sort_items = if is_sortable(table, column) {
        let current = table.sort_direction(column_id);
        vec![
            SortItem {
                label: "Sort Ascending",
                request: SortRequest::Ascending,
                active: current == Some(SortDirection::Asc),
            },
            SortItem {
                label: "Sort Descending",
                request: SortRequest::Descending,
                active: current == Some(SortDirection::Desc),
            },
            SortItem {
                label: "Clear Sort",
                request: SortRequest::Clear,
                active: false,
            },
        ]
    } else {
        Vec::new()
    };

    let search = meta.searchable.then(|| match filter {
        Some(ColumnFilter::Search(text)) => text.clone(),
        _ => String::new(),
    });

    let options = if meta.filterable && meta.filter_type.needs_options() {
        meta.filter_options
            .iter()
            .map(|option| OptionItem {
                value: option.value.clone(),
                label: option.label.clone(),
                icon: option.icon.clone(),
                checked: filter.is_some_and(|f| f.has_option(&option.value)),
            })
            .collect()
    } else {
        Vec::new()
    };

    Some(HeaderMenu {
        column_id: column_id.to_string(),
        sort_items,
        search,
        options,
        multi_select: meta.filter_type == FilterType::MultiSelect,
        condition: meta.filterable,
        can_clear: filter.is_some(),
    })
}

/// Operator a condition popover starts with for a filter type.
fn default_operator(filter_type: FilterType) -> Operator {
    match filter_type {
        FilterType::Text => Operator::Contains,
        FilterType::Range | FilterType::DateRange => Operator::Between,
        FilterType::Select | FilterType::MultiSelect => Operator::Equals,
    }
}

impl Toolbar {
    /// Click on a sort-button header: cycle none → asc → desc → none.
    pub fn click_sort_button<T: TableRow>(&mut self, table: &mut DataTable<T>, column_id: &str) {
        table.set_sort(column_id, SortRequest::Toggle);
    }

    pub fn sort_ascending<T: TableRow>(&mut self, table: &mut DataTable<T>, column_id: &str) {
        table.set_sort(column_id, SortRequest::Ascending);
    }

    pub fn sort_descending<T: TableRow>(&mut self, table: &mut DataTable<T>, column_id: &str) {
        table.set_sort(column_id, SortRequest::Descending);
    }

    pub fn clear_sort<T: TableRow>(&mut self, table: &mut DataTable<T>, column_id: &str) {
        table.set_sort(column_id, SortRequest::Clear);
    }

    /// Apply the header search box. Blank text clears the column filter.
    pub fn apply_search<T: TableRow>(
        &mut self,
        table: &mut DataTable<T>,
        column_id: &str,
        text: &str,
    ) {
        let searchable = table.column(column_id).is_some_and(|c| c.meta.searchable);
        if !searchable {
            log::debug!("Column '{}' has no header search", column_id);
            return;
        }
        table.set_column_filter(column_id, Some(ColumnFilter::Search(text.to_string())));
    }

    /// Click a facet option.
    ///
    /// Single-select sets the filter to the option. Multi-select toggles the
    /// option and clears the filter when nothing is left picked.
    pub fn pick_option<T: TableRow>(
        &mut self,
        table: &mut DataTable<T>,
        column_id: &str,
        value: &Value,
    ) {
        let Some(column) = table.column(column_id) else {
            log::debug!("Ignoring option pick on unknown column '{}'", column_id);
            return;
        };
        let meta = &column.meta;
        if !meta.filterable || !meta.filter_type.needs_options() {
            log::debug!("Column '{}' has no facet options", column_id);
            return;
        }
        let Some(option) = meta.filter_options.iter().find(|o| o.value.loosely_eq(value)) else {
            log::debug!("Column '{}' has no option '{}'", column_id, value);
            return;
        };
        let option = option.value.clone();

        let filter = if meta.filter_type == FilterType::MultiSelect {
            let mut picked = match table.column_filter(column_id) {
                Some(ColumnFilter::AnyOf(values)) => values.clone(),
                Some(ColumnFilter::Equals(value)) => vec![value.clone()],
                _ => Vec::new(),
            };
            match picked.iter().position(|v| v.loosely_eq(&option)) {
                Some(index) => {
                    picked.remove(index);
                }
                None => picked.push(option),
            }
            ColumnFilter::AnyOf(picked)
        } else {
            ColumnFilter::Equals(option)
        };
        table.set_column_filter(column_id, Some(filter));
    }

    /// "Clear Filter": remove the column's header filter.
    pub fn clear_options<T: TableRow>(&mut self, table: &mut DataTable<T>, column_id: &str) {
        table.set_column_filter(column_id, None);
        if self
            .condition
            .as_ref()
            .is_some_and(|draft| draft.column == column_id)
        {
            self.condition = None;
        }
    }

    /// Open the condition popover of a filterable column.
    pub fn open_condition<T: TableRow>(&mut self, table: &DataTable<T>, column_id: &str) {
        let Some(column) = table.column(column_id).filter(|c| c.meta.filterable) else {
            log::debug!("Column '{}' is not filterable", column_id);
            return;
        };
        let draft = match table.column_filter(column_id) {
            Some(ColumnFilter::Condition(condition)) => {
                ConditionDraft::from_condition(column_id, condition)
            }
            _ => ConditionDraft::new(column_id, default_operator(column.meta.filter_type)),
        };
        self.condition = Some(draft);
    }

    pub fn condition_draft(&self) -> Option<&ConditionDraft> {
        self.condition.as_ref()
    }

    /// Edit the open condition popover.
    pub fn update_condition(&mut self, operator: Operator, value: &str, value2: &str) {
        if let Some(draft) = &mut self.condition {
            draft.operator = operator;
            draft.value = value.to_string();
            draft.value2 = value2.to_string();
        }
    }

    /// Apply the popover: a blank value clears the column filter.
    pub fn apply_condition<T: TableRow>(&mut self, table: &mut DataTable<T>) {
        let Some(draft) = self.condition.take() else {
            return;
        };
        let filter = draft.to_condition().map(ColumnFilter::Condition);
        table.set_column_filter(&draft.column, filter);
    }

    pub fn cancel_condition(&mut self) {
        self.condition = None;
    }
}
