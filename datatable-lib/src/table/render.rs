//! Headless rendering: column layout, header cells, body rows and footer.

use serde::Serialize;

use super::{DataTable, SortDirection};
use crate::action::{MenuEntry, resolve_row_menu};
use crate::column::Alignment;
use crate::filter::ColumnFilter;
use crate::model::TableRow;

/// One column slot of the rendered table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LayoutColumn {
    /// The row selection checkbox column.
    Select,
    /// A data column, by id.
    Data(String),
    /// The row actions menu column.
    Actions,
}

/// Tri-state checkbox, used by the "select all" header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheckState {
    Unchecked,
    Indeterminate,
    Checked,
}

/// A rendered data column header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderCell {
    pub column_id: String,
    pub label: String,
    pub align: Alignment,
    pub sortable: bool,
    pub sort: Option<SortDirection>,
    pub filter: Option<ColumnFilter>,
}

/// A rendered cell, in layout order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RenderedCell {
    Checkbox(bool),
    Data {
        column_id: String,
        text: String,
        align: Alignment,
    },
    Actions(Vec<MenuEntry>),
}

/// A rendered body row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedRow<K> {
    pub key: K,
    pub selected: bool,
    pub cells: Vec<RenderedCell>,
}

/// The table body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Body<K> {
    /// Loading placeholder text.
    Loading(String),
    /// Empty-state text, shown when no row survives the filters.
    Empty(String),
    Rows(Vec<RenderedRow<K>>),
}

/// Counts shown in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterCounts {
    /// Rows in the dataset.
    pub total: usize,
    /// Selected rows, including ones currently filtered out.
    pub selected: usize,
    /// Rows surviving the filters.
    pub filtered: usize,
}

impl<T: TableRow> DataTable<T> {
    /// Ordered column slots.
    ///
    /// The select column comes first when selection is enabled. The actions
    /// column follows the `row_actions_position`-th visible data column, or
    /// comes last when the position exceeds the column count.
    pub fn layout(&self) -> Vec<LayoutColumn> {
        let mut layout: Vec<LayoutColumn> = self
            .visible_columns()
            .into_iter()
            .map(|column| LayoutColumn::Data(column.id.clone()))
            .collect();

        if !self.config().row_actions.is_empty() {
            let position = self.config().row_actions_position.min(layout.len());
            layout.insert(position, LayoutColumn::Actions);
        }
        if self.config().selection_enabled() {
            layout.insert(0, LayoutColumn::Select);
        }
        layout
    }

    /// Header cells for the visible data columns.
    pub fn header_cells(&self) -> Vec<HeaderCell> {
        self.visible_columns()
            .into_iter()
            .map(|column| {
                let sort = self.sort_direction(&column.id);
                let filter = self.column_filter(&column.id);
                HeaderCell {
                    column_id: column.id.clone(),
                    label: column.render_header(sort, filter),
                    align: column.meta.align,
                    sortable: self.config().enable_sorting && column.meta.sortable,
                    sort,
                    filter: filter.cloned(),
                }
            })
            .collect()
    }

    /// The body: loading text, empty-state text, or the rows of the current page.
    pub fn render_body(&self) -> Body<T::Key> {
        if self.is_loading() {
            return Body::Loading(self.config().loading_text.clone());
        }
        let rows = self.visible_rows();
        if rows.is_empty() {
            return Body::Empty(self.config().empty_state.clone());
        }

        let layout = self.layout();
        let rendered = rows
            .into_iter()
            .map(|row| {
                let key = row.key();
                let selected = self.is_selected(&key);
                let cells = layout
                    .iter()
                    .filter_map(|slot| match slot {
                        LayoutColumn::Select => Some(RenderedCell::Checkbox(selected)),
                        LayoutColumn::Data(id) => self.column(id).map(|column| RenderedCell::Data {
                            column_id: id.clone(),
                            text: column.render_cell(&row.value(id)),
                            align: column.meta.align,
                        }),
                        LayoutColumn::Actions => Some(RenderedCell::Actions(resolve_row_menu(
                            &self.config().row_actions,
                            row,
                        ))),
                    })
                    .collect();
                RenderedRow {
                    key,
                    selected,
                    cells,
                }
            })
            .collect();
        Body::Rows(rendered)
    }

    pub fn footer_counts(&self) -> FooterCounts {
        FooterCounts {
            total: self.data().len(),
            selected: self.selection().len(),
            filtered: self.filtered_rows().len(),
        }
    }

    /// Footer text from the configured renderer, or `Total: N | Selected: M`.
    ///
    /// The default text leaves out the selected count when row selection is off.
    pub fn footer(&self) -> String {
        let counts = self.footer_counts();
        match &self.config().footer {
            Some(render) => render(&counts),
            None if self.config().selection_enabled() => {
                format!("Total: {} | Selected: {}", counts.total, counts.selected)
            }
            None => format!("Total: {}", counts.total),
        }
    }

    /// `Page X of Y` when pagination is enabled.
    pub fn page_summary(&self) -> Option<String> {
        if !self.config().enable_pagination {
            return None;
        }
        let page = self.pagination().page_index + 1;
        Some(format!("Page {} of {}", page, self.page_count()))
    }
}
