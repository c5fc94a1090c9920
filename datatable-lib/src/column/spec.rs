//! Column definitions.

use std::fmt;
use std::sync::Arc;

use super::{Alignment, ColumnMeta, FilterOption, FilterType};
use crate::filter::ColumnFilter;
use crate::model::Value;
use crate::table::SortDirection;

/// Formats a cell value for display.
pub type CellRenderer = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// Produces a header label from the column's live state.
pub type HeaderRenderer = Arc<dyn for<'a> Fn(&HeaderContext<'a>) -> String + Send + Sync>;

/// Live state handed to a [`Header::Render`] closure.
#[derive(Debug, Clone, Copy)]
pub struct HeaderContext<'a> {
    /// The column being rendered.
    pub column: &'a ColumnSpec,
    /// Current sort direction on this column, if any.
    pub sort: Option<SortDirection>,
    /// Active column filter, if any.
    pub filter: Option<&'a ColumnFilter>,
}

/// Column header: plain text or a render function.
#[derive(Clone)]
pub enum Header {
    Label(String),
    Render(HeaderRenderer),
}

impl fmt::Debug for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Header::Label(label) => f.debug_tuple("Label").field(label).finish(),
            Header::Render(_) => f.write_str("Render(<fn>)"),
        }
    }
}

/// A column of a [`DataTable`](crate::table::DataTable).
///
/// # Example
///
/// ```
/// use datatable_lib::column::{Alignment, ColumnSpec, FilterOption, FilterType};
///
/// let status = ColumnSpec::new("status", "Status")
///     .filter(FilterType::MultiSelect)
///     .options(["Active", "Onboarding"].map(FilterOption::labeled));
///
/// let cash = ColumnSpec::new("cashPercent", "Cash %")
///     .align(Alignment::Right)
///     .cell(|v| format!("{}%", v));
///
/// assert!(status.meta.filterable);
/// assert_eq!(cash.meta.align, Alignment::Right);
/// ```
#[derive(Clone)]
pub struct ColumnSpec {
    /// Unique accessor key, passed to [`TableRow::value`](crate::model::TableRow::value).
    pub id: String,
    /// Header label or renderer.
    pub header: Header,
    /// Optional cell formatter. Without one, the value's `Display` form is used.
    pub cell: Option<CellRenderer>,
    /// Capabilities and hints.
    pub meta: ColumnMeta,
}

impl ColumnSpec {
    /// Create a new column with the given id and header text.
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: Header::Label(header.into()),
            cell: None,
            meta: ColumnMeta::default(),
        }
    }

    /// Replace the header with a render function.
    pub fn header_fn<F>(mut self, render: F) -> Self
    where
        F: for<'a> Fn(&HeaderContext<'a>) -> String + Send + Sync + 'static,
    {
        self.header = Header::Render(Arc::new(render));
        self
    }

    /// Set a cell formatter.
    pub fn cell<F>(mut self, render: F) -> Self
    where
        F: Fn(&Value) -> String + Send + Sync + 'static,
    {
        self.cell = Some(Arc::new(render));
        self
    }

    /// Replace the whole metadata block.
    pub fn meta(mut self, meta: ColumnMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Set the menu label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.meta.label = Some(label.into());
        self
    }

    /// Enable or disable sorting.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.meta.sortable = sortable;
        self
    }

    /// Include this column in global search.
    pub fn searchable(mut self) -> Self {
        self.meta.searchable = true;
        self
    }

    /// Make the column filterable with the given filter type.
    pub fn filter(mut self, filter_type: FilterType) -> Self {
        self.meta.filterable = true;
        self.meta.filter_type = filter_type;
        self
    }

    /// Set the facet options.
    pub fn options(mut self, options: impl IntoIterator<Item = FilterOption>) -> Self {
        self.meta.filter_options = options.into_iter().collect();
        self
    }

    /// Set cell alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.meta.align = align;
        self
    }

    /// Prevent the column from being hidden.
    pub fn always_visible(mut self) -> Self {
        self.meta.hideable = false;
        self
    }

    /// Start the column hidden.
    pub fn hidden_by_default(mut self) -> Self {
        self.meta.default_visible = false;
        self
    }

    /// Set the grouping label.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.meta.group = Some(group.into());
        self
    }

    /// Static header text, if the header is a plain label.
    pub fn header_text(&self) -> Option<&str> {
        match &self.header {
            Header::Label(label) => Some(label),
            Header::Render(_) => None,
        }
    }

    /// Label used in menus: the explicit label, else the header text, else the id.
    pub fn display_label(&self) -> &str {
        self.meta
            .label
            .as_deref()
            .or_else(|| self.header_text())
            .unwrap_or(&self.id)
    }

    /// Render the header for the given live state.
    pub fn render_header(&self, sort: Option<SortDirection>, filter: Option<&ColumnFilter>) -> String {
        match &self.header {
            Header::Label(label) => label.clone(),
            Header::Render(render) => render(&HeaderContext {
                column: self,
                sort,
                filter,
            }),
        }
    }

    /// Format a cell value.
    pub fn render_cell(&self, value: &Value) -> String {
        match &self.cell {
            Some(render) => render(value),
            None => value.to_string(),
        }
    }

    /// Look up the label of the facet option matching `value`.
    pub fn option_label(&self, value: &Value) -> Option<&str> {
        self.meta
            .filter_options
            .iter()
            .find(|option| option.value.loosely_eq(value))
            .map(|option| option.label.as_str())
    }
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("cell", &self.cell.as_ref().map(|_| "<fn>"))
            .field("meta", &self.meta)
            .finish()
    }
}
