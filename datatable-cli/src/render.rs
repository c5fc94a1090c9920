//! Plain-text rendering of a household table.

use unicode_width::UnicodeWidthStr;

use datatable_lib::column::Alignment;
use datatable_lib::filter::ColumnFilter;
use datatable_lib::model::TableRow;
use datatable_lib::table::{Body, CheckState, DataTable, LayoutColumn, RenderedCell, SortDirection};
use datatable_lib::toolbar::Toolbar;

const GAP: &str = "  ";

/// Body rows between repeated headers when the header is sticky.
const STICKY_ROWS: usize = 20;

/// Pad `text` to `width` display columns.
fn pad(text: &str, width: usize, align: Alignment) -> String {
    let fill = width.saturating_sub(text.width());
    match align {
        Alignment::Left => format!("{}{}", text, " ".repeat(fill)),
        Alignment::Right => format!("{}{}", " ".repeat(fill), text),
        Alignment::Center => {
            let left = fill / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(fill - left))
        }
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

fn header_checkbox(state: CheckState) -> &'static str {
    match state {
        CheckState::Unchecked => "[ ]",
        CheckState::Indeterminate => "[-]",
        CheckState::Checked => "[x]",
    }
}

fn sort_marker(sort: Option<SortDirection>) -> &'static str {
    match sort {
        Some(SortDirection::Asc) => " ^",
        Some(SortDirection::Desc) => " v",
        None => "",
    }
}

/// The tab bar, chips and search line.
pub fn toolbar<T: TableRow>(toolbar: &Toolbar, table: &DataTable<T>) -> Vec<String> {
    let mut lines = Vec::new();

    let tabs: Vec<String> = toolbar
        .tab_views(table)
        .into_iter()
        .map(|tab| {
            let text = format!("{} {}", tab.label, tab.count);
            if tab.active { format!("[{}]", text) } else { text }
        })
        .collect();
    if !tabs.is_empty() {
        lines.push(tabs.join(" | "));
    }

    let chips: Vec<String> = toolbar
        .chip_views(table)
        .into_iter()
        .map(|chip| format!("({}) {}", if chip.active { "*" } else { " " }, chip.label))
        .collect();
    if !chips.is_empty() {
        lines.push(chips.join("  "));
    }

    let facets = facets(table);
    if !facets.is_empty() {
        lines.push(format!("Filters: {}", facets.join(" | ")));
    }

    if table.config().enable_global_search {
        let query = &table.filter_state().global_filter;
        let search = if query.is_empty() {
            format!("Search: <{}>", toolbar.search_placeholder(table))
        } else {
            format!("Search: {}", query)
        };
        match toolbar.advanced_badge(table) {
            Some(count) => lines.push(format!("{}   Advanced filters ({})", search, count)),
            None => lines.push(search),
        }
    }
    lines
}

/// Active header filters, with option values shown by their labels.
fn facets<T: TableRow>(table: &DataTable<T>) -> Vec<String> {
    table
        .columns()
        .iter()
        .filter_map(|column| {
            let text = match table.column_filter(&column.id)? {
                ColumnFilter::Equals(value) => column
                    .option_label(value)
                    .map(str::to_string)
                    .unwrap_or_else(|| value.to_string()),
                ColumnFilter::AnyOf(values) => values
                    .iter()
                    .map(|value| {
                        column
                            .option_label(value)
                            .map(str::to_string)
                            .unwrap_or_else(|| value.to_string())
                    })
                    .collect::<Vec<_>>()
                    .join(", "),
                ColumnFilter::Condition(condition) => condition.to_string(),
                ColumnFilter::Search(text) => format!("contains {}", text),
            };
            Some(format!("{}: {}", column.display_label(), text))
        })
        .collect()
}

/// The header and body as aligned text rows.
///
/// A sticky header is repeated every [`STICKY_ROWS`] body rows.
pub fn grid<T: TableRow>(table: &DataTable<T>) -> Vec<String> {
    let rows = match table.render_body() {
        Body::Loading(text) | Body::Empty(text) => return vec![text],
        Body::Rows(rows) => rows,
    };

    let layout = table.layout();
    let headers = table.header_cells();
    let mut header_texts = Vec::with_capacity(layout.len());
    let mut aligns = Vec::with_capacity(layout.len());
    for slot in &layout {
        match slot {
            LayoutColumn::Select => {
                header_texts.push(header_checkbox(table.page_selection_state()).to_string());
                aligns.push(Alignment::Left);
            }
            LayoutColumn::Data(id) => {
                let cell = headers.iter().find(|h| &h.column_id == id);
                header_texts.push(
                    cell.map(|h| format!("{}{}", h.label, sort_marker(h.sort)))
                        .unwrap_or_default(),
                );
                aligns.push(cell.map(|h| h.align).unwrap_or_default());
            }
            LayoutColumn::Actions => {
                header_texts.push(String::new());
                aligns.push(Alignment::Left);
            }
        }
    }

    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            row.cells
                .iter()
                .map(|cell| match cell {
                    RenderedCell::Checkbox(checked) => checkbox(*checked).to_string(),
                    RenderedCell::Data { text, .. } => text.clone(),
                    RenderedCell::Actions(entries) => format!("... {}", entries.len()),
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..layout.len())
        .map(|i| {
            body.iter()
                .filter_map(|cells| cells.get(i))
                .chain(std::iter::once(&header_texts[i]))
                .map(|text| text.width())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .zip(&aligns)
            .map(|((text, width), align)| pad(text, *width, *align))
            .collect::<Vec<_>>()
            .join(GAP)
            .trim_end()
            .to_string()
    };

    let header = line(&header_texts);
    let rule = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join(GAP);

    let mut lines = vec![header.clone(), rule.clone()];
    for (index, cells) in body.iter().enumerate() {
        if table.config().sticky_header && index > 0 && index % STICKY_ROWS == 0 {
            lines.push(header.clone());
            lines.push(rule.clone());
        }
        lines.push(line(cells));
    }
    lines
}

/// Footer text, page summary and bulk menu label.
pub fn footer<T: TableRow>(toolbar: &Toolbar, table: &DataTable<T>) -> Vec<String> {
    let mut lines = vec![table.footer()];
    if let Some(summary) = table.page_summary() {
        let counts = table.footer_counts();
        lines.push(format!("{} ({} matching)", summary, counts.filtered));
    }
    if let Some(menu) = toolbar.bulk_menu(table) {
        let items: Vec<&str> = menu.items.iter().map(|item| item.label.as_str()).collect();
        lines.push(format!("{}: {}", menu.label, items.join(", ")));
    }
    lines
}
