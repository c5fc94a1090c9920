//! Global search across searchable columns.

use crate::column::ColumnSpec;
use crate::model::TableRow;

/// Case-insensitive substring search over every searchable column.
///
/// The query is trimmed; an empty query matches every row. Hidden columns
/// are still searched.
pub fn matches_global_search<T: TableRow>(row: &T, columns: &[ColumnSpec], query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    columns
        .iter()
        .filter(|column| column.meta.searchable)
        .any(|column| row.value(&column.id).to_lowercase_string().contains(&needle))
}
