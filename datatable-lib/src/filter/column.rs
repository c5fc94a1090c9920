//! Per-column filters set from column headers.

use serde::Deserialize;
use serde::Serialize;

use super::Condition;
use crate::model::Value;

/// The filter currently applied to one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ColumnFilter {
    /// Cell equals the value (single-select facet).
    Equals(Value),
    /// Cell equals any of the values (multi-select facet).
    AnyOf(Vec<Value>),
    /// Cell satisfies an operator condition.
    Condition(Condition),
    /// Cell contains the text, ignoring case (header search).
    Search(String),
}

impl ColumnFilter {
    /// Test a cell value.
    ///
    /// A list-valued cell matches a facet if any of its items does.
    pub fn matches(&self, cell: &Value) -> bool {
        match self {
            ColumnFilter::Equals(expected) => {
                cell.as_slice().iter().any(|item| item.loosely_eq(expected))
            }
            ColumnFilter::AnyOf(options) => options
                .iter()
                .any(|expected| cell.as_slice().iter().any(|item| item.loosely_eq(expected))),
            ColumnFilter::Condition(condition) => condition.matches(cell),
            ColumnFilter::Search(text) => {
                let needle = text.trim().to_lowercase();
                needle.is_empty() || cell.to_lowercase_string().contains(&needle)
            }
        }
    }

    /// Whether `value` is one of the facet values picked by this filter.
    pub fn has_option(&self, value: &Value) -> bool {
        match self {
            ColumnFilter::Equals(expected) => expected.loosely_eq(value),
            ColumnFilter::AnyOf(options) => options.iter().any(|o| o.loosely_eq(value)),
            _ => false,
        }
    }

    /// Normalize a filter that would match everything into "no filter".
    pub(crate) fn normalized(self) -> Option<Self> {
        match &self {
            ColumnFilter::AnyOf(options) if options.is_empty() => None,
            ColumnFilter::Search(text) if text.trim().is_empty() => None,
            _ => Some(self),
        }
    }
}
