//! Column metadata: capabilities, filter facets and alignment.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::model::Value;

/// Horizontal alignment for cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// The kind of filter a column header offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum FilterType {
    /// Free text.
    Text,
    /// Pick exactly one option.
    #[default]
    Select,
    /// Pick any number of options; a row matches if it matches any of them.
    MultiSelect,
    /// Numeric range.
    Range,
    /// Date range.
    DateRange,
}

impl FilterType {
    /// Returns the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterType::Text => "text",
            FilterType::Select => "select",
            FilterType::MultiSelect => "multi-select",
            FilterType::Range => "range",
            FilterType::DateRange => "date-range",
        }
    }

    /// Returns `true` for the facet types that need [`FilterOption`]s.
    pub fn needs_options(&self) -> bool {
        matches!(self, FilterType::Select | FilterType::MultiSelect)
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FilterType {
    /// Unknown names fall back to [`FilterType::Select`].
    fn from(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "text" => FilterType::Text,
            "multi-select" | "multiselect" => FilterType::MultiSelect,
            "range" => FilterType::Range,
            "date-range" | "daterange" => FilterType::DateRange,
            _ => FilterType::Select,
        }
    }
}

impl From<String> for FilterType {
    fn from(name: String) -> Self {
        FilterType::from(name.as_str())
    }
}

impl FromStr for FilterType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FilterType::from(s))
    }
}

/// One facet value offered by a column header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOption {
    /// The value a row must hold to match this option.
    pub value: Value,
    /// Display label.
    pub label: String,
    /// Optional icon name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Optional color token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl FilterOption {
    /// Create an option with the given value and label.
    pub fn new(value: impl Into<Value>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            icon: None,
            color: None,
        }
    }

    /// Create an option whose label is the value itself.
    pub fn labeled(value: impl Into<String>) -> Self {
        let value = value.into();
        Self::new(value.clone(), value)
    }

    /// Set the icon name.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the color token.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Capabilities and presentation hints for a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnMeta {
    /// Label used in menus (falls back to the header text).
    pub label: Option<String>,
    /// Whether the header can sort this column.
    pub sortable: bool,
    /// Whether global search looks at this column.
    pub searchable: bool,
    /// Whether the header offers a filter.
    pub filterable: bool,
    /// The kind of filter the header offers.
    pub filter_type: FilterType,
    /// Facet values for select-style filters.
    pub filter_options: Vec<FilterOption>,
    /// Cell alignment.
    pub align: Alignment,
    /// Whether the column may be hidden.
    pub hideable: bool,
    /// Whether the column starts visible.
    pub default_visible: bool,
    /// Optional grouping label for menus.
    pub group: Option<String>,
}

impl Default for ColumnMeta {
    fn default() -> Self {
        Self {
            label: None,
            sortable: true,
            searchable: false,
            filterable: false,
            filter_type: FilterType::Select,
            filter_options: Vec::new(),
            align: Alignment::Left,
            hideable: true,
            default_visible: true,
            group: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_type_parse() {
        assert_eq!(FilterType::from("multi-select"), FilterType::MultiSelect);
        assert_eq!(FilterType::from("date-range"), FilterType::DateRange);
        assert_eq!(FilterType::from("Range"), FilterType::Range);
        assert_eq!(FilterType::from("slider"), FilterType::Select);
        assert_eq!("".parse::<FilterType>(), Ok(FilterType::Select));
    }

    #[test]
    fn test_meta_defaults() {
        let meta = ColumnMeta::default();
        assert!(meta.sortable);
        assert!(!meta.searchable);
        assert!(!meta.filterable);
        assert!(meta.hideable);
        assert!(meta.default_visible);
        assert_eq!(meta.align, Alignment::Left);
    }

    #[test]
    fn test_meta_deserialize_partial() {
        let meta: ColumnMeta =
            serde_json::from_str(r#"{"filterable": true, "filterType": "multi-select"}"#).unwrap();
        assert!(meta.filterable);
        assert!(meta.sortable);
        assert_eq!(meta.filter_type, FilterType::MultiSelect);
    }

    #[test]
    fn test_meta_deserialize_unknown_filter_type() {
        let meta: ColumnMeta =
            serde_json::from_str(r#"{"filterable": true, "filterType": "slider"}"#).unwrap();
        assert!(meta.filterable);
        assert_eq!(meta.filter_type, FilterType::Select);

        let meta: ColumnMeta = serde_json::from_str(r#"{"filterType": "dateRange"}"#).unwrap();
        assert_eq!(meta.filter_type, FilterType::DateRange);
        assert_eq!(serde_json::to_string(&meta.filter_type).unwrap(), r#""date-range""#);
    }
}
