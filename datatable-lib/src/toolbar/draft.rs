//! Editable filter drafts.
//!
//! Drafts hold what the user typed as plain strings. They are turned into
//! typed conditions only when applied.

use crate::filter::{AdvancedFilter, Condition, Operator};
use crate::model::Value;

/// Parse a typed operand for `operator`.
///
/// List operators split on commas; everything else keeps the trimmed text.
/// Numbers and dates stay strings: conditions read them numerically or as
/// dates when comparing.
pub fn parse_operand(operator: Operator, text: &str) -> Value {
    if operator.is_list() {
        let items: Vec<Value> = text
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(Value::from)
            .collect();
        return Value::List(items);
    }
    Value::from(text.trim())
}

fn operand_text(value: &Value) -> String {
    value.to_string()
}

/// One row of the advanced filter panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftRow {
    pub column: String,
    pub operator: Operator,
    pub value: String,
    /// Upper bound, used by `between`.
    pub value2: String,
}

impl DraftRow {
    pub fn new(column: impl Into<String>, operator: Operator, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            operator,
            value: value.into(),
            value2: String::new(),
        }
    }

    pub fn with_value2(mut self, value2: impl Into<String>) -> Self {
        self.value2 = value2.into();
        self
    }

    /// A row is applied only with a column and a non-blank value.
    pub fn is_complete(&self) -> bool {
        !self.column.trim().is_empty() && !self.value.trim().is_empty()
    }

    fn to_filter(&self) -> AdvancedFilter {
        AdvancedFilter::new(self.column.trim(), condition_from(self.operator, &self.value, &self.value2))
    }
}

impl From<&AdvancedFilter> for DraftRow {
    fn from(filter: &AdvancedFilter) -> Self {
        Self {
            column: filter.column.clone(),
            operator: filter.condition.operator,
            value: operand_text(&filter.condition.value),
            value2: filter
                .condition
                .value2
                .as_ref()
                .map(operand_text)
                .unwrap_or_default(),
        }
    }
}

fn condition_from(operator: Operator, value: &str, value2: &str) -> Condition {
    let value2 = value2.trim();
    Condition {
        operator,
        value: parse_operand(operator, value),
        value2: (operator.is_range() && !value2.is_empty()).then(|| Value::from(value2)),
    }
}

/// Rows being edited in the advanced filter panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvancedFilterDraft {
    rows: Vec<DraftRow>,
}

impl Default for AdvancedFilterDraft {
    fn default() -> Self {
        Self::blank()
    }
}

impl AdvancedFilterDraft {
    /// A draft with a single empty row.
    pub fn blank() -> Self {
        Self {
            rows: vec![DraftRow::default()],
        }
    }

    /// Seed from the committed list, or a single empty row when there is none.
    pub fn from_committed(filters: &[AdvancedFilter]) -> Self {
        if filters.is_empty() {
            return Self::blank();
        }
        Self {
            rows: filters.iter().map(DraftRow::from).collect(),
        }
    }

    pub fn rows(&self) -> &[DraftRow] {
        &self.rows
    }

    pub fn add_row(&mut self) {
        self.rows.push(DraftRow::default());
    }

    /// Remove a row. Out-of-range indices are ignored.
    pub fn remove_row(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    /// Replace a row. Returns false for out-of-range indices.
    pub fn update_row(&mut self, index: usize, row: DraftRow) -> bool {
        match self.rows.get_mut(index) {
            Some(slot) => {
                *slot = row;
                true
            }
            None => false,
        }
    }

    /// The complete rows as filters.
    pub fn to_filters(&self) -> Vec<AdvancedFilter> {
        self.rows
            .iter()
            .filter(|row| row.is_complete())
            .map(DraftRow::to_filter)
            .collect()
    }
}

/// The condition popover of one column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionDraft {
    pub column: String,
    pub operator: Operator,
    pub value: String,
    pub value2: String,
}

impl ConditionDraft {
    pub fn new(column: impl Into<String>, operator: Operator) -> Self {
        Self {
            column: column.into(),
            operator,
            value: String::new(),
            value2: String::new(),
        }
    }

    /// Seed from an existing condition.
    pub fn from_condition(column: impl Into<String>, condition: &Condition) -> Self {
        Self {
            column: column.into(),
            operator: condition.operator,
            value: operand_text(&condition.value),
            value2: condition
                .value2
                .as_ref()
                .map(operand_text)
                .unwrap_or_default(),
        }
    }

    /// The typed condition, or `None` when the value is blank.
    pub fn to_condition(&self) -> Option<Condition> {
        if self.value.trim().is_empty() {
            return None;
        }
        Some(condition_from(self.operator, &self.value, &self.value2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_draft_has_one_row() {
        let draft = AdvancedFilterDraft::from_committed(&[]);
        assert_eq!(draft.rows(), &[DraftRow::default()]);
        assert!(draft.to_filters().is_empty());
    }

    #[test]
    fn test_incomplete_rows_skipped() {
        let mut draft = AdvancedFilterDraft::blank();
        draft.update_row(0, DraftRow::new("aum", Operator::Gt, "1000000"));
        draft.add_row();
        draft.update_row(1, DraftRow::new("", Operator::Equals, "x"));
        draft.add_row();
        draft.update_row(2, DraftRow::new("status", Operator::Equals, "  "));

        let filters = draft.to_filters();
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].column, "aum");
        assert_eq!(filters[0].condition, Condition::new(Operator::Gt, "1000000"));
    }

    #[test]
    fn test_list_operand_splits_on_commas() {
        assert_eq!(
            parse_operand(Operator::In, "Gold, Platinum,,"),
            Value::from(vec!["Gold", "Platinum"])
        );
        assert_eq!(parse_operand(Operator::Equals, " Gold "), Value::from("Gold"));
    }

    #[test]
    fn test_between_keeps_upper_bound() {
        let row = DraftRow::new("riskScore", Operator::Between, "3").with_value2("7");
        let filter = row.to_filter();
        assert_eq!(filter.condition.value2, Some(Value::from("7")));

        let no_range = DraftRow::new("riskScore", Operator::Gt, "3").with_value2("7");
        assert_eq!(no_range.to_filter().condition.value2, None);
    }

    #[test]
    fn test_round_trip_through_committed() {
        let committed = vec![AdvancedFilter::new(
            "tier",
            Condition::any_of(["Gold", "Silver"]),
        )];
        let draft = AdvancedFilterDraft::from_committed(&committed);
        assert_eq!(draft.rows()[0].value, "Gold, Silver");
        assert_eq!(draft.to_filters(), committed);
    }

    #[test]
    fn test_condition_draft_blank_is_none() {
        let draft = ConditionDraft::new("aum", Operator::Gt);
        assert_eq!(draft.to_condition(), None);
    }
}
