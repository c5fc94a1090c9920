//! Operator conditions used by advanced filters and header condition popovers.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ParseError;
use crate::model::Value;

/// Comparison operator of a [`Condition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    #[default]
    Equals,
    Contains,
    StartsWith,
    EndsWith,
    Gt,
    Gte,
    Lt,
    Lte,
    Between,
    In,
    NotIn,
}

impl Operator {
    /// All operators, in menu order.
    pub const ALL: [Operator; 11] = [
        Operator::Equals,
        Operator::Contains,
        Operator::StartsWith,
        Operator::EndsWith,
        Operator::Gt,
        Operator::Gte,
        Operator::Lt,
        Operator::Lte,
        Operator::Between,
        Operator::In,
        Operator::NotIn,
    ];

    /// Wire name (`"startsWith"`, `"notIn"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equals => "equals",
            Operator::Contains => "contains",
            Operator::StartsWith => "startsWith",
            Operator::EndsWith => "endsWith",
            Operator::Gt => "gt",
            Operator::Gte => "gte",
            Operator::Lt => "lt",
            Operator::Lte => "lte",
            Operator::Between => "between",
            Operator::In => "in",
            Operator::NotIn => "notIn",
        }
    }

    /// Human label shown in operator pickers.
    pub fn label(&self) -> &'static str {
        match self {
            Operator::Equals => "Equals",
            Operator::Contains => "Contains",
            Operator::StartsWith => "Starts With",
            Operator::EndsWith => "Ends With",
            Operator::Gt => "Greater Than",
            Operator::Gte => "Greater Than or Equal",
            Operator::Lt => "Less Than",
            Operator::Lte => "Less Than or Equal",
            Operator::Between => "Between",
            Operator::In => "In",
            Operator::NotIn => "Not In",
        }
    }

    /// Whether the operator takes a second bound.
    pub fn is_range(&self) -> bool {
        matches!(self, Operator::Between)
    }

    /// Whether the operator's value is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Operator::In | Operator::NotIn)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownOperator(s.to_string()))
    }
}

/// An operator applied to a cell value.
///
/// # Example
///
/// ```
/// use datatable_lib::filter::{Condition, Operator};
/// use datatable_lib::model::Value;
///
/// let band = Condition::between(10, 20);
/// assert!(band.matches(&Value::from(10)));
/// assert!(band.matches(&Value::from(20)));
/// assert!(!band.matches(&Value::from(21)));
///
/// let name = Condition::new(Operator::StartsWith, "sm");
/// assert!(name.matches(&Value::from("Smith Family")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub operator: Operator,
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value2: Option<Value>,
}

impl Condition {
    /// Create a single-operand condition.
    pub fn new(operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            operator,
            value: value.into(),
            value2: None,
        }
    }

    /// Create an inclusive range condition.
    pub fn between(low: impl Into<Value>, high: impl Into<Value>) -> Self {
        Self {
            operator: Operator::Between,
            value: low.into(),
            value2: Some(high.into()),
        }
    }

    /// Create a list membership condition.
    pub fn any_of<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        Self::new(
            Operator::In,
            Value::List(values.into_iter().map(Into::into).collect()),
        )
    }

    /// Test a cell value.
    ///
    /// Text operators compare stringified values case-insensitively. Ordering
    /// operators compare numbers, or dates when both sides are dates; any
    /// other pair fails. `between` without a second bound matches everything.
    pub fn matches(&self, cell: &Value) -> bool {
        match self.operator {
            Operator::Equals => cell.loosely_eq(&self.value),
            Operator::Contains => text_test(cell, &self.value, |c, v| c.contains(v)),
            Operator::StartsWith => text_test(cell, &self.value, |c, v| c.starts_with(v)),
            Operator::EndsWith => text_test(cell, &self.value, |c, v| c.ends_with(v)),
            Operator::Gt => compare(cell, &self.value).is_some_and(Ordering::is_gt),
            Operator::Gte => compare(cell, &self.value).is_some_and(Ordering::is_ge),
            Operator::Lt => compare(cell, &self.value).is_some_and(Ordering::is_lt),
            Operator::Lte => compare(cell, &self.value).is_some_and(Ordering::is_le),
            Operator::Between => match &self.value2 {
                None => true,
                Some(high) => {
                    compare(cell, &self.value).is_some_and(Ordering::is_ge)
                        && compare(cell, high).is_some_and(Ordering::is_le)
                }
            },
            Operator::In => self.contains_cell(cell),
            Operator::NotIn => !self.contains_cell(cell),
        }
    }

    fn contains_cell(&self, cell: &Value) -> bool {
        let cells = cell.as_slice();
        self.value
            .as_slice()
            .iter()
            .any(|candidate| cells.iter().any(|c| c.loosely_eq(candidate)))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value2 {
            Some(high) => write!(f, "{} {} and {}", self.operator.label(), self.value, high),
            None => write!(f, "{} {}", self.operator.label(), self.value),
        }
    }
}

fn text_test(cell: &Value, operand: &Value, test: impl Fn(&str, &str) -> bool) -> bool {
    test(&cell.to_lowercase_string(), &operand.to_lowercase_string())
}

fn compare(cell: &Value, operand: &Value) -> Option<Ordering> {
    if let (Some(a), Some(b)) = (cell.as_f64(), operand.as_f64()) {
        return a.partial_cmp(&b);
    }
    if let (Some(a), Some(b)) = (cell.as_date(), operand.as_date()) {
        return Some(a.cmp(&b));
    }
    None
}

/// A condition on a named column, as edited in the advanced filter panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancedFilter {
    pub column: String,
    #[serde(flatten)]
    pub condition: Condition,
}

impl AdvancedFilter {
    /// Create an advanced filter on `column`.
    pub fn new(column: impl Into<String>, condition: Condition) -> Self {
        Self {
            column: column.into(),
            condition,
        }
    }
}
