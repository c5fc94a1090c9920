//! Value enum for dynamic cell values

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use serde::Serialize;

/// Date format accepted when a string is read as a date.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A dynamic value held by a table cell or a filter.
///
/// Filters, global search and sorting work on this type, so rows only have to
/// expose their fields through [`TableRow::value`](super::TableRow::value).
///
/// # Type Mapping
///
/// | Source | Rust Variant |
/// |--------|--------------|
/// | missing / empty | `Null` |
/// | flag | `Bool` |
/// | integer | `Int` |
/// | floating point | `Float` |
/// | money, exact amounts | `Decimal` |
/// | calendar date | `Date` |
/// | text, enum labels | `String` |
/// | several values | `List` |
///
/// Deserialization is untagged: JSON strings shaped like `YYYY-MM-DD` become
/// `Date`, other strings stay `String`. `Decimal` serializes as a string and
/// therefore reads back as `String`; numeric operations treat both alike.
///
/// # Example
///
/// ```
/// use datatable_lib::model::Value;
///
/// let aum = Value::from(2_500_000i64);
/// let status = Value::from("Active");
/// assert!(aum.loosely_eq(&Value::from("2500000")));
/// assert_eq!(status.to_string(), "Active");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Calendar date.
    Date(NaiveDate),
    /// String value.
    String(String),
    /// Several values (multi-valued fields, `in` / `notIn` operands).
    List(Vec<Value>),
    /// Arbitrary precision decimal.
    Decimal(Decimal),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the numeric view of this value.
    ///
    /// Strings are trimmed and parsed, so `"1000000"` reads as a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Decimal(v) => v.to_f64(),
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
                }
            }
            _ => None,
        }
    }

    /// Returns the date view of this value (`Date`, or a `YYYY-MM-DD` string).
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            Value::String(s) => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok(),
            _ => None,
        }
    }

    /// Returns the string slice if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the items of a list value, or this value as a one-element slice.
    pub fn as_slice(&self) -> &[Value] {
        match self {
            Value::List(items) => items,
            other => std::slice::from_ref(other),
        }
    }

    /// Lowercased string form, used by case-insensitive text matching.
    pub fn to_lowercase_string(&self) -> String {
        self.to_string().to_lowercase()
    }

    /// Compares two values the way filter equality does.
    ///
    /// Numbers compare numerically (so `Int(5)` equals `"5"`), dates compare
    /// as dates, and everything else compares by its string form.
    pub fn loosely_eq(&self, other: &Value) -> bool {
        if let (Some(a), Some(b)) = (self.as_f64(), other.as_f64()) {
            return a == b;
        }
        if let (Some(a), Some(b)) = (self.as_date(), other.as_date()) {
            return a == b;
        }
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Null, _) | (_, Value::Null) => false,
            _ => self.to_string() == other.to_string(),
        }
    }

    /// Total ordering used for sorting.
    ///
    /// Values are grouped by kind (numbers, dates, booleans, text, lists,
    /// null) and compared within their group. Text compares case-insensitively
    /// first so `"adams"` and `"Adams"` sit together.
    pub fn sort_cmp(&self, other: &Value) -> Ordering {
        let (rank_a, rank_b) = (self.sort_rank(), other.sort_rank());
        if rank_a != rank_b {
            return rank_a.cmp(&rank_b);
        }
        match rank_a {
            SortRank::Number => {
                let a = self.as_f64().unwrap_or_default();
                let b = other.as_f64().unwrap_or_default();
                a.total_cmp(&b)
            }
            SortRank::Date => self.as_date().cmp(&other.as_date()),
            SortRank::Bool => match (self, other) {
                (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
                _ => Ordering::Equal,
            },
            SortRank::Text | SortRank::List => {
                let (a, b) = (self.to_string(), other.to_string());
                a.to_lowercase()
                    .cmp(&b.to_lowercase())
                    .then_with(|| a.cmp(&b))
            }
            SortRank::Null => Ordering::Equal,
        }
    }

    fn sort_rank(&self) -> SortRank {
        match self {
            Value::Null => SortRank::Null,
            Value::Bool(_) => SortRank::Bool,
            Value::Int(_) | Value::Float(_) | Value::Decimal(_) => SortRank::Number,
            Value::Date(_) => SortRank::Date,
            Value::String(_) if self.as_f64().is_some() => SortRank::Number,
            Value::String(_) if self.as_date().is_some() => SortRank::Date,
            Value::String(_) => SortRank::Text,
            Value::List(_) => SortRank::List,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum SortRank {
    Number,
    Date,
    Bool,
    Text,
    List,
    Null,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Decimal(v) => write!(f, "{}", v),
            Value::Date(v) => write!(f, "{}", v.format(DATE_FORMAT)),
            Value::String(v) => f.write_str(v),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        i64::try_from(v)
            .map(Value::Int)
            .unwrap_or(Value::Float(v as f64))
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        i64::try_from(v)
            .map(Value::Int)
            .unwrap_or(Value::Float(v as f64))
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::String(v.clone())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => match NaiveDate::parse_from_str(&s, DATE_FORMAT) {
                Ok(date) => Value::Date(date),
                Err(_) => Value::String(s),
            },
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            object @ serde_json::Value::Object(_) => Value::String(object.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_strings_compare_numerically() {
        assert!(Value::from(5i64).loosely_eq(&Value::from("5")));
        assert!(Value::from(1_000_000.0).loosely_eq(&Value::from(" 1000000 ")));
        assert!(!Value::from(5i64).loosely_eq(&Value::from("five")));
    }

    #[test]
    fn test_non_finite_words_are_text() {
        for word in ["NaN", "inf", "-Infinity"] {
            let value = Value::from(word);
            assert_eq!(value.as_f64(), None);
            assert!(value.loosely_eq(&Value::from(word)));
            assert_eq!(value.sort_rank(), SortRank::Text);
        }
    }

    #[test]
    fn test_text_equality_is_exact() {
        assert!(Value::from("Active").loosely_eq(&Value::from("Active")));
        assert!(!Value::from("Active").loosely_eq(&Value::from("active")));
        assert!(!Value::Null.loosely_eq(&Value::from("")));
        assert!(Value::Null.loosely_eq(&Value::Null));
    }

    #[test]
    fn test_dates() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(Value::from("2025-03-14").as_date(), Some(date));
        assert!(Value::from(date).loosely_eq(&Value::from("2025-03-14")));
        assert_eq!(Value::from(date).to_string(), "2025-03-14");
    }

    #[test]
    fn test_sort_cmp_groups_kinds() {
        let mut values = vec![
            Value::Null,
            Value::from("banana"),
            Value::from(20i64),
            Value::from("Apple"),
            Value::from("3"),
        ];
        values.sort_by(|a, b| a.sort_cmp(b));
        assert_eq!(
            values,
            vec![
                Value::from("3"),
                Value::from(20i64),
                Value::from("Apple"),
                Value::from("banana"),
                Value::Null,
            ]
        );
    }

    #[test]
    fn test_display_list() {
        let value = Value::from(vec!["Active", "Prospect"]);
        assert_eq!(value.to_string(), "Active, Prospect");
        assert_eq!(value.as_slice().len(), 2);
        assert_eq!(Value::from("x").as_slice(), &[Value::from("x")]);
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::json!({ "aum": 1500000, "tags": ["a", "b"], "review": "2025-01-02" });
        assert_eq!(Value::from(json["aum"].clone()), Value::Int(1_500_000));
        assert_eq!(
            Value::from(json["tags"].clone()),
            Value::List(vec![Value::from("a"), Value::from("b")])
        );
        assert!(matches!(Value::from(json["review"].clone()), Value::Date(_)));
    }

    #[test]
    fn test_decimal_is_numeric() {
        let value = Value::from(Decimal::new(12_550, 2));
        assert_eq!(value.as_f64(), Some(125.5));
        assert_eq!(value.to_string(), "125.50");
    }
}
