//! Sorting types and the single-column sort step.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ParseError;
use crate::model::TableRow;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(ParseError::UnknownDirection(s.to_string())),
        }
    }
}

/// One entry of the sorting state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSort {
    pub id: String,
    pub desc: bool,
}

impl ColumnSort {
    /// Creates an ascending sort on a column.
    pub fn asc(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            desc: false,
        }
    }

    /// Creates a descending sort on a column.
    pub fn desc(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            desc: true,
        }
    }

    /// Returns the direction of this sort.
    pub fn direction(&self) -> SortDirection {
        if self.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

/// A sort gesture on a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortRequest {
    Ascending,
    Descending,
    Clear,
    /// Cycle none → ascending → descending → none.
    Toggle,
}

impl SortRequest {
    /// Resolve the request against the column's current direction.
    pub fn resolve(self, current: Option<SortDirection>) -> Option<SortDirection> {
        match self {
            SortRequest::Ascending => Some(SortDirection::Asc),
            SortRequest::Descending => Some(SortDirection::Desc),
            SortRequest::Clear => None,
            SortRequest::Toggle => match current {
                None => Some(SortDirection::Asc),
                Some(SortDirection::Asc) => Some(SortDirection::Desc),
                Some(SortDirection::Desc) => None,
            },
        }
    }
}

impl From<SortDirection> for SortRequest {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => SortRequest::Ascending,
            SortDirection::Desc => SortRequest::Descending,
        }
    }
}

/// Stable sort of rows by one column. Null values go last in either direction.
pub(crate) fn sort_rows<T: TableRow>(rows: &mut [&T], sort: &ColumnSort) {
    rows.sort_by(|a, b| {
        let (va, vb) = (a.value(&sort.id), b.value(&sort.id));
        match (va.is_null(), vb.is_null()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) if sort.desc => vb.sort_cmp(&va),
            (false, false) => va.sort_cmp(&vb),
        }
    });
}
