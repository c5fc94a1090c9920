//! Row predicates for tabs and quick-filter chips.

use std::any::Any;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use crate::model::{TableRow, Value};

/// A caller-supplied row test.
pub type RowPredicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Receives predicate failures.
pub type PredicateErrorHandler = Arc<dyn Fn(&PredicateFailure) + Send + Sync>;

/// A predicate that panicked while being evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateFailure {
    /// Where the predicate came from, e.g. `tab 'aum-100m'`.
    pub source: String,
    /// The panic message.
    pub message: String,
}

impl fmt::Display for PredicateFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} panicked: {}", self.source, self.message)
    }
}

/// Extract a readable message from a panic payload.
pub fn extract_panic_message(panic: &Box<dyn Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Run a predicate, treating a panic as "row excluded".
///
/// The failure is logged and passed to `on_error`.
pub fn guarded(
    source: impl FnOnce() -> String,
    on_error: Option<&PredicateErrorHandler>,
    predicate: impl FnOnce() -> bool,
) -> bool {
    match catch_unwind(AssertUnwindSafe(predicate)) {
        Ok(result) => result,
        Err(panic) => {
            let failure = PredicateFailure {
                source: source(),
                message: extract_panic_message(&panic),
            };
            log::warn!("Predicate failed, excluding row: {}", failure);
            if let Some(handler) = on_error {
                handler(&failure);
            }
            false
        }
    }
}

/// A named, mutually exclusive view of the dataset.
pub struct Tab<T> {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub color: Option<String>,
    /// Rows shown under this tab. `None` shows everything.
    pub filter: Option<RowPredicate<T>>,
}

impl<T> Tab<T> {
    /// Create a tab that shows every row.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            color: None,
            filter: None,
        }
    }

    /// Restrict the tab to rows matching `filter`.
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Arc::new(filter));
        self
    }

    /// Set the icon name.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the color token.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Whether this tab filters at all.
    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    /// Test a row against this tab.
    pub fn matches(&self, row: &T, on_error: Option<&PredicateErrorHandler>) -> bool {
        match &self.filter {
            Some(filter) => guarded(|| format!("tab '{}'", self.id), on_error, || filter(row)),
            None => true,
        }
    }
}

impl<T> Clone for Tab<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            icon: self.icon.clone(),
            color: self.color.clone(),
            filter: self.filter.clone(),
        }
    }
}

impl<T> fmt::Debug for Tab<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tab")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("has_filter", &self.has_filter())
            .finish()
    }
}

/// A toggleable quick filter. Active chips are ANDed together.
pub struct FilterChip<T> {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    /// Whether the chip starts active.
    pub active: bool,
    pub filter: Option<RowPredicate<T>>,
    /// Column compared against `value` when there is no predicate.
    pub column: Option<String>,
    pub value: Option<Value>,
}

impl<T> FilterChip<T> {
    /// Create an inactive chip that matches every row.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            active: false,
            filter: None,
            column: None,
            value: None,
        }
    }

    /// Restrict the chip to rows matching `filter`.
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Arc::new(filter));
        self
    }

    /// Match rows whose `column` value equals `value`.
    pub fn column_equals(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.column = Some(column.into());
        self.value = Some(value.into());
        self
    }

    /// Start the chip active.
    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    /// Set the icon name.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Whether this chip filters at all.
    pub fn has_filter(&self) -> bool {
        self.filter.is_some() || (self.column.is_some() && self.value.is_some())
    }
}

impl<T: TableRow> FilterChip<T> {
    /// Test a row against this chip.
    pub fn matches(&self, row: &T, on_error: Option<&PredicateErrorHandler>) -> bool {
        if let Some(filter) = &self.filter {
            return guarded(|| format!("chip '{}'", self.id), on_error, || filter(row));
        }
        match (&self.column, &self.value) {
            (Some(column), Some(value)) => row.value(column).loosely_eq(value),
            _ => true,
        }
    }
}

impl<T> Clone for FilterChip<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            icon: self.icon.clone(),
            active: self.active,
            filter: self.filter.clone(),
            column: self.column.clone(),
            value: self.value.clone(),
        }
    }
}

impl<T> fmt::Debug for FilterChip<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterChip")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("active", &self.active)
            .field("has_filter", &self.has_filter())
            .field("column", &self.column)
            .field("value", &self.value)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_guarded_passes_through() {
        assert!(guarded(|| "t".into(), None, || true));
        assert!(!guarded(|| "t".into(), None, || false));
    }

    #[test]
    fn test_guarded_panic_is_reported_and_excludes() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let handler: PredicateErrorHandler = Arc::new(move |failure: &PredicateFailure| {
            sink.lock().unwrap().push(failure.clone());
        });

        let result = guarded(|| "chip 'boom'".into(), Some(&handler), || panic!("bad row"));

        assert!(!result);
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].source, "chip 'boom'");
        assert_eq!(seen[0].message, "bad row");
    }

    #[test]
    fn test_extract_panic_message_formatted() {
        let panic = std::panic::catch_unwind(|| panic!("row {}", 7)).unwrap_err();
        assert_eq!(extract_panic_message(&panic), "row 7");
    }
}
