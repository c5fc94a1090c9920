//! Configuration error types

use crate::column::FilterType;

/// Errors raised while validating a table configuration.
///
/// These indicate a caller bug and are surfaced once, when the table is
/// constructed or a new configuration is supplied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Two columns share the same accessor id.
    #[error("Duplicate column id: {0}")]
    DuplicateColumn(String),

    /// A filterable select-style column has no options to offer.
    #[error("Column '{column}' is filterable as {filter_type} but has no filter options")]
    MissingFilterOptions {
        /// The offending column id.
        column: String,
        /// The declared filter type.
        filter_type: FilterType,
    },

    /// Two entries of the same kind share an id.
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId {
        /// What kind of entry collided ("tab", "chip", "row action", ...).
        kind: &'static str,
        /// The repeated id.
        id: String,
    },

    /// Two rows of the dataset share a key.
    #[error("Duplicate row key: {0}")]
    DuplicateRowKey(String),

    /// A page size of zero was configured.
    #[error("Page size must be at least 1")]
    InvalidPageSize,

    /// A configuration entry refers to a column that does not exist.
    #[error("{context} refers to unknown column '{column}'")]
    UnknownColumn {
        /// Where the reference was found (e.g. "chip 'review'").
        context: String,
        /// The unknown column id.
        column: String,
    },
}

impl ConfigError {
    /// Creates a duplicate id error.
    pub fn duplicate(kind: &'static str, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            kind,
            id: id.into(),
        }
    }

    /// Creates an unknown column error.
    pub fn unknown_column(context: impl Into<String>, column: impl Into<String>) -> Self {
        Self::UnknownColumn {
            context: context.into(),
            column: column.into(),
        }
    }
}
