//! Parse error types

/// Errors raised when UI strings are turned into typed filter pieces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The operator name is not one of the supported operators.
    #[error("Unknown filter operator: {0}")]
    UnknownOperator(String),

    /// The sort direction name is neither ascending nor descending.
    #[error("Unknown sort direction: {0}")]
    UnknownDirection(String),
}
