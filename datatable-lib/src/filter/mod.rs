//! Filter predicates.
//!
//! Pure functions from a row and a filter description to a boolean. The
//! engine composes them in a fixed order: tab, chips, column filters,
//! advanced conditions, then global search.

mod column;
mod condition;
mod predicate;
mod search;

pub use column::ColumnFilter;
pub use condition::{AdvancedFilter, Condition, Operator};
pub use predicate::{
    FilterChip, PredicateErrorHandler, PredicateFailure, RowPredicate, Tab, extract_panic_message,
    guarded,
};
pub use search::matches_global_search;
