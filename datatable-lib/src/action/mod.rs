//! Row, bulk and new-item actions.
//!
//! Actions carry injected handlers; the table only decides which entries a
//! menu shows and routes a click to the right handler. Confirmation of
//! destructive actions is left to the caller.

mod bulk;
mod item;
mod menu;

pub use bulk::{BulkAction, BulkHandler, NewItemAction};
pub use item::{ActionItem, ActionVariant, RowAction, RowHandler};
pub use menu::{MenuEntry, invoke_row_action, resolve_row_menu};
