//! Resolving row action menus and dispatching clicks.

use serde::Serialize;

use super::{ActionItem, ActionVariant, RowAction};

/// A resolved menu entry for one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub destructive: bool,
    pub disabled: bool,
    /// Draw a separator above this entry.
    pub separator_before: bool,
    /// Submenu entries; empty for leaves.
    pub children: Vec<MenuEntry>,
}

impl MenuEntry {
    pub fn is_submenu(&self) -> bool {
        !self.children.is_empty()
    }
}

fn leaf_entry<T>(item: &ActionItem<T>, row: &T) -> MenuEntry {
    MenuEntry {
        id: item.id.clone(),
        label: item.label.clone(),
        icon: item.icon.clone(),
        destructive: item.is_destructive(),
        disabled: item.is_disabled(row),
        separator_before: false,
        children: Vec::new(),
    }
}

fn push_entry(entries: &mut Vec<MenuEntry>, mut entry: MenuEntry) {
    entry.separator_before = entry.destructive && !entries.is_empty();
    entries.push(entry);
}

/// Resolve the menu shown for `row`.
///
/// Hidden entries are dropped, and a submenu whose children are all hidden
/// is dropped too. Destructive entries get a separator above them unless
/// they come first.
pub fn resolve_row_menu<T>(actions: &[RowAction<T>], row: &T) -> Vec<MenuEntry> {
    let mut entries = Vec::new();
    for action in actions {
        if action.is_hidden(row) {
            continue;
        }
        match action {
            RowAction::Leaf(item) => push_entry(&mut entries, leaf_entry(item, row)),
            RowAction::Submenu {
                id,
                label,
                icon,
                variant,
                children,
                ..
            } => {
                let mut resolved = Vec::new();
                for child in children.iter().filter(|c| !c.is_hidden(row)) {
                    push_entry(&mut resolved, leaf_entry(child, row));
                }
                if resolved.is_empty() {
                    continue;
                }
                push_entry(
                    &mut entries,
                    MenuEntry {
                        id: id.clone(),
                        label: label.clone(),
                        icon: icon.clone(),
                        destructive: *variant == ActionVariant::Destructive,
                        disabled: action.is_disabled(row),
                        separator_before: false,
                        children: resolved,
                    },
                );
            }
        }
    }
    entries
}

/// Invoke the row action `id` on `row`.
///
/// Searches top-level leaves and submenu children. Returns `false` without
/// calling anything when the id is unknown, names a submenu, or the item (or
/// its submenu) is hidden or disabled for this row.
pub fn invoke_row_action<T>(actions: &[RowAction<T>], id: &str, row: &T) -> bool {
    for action in actions {
        let item = match action {
            RowAction::Leaf(item) if item.id == id => item,
            RowAction::Submenu { children, .. } => {
                match children.iter().find(|child| child.id == id) {
                    Some(child) if !action.is_hidden(row) && !action.is_disabled(row) => child,
                    Some(_) => {
                        log::debug!("Row action '{}' is inside an unavailable submenu", id);
                        return false;
                    }
                    None => continue,
                }
            }
            RowAction::Leaf(_) => continue,
        };
        if item.is_hidden(row) || item.is_disabled(row) {
            log::debug!("Row action '{}' is not available for this row", id);
            return false;
        }
        (item.on_click)(row);
        return true;
    }
    log::debug!("Ignoring unknown row action '{}'", id);
    false
}
