//! Toolbar state and toolbar widgets.

use super::{AdvancedFilterDraft, ConditionDraft, DraftRow};
use crate::model::TableRow;
use crate::table::DataTable;

/// A tab as displayed in the tab bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub count: usize,
    pub active: bool,
}

/// A quick-filter chip as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipView {
    pub id: String,
    /// Label with its live count, e.g. `AUM > $1M (3)`.
    pub label: String,
    pub active: bool,
}

/// An entry of the column visibility menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnToggle {
    pub id: String,
    pub label: String,
    pub group: Option<String>,
    pub visible: bool,
}

/// An entry of the bulk or new-item menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub destructive: bool,
}

/// The bulk action menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkMenu {
    /// Button label, `Actions (N)`.
    pub label: String,
    pub items: Vec<MenuItem>,
}

/// Transient toolbar state: which menus are open and the filter drafts.
///
/// Everything else lives in the table's view state.
#[derive(Debug, Clone, Default)]
pub struct Toolbar {
    pub column_menu_open: bool,
    pub bulk_menu_open: bool,
    pub new_item_menu_open: bool,
    draft: Option<AdvancedFilterDraft>,
    pub(super) condition: Option<ConditionDraft>,
}

impl Toolbar {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Tabs and chips
    // =========================================================================

    pub fn tab_views<T: TableRow>(&self, table: &DataTable<T>) -> Vec<TabView> {
        if !table.config().enable_tabs {
            return Vec::new();
        }
        let active = &table.filter_state().active_tab;
        table
            .config()
            .tabs
            .iter()
            .zip(table.tab_counts())
            .map(|(tab, (_, count))| TabView {
                id: tab.id.clone(),
                label: tab.label.clone(),
                icon: tab.icon.clone(),
                count,
                active: &tab.id == active,
            })
            .collect()
    }

    pub fn click_tab<T: TableRow>(&mut self, table: &mut DataTable<T>, tab_id: &str) {
        table.set_active_tab(tab_id);
    }

    /// Chips with their live counts. Chips that filter nothing keep the plain label.
    pub fn chip_views<T: TableRow>(&self, table: &DataTable<T>) -> Vec<ChipView> {
        if !table.config().enable_filter_chips {
            return Vec::new();
        }
        let active = &table.filter_state().active_chips;
        table
            .config()
            .filter_chips
            .iter()
            .zip(table.chip_counts())
            .map(|(chip, (_, count))| ChipView {
                id: chip.id.clone(),
                label: if chip.has_filter() {
                    format!("{} ({})", chip.label, count)
                } else {
                    chip.label.clone()
                },
                active: active.contains(&chip.id),
            })
            .collect()
    }

    pub fn toggle_chip<T: TableRow>(&mut self, table: &mut DataTable<T>, chip_id: &str) {
        table.toggle_filter_chip(chip_id);
    }

    // =========================================================================
    // Search
    // =========================================================================

    pub fn search_placeholder<'a, T: TableRow>(&self, table: &'a DataTable<T>) -> &'a str {
        &table.config().search_placeholder
    }

    pub fn search<T: TableRow>(&mut self, table: &mut DataTable<T>, text: &str) {
        table.set_global_filter(text);
    }

    pub fn clear_search<T: TableRow>(&mut self, table: &mut DataTable<T>) {
        table.set_global_filter("");
    }

    // =========================================================================
    // Advanced filter panel
    // =========================================================================

    pub fn is_advanced_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<&AdvancedFilterDraft> {
        self.draft.as_ref()
    }

    /// Open the panel with a draft seeded from the committed filters.
    pub fn open_advanced<T: TableRow>(&mut self, table: &DataTable<T>) {
        if !table.config().enable_advanced_filters {
            log::debug!("Advanced filters disabled");
            return;
        }
        self.draft = Some(AdvancedFilterDraft::from_committed(
            &table.filter_state().advanced_filters,
        ));
    }

    pub fn add_draft_row(&mut self) {
        if let Some(draft) = &mut self.draft {
            draft.add_row();
        }
    }

    pub fn remove_draft_row(&mut self, index: usize) {
        if let Some(draft) = &mut self.draft {
            draft.remove_row(index);
        }
    }

    pub fn update_draft_row(&mut self, index: usize, row: DraftRow) -> bool {
        self.draft
            .as_mut()
            .is_some_and(|draft| draft.update_row(index, row))
    }

    /// Commit the complete draft rows and close the panel.
    pub fn apply_advanced<T: TableRow>(&mut self, table: &mut DataTable<T>) {
        let Some(draft) = self.draft.take() else {
            return;
        };
        table.set_advanced_filters(draft.to_filters());
    }

    /// Close the panel, discarding the draft.
    pub fn cancel_advanced(&mut self) {
        self.draft = None;
    }

    /// Reset the draft to one blank row and commit an empty list.
    pub fn clear_advanced<T: TableRow>(&mut self, table: &mut DataTable<T>) {
        if self.draft.is_some() {
            self.draft = Some(AdvancedFilterDraft::blank());
        }
        table.set_advanced_filters(Vec::new());
    }

    /// Number of committed advanced filters, when there are any.
    pub fn advanced_badge<T: TableRow>(&self, table: &DataTable<T>) -> Option<usize> {
        let count = table.filter_state().advanced_filters.len();
        (count > 0).then_some(count)
    }

    // =========================================================================
    // Column visibility
    // =========================================================================

    pub fn toggle_column_menu(&mut self) {
        self.column_menu_open = !self.column_menu_open;
    }

    /// Hideable columns with their visibility.
    pub fn column_toggles<T: TableRow>(&self, table: &DataTable<T>) -> Vec<ColumnToggle> {
        if !table.config().enable_column_visibility {
            return Vec::new();
        }
        table
            .columns()
            .iter()
            .filter(|column| column.meta.hideable)
            .map(|column| ColumnToggle {
                id: column.id.clone(),
                label: column.display_label().to_string(),
                group: column.meta.group.clone(),
                visible: table.is_visible(&column.id),
            })
            .collect()
    }

    pub fn toggle_column<T: TableRow>(&mut self, table: &mut DataTable<T>, column_id: &str) {
        let visible = table.is_visible(column_id);
        table.set_column_visibility(column_id, !visible);
    }

    // =========================================================================
    // Bulk and new-item menus
    // =========================================================================

    /// The bulk menu, shown only with a selection and at least one bulk action.
    pub fn bulk_menu<T: TableRow>(&self, table: &DataTable<T>) -> Option<BulkMenu> {
        let actions = &table.config().bulk_actions;
        let selected = table.selected_rows().len();
        if selected == 0 || actions.is_empty() {
            return None;
        }
        Some(BulkMenu {
            label: format!("Actions ({})", selected),
            items: actions
                .iter()
                .map(|action| MenuItem {
                    id: action.id.clone(),
                    label: action.label.clone(),
                    icon: action.icon.clone(),
                    destructive: action.is_destructive(),
                })
                .collect(),
        })
    }

    pub fn toggle_bulk_menu(&mut self) {
        self.bulk_menu_open = !self.bulk_menu_open;
    }

    pub fn invoke_bulk<T: TableRow>(&mut self, table: &DataTable<T>, action_id: &str) -> bool {
        self.bulk_menu_open = false;
        table.invoke_bulk_action(action_id)
    }

    pub fn new_item_menu<T: TableRow>(&self, table: &DataTable<T>) -> Vec<MenuItem> {
        table
            .config()
            .new_item_actions
            .iter()
            .map(|action| MenuItem {
                id: action.id.clone(),
                label: action.label.clone(),
                icon: action.icon.clone(),
                destructive: false,
            })
            .collect()
    }

    pub fn toggle_new_item_menu(&mut self) {
        self.new_item_menu_open = !self.new_item_menu_open;
    }

    pub fn invoke_new_item<T: TableRow>(&mut self, table: &DataTable<T>, action_id: &str) -> bool {
        self.new_item_menu_open = false;
        table.invoke_new_item_action(action_id)
    }
}
