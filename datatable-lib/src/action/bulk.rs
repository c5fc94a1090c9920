//! Bulk and new-item actions.

use std::fmt;
use std::sync::Arc;

use super::ActionVariant;

/// Handler invoked with the selected rows.
pub type BulkHandler<T> = Arc<dyn Fn(&[T]) + Send + Sync>;

/// An action applied to the current selection.
pub struct BulkAction<T> {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub variant: ActionVariant,
    /// Refuse to run with an empty selection.
    pub requires_selection: bool,
    pub on_click: BulkHandler<T>,
}

impl<T> BulkAction<T> {
    pub fn new<F>(id: impl Into<String>, label: impl Into<String>, on_click: F) -> Self
    where
        F: Fn(&[T]) + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            variant: ActionVariant::Default,
            requires_selection: true,
            on_click: Arc::new(on_click),
        }
    }

    /// Set the icon name.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Mark the action as destructive.
    pub fn destructive(mut self) -> Self {
        self.variant = ActionVariant::Destructive;
        self
    }

    /// Allow running with no rows selected.
    pub fn allow_empty(mut self) -> Self {
        self.requires_selection = false;
        self
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == ActionVariant::Destructive
    }

    /// Run the handler. Returns false if the selection requirement is not met.
    pub fn invoke(&self, rows: &[T]) -> bool {
        if self.requires_selection && rows.is_empty() {
            log::debug!("Bulk action '{}' needs a selection", self.id);
            return false;
        }
        (self.on_click)(rows);
        true
    }
}

impl<T> Clone for BulkAction<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            icon: self.icon.clone(),
            variant: self.variant,
            requires_selection: self.requires_selection,
            on_click: self.on_click.clone(),
        }
    }
}

impl<T> fmt::Debug for BulkAction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BulkAction")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("variant", &self.variant)
            .field("requires_selection", &self.requires_selection)
            .finish_non_exhaustive()
    }
}

/// An entry of the "new item" menu.
#[derive(Clone)]
pub struct NewItemAction {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub on_click: Arc<dyn Fn() + Send + Sync>,
}

impl NewItemAction {
    pub fn new<F>(id: impl Into<String>, label: impl Into<String>, on_click: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            on_click: Arc::new(on_click),
        }
    }

    /// Set the icon name.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn invoke(&self) {
        (self.on_click)();
    }
}

impl fmt::Debug for NewItemAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewItemAction")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
