//! Per-row actions.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use crate::filter::RowPredicate;

/// Handler invoked with the row an action was clicked on.
pub type RowHandler<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Visual variant of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionVariant {
    #[default]
    Default,
    Destructive,
}

/// A clickable row action.
pub struct ActionItem<T> {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub variant: ActionVariant,
    pub on_click: RowHandler<T>,
    /// Rows for which the item is shown but cannot be clicked.
    pub disabled: Option<RowPredicate<T>>,
    /// Rows for which the item is not shown.
    pub hidden: Option<RowPredicate<T>>,
}

impl<T> ActionItem<T> {
    /// Create an action with a click handler.
    pub fn new<F>(id: impl Into<String>, label: impl Into<String>, on_click: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            variant: ActionVariant::Default,
            on_click: Arc::new(on_click),
            disabled: None,
            hidden: None,
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

    /// Disable the action for rows matching `when`.
    pub fn disabled_when<F>(mut self, when: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.disabled = Some(Arc::new(when));
        self
    }

    /// Hide the action for rows matching `when`.
    pub fn hidden_when<F>(mut self, when: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.hidden = Some(Arc::new(when));
        self
    }

    pub fn is_hidden(&self, row: &T) -> bool {
        self.hidden.as_ref().is_some_and(|hidden| hidden(row))
    }

    pub fn is_disabled(&self, row: &T) -> bool {
        self.disabled.as_ref().is_some_and(|disabled| disabled(row))
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == ActionVariant::Destructive
    }
}

impl<T> Clone for ActionItem<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            icon: self.icon.clone(),
            variant: self.variant,
            on_click: self.on_click.clone(),
            disabled: self.disabled.clone(),
            hidden: self.hidden.clone(),
        }
    }
}

impl<T> fmt::Debug for ActionItem<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionItem")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}

/// An entry of the row action menu: a leaf or a one-level submenu.
pub enum RowAction<T> {
    Leaf(ActionItem<T>),
    Submenu {
        id: String,
        label: String,
        icon: Option<String>,
        variant: ActionVariant,
        disabled: Option<RowPredicate<T>>,
        hidden: Option<RowPredicate<T>>,
        children: Vec<ActionItem<T>>,
    },
}

impl<T> RowAction<T> {
    /// Create a submenu with the given children.
    pub fn submenu(
        id: impl Into<String>,
        label: impl Into<String>,
        children: impl IntoIterator<Item = ActionItem<T>>,
    ) -> Self {
        RowAction::Submenu {
            id: id.into(),
            label: label.into(),
            icon: None,
            variant: ActionVariant::Default,
            disabled: None,
            hidden: None,
            children: children.into_iter().collect(),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            RowAction::Leaf(item) => &item.id,
            RowAction::Submenu { id, .. } => id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            RowAction::Leaf(item) => &item.label,
            RowAction::Submenu { label, .. } => label,
        }
    }

    pub fn is_hidden(&self, row: &T) -> bool {
        match self {
            RowAction::Leaf(item) => item.is_hidden(row),
            RowAction::Submenu { hidden, .. } => hidden.as_ref().is_some_and(|h| h(row)),
        }
    }

    pub fn is_disabled(&self, row: &T) -> bool {
        match self {
            RowAction::Leaf(item) => item.is_disabled(row),
            RowAction::Submenu { disabled, .. } => disabled.as_ref().is_some_and(|d| d(row)),
        }
    }

    /// Ids of this entry and its children, in order.
    pub fn ids(&self) -> Vec<&str> {
        match self {
            RowAction::Leaf(item) => vec![item.id.as_str()],
            RowAction::Submenu { id, children, .. } => std::iter::once(id.as_str())
                .chain(children.iter().map(|c| c.id.as_str()))
                .collect(),
        }
    }
}

impl<T> From<ActionItem<T>> for RowAction<T> {
    fn from(item: ActionItem<T>) -> Self {
        RowAction::Leaf(item)
    }
}

impl<T> Clone for RowAction<T> {
    fn clone(&self) -> Self {
        match self {
            RowAction::Leaf(item) => RowAction::Leaf(item.clone()),
            RowAction::Submenu {
                id,
                label,
                icon,
                variant,
                disabled,
                hidden,
                children,
            } => RowAction::Submenu {
                id: id.clone(),
                label: label.clone(),
                icon: icon.clone(),
                variant: *variant,
                disabled: disabled.clone(),
                hidden: hidden.clone(),
                children: children.clone(),
            },
        }
    }
}

impl<T> fmt::Debug for RowAction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowAction::Leaf(item) => f.debug_tuple("Leaf").field(item).finish(),
            RowAction::Submenu {
                id,
                label,
                children,
                ..
            } => f
                .debug_struct("Submenu")
                .field("id", id)
                .field("label", label)
                .field("children", children)
                .finish_non_exhaustive(),
        }
    }
}
