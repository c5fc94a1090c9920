//! Row selection keyed by row identity.

use std::collections::HashSet;
use std::hash::Hash;

/// Selection mode of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// No selection allowed.
    #[default]
    None,
    /// One row at a time.
    Single,
    /// Any number of rows (checkbox style).
    Multi,
}

/// Tracks selected rows by their keys.
///
/// Keys survive re-filtering and re-sorting: a selected row that is filtered
/// out stays selected and reappears selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<K: Clone + Eq + Hash> {
    pub mode: SelectionMode,
    pub selected: HashSet<K>,
}

impl<K: Clone + Eq + Hash> Default for Selection<K> {
    fn default() -> Self {
        Self::with_mode(SelectionMode::None)
    }
}

impl<K: Clone + Eq + Hash> Selection<K> {
    /// Create an empty selection with the given mode.
    pub fn with_mode(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: HashSet::new(),
        }
    }

    /// Toggle selection for a key. Returns true if selection changed.
    pub fn toggle(&mut self, key: K) -> bool {
        match self.mode {
            SelectionMode::None => false,
            SelectionMode::Single => {
                if self.selected.contains(&key) {
                    self.selected.clear();
                } else {
                    self.selected.clear();
                    self.selected.insert(key);
                }
                true
            }
            SelectionMode::Multi => {
                if !self.selected.remove(&key) {
                    self.selected.insert(key);
                }
                true
            }
        }
    }

    /// Select every key if any is unselected, else deselect them all.
    ///
    /// Only meaningful in multi mode. Returns true if selection changed.
    pub fn toggle_all<'a>(&mut self, keys: impl IntoIterator<Item = &'a K>) -> bool
    where
        K: 'a,
    {
        if self.mode != SelectionMode::Multi {
            return false;
        }
        let keys: Vec<&K> = keys.into_iter().collect();
        if keys.is_empty() {
            return false;
        }
        if keys.iter().all(|key| self.selected.contains(*key)) {
            for key in keys {
                self.selected.remove(key);
            }
        } else {
            self.selected.extend(keys.into_iter().cloned());
        }
        true
    }

    /// Whether every key is selected (and there is at least one).
    pub fn all_selected<'a>(&self, keys: impl IntoIterator<Item = &'a K>) -> bool
    where
        K: 'a,
    {
        let mut any = false;
        for key in keys {
            if !self.selected.contains(key) {
                return false;
            }
            any = true;
        }
        any
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    /// Clear all selections. Returns true if anything was selected.
    pub fn clear(&mut self) -> bool {
        let changed = !self.selected.is_empty();
        self.selected.clear();
        changed
    }

    /// Drop keys for which `keep` returns false. Returns true if any were dropped.
    pub fn retain(&mut self, keep: impl Fn(&K) -> bool) -> bool {
        let before = self.selected.len();
        self.selected.retain(|key| keep(key));
        self.selected.len() != before
    }

    /// Number of selected keys.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Get the single selected key (for Single mode).
    pub fn get_single(&self) -> Option<&K> {
        self.selected.iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_mode_ignores_toggle() {
        let mut selection = Selection::with_mode(SelectionMode::None);
        assert!(!selection.toggle(1));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_single_mode_replaces() {
        let mut selection = Selection::with_mode(SelectionMode::Single);
        selection.toggle(1);
        selection.toggle(2);
        assert_eq!(selection.get_single(), Some(&2));
        assert_eq!(selection.len(), 1);
        selection.toggle(2);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_multi_toggle_all() {
        let mut selection = Selection::with_mode(SelectionMode::Multi);
        selection.toggle(1);
        let page = [1, 2, 3];

        assert!(selection.toggle_all(&page));
        assert!(selection.all_selected(&page));

        assert!(selection.toggle_all(&page));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_all_keeps_other_pages() {
        let mut selection = Selection::with_mode(SelectionMode::Multi);
        selection.toggle(9);
        selection.toggle_all(&[1, 2]);
        selection.toggle_all(&[1, 2]);
        assert!(selection.is_selected(&9));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_all_selected_empty_is_false() {
        let selection: Selection<u32> = Selection::with_mode(SelectionMode::Multi);
        assert!(!selection.all_selected(&[]));
    }

    #[test]
    fn test_retain() {
        let mut selection = Selection::with_mode(SelectionMode::Multi);
        selection.toggle_all(&[1, 2, 3]);
        assert!(selection.retain(|k| *k != 2));
        assert!(!selection.retain(|_| true));
        assert_eq!(selection.len(), 2);
    }
}
