use std::collections::BTreeSet;

use crate::PaneState;

/// Live layout bookkeeping for a single pane: which objects the user has
/// expanded, where the pane is scrolled to, and whether any of that has
/// changed since it was last persisted.
///
/// Owned exclusively by its pane. Every user-driven mutation marks the state
/// dirty, even when it changes nothing (collapsing an already-collapsed
/// object still counts as activity). Only [`ViewState::mark_clean`] clears
/// the flag, and only the restore path leaves it untouched.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    expanded: BTreeSet<String>,
    scroll_position: usize,
    dirty: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` as expanded.
    pub fn expand(&mut self, name: impl Into<String>) {
        self.expanded.insert(name.into());
        self.dirty = true;
    }

    /// Record `name` as collapsed.
    pub fn collapse(&mut self, name: &str) {
        self.expanded.remove(name);
        self.dirty = true;
    }

    pub fn set_scroll_position(&mut self, position: usize) {
        self.scroll_position = position;
        self.dirty = true;
    }

    /// Replace the whole layout from persisted values. This is a load, not a
    /// user edit: the dirty flag is left exactly as it was.
    pub fn restore_from<I, S>(&mut self, expanded: I, scroll_position: usize)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expanded = expanded.into_iter().map(Into::into).collect();
        self.scroll_position = scroll_position;
    }

    /// [`ViewState::restore_from`], reading a persisted document entry.
    pub fn restore_pane_state(&mut self, pane: &PaneState) {
        self.restore_from(pane.expanded.iter().cloned(), pane.scroll_position);
    }

    /// Forget everything: nothing expanded, scrolled back to the top. The
    /// reset itself still needs persisting, so this marks dirty.
    pub fn clear(&mut self) {
        self.expanded.clear();
        self.scroll_position = 0;
        self.dirty = true;
    }

    pub fn is_expanded(&self, name: &str) -> bool {
        self.expanded.contains(name)
    }

    /// Expanded object names, sorted.
    pub fn expanded(&self) -> Vec<String> {
        self.expanded.iter().cloned().collect()
    }

    pub fn scroll_position(&self) -> usize {
        self.scroll_position
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Acknowledge that the current layout has been persisted.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Snapshot for persistence under the given pane name.
    pub fn to_pane_state(&self, pane: impl Into<String>) -> PaneState {
        PaneState {
            pane: pane.into(),
            expanded: self.expanded(),
            scroll_position: self.scroll_position,
        }
    }
}
