//! Active-file selection state machine.
//!
//! The active file is tracked as a name plus an optional position in the
//! current listing. A name can be known before the listing has loaded (a
//! deep link), in which case the position stays unresolved until
//! [`SelectionState::reconcile`] finds it.
//!
//! Every change goes through [`SelectionState::apply`] or
//! [`SelectionState::reconcile`], both of which return a new state.

use crate::listing::FileEntry;

/// Explicit selection events dispatched by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    /// Select the entry at this position of the current listing.
    SetIndex(usize),
    /// Select a file by name without a known position. Empty clears.
    SetName(String),
}

/// The three states encoded by [`SelectionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStatus {
    /// No file selected.
    Empty,
    /// A file is named but its position is unknown.
    Unresolved,
    /// A file is named and found at this position.
    Resolved(usize),
}

/// Active file name and its position in the listing.
///
/// `name` is empty exactly when nothing is selected, and an empty name
/// never carries a position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    name: String,
    index: Option<usize>,
}

impl SelectionState {
    /// Nothing selected.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Selection seeded from a location's file name, position unresolved.
    pub fn seeded(file: impl Into<String>) -> Self {
        Self {
            name: file.into(),
            index: None,
        }
    }

    /// Active file name, empty when none.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved position, if any.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    /// Current state of the machine.
    pub fn status(&self) -> SelectionStatus {
        match (self.name.is_empty(), self.index) {
            (true, _) => SelectionStatus::Empty,
            (false, None) => SelectionStatus::Unresolved,
            (false, Some(index)) => SelectionStatus::Resolved(index),
        }
    }

    /// Apply an explicit selection event against the current listing.
    ///
    /// `SetIndex` outside the listing leaves the state untouched.
    pub fn apply(&self, action: SelectionAction, files: &[FileEntry]) -> Self {
        match action {
            SelectionAction::SetIndex(index) => match files.get(index) {
                Some(entry) => Self {
                    name: entry.name.clone(),
                    index: Some(index),
                },
                None => {
                    tracing::debug!(index, len = files.len(), "ignoring out-of-range selection");
                    self.clone()
                }
            },
            SelectionAction::SetName(name) => Self::seeded(name),
        }
    }

    /// Resolve the selection against a listing.
    ///
    /// An unresolved name is looked up by name; a miss keeps it unresolved.
    /// A resolved position that no longer matches its name is looked up
    /// again. An empty listing changes nothing.
    pub fn reconcile(&self, files: &[FileEntry]) -> Self {
        if self.name.is_empty() || files.is_empty() {
            return self.clone();
        }

        if let Some(index) = self.index {
            if files.get(index).is_some_and(|entry| entry.name == self.name) {
                return self.clone();
            }
        }

        let index = files.iter().position(|entry| entry.name == self.name);
        if index.is_none() {
            tracing::debug!(name = %self.name, "selected file not in listing");
        }
        Self {
            name: self.name.clone(),
            index,
        }
    }

    /// Check whether the entry at `index` is the active one.
    pub fn is_active(&self, index: usize, entry: &FileEntry) -> bool {
        match self.status() {
            SelectionStatus::Empty => false,
            SelectionStatus::Unresolved => entry.name == self.name,
            SelectionStatus::Resolved(active) => active == index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(names: &[&str]) -> Vec<FileEntry> {
        names.iter().map(|name| FileEntry::file(*name)).collect()
    }

    #[test]
    fn test_status() {
        assert_eq!(SelectionState::empty().status(), SelectionStatus::Empty);
        assert_eq!(SelectionState::seeded("").status(), SelectionStatus::Empty);
        assert_eq!(
            SelectionState::seeded("a.jpg").status(),
            SelectionStatus::Unresolved
        );
    }

    #[test]
    fn test_set_index_takes_name_from_listing() {
        let files = listing(&["a.jpg", "b.jpg", "c.jpg"]);
        let state = SelectionState::empty().apply(SelectionAction::SetIndex(2), &files);

        assert_eq!(state.name(), "c.jpg");
        assert_eq!(state.index(), Some(2));
        assert_eq!(state.status(), SelectionStatus::Resolved(2));
    }

    #[test]
    fn test_set_index_out_of_range_is_ignored() {
        let files = listing(&["a.jpg"]);
        let state = SelectionState::seeded("a.jpg");

        assert_eq!(state.apply(SelectionAction::SetIndex(5), &files), state);
        assert_eq!(state.apply(SelectionAction::SetIndex(0), &[]), state);
    }

    #[test]
    fn test_set_name() {
        let files = listing(&["a.jpg", "b.jpg"]);
        let resolved = SelectionState::empty().apply(SelectionAction::SetIndex(0), &files);

        let named = resolved.apply(SelectionAction::SetName("b.jpg".into()), &files);
        assert_eq!(named.status(), SelectionStatus::Unresolved);
        assert_eq!(named.name(), "b.jpg");

        let cleared = resolved.apply(SelectionAction::SetName(String::new()), &files);
        assert_eq!(cleared.status(), SelectionStatus::Empty);
        assert_eq!(cleared.index(), None);
    }

    #[test]
    fn test_reconcile_hit() {
        let files = listing(&["a.jpg", "b.jpg", "c.jpg"]);
        let state = SelectionState::seeded("b.jpg").reconcile(&files);

        assert_eq!(state.name(), "b.jpg");
        assert_eq!(state.index(), Some(1));
    }

    #[test]
    fn test_reconcile_miss_stays_unresolved() {
        let files = listing(&["a.jpg", "b.jpg"]);
        let state = SelectionState::seeded("zzz.jpg").reconcile(&files);

        assert_eq!(state, SelectionState::seeded("zzz.jpg"));
    }

    #[test]
    fn test_reconcile_empty_listing_is_noop() {
        let unresolved = SelectionState::seeded("a.jpg");
        assert_eq!(unresolved.reconcile(&[]), unresolved);

        let files = listing(&["a.jpg"]);
        let resolved = SelectionState::empty().apply(SelectionAction::SetIndex(0), &files);
        assert_eq!(resolved.reconcile(&[]), resolved);

        assert_eq!(SelectionState::empty().reconcile(&files), SelectionState::empty());
    }

    #[test]
    fn test_reconcile_moved_entry() {
        let before = listing(&["a.jpg", "b.jpg"]);
        let state = SelectionState::empty().apply(SelectionAction::SetIndex(1), &before);

        // Refreshed listing with a new file in front
        let after = listing(&["0.jpg", "a.jpg", "b.jpg"]);
        assert_eq!(state.reconcile(&after).index(), Some(2));

        // Refreshed listing without the file
        let gone = listing(&["a.jpg"]);
        let state = state.reconcile(&gone);
        assert_eq!(state.status(), SelectionStatus::Unresolved);
        assert_eq!(state.name(), "b.jpg");
    }

    #[test]
    fn test_is_active() {
        let files = listing(&["a.jpg", "b.jpg"]);

        let unresolved = SelectionState::seeded("b.jpg");
        assert!(!unresolved.is_active(0, &files[0]));
        assert!(unresolved.is_active(1, &files[1]));

        let resolved = unresolved.reconcile(&files);
        assert!(resolved.is_active(1, &files[1]));
        assert!(!resolved.is_active(0, &files[0]));

        assert!(!SelectionState::empty().is_active(0, &files[0]));
    }

    #[test]
    fn test_no_reachable_state_has_index_without_name() {
        let files = listing(&["a.jpg", "b.jpg", "c.jpg"]);
        let actions = [
            SelectionAction::SetIndex(1),
            SelectionAction::SetName(String::new()),
            SelectionAction::SetIndex(7),
            SelectionAction::SetName("c.jpg".into()),
            SelectionAction::SetIndex(0),
            SelectionAction::SetName("missing.jpg".into()),
        ];

        let mut state = SelectionState::empty();
        for action in actions {
            for candidate in [state.apply(action.clone(), &files), state.reconcile(&files)] {
                assert_eq!(candidate.name().is_empty(), candidate.status() == SelectionStatus::Empty);
                if let Some(index) = candidate.index() {
                    assert_eq!(files[index].name, candidate.name());
                }
            }
            state = state.apply(action, &files).reconcile(&files);
        }
    }
}
