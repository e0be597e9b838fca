//! Album view controller.
//!
//! Owns the selection for one mounted album view and composes the pure
//! pieces: location input, listing reconciliation, explicit selection and
//! navigation sync. Every input is last-write-wins.

use crate::listing::{FileEntry, ListingSnapshot};
use crate::navigation::{Navigator, canonical_path, sync_navigation};
use crate::path::PathComponents;
use crate::selection::{SelectionAction, SelectionState};

/// Effect of a new location on the album view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathChange {
    /// Same album and file as before.
    Unchanged,
    /// Same album, different file.
    FileChanged,
    /// Different album: the view was remounted and needs a new listing.
    AlbumChanged,
}

/// Selection state of one album view.
#[derive(Debug, Clone)]
pub struct AlbumController {
    root_view: bool,
    components: PathComponents,
    selection: SelectionState,
    listing: ListingSnapshot,
}

impl AlbumController {
    /// Mount a view on `components`, seeding the selection from its file.
    pub fn new(components: PathComponents, root_view: bool) -> Self {
        Self {
            root_view,
            selection: SelectionState::seeded(components.file.clone()),
            listing: ListingSnapshot::loading(components.album.clone()),
            components,
        }
    }

    /// Observe the current location.
    ///
    /// A different album remounts the view. A different file in the same
    /// album (history back/forward) re-seeds the selection by name.
    pub fn observe_path(&mut self, components: PathComponents) -> PathChange {
        if components == self.components {
            return PathChange::Unchanged;
        }

        if components.album != self.components.album {
            tracing::debug!(album = %components.album, "album changed, remounting");
            *self = Self::new(components, self.root_view);
            return PathChange::AlbumChanged;
        }

        if components.file != self.selection.name() {
            let action = SelectionAction::SetName(components.file.clone());
            self.selection = self
                .selection
                .apply(action, &self.listing.files)
                .reconcile(&self.listing.files);
        }
        self.components = components;
        PathChange::FileChanged
    }

    /// Take a listing snapshot. Returns false if it was for another album.
    pub fn receive_listing(&mut self, snapshot: ListingSnapshot) -> bool {
        if snapshot.album != self.components.album {
            tracing::debug!(
                stale = %snapshot.album,
                current = %self.components.album,
                "dropping stale listing"
            );
            return false;
        }

        self.listing = snapshot;
        if self.listing.error {
            self.listing.files.clear();
        }
        self.selection = self.selection.reconcile(&self.listing.files);
        true
    }

    /// Apply a selection event from the view.
    pub fn dispatch(&mut self, action: SelectionAction) {
        self.selection = self
            .selection
            .apply(action, &self.listing.files)
            .reconcile(&self.listing.files);
    }

    /// Reconcile, then write the canonical location to `navigator` if it
    /// differs. Returns whether a push happened.
    pub fn sync<N: Navigator + ?Sized>(&mut self, navigator: &mut N) -> bool {
        self.selection = self.selection.reconcile(&self.listing.files);
        let canonical = self.canonical_path();
        sync_navigation(navigator, &canonical)
    }

    /// Location that represents the current selection.
    pub fn canonical_path(&self) -> String {
        canonical_path(&self.selection, &self.components.album, self.is_root_view())
    }

    /// Check if this view is mounted at `/`.
    pub fn is_root_view(&self) -> bool {
        self.root_view && self.components.album.is_root()
    }

    /// Current selection.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Last observed location.
    pub fn components(&self) -> &PathComponents {
        &self.components
    }

    /// Current listing snapshot.
    pub fn listing(&self) -> &ListingSnapshot {
        &self.listing
    }

    /// Entries of the current listing.
    pub fn files(&self) -> &[FileEntry] {
        &self.listing.files
    }

    /// Check if a listing fetch is pending.
    pub fn is_loading(&self) -> bool {
        self.listing.is_loading
    }

    /// Check if the last listing fetch failed.
    pub fn has_error(&self) -> bool {
        self.listing.error
    }

    /// Active entry, if resolved.
    pub fn active_entry(&self) -> Option<&FileEntry> {
        self.selection.index().and_then(|index| self.listing.files.get(index))
    }
}
