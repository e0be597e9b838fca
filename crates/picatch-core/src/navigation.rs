//! Canonical locations and navigation sync.

use crate::path::{ALBUM_PREFIX, AlbumPath};
use crate::selection::SelectionState;

/// A navigation history the selection can be written back to.
pub trait Navigator {
    /// Currently recorded location.
    fn location(&self) -> &str;

    /// Navigate to `path`, adding a history entry.
    fn push(&mut self, path: String);
}

/// Location that represents `selection` inside `album`.
///
/// A root view lives at `/`, a nested view under `/album/<album>/`.
pub fn canonical_path(selection: &SelectionState, album: &AlbumPath, root: bool) -> String {
    if root {
        format!("/{}", selection.name())
    } else {
        format!("{ALBUM_PREFIX}{album}{}", selection.name())
    }
}

/// Push `canonical` unless the navigator is already there.
///
/// Returns whether a push happened. Writing the same location twice is a
/// no-op, so observing our own push never triggers another one.
pub fn sync_navigation<N: Navigator + ?Sized>(navigator: &mut N, canonical: &str) -> bool {
    if navigator.location() == canonical {
        return false;
    }
    tracing::debug!(from = navigator.location(), to = canonical, "pushing location");
    navigator.push(canonical.to_string());
    true
}
