//! Cursor navigation for the album list.
//!
//! The cursor is view-local: moving it never changes the active file.
//! Activating the entry under it is what dispatches a selection.

use super::constants::PAGE_SIZE;

/// Trait for types that support list-style navigation.
pub trait ListNavigator {
    /// Get the currently selected index.
    fn selected(&self) -> usize;

    /// Set the selected index.
    fn set_selected(&mut self, index: usize);

    /// Get the maximum valid index (item count - 1, or 0 if empty).
    fn max_index(&self) -> usize;

    /// Move selection up by count items.
    fn move_up(&mut self, count: usize) {
        let current = self.selected();
        self.set_selected(current.saturating_sub(count));
    }

    /// Move selection down by count items.
    fn move_down(&mut self, count: usize) {
        let current = self.selected();
        let max = self.max_index();
        self.set_selected((current + count).min(max));
    }

    /// Move selection up by one page.
    fn page_up(&mut self) {
        self.move_up(PAGE_SIZE);
    }

    /// Move selection down by one page.
    fn page_down(&mut self) {
        self.move_down(PAGE_SIZE);
    }

    /// Jump to the first item.
    fn jump_to_top(&mut self) {
        self.set_selected(0);
    }

    /// Jump to the last item.
    fn jump_to_bottom(&mut self) {
        self.set_selected(self.max_index());
    }
}

/// Cursor and scroll offset over the album entries.
#[derive(Debug, Clone, Default)]
pub struct AlbumCursor {
    selected: usize,
    offset: usize,
    count: usize,
}

impl AlbumCursor {
    /// Create a cursor over `count` entries.
    pub fn new(count: usize) -> Self {
        Self {
            selected: 0,
            offset: 0,
            count,
        }
    }

    /// Update the entry count, clamping the cursor if necessary.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        if self.selected > self.max_index() {
            self.selected = self.max_index();
        }
    }

    /// First visible row.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Adjust the scroll offset so the cursor is inside the viewport.
    pub fn ensure_visible(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + viewport_height {
            self.offset = self.selected + 1 - viewport_height;
        }
    }
}

impl ListNavigator for AlbumCursor {
    fn selected(&self) -> usize {
        self.selected
    }

    fn set_selected(&mut self, index: usize) {
        self.selected = index.min(self.max_index());
    }

    fn max_index(&self) -> usize {
        self.count.saturating_sub(1)
    }
}
