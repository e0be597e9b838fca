//! In-memory navigation history.

use crate::navigation::Navigator;
use crate::path::PathComponents;

/// Browser-style history: a list of locations and a cursor into it.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
    pushes: usize,
}

impl MemoryHistory {
    /// Create a history starting at `location`.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            entries: vec![location.into()],
            cursor: 0,
            pushes: 0,
        }
    }

    /// Path components of the current location.
    pub fn components(&self) -> PathComponents {
        PathComponents::parse(self.location())
    }

    /// Step back one entry. Returns the new location.
    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step forward one entry. Returns the new location.
    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    /// Check if there is an entry behind the cursor.
    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    /// Check if there is an entry ahead of the cursor.
    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of pushes since creation.
    pub fn push_count(&self) -> usize {
        self.pushes
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a history holds at least its starting location.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Navigator for MemoryHistory {
    fn location(&self) -> &str {
        &self.entries[self.cursor]
    }

    fn push(&mut self, path: String) {
        // Drop forward history
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path);
        self.cursor += 1;
        self.pushes += 1;
    }
}
