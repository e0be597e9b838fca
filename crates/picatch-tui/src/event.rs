//! Event handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key action that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Cursor
    MoveUp,
    MoveDown,
    JumpToTop,
    JumpToBottom,
    PageUp,
    PageDown,

    // Selection
    /// Activate the entry under the cursor.
    Activate,
    /// Clear the active file.
    ClearSelection,
    /// Activate the next photo.
    NextPhoto,
    /// Activate the previous photo.
    PrevPhoto,

    // Albums and history
    ParentAlbum,
    HistoryBack,
    HistoryForward,

    // UI toggles
    ToggleDetails,
    ToggleHelp,
    ToggleTheme,

    // Other actions
    Refresh,

    // Application
    Quit,
    ForceQuit,

    // No action
    None,
}

impl KeyAction {
    /// Convert a key event to an action.
    pub fn from_key_event(event: KeyEvent) -> Self {
        match (event.code, event.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::ForceQuit,

            // Esc closes the active photo
            (KeyCode::Esc, _) => KeyAction::ClearSelection,

            // Cursor - vim style
            (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::MoveDown,
            (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::MoveUp,

            // Cursor - arrow keys
            (KeyCode::Down, _) => KeyAction::MoveDown,
            (KeyCode::Up, _) => KeyAction::MoveUp,

            // Jump
            (KeyCode::Char('g'), KeyModifiers::NONE) => KeyAction::JumpToTop,
            (KeyCode::Char('G'), KeyModifiers::SHIFT) => KeyAction::JumpToBottom,
            (KeyCode::Home, _) => KeyAction::JumpToTop,
            (KeyCode::End, _) => KeyAction::JumpToBottom,

            // Page navigation
            (KeyCode::PageUp, _) => KeyAction::PageUp,
            (KeyCode::PageDown, _) => KeyAction::PageDown,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => KeyAction::PageUp,
            (KeyCode::Char('d'), KeyModifiers::CONTROL) => KeyAction::PageDown,

            // Selection
            (KeyCode::Enter, _) => KeyAction::Activate,
            (KeyCode::Char('l'), KeyModifiers::NONE) => KeyAction::Activate,
            (KeyCode::Right, _) => KeyAction::Activate,
            (KeyCode::Char('n'), KeyModifiers::NONE) => KeyAction::NextPhoto,
            (KeyCode::Char('p'), KeyModifiers::NONE) => KeyAction::PrevPhoto,

            // Albums and history
            (KeyCode::Backspace, _) => KeyAction::ParentAlbum,
            (KeyCode::Char('h'), KeyModifiers::NONE) => KeyAction::ParentAlbum,
            (KeyCode::Left, _) => KeyAction::ParentAlbum,
            (KeyCode::Char('['), KeyModifiers::NONE) => KeyAction::HistoryBack,
            (KeyCode::Char(']'), KeyModifiers::NONE) => KeyAction::HistoryForward,

            // UI toggles
            (KeyCode::Char('i'), KeyModifiers::NONE) => KeyAction::ToggleDetails,
            (KeyCode::Char('?'), KeyModifiers::NONE) => KeyAction::ToggleHelp,
            (KeyCode::Char('?'), KeyModifiers::SHIFT) => KeyAction::ToggleHelp,
            (KeyCode::Char('t'), KeyModifiers::NONE) => KeyAction::ToggleTheme,

            (KeyCode::Char('r'), KeyModifiers::NONE) => KeyAction::Refresh,

            _ => KeyAction::None,
        }
    }
}

/// A section of key bindings for the help display.
pub struct HelpSection {
    pub title: &'static str,
    pub bindings: Vec<KeyBinding>,
}

/// Key binding for display in help.
pub struct KeyBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Get all key bindings organized by section for help display.
pub fn get_help_sections() -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: "Navigation",
            bindings: vec![
                KeyBinding { keys: "j/k ↑/↓", description: "Move cursor" },
                KeyBinding { keys: "g/G", description: "Jump to top/bottom" },
                KeyBinding { keys: "Ctrl-u/d", description: "Page up/down" },
                KeyBinding { keys: "h/Backspace", description: "Parent album" },
                KeyBinding { keys: "[ / ]", description: "History back/forward" },
            ],
        },
        HelpSection {
            title: "Photos",
            bindings: vec![
                KeyBinding { keys: "Enter/l", description: "Open photo or album" },
                KeyBinding { keys: "n/p", description: "Next/previous photo" },
                KeyBinding { keys: "Esc", description: "Close photo" },
            ],
        },
        HelpSection {
            title: "Display",
            bindings: vec![
                KeyBinding { keys: "i", description: "Toggle details panel" },
                KeyBinding { keys: "t", description: "Toggle dark/light theme" },
                KeyBinding { keys: "r", description: "Reload album" },
                KeyBinding { keys: "?", description: "Show this help" },
                KeyBinding { keys: "q", description: "Quit" },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('j'))), KeyAction::MoveDown);
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Enter)), KeyAction::Activate);
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Esc)), KeyAction::ClearSelection);
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('['))), KeyAction::HistoryBack);
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('z'))), KeyAction::None);
        assert_eq!(
            KeyAction::from_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::ForceQuit
        );
    }

    #[test]
    fn test_help_sections_not_empty() {
        let sections = get_help_sections();
        assert!(sections.iter().all(|s| !s.bindings.is_empty()));
    }
}
