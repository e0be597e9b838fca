//! Application state types and persisted settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::theme::ThemeVariant;

/// Application mode representing the current UI state.
/// Listing is NOT a mode - albums load in the background while the user
/// keeps browsing in Normal mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Normal,
    Help,
    Quit,
}

/// Settings persisted between sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Color theme.
    pub theme: ThemeVariant,
    /// Show the details panel.
    pub show_details: bool,
    /// Photo extensions to list. Empty keeps the built-in list.
    pub extensions: Vec<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme: ThemeVariant::Dark,
            show_details: true,
            extensions: Vec::new(),
        }
    }
}

impl UserSettings {
    /// Get the config file path.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("picatch").join("settings.toml"))
    }

    /// Load settings from disk, or return defaults.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| std::fs::read_to_string(&path).ok())
            .and_then(|content| Self::from_toml(&content))
            .unwrap_or_default()
    }

    /// Parse settings from TOML, `None` if malformed.
    pub fn from_toml(content: &str) -> Option<Self> {
        match toml::from_str(content) {
            Ok(settings) => Some(settings),
            Err(err) => {
                tracing::warn!("ignoring malformed settings: {err}");
                None
            }
        }
    }

    /// Save settings to disk.
    pub fn save(&self) -> std::io::Result<()> {
        let path = Self::config_path().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "No config directory")
        })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_from_toml() {
        let settings = UserSettings::from_toml(
            r#"
            theme = "light"
            extensions = ["png"]
            "#,
        )
        .unwrap();

        assert_eq!(settings.theme, ThemeVariant::Light);
        assert!(settings.show_details);
        assert_eq!(settings.extensions, vec!["png".to_string()]);
    }

    #[test]
    fn test_settings_malformed() {
        assert!(UserSettings::from_toml("theme = 3").is_none());
    }
}
