//! Album configuration types.

use std::path::{Path, PathBuf};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration shared by the album lister and the album controller.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct AlbumConfig {
    /// Directory holding the photo albums.
    pub photos_root: PathBuf,

    /// Album is mounted at `/` instead of under `/album`.
    #[builder(default = "false")]
    #[serde(default)]
    pub root_view: bool,

    /// File extensions listed as photos (case-insensitive, no leading dot).
    #[builder(default = "default_extensions()")]
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Include hidden files (starting with .).
    #[builder(default = "false")]
    #[serde(default)]
    pub include_hidden: bool,
}

fn default_extensions() -> Vec<String> {
    vec!["jpg".to_string(), "jpeg".to_string()]
}

impl AlbumConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.photos_root {
            Some(ref root) if root.as_os_str().is_empty() => {
                return Err("Photos root cannot be empty".to_string());
            }
            Some(_) => {}
            None => return Err("Photos root is required".to_string()),
        }
        if let Some(ref extensions) = self.extensions {
            if extensions.iter().any(|ext| ext.trim_start_matches('.').is_empty()) {
                return Err("Extensions cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

impl AlbumConfig {
    /// Create a new album config builder.
    pub fn builder() -> AlbumConfigBuilder {
        AlbumConfigBuilder::default()
    }

    /// Create a simple config for browsing a photos directory.
    pub fn new(photos_root: impl Into<PathBuf>) -> Self {
        Self {
            photos_root: photos_root.into(),
            root_view: false,
            extensions: default_extensions(),
            include_hidden: false,
        }
    }

    /// Check whether a file should be listed based on its extension.
    pub fn accepts_file(&self, path: &Path) -> bool {
        let Some(ext) = path.extension() else {
            return false;
        };
        let ext = ext.to_string_lossy().to_lowercase();
        self.extensions
            .iter()
            .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(&ext))
    }

    /// Check if hidden entries should be skipped.
    pub fn should_skip_hidden(&self, name: &str) -> bool {
        !self.include_hidden && name.starts_with('.')
    }
}

impl Default for AlbumConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
