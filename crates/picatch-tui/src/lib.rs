//! Terminal user interface for picatch.
//!
//! This crate provides an interactive album browser built with ratatui.
//!
//! # Overview
//!
//! `picatch-tui` keeps three things in step: the location in the
//! navigation history, the album listing, and the active photo.
//!
//! - **Deep links** - start at `/album/2019/summer/beach.jpg` and the photo
//!   is activated once the listing arrives
//! - **Root view** - mount the top album at `/` instead of `/album/`
//! - **History** - back and forward restore the active photo by name
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//!
//! // Browse a photos directory, starting at one album
//! let config = picatch_tui::TuiConfig::new(PathBuf::from("/srv/photos"))
//!     .with_location("/album/2019/");
//! picatch_tui::run_with_config(config).unwrap();
//! ```
//!
//! # Keyboard Navigation
//!
//! - `j`/`k` - Move cursor
//! - `Enter`/`l` - Open photo or album
//! - `n`/`p` - Next/previous photo
//! - `Esc` - Close photo
//! - `h`/`Backspace` - Parent album
//! - `[`/`]` - History back/forward
//! - `?` - Help
//! - `q` - Quit

pub mod app;
mod event;
mod theme;
mod ui;

use std::path::PathBuf;

use picatch_core::AlbumConfig;

pub use app::state::UserSettings;
pub use app::{App, AppResult};
pub use theme::{Theme, ThemeVariant};

/// Startup options for the TUI. Command-line flags win over user settings.
#[derive(Debug, Clone)]
pub struct TuiConfig {
    /// Directory holding the photo albums.
    pub photos_root: PathBuf,
    /// Initial location; defaults to the top album.
    pub location: Option<String>,
    /// Mount the top album at `/`.
    pub root_view: bool,
    /// List hidden entries.
    pub include_hidden: bool,
}

impl TuiConfig {
    /// Create a config for browsing `photos_root`.
    pub fn new(photos_root: impl Into<PathBuf>) -> Self {
        Self {
            photos_root: photos_root.into(),
            location: None,
            root_view: false,
            include_hidden: false,
        }
    }

    /// Start at `location` instead of the top album.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Mount the top album at `/`.
    pub fn with_root_view(mut self, root_view: bool) -> Self {
        self.root_view = root_view;
        self
    }

    /// List hidden entries.
    pub fn with_include_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    /// Location shown when none was given.
    pub fn initial_location(&self) -> String {
        match &self.location {
            Some(location) => location.clone(),
            None if self.root_view => "/".to_string(),
            None => "/album/".to_string(),
        }
    }

    /// Build the album config, taking photo extensions from `settings`
    /// when it names any.
    pub fn album_config(&self, settings: &UserSettings) -> AppResult<AlbumConfig> {
        let mut builder = AlbumConfig::builder();
        builder
            .photos_root(self.photos_root.clone())
            .root_view(self.root_view)
            .include_hidden(self.include_hidden);
        if !settings.extensions.is_empty() {
            builder.extensions(settings.extensions.clone());
        }
        Ok(builder.build()?)
    }
}

/// Run the TUI application with custom config.
pub fn run_with_config(config: TuiConfig) -> AppResult<()> {
    let settings = UserSettings::load();
    let album_config = config.album_config(&settings)?;
    let app = App::with_settings(album_config, config.initial_location(), settings);

    // Create tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new()?;

    let terminal = ratatui::init();
    let result = rt.block_on(app.run(terminal));
    ratatui::restore();

    // Shutdown runtime immediately to cancel background tasks
    rt.shutdown_timeout(std::time::Duration::from_millis(100));

    result
}
