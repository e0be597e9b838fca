//! Core types and the active-selection state machine for picatch.
//!
//! This crate keeps three things consistent for an album view: the active
//! file, its position in the fetched listing, and the navigation location.
//! Listing and rendering live in `picatch-scan` and `picatch-tui`.

mod config;
mod controller;
mod error;
mod history;
mod listing;
mod navigation;
mod path;
mod selection;

pub use config::{AlbumConfig, AlbumConfigBuilder};
pub use controller::{AlbumController, PathChange};
pub use error::ListingError;
pub use history::MemoryHistory;
pub use listing::{EntryKind, FileEntry, ImageDimensions, Listing, ListingSnapshot};
pub use navigation::{Navigator, canonical_path, sync_navigation};
pub use path::{ALBUM_PREFIX, AlbumPath, PathComponents};
pub use selection::{SelectionAction, SelectionState, SelectionStatus};
