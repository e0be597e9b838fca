//! Filesystem album listing for picatch.
//!
//! This crate lists one album directory at a time using jwalk.
//!
//! # Overview
//!
//! `picatch-scan` is the listing source behind the album view:
//!
//! - **One level only**: sub-albums and photos, no recursion
//! - **Photo filter** by configurable extensions (`jpg`, `jpeg` by default)
//! - **Sub-albums** are listed with a trailing `/`, before photos
//! - **Confined** to the photos root: `..` segments are refused
//!
//! # Example
//!
//! ```rust,no_run
//! use picatch_scan::{AlbumConfig, AlbumLister, AlbumPath};
//!
//! let config = AlbumConfig::new("/srv/photos");
//! let listing = AlbumLister::new()
//!     .list(&config, &AlbumPath::parse("/2019/summer/"))
//!     .unwrap();
//!
//! for entry in &listing.files {
//!     println!("{}", entry.name);
//! }
//! ```

mod lister;

pub use lister::AlbumLister;

// Re-export core types for convenience
pub use picatch_core::{AlbumConfig, AlbumPath, EntryKind, FileEntry, Listing, ListingError};
