//! Album listing entries and snapshots.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::path::AlbumPath;

/// Kind of an album entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// Sub-album.
    Dir,
    /// Photo.
    File,
}

/// Pixel size of a photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

/// A single entry of an album listing.
///
/// Entries compare equal by name only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// Entry name. Directories carry a trailing `/`.
    pub name: String,
    /// Entry kind.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Size in bytes (zero for directories).
    #[serde(default)]
    pub size: u64,
    /// Last modification time, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
    /// Pixel size, when the photo could be decoded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<ImageDimensions>,
    /// EXIF tags by name, when the photo carries any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exif: Option<BTreeMap<String, String>>,
}

impl FileEntry {
    /// Create a photo entry.
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            size: 0,
            modified: None,
            dimensions: None,
            exif: None,
        }
    }

    /// Create a sub-album entry, appending the trailing `/` if missing.
    pub fn dir(name: impl Into<String>) -> Self {
        let mut name = name.into();
        if !name.ends_with('/') {
            name.push('/');
        }
        Self {
            name,
            kind: EntryKind::Dir,
            size: 0,
            modified: None,
            dimensions: None,
            exif: None,
        }
    }

    /// Set the size.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Set the modification time.
    pub fn with_modified(mut self, modified: DateTime<Utc>) -> Self {
        self.modified = Some(modified);
        self
    }

    /// Set the pixel size.
    pub fn with_dimensions(mut self, dimensions: ImageDimensions) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Set the EXIF tags.
    pub fn with_exif(mut self, exif: BTreeMap<String, String>) -> Self {
        self.exif = Some(exif);
        self
    }

    /// Look up one EXIF tag by name.
    pub fn exif_tag(&self, tag: &str) -> Option<&str> {
        self.exif.as_ref()?.get(tag).map(String::as_str)
    }

    /// Check if this entry is a sub-album.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

impl PartialEq for FileEntry {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for FileEntry {}

/// A finished listing of one album.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Listing {
    /// Album that was listed.
    pub album: AlbumPath,
    /// Entries in display order.
    pub files: Vec<FileEntry>,
}

impl Listing {
    /// Number of photo entries.
    pub fn photo_count(&self) -> usize {
        self.files.iter().filter(|entry| !entry.is_dir()).count()
    }

    /// Number of sub-album entries.
    pub fn album_count(&self) -> usize {
        self.files.iter().filter(|entry| entry.is_dir()).count()
    }
}

/// What the listing source currently knows about an album.
#[derive(Debug, Clone, Default)]
pub struct ListingSnapshot {
    /// Album this snapshot belongs to.
    pub album: AlbumPath,
    /// Entries, empty while loading or after an error.
    pub files: Vec<FileEntry>,
    /// A fetch is in flight.
    pub is_loading: bool,
    /// The last fetch failed.
    pub error: bool,
}

impl ListingSnapshot {
    /// Snapshot for a fetch that has not completed yet.
    pub fn loading(album: AlbumPath) -> Self {
        Self {
            album,
            files: Vec::new(),
            is_loading: true,
            error: false,
        }
    }

    /// Snapshot for a completed fetch.
    pub fn loaded(listing: Listing) -> Self {
        Self {
            album: listing.album,
            files: listing.files,
            is_loading: false,
            error: false,
        }
    }

    /// Snapshot for a failed fetch.
    pub fn failed(album: AlbumPath) -> Self {
        Self {
            album,
            files: Vec::new(),
            is_loading: false,
            error: true,
        }
    }
}
