//! JWalk-based album lister.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use jwalk::{Parallelism, WalkDir};

use picatch_core::{AlbumConfig, AlbumPath, FileEntry, ImageDimensions, Listing, ListingError};

/// Lists one album directory: sub-albums and photos, nothing deeper.
#[derive(Debug, Clone, Default)]
pub struct AlbumLister;

impl AlbumLister {
    /// Create a new lister.
    pub fn new() -> Self {
        Self
    }

    /// Resolve an album to its directory under the photos root.
    pub fn album_dir(config: &AlbumConfig, album: &AlbumPath) -> Result<PathBuf, ListingError> {
        Ok(config.photos_root.join(album.to_relative_path()?))
    }

    /// List the given album.
    ///
    /// Sub-albums come first, then photos, each group sorted by name.
    /// Entries that cannot be read are skipped with a warning.
    pub fn list(&self, config: &AlbumConfig, album: &AlbumPath) -> Result<Listing, ListingError> {
        let dir = Self::album_dir(config, album)?;

        let metadata = std::fs::metadata(&dir).map_err(|e| ListingError::io(&dir, e))?;
        if !metadata.is_dir() {
            return Err(ListingError::NotADirectory { path: dir });
        }

        let walker = WalkDir::new(&dir)
            .parallelism(Parallelism::Serial)
            .skip_hidden(!config.include_hidden)
            .follow_links(false)
            .min_depth(1)
            .max_depth(1);

        let mut files = Vec::new();
        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                    tracing::warn!(path = %path.display(), "skipping unreadable entry: {err}");
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().to_string();
            if config.should_skip_hidden(&name) {
                continue;
            }

            if let Some(file) = Self::entry_for(config, &entry.path(), name) {
                files.push(file);
            }
        }

        files.sort_by(|a, b| b.is_dir().cmp(&a.is_dir()).then_with(|| a.name.cmp(&b.name)));

        tracing::debug!(album = %album, entries = files.len(), "listed album");
        Ok(Listing {
            album: album.clone(),
            files,
        })
    }

    /// Build the listing entry for a path, following symlinks.
    fn entry_for(config: &AlbumConfig, path: &Path, name: String) -> Option<FileEntry> {
        let metadata = match std::fs::metadata(path) {
            Ok(m) => m,
            Err(err) => {
                tracing::warn!(path = %path.display(), "skipping entry: {err}");
                return None;
            }
        };
        let modified = metadata.modified().ok().map(DateTime::<Utc>::from);

        let entry = if metadata.is_dir() {
            FileEntry::dir(name)
        } else if metadata.is_file() && config.accepts_file(path) {
            let mut entry = FileEntry::file(name).with_size(metadata.len());
            if let Some(dimensions) = Self::photo_dimensions(path) {
                entry = entry.with_dimensions(dimensions);
            }
            if let Some(exif) = Self::read_exif(path) {
                entry = entry.with_exif(exif);
            }
            entry
        } else {
            return None;
        };

        Some(match modified {
            Some(modified) => entry.with_modified(modified),
            None => entry,
        })
    }

    /// Pixel size from the image header, `None` if it cannot be decoded.
    pub fn photo_dimensions(path: &Path) -> Option<ImageDimensions> {
        match image::image_dimensions(path) {
            Ok((width, height)) => Some(ImageDimensions { width, height }),
            Err(err) => {
                tracing::debug!(path = %path.display(), "no dimensions: {err}");
                None
            }
        }
    }

    /// EXIF tags keyed by tag name, values rendered with their units.
    ///
    /// `None` if the file has no readable EXIF block.
    pub fn read_exif(path: &Path) -> Option<BTreeMap<String, String>> {
        let file = File::open(path).ok()?;
        let mut reader = BufReader::new(file);
        let exif = exif::Reader::new().read_from_container(&mut reader).ok()?;

        Some(
            exif.fields()
                .map(|field| {
                    (
                        field.tag.to_string(),
                        field.display_value().with_unit(&exif).to_string(),
                    )
                })
                .collect(),
        )
    }
}
