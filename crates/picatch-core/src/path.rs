//! Album paths and location parsing.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ListingError;

/// Location prefix of nested album views.
pub const ALBUM_PREFIX: &str = "/album";

/// Hierarchical album path, rendered as `/`, `/2019/` or `/2019/summer/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct AlbumPath {
    segments: Vec<String>,
}

impl AlbumPath {
    /// The root album.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a `/`-delimited album path. Empty segments are dropped.
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Check if this is the root album.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Path segments from the root down.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Name of the innermost album, if any.
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// The enclosing album, or `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.segments.split_last()?;
        Some(Self {
            segments: rest.to_vec(),
        })
    }

    /// Descend into a child album. A trailing `/` on `dir` is ignored.
    pub fn join(&self, dir: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(
            dir.split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string),
        );
        Self { segments }
    }

    /// Location of this album in a nested view, e.g. `/album/2019/`.
    pub fn location(&self) -> String {
        format!("{ALBUM_PREFIX}{self}")
    }

    /// Relative filesystem path of this album under the photos root.
    ///
    /// Refuses `.` and `..` segments so a listing can never leave the root.
    pub fn to_relative_path(&self) -> Result<PathBuf, ListingError> {
        if self
            .segments
            .iter()
            .any(|segment| segment == "." || segment == ".." || segment.contains('\\'))
        {
            return Err(ListingError::OutsideRoot {
                album: self.to_string(),
            });
        }
        Ok(self.segments.iter().collect())
    }
}

impl fmt::Display for AlbumPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("/")?;
        for segment in &self.segments {
            write!(f, "{segment}/")?;
        }
        Ok(())
    }
}

impl From<AlbumPath> for String {
    fn from(path: AlbumPath) -> Self {
        path.to_string()
    }
}

impl From<String> for AlbumPath {
    fn from(path: String) -> Self {
        Self::parse(&path)
    }
}

impl From<&str> for AlbumPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

/// Album and file named by a location.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PathComponents {
    /// Album being viewed.
    pub album: AlbumPath,
    /// Active file name, empty when none.
    pub file: String,
}

impl PathComponents {
    /// Create path components from an album and a file name.
    pub fn new(album: impl Into<AlbumPath>, file: impl Into<String>) -> Self {
        Self {
            album: album.into(),
            file: file.into(),
        }
    }

    /// Parse a location string.
    ///
    /// `/album/2019/summer/a.jpg` is nested: album `/2019/summer/`, file
    /// `a.jpg`. Anything not under `/album` belongs to the root view, so
    /// `/a.jpg` is album `/`, file `a.jpg`.
    pub fn parse(location: &str) -> Self {
        let nested = match location.strip_prefix(ALBUM_PREFIX) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => Some(rest),
            _ => None,
        };

        match nested {
            Some(rest) => match rest.rfind('/') {
                Some(split) => Self::new(&rest[..split], &rest[split + 1..]),
                None => Self::new(AlbumPath::root(), ""),
            },
            None => Self::new(AlbumPath::root(), location.trim_start_matches('/')),
        }
    }

    /// Document title for these components: the file, else the album.
    pub fn title(&self) -> Option<String> {
        if !self.file.is_empty() {
            return Some(self.file.clone());
        }
        self.album.name().map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_path_display() {
        assert_eq!(AlbumPath::root().to_string(), "/");
        assert_eq!(AlbumPath::parse("2019").to_string(), "/2019/");
        assert_eq!(AlbumPath::parse("/2019//summer/").to_string(), "/2019/summer/");
    }

    #[test]
    fn test_album_path_parent_and_join() {
        let album = AlbumPath::parse("/2019/summer/");
        assert_eq!(album.name(), Some("summer"));
        assert_eq!(album.parent(), Some(AlbumPath::parse("/2019/")));
        assert_eq!(AlbumPath::root().parent(), None);

        let child = AlbumPath::parse("/2019/").join("winter/");
        assert_eq!(child.to_string(), "/2019/winter/");
        assert_eq!(child.location(), "/album/2019/winter/");
    }

    #[test]
    fn test_relative_path_rejects_escape() {
        let ok = AlbumPath::parse("/2019/summer/").to_relative_path().unwrap();
        assert_eq!(ok, PathBuf::from("2019").join("summer"));

        assert!(matches!(
            AlbumPath::parse("/../etc/").to_relative_path(),
            Err(ListingError::OutsideRoot { .. })
        ));
        assert!(AlbumPath::parse("/./").to_relative_path().is_err());
    }

    #[test]
    fn test_parse_nested_location() {
        let path = PathComponents::parse("/album/2019/summer/c.jpg");
        assert_eq!(path.album.to_string(), "/2019/summer/");
        assert_eq!(path.file, "c.jpg");

        let path = PathComponents::parse("/album/2019/");
        assert_eq!(path.album.to_string(), "/2019/");
        assert_eq!(path.file, "");

        let path = PathComponents::parse("/album");
        assert!(path.album.is_root());
        assert_eq!(path.file, "");
    }

    #[test]
    fn test_parse_root_location() {
        let path = PathComponents::parse("/c.jpg");
        assert!(path.album.is_root());
        assert_eq!(path.file, "c.jpg");

        let path = PathComponents::parse("/");
        assert!(path.album.is_root());
        assert_eq!(path.file, "");

        // Only the exact prefix counts as nested
        let path = PathComponents::parse("/albums.jpg");
        assert!(path.album.is_root());
        assert_eq!(path.file, "albums.jpg");
    }

    #[test]
    fn test_title() {
        assert_eq!(
            PathComponents::parse("/album/2019/c.jpg").title().as_deref(),
            Some("c.jpg")
        );
        assert_eq!(
            PathComponents::parse("/album/2019/").title().as_deref(),
            Some("2019")
        );
        assert_eq!(PathComponents::parse("/").title(), None);
    }

    #[test]
    fn test_album_path_serde_as_string() {
        let json = serde_json::to_string(&AlbumPath::parse("a/b")).unwrap();
        assert_eq!(json, "\"/a/b/\"");
        let back: AlbumPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AlbumPath::parse("/a/b/"));
    }
}
