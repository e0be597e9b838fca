//! Error types for album listing operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while listing an album.
#[derive(Debug, Error)]
pub enum ListingError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Album directory not found.
    #[error("Album not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Album path is not a directory.
    #[error("Album path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Album path contains segments that would leave the photos root.
    #[error("Album path escapes the photos root: {album}")]
    OutsideRoot { album: String },

    /// Other error.
    #[error("{message}")]
    Other { message: String },
}

impl ListingError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_error_io() {
        let err = ListingError::io(
            "/photos/2019",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, ListingError::PermissionDenied { .. }));

        let err = ListingError::io(
            "/photos/missing",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, ListingError::NotFound { .. }));
    }

    #[test]
    fn test_listing_error_io_other_keeps_source() {
        let err = ListingError::io(
            "/photos",
            std::io::Error::new(std::io::ErrorKind::Other, "disk on fire"),
        );
        assert!(err.to_string().contains("disk on fire"));
    }

    #[test]
    fn test_outside_root_message() {
        let err = ListingError::OutsideRoot {
            album: "/../etc/".to_string(),
        };
        assert_eq!(err.to_string(), "Album path escapes the photos root: /../etc/");
    }
}
