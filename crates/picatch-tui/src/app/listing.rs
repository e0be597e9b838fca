//! Background album listing.

use tokio::sync::mpsc;

use picatch_core::{AlbumConfig, AlbumPath, Listing, ListingError};
use picatch_scan::AlbumLister;

use super::constants::LISTING_CHANNEL_SIZE;

/// Message from a background listing task.
#[derive(Debug)]
pub enum ListingEvent {
    /// Listing of `album` finished.
    Complete {
        album: AlbumPath,
        result: Result<Listing, ListingError>,
    },
}

/// Start listing an album in the background.
///
/// Returns a receiver that will receive the result once.
pub fn start_listing(config: AlbumConfig, album: AlbumPath) -> mpsc::Receiver<ListingEvent> {
    let (tx, rx) = mpsc::channel(LISTING_CHANNEL_SIZE);

    tokio::spawn(async move {
        let task_album = album.clone();

        // Directory reads block, keep them off the UI loop
        let result = tokio::task::spawn_blocking(move || {
            AlbumLister::new().list(&config, &task_album)
        })
        .await
        .unwrap_or_else(|e| {
            Err(ListingError::Other {
                message: e.to_string(),
            })
        });

        let _ = tx.send(ListingEvent::Complete { album, result }).await;
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_start_listing_delivers_result() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.jpg"), "a").unwrap();

        let mut rx = start_listing(AlbumConfig::new(temp.path()), AlbumPath::root());
        let ListingEvent::Complete { album, result } = rx.recv().await.unwrap();

        assert!(album.is_root());
        assert_eq!(result.unwrap().files.len(), 1);
    }

    #[tokio::test]
    async fn test_start_listing_reports_errors() {
        let temp = TempDir::new().unwrap();

        let mut rx = start_listing(AlbumConfig::new(temp.path()), AlbumPath::parse("/missing/"));
        let ListingEvent::Complete { result, .. } = rx.recv().await.unwrap();

        assert!(matches!(result, Err(ListingError::NotFound { .. })));
    }
}
