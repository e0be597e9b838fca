use picatch_core::{
    AlbumController, AlbumPath, FileEntry, Listing, ListingSnapshot, MemoryHistory, Navigator,
    PathChange, PathComponents, SelectionAction, SelectionState, SelectionStatus, canonical_path,
};

fn files(names: &[&str]) -> Vec<FileEntry> {
    names.iter().map(|name| FileEntry::file(*name)).collect()
}

fn snapshot(album: &str, names: &[&str]) -> ListingSnapshot {
    ListingSnapshot::loaded(Listing {
        album: AlbumPath::parse(album),
        files: files(names),
    })
}

/// Navigator that only counts pushes.
struct Recorder {
    location: String,
    pushed: Vec<String>,
}

impl Recorder {
    fn at(location: &str) -> Self {
        Self {
            location: location.to_string(),
            pushed: Vec::new(),
        }
    }
}

impl Navigator for Recorder {
    fn location(&self) -> &str {
        &self.location
    }

    fn push(&mut self, path: String) {
        self.location = path.clone();
        self.pushed.push(path);
    }
}

#[test]
fn test_reconciliation_resolves_deep_link() {
    let state = SelectionState::seeded("b.jpg").reconcile(&files(&["a.jpg", "b.jpg", "c.jpg"]));
    assert_eq!(state.name(), "b.jpg");
    assert_eq!(state.index(), Some(1));
}

#[test]
fn test_reconciliation_miss_is_terminal() {
    let state = SelectionState::seeded("zzz.jpg").reconcile(&files(&["a.jpg", "b.jpg"]));
    assert_eq!(state.name(), "zzz.jpg");
    assert_eq!(state.index(), None);
    assert_eq!(state.reconcile(&files(&["a.jpg", "b.jpg"])), state);
}

#[test]
fn test_explicit_selection_paths() {
    let state = SelectionState::empty().apply(
        SelectionAction::SetIndex(2),
        &files(&["a.jpg", "b.jpg", "c.jpg"]),
    );
    assert_eq!(state.name(), "c.jpg");
    assert_eq!(state.index(), Some(2));

    let album = AlbumPath::parse("/trips/rome/");
    assert_eq!(canonical_path(&state, &album, false), "/album/trips/rome/c.jpg");
    assert_eq!(canonical_path(&state, &album, true), "/c.jpg");
}

#[test]
fn test_no_navigation_when_location_matches() {
    let mut controller =
        AlbumController::new(PathComponents::parse("/album/trips/c.jpg"), false);
    controller.receive_listing(snapshot("/trips/", &["a.jpg", "b.jpg", "c.jpg"]));

    let mut nav = Recorder::at("/album/trips/c.jpg");
    assert!(!controller.sync(&mut nav));
    assert!(nav.pushed.is_empty());
    assert_eq!(controller.selection().status(), SelectionStatus::Resolved(2));
}

#[test]
fn test_sync_twice_pushes_once() {
    let mut controller = AlbumController::new(PathComponents::parse("/album/trips/"), false);
    controller.receive_listing(snapshot("/trips/", &["a.jpg", "b.jpg"]));
    controller.dispatch(SelectionAction::SetIndex(1));

    let mut nav = Recorder::at("/album/trips/");
    controller.sync(&mut nav);
    controller.sync(&mut nav);
    assert_eq!(nav.pushed, vec!["/album/trips/b.jpg".to_string()]);
}

#[test]
fn test_late_listing_for_previous_album_is_ignored() {
    let mut history = MemoryHistory::new("/album/trips/");
    let mut controller = AlbumController::new(history.components(), false);

    // Navigate into a sub-album before the first listing arrives
    history.push(AlbumPath::parse("/trips/rome/").location());
    assert_eq!(
        controller.observe_path(history.components()),
        PathChange::AlbumChanged
    );

    assert!(!controller.receive_listing(snapshot("/trips/", &["rome/", "a.jpg"])));
    assert!(controller.files().is_empty());
    assert!(controller.is_loading());

    assert!(controller.receive_listing(snapshot("/trips/rome/", &["colosseum.jpg"])));
    assert_eq!(controller.files().len(), 1);
    assert!(!controller.sync(&mut history));
}

#[test]
fn test_selection_then_listing_refresh_keeps_name() {
    let mut controller = AlbumController::new(PathComponents::parse("/album/"), false);
    controller.receive_listing(snapshot("/", &["a.jpg", "b.jpg"]));
    controller.dispatch(SelectionAction::SetIndex(1));

    controller.receive_listing(snapshot("/", &["0.jpg", "a.jpg", "b.jpg"]));
    assert_eq!(controller.selection().index(), Some(2));
    assert_eq!(
        controller.active_entry().map(|entry| entry.name.as_str()),
        Some("b.jpg")
    );
}

#[test]
fn test_full_loop_converges() {
    let mut history = MemoryHistory::new("/album/trips/b.jpg");
    let mut controller = AlbumController::new(history.components(), false);

    // Loop a few rounds as a UI would, feeding observations back in
    for _ in 0..3 {
        controller.sync(&mut history);
        controller.observe_path(history.components());
    }
    controller.receive_listing(snapshot("/trips/", &["a.jpg", "b.jpg"]));
    for _ in 0..3 {
        controller.sync(&mut history);
        controller.observe_path(history.components());
    }

    assert_eq!(history.push_count(), 0);
    assert_eq!(controller.selection().index(), Some(1));
}
