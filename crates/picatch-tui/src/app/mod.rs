//! Main application state and logic.

mod constants;
mod listing;
pub(crate) mod navigation;
mod render;
pub mod state;

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use crossterm::terminal::SetTitle;
use futures::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;

use picatch_core::{
    AlbumConfig, AlbumController, ListingSnapshot, MemoryHistory, Navigator, PathChange,
    SelectionAction,
};

use crate::event::KeyAction;
use crate::theme::Theme;

use self::constants::{DEFAULT_TITLE, MAX_SETTLE_ROUNDS, TICK_INTERVAL_MS};
use self::listing::ListingEvent;
use self::navigation::{AlbumCursor, ListNavigator};
use self::render::{RenderContext, render_app};
use self::state::{AppMode, UserSettings};

/// Application result type.
pub type AppResult<T> = color_eyre::Result<T>;

/// Main application state.
pub struct App {
    /// Photos root and listing options.
    config: AlbumConfig,
    /// Navigation history; its current entry is the location.
    history: MemoryHistory,
    /// Active-file state of the mounted album view.
    controller: AlbumController,
    /// List cursor, independent of the active file.
    cursor: AlbumCursor,
    /// Current mode.
    mode: AppMode,
    /// Color theme.
    theme: Theme,
    /// Show the details panel.
    show_details: bool,
    /// Receiver for the in-flight listing, if any.
    listing_rx: Option<mpsc::Receiver<ListingEvent>>,
    /// Reason the last listing failed.
    listing_error: Option<String>,
    /// Animation frame counter.
    tick: u64,
    /// Terminal title for the current location.
    title: String,
    /// Title changed since it was last written to the terminal.
    title_dirty: bool,
    /// Flag indicating UI needs to be redrawn.
    needs_redraw: bool,
    /// Persisted user settings.
    user_settings: UserSettings,
}

impl App {
    /// Create an application at `location` with the given settings.
    pub fn with_settings(
        config: AlbumConfig,
        location: impl Into<String>,
        user_settings: UserSettings,
    ) -> Self {
        let history = MemoryHistory::new(location);
        let controller = AlbumController::new(history.components(), config.root_view);

        let mut app = Self {
            config,
            history,
            controller,
            cursor: AlbumCursor::default(),
            mode: AppMode::default(),
            theme: Theme::from_variant(user_settings.theme),
            show_details: user_settings.show_details,
            listing_rx: None,
            listing_error: None,
            tick: 0,
            title: String::new(),
            title_dirty: false,
            needs_redraw: true,
            user_settings,
        };
        app.update_title();
        app
    }

    /// Run the application with async event loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> AppResult<()> {
        self.start();

        let period = Duration::from_millis(TICK_INTERVAL_MS);
        let mut interval = tokio::time::interval(period);
        let mut events = EventStream::new();

        while self.mode != AppMode::Quit {
            if self.title_dirty {
                crossterm::execute!(std::io::stdout(), SetTitle(&self.title))?;
                self.title_dirty = false;
            }

            if self.needs_redraw {
                terminal.draw(|frame| self.render(frame))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased;

                Some(Ok(event)) = events.next() => {
                    if let Event::Key(key_event) = event {
                        self.handle_key_event(key_event);
                    }

                    // Drain any additional pending events
                    while self.mode != AppMode::Quit && crossterm::event::poll(Duration::ZERO)? {
                        if let Ok(Event::Key(key_event)) = crossterm::event::read() {
                            self.handle_key_event(key_event);
                        }
                    }
                    self.needs_redraw = true;
                }

                Some(event) = async {
                    if let Some(rx) = &mut self.listing_rx {
                        rx.recv().await
                    } else {
                        std::future::pending().await
                    }
                } => {
                    self.handle_listing_event(event);
                    self.needs_redraw = true;
                }

                _ = interval.tick() => {
                    if self.controller.is_loading() {
                        self.tick = self.tick.wrapping_add(1);
                        self.needs_redraw = true;
                    }
                }
            }
        }

        Ok(())
    }

    /// Fetch the initial album and settle the initial location.
    fn start(&mut self) {
        self.start_listing();
        self.settle();
    }

    fn render(&mut self, frame: &mut Frame) {
        let location = self.history.location().to_string();
        let ctx = RenderContext {
            mode: self.mode,
            theme: &self.theme,
            location: &location,
            can_go_back: self.history.can_go_back(),
            can_go_forward: self.history.can_go_forward(),
            controller: &self.controller,
            show_details: self.show_details,
            tick: self.tick,
            listing_error: self.listing_error.as_deref(),
        };
        render_app(&ctx, &mut self.cursor, frame.area(), frame.buffer_mut());
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        if key_event.kind == KeyEventKind::Press {
            self.handle_action(KeyAction::from_key_event(key_event));
        }
    }

    fn handle_action(&mut self, action: KeyAction) {
        if self.mode == AppMode::Help {
            match action {
                KeyAction::ForceQuit => self.mode = AppMode::Quit,
                KeyAction::ToggleHelp | KeyAction::ClearSelection | KeyAction::Quit => {
                    self.mode = AppMode::Normal;
                }
                _ => {}
            }
            return;
        }

        match action {
            KeyAction::Quit | KeyAction::ForceQuit => self.mode = AppMode::Quit,
            KeyAction::ToggleHelp => self.mode = AppMode::Help,

            KeyAction::MoveUp => self.cursor.move_up(1),
            KeyAction::MoveDown => self.cursor.move_down(1),
            KeyAction::PageUp => self.cursor.page_up(),
            KeyAction::PageDown => self.cursor.page_down(),
            KeyAction::JumpToTop => self.cursor.jump_to_top(),
            KeyAction::JumpToBottom => self.cursor.jump_to_bottom(),

            KeyAction::Activate => self.activate_under_cursor(),
            KeyAction::ClearSelection => {
                self.controller.dispatch(SelectionAction::SetName(String::new()));
                self.settle();
            }
            KeyAction::NextPhoto => self.step_photo(true),
            KeyAction::PrevPhoto => self.step_photo(false),

            KeyAction::ParentAlbum => self.go_to_parent(),
            KeyAction::HistoryBack => {
                if self.history.back().is_some() {
                    self.settle();
                }
            }
            KeyAction::HistoryForward => {
                if self.history.forward().is_some() {
                    self.settle();
                }
            }

            KeyAction::ToggleDetails => {
                self.show_details = !self.show_details;
                self.user_settings.show_details = self.show_details;
                self.save_settings();
            }
            KeyAction::ToggleTheme => {
                self.theme = self.theme.toggle();
                self.user_settings.theme = self.theme.variant;
                self.save_settings();
            }
            KeyAction::Refresh => self.refresh(),

            KeyAction::None => {}
        }
    }

    /// Open the entry under the cursor.
    ///
    /// A photo becomes the active file. A sub-album is navigated into and
    /// never becomes the active file.
    fn activate_under_cursor(&mut self) {
        let index = self.cursor.selected();
        let Some(entry) = self.controller.files().get(index) else {
            return;
        };

        if entry.is_dir() {
            let album = self.controller.components().album.join(&entry.name);
            self.history.push(album.location());
        } else {
            self.controller.dispatch(SelectionAction::SetIndex(index));
        }
        self.settle();
    }

    /// Activate the neighbouring photo of the active one.
    fn step_photo(&mut self, forward: bool) {
        let Some(active) = self.controller.selection().index() else {
            return;
        };

        let files = self.controller.files();
        let target = if forward {
            files
                .iter()
                .enumerate()
                .skip(active + 1)
                .find(|(_, entry)| !entry.is_dir())
                .map(|(index, _)| index)
        } else {
            files
                .iter()
                .enumerate()
                .take(active)
                .rev()
                .find(|(_, entry)| !entry.is_dir())
                .map(|(index, _)| index)
        };

        if let Some(index) = target {
            self.controller.dispatch(SelectionAction::SetIndex(index));
            self.settle();
        }
    }

    fn go_to_parent(&mut self) {
        let Some(parent) = self.controller.components().album.parent() else {
            return;
        };

        let location = if self.config.root_view && parent.is_root() {
            "/".to_string()
        } else {
            parent.location()
        };
        self.history.push(location);
        self.settle();
    }

    /// Bring the album view in line with the current location.
    ///
    /// Observes the location, then writes the canonical location back. The
    /// push is observed on the next round, which then finds nothing to push.
    fn settle(&mut self) {
        for _ in 0..MAX_SETTLE_ROUNDS {
            match self.controller.observe_path(self.history.components()) {
                PathChange::Unchanged => {}
                PathChange::FileChanged => self.update_title(),
                PathChange::AlbumChanged => {
                    self.cursor = AlbumCursor::default();
                    self.listing_error = None;
                    self.start_listing();
                    self.update_title();
                }
            }

            if !self.controller.sync(&mut self.history) {
                break;
            }
        }
        self.sync_cursor();
    }

    /// Keep the cursor inside the listing and on the active file.
    fn sync_cursor(&mut self) {
        self.cursor.set_count(self.controller.files().len());
        if let Some(index) = self.controller.selection().index() {
            self.cursor.set_selected(index);
        }
    }

    /// Start listing the current album. Replacing the receiver drops any
    /// result still pending for a previous album.
    fn start_listing(&mut self) {
        let album = self.controller.components().album.clone();
        self.listing_rx = Some(listing::start_listing(self.config.clone(), album));
    }

    /// Refetch the current album, keeping its entries visible meanwhile.
    fn refresh(&mut self) {
        let snapshot = ListingSnapshot {
            is_loading: true,
            error: false,
            ..self.controller.listing().clone()
        };
        self.controller.receive_listing(snapshot);
        self.listing_error = None;
        self.start_listing();
    }

    fn handle_listing_event(&mut self, event: ListingEvent) {
        match event {
            ListingEvent::Complete { album, result } => {
                let (snapshot, error) = match result {
                    Ok(listing) => (ListingSnapshot::loaded(listing), None),
                    Err(err) => {
                        tracing::warn!(album = %album, error = %err, "listing failed");
                        (ListingSnapshot::failed(album), Some(err.to_string()))
                    }
                };

                if self.controller.receive_listing(snapshot) {
                    self.listing_rx = None;
                    self.listing_error = error;
                    self.settle();
                }
            }
        }
    }

    fn update_title(&mut self) {
        self.title = self
            .controller
            .components()
            .title()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        self.title_dirty = true;
    }

    fn save_settings(&self) {
        if let Err(err) = self.user_settings.save() {
            tracing::warn!(error = %err, "could not save settings");
        }
    }
}
