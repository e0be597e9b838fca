//! Album list widget.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, StatefulWidget, Widget};

use picatch_core::{FileEntry, SelectionState};

use crate::app::navigation::{AlbumCursor, ListNavigator};
use crate::theme::Theme;
use crate::ui::{format_size, truncate};

/// Album list widget: sub-albums and photos, with the active photo marked.
pub struct AlbumView<'a> {
    files: &'a [FileEntry],
    selection: &'a SelectionState,
    theme: &'a Theme,
    block: Option<Block<'a>>,
}

impl<'a> AlbumView<'a> {
    /// Create a new album view.
    pub fn new(files: &'a [FileEntry], selection: &'a SelectionState, theme: &'a Theme) -> Self {
        Self {
            files,
            selection,
            theme,
            block: None,
        }
    }

    /// Set the block (border) for the widget.
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl StatefulWidget for AlbumView<'_> {
    type State = AlbumCursor;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        // Handle block/border
        let inner_area = if let Some(block) = &self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };

        if inner_area.height == 0 || inner_area.width == 0 {
            return;
        }

        let viewport_height = inner_area.height as usize;
        state.ensure_visible(viewport_height);

        let start = state.offset();
        let end = (start + viewport_height).min(self.files.len());

        let size_text_width: usize = 10;
        let marker_width: usize = 2;

        for (row_idx, index) in (start..end).enumerate() {
            let entry = &self.files[index];
            let y = inner_area.y + row_idx as u16;
            let is_cursor = index == state.selected();
            let is_active = self.selection.is_active(index, entry);

            let (marker, marker_style) = if is_active {
                ("▶ ", self.theme.active)
            } else {
                ("  ", Style::default().fg(self.theme.muted))
            };

            let name_style = match (entry.is_dir(), is_active) {
                (_, true) => self.theme.active,
                (true, false) => self.theme.directory,
                (false, false) => self.theme.file,
            };

            let available_for_name = (inner_area.width as usize)
                .saturating_sub(marker_width)
                .saturating_sub(size_text_width + 1);
            let name = truncate(&entry.name, available_for_name);
            let name_padding = " ".repeat(available_for_name.saturating_sub(name.chars().count()));

            let size_text = if entry.is_dir() {
                format!("{:>10}", "album")
            } else {
                format!("{:>10}", format_size(entry.size))
            };

            let line = Line::from(vec![
                Span::styled(marker, marker_style),
                Span::styled(name, name_style),
                Span::raw(name_padding),
                Span::raw(" "),
                Span::styled(size_text, Style::default().fg(self.theme.muted)),
            ]);

            let line = if is_cursor {
                line.style(self.theme.selected)
            } else if is_active {
                line.style(Style::default().add_modifier(Modifier::BOLD))
            } else {
                line
            };

            let line_area = Rect::new(inner_area.x, y, inner_area.width, 1);
            Widget::render(line, line_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picatch_core::SelectionAction;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_render_marks_active_entry() {
        let files = vec![
            FileEntry::dir("summer"),
            FileEntry::file("a.jpg").with_size(2048),
            FileEntry::file("b.jpg"),
        ];
        let selection = SelectionState::empty().apply(SelectionAction::SetIndex(2), &files);
        let theme = Theme::dark();
        let mut cursor = AlbumCursor::new(files.len());

        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        AlbumView::new(&files, &selection, &theme).render(area, &mut buf, &mut cursor);

        assert!(row(&buf, 0).starts_with("  summer/"));
        assert!(row(&buf, 0).trim_end().ends_with("album"));
        assert!(row(&buf, 1).contains("2 KiB"));
        assert!(row(&buf, 2).starts_with("▶ b.jpg"));
    }

    #[test]
    fn test_render_scrolls_to_cursor() {
        let files: Vec<_> = (0..20).map(|i| FileEntry::file(format!("{i:02}.jpg"))).collect();
        let selection = SelectionState::empty();
        let theme = Theme::dark();
        let mut cursor = AlbumCursor::new(files.len());
        cursor.set_selected(15);

        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        AlbumView::new(&files, &selection, &theme).render(area, &mut buf, &mut cursor);

        assert_eq!(cursor.offset(), 11);
        assert!(row(&buf, 4).contains("15.jpg"));
    }
}
