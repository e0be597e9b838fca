//! Application rendering.

use chrono::Utc;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, StatefulWidget, Widget};

use picatch_core::{AlbumController, SelectionStatus};

use crate::theme::Theme;
use crate::ui::{
    AlbumView, AppLayout, HelpOverlay, LoadingBar, format_relative_time, format_size, truncate,
};

use super::navigation::AlbumCursor;
use super::state::AppMode;

/// EXIF tags shown in the details panel, with their labels.
const EXIF_DETAILS: &[(&str, &str)] = &[
    ("Model", "Camera"),
    ("LensModel", "Lens"),
    ("ExposureTime", "Exposure"),
    ("FNumber", "Aperture"),
    ("PhotographicSensitivity", "ISO"),
    ("DateTimeOriginal", "Taken"),
];

/// Render context containing all the state needed for rendering.
pub struct RenderContext<'a> {
    pub mode: AppMode,
    pub theme: &'a Theme,
    pub location: &'a str,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub controller: &'a AlbumController,
    pub show_details: bool,
    pub tick: u64,
    pub listing_error: Option<&'a str>,
}

/// Main render function for the application.
pub fn render_app(ctx: &RenderContext, cursor: &mut AlbumCursor, area: Rect, buf: &mut Buffer) {
    let base_style = Style::default()
        .bg(ctx.theme.background)
        .fg(ctx.theme.foreground);
    buf.set_style(area, base_style);

    let layout = AppLayout::new(area, ctx.show_details);

    render_header(ctx, layout.header, buf);
    render_status_line(ctx, layout.progress, buf);
    render_album(ctx, cursor, layout.main, buf);
    if let Some(details) = layout.details {
        render_details(ctx, details, buf);
    }
    render_footer(ctx, layout.footer, buf);

    if ctx.mode == AppMode::Help {
        HelpOverlay::new(ctx.theme).render(area, buf);
    }
}

fn render_header(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let title = Span::styled(" picatch ", ctx.theme.title.add_modifier(Modifier::BOLD));
    let location = Span::styled(format!(" {} ", ctx.location), ctx.theme.header);

    let root_badge = if ctx.controller.is_root_view() {
        Span::styled(
            " root ",
            Style::default()
                .fg(ctx.theme.background)
                .bg(ctx.theme.info),
        )
    } else {
        Span::raw("")
    };

    let line = Line::from(vec![title, Span::raw(" "), location, root_badge]);

    Paragraph::new(line)
        .style(ctx.theme.header)
        .render(area, buf);
}

/// Loading bar while a fetch is pending, error line after a failed one.
fn render_status_line(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    if ctx.controller.is_loading() {
        LoadingBar::new(ctx.tick)
            .segment_style(ctx.theme.progress_bar)
            .track_style(ctx.theme.progress_bg)
            .render(area, buf);
    } else if ctx.controller.has_error() {
        let mut spans = vec![Span::styled(
            " Failed to fetch images",
            Style::default()
                .fg(ctx.theme.error)
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(reason) = ctx.listing_error {
            spans.push(Span::styled(
                format!(": {reason}"),
                Style::default().fg(ctx.theme.muted),
            ));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

fn render_album(ctx: &RenderContext, cursor: &mut AlbumCursor, area: Rect, buf: &mut Buffer) {
    let album = &ctx.controller.components().album;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(ctx.theme.border)
        .title(format!(" {album} "))
        .title_style(ctx.theme.title);

    let files = ctx.controller.files();
    if files.is_empty() && !ctx.controller.is_loading() && !ctx.controller.has_error() {
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(Line::styled(
            "No photos in this album",
            Style::default().fg(ctx.theme.muted),
        ))
        .render(inner, buf);
        return;
    }

    AlbumView::new(files, ctx.controller.selection(), ctx.theme)
        .block(block)
        .render(area, buf, cursor);
}

fn render_details(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(ctx.theme.border)
        .title(" Details ")
        .title_style(ctx.theme.title);

    let inner = block.inner(area);
    block.render(area, buf);

    let selection = ctx.controller.selection();
    let width = inner.width.saturating_sub(1) as usize;

    let mut lines = match selection.status() {
        SelectionStatus::Empty => vec![Line::styled(
            "No photo selected",
            Style::default().fg(ctx.theme.muted),
        )],
        SelectionStatus::Unresolved => vec![
            Line::from(Span::styled(
                truncate(selection.name(), width),
                ctx.theme.title,
            )),
            Line::raw(""),
            Line::styled("Not in this album", Style::default().fg(ctx.theme.warning)),
        ],
        SelectionStatus::Resolved(index) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    truncate(selection.name(), width),
                    ctx.theme.title,
                )),
                Line::raw(""),
                Line::from(vec![
                    Span::styled("Position: ", ctx.theme.help_desc),
                    Span::raw(format!("{} of {}", index + 1, ctx.controller.files().len())),
                ]),
            ];
            if let Some(entry) = ctx.controller.active_entry() {
                lines.push(Line::from(vec![
                    Span::styled("Size: ", ctx.theme.help_desc),
                    Span::raw(format_size(entry.size)),
                ]));
                if let Some(modified) = entry.modified {
                    lines.push(Line::from(vec![
                        Span::styled("Modified: ", ctx.theme.help_desc),
                        Span::raw(format_relative_time(modified, Utc::now())),
                    ]));
                }
                if let Some(dimensions) = entry.dimensions {
                    lines.push(Line::from(vec![
                        Span::styled("Dimensions: ", ctx.theme.help_desc),
                        Span::raw(format!("{}x{}", dimensions.width, dimensions.height)),
                    ]));
                }
                for (tag, label) in EXIF_DETAILS {
                    if let Some(value) = entry.exif_tag(tag) {
                        let label = format!("{label}: ");
                        let value =
                            truncate(value.trim_matches('"'), width.saturating_sub(label.len()));
                        lines.push(Line::from(vec![
                            Span::styled(label, ctx.theme.help_desc),
                            Span::raw(value),
                        ]));
                    }
                }
            }
            lines
        }
    };

    lines.push(Line::raw(""));
    lines.push(Line::styled("Location:", ctx.theme.help_desc));
    lines.push(Line::raw(truncate(&ctx.controller.canonical_path(), width)));

    Paragraph::new(lines).render(inner, buf);
}

fn render_footer(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let mut keys: Vec<(&str, &str)> = vec![("j/k", "Nav"), ("Enter", "Open")];
    if !ctx.controller.selection().is_empty() {
        keys.push(("n/p", "Next/Prev"));
        keys.push(("Esc", "Close"));
    }
    if !ctx.controller.components().album.is_root() {
        keys.push(("h", "Up"));
    }
    if ctx.can_go_back {
        keys.push(("[", "Back"));
    }
    if ctx.can_go_forward {
        keys.push(("]", "Fwd"));
    }
    keys.extend([("?", "Help"), ("q", "Quit")]);

    let mut spans: Vec<Span> = keys
        .iter()
        .flat_map(|(key, desc)| {
            vec![
                Span::styled(format!(" {key} "), ctx.theme.help_key),
                Span::styled(format!("{desc} "), ctx.theme.help_desc),
            ]
        })
        .collect();

    match ctx.controller.selection().status() {
        SelectionStatus::Empty => {}
        SelectionStatus::Unresolved => spans.push(Span::styled(
            format!(" {} (unresolved) ", ctx.controller.selection().name()),
            Style::default().fg(ctx.theme.warning),
        )),
        SelectionStatus::Resolved(index) => spans.push(Span::styled(
            format!(" {}/{} ", index + 1, ctx.controller.files().len()),
            Style::default().fg(ctx.theme.success),
        )),
    }

    Paragraph::new(Line::from(spans))
        .style(ctx.theme.footer)
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use picatch_core::{
        AlbumPath, FileEntry, ImageDimensions, Listing, ListingSnapshot, PathComponents,
        SelectionAction,
    };

    fn screen(buf: &Buffer) -> String {
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(controller: &AlbumController, listing_error: Option<&str>) -> String {
        let theme = Theme::dark();
        let location = controller.canonical_path();
        let ctx = RenderContext {
            mode: AppMode::Normal,
            theme: &theme,
            location: &location,
            can_go_back: true,
            can_go_forward: false,
            controller,
            show_details: true,
            tick: 0,
            listing_error,
        };
        let mut cursor = AlbumCursor::new(controller.files().len());
        let area = Rect::new(0, 0, 100, 24);
        let mut buf = Buffer::empty(area);
        render_app(&ctx, &mut cursor, area, &mut buf);
        screen(&buf)
    }

    #[test]
    fn test_render_resolved_selection() {
        let album = AlbumPath::parse("/2019/");
        let mut controller = AlbumController::new(PathComponents::new(album.clone(), ""), false);
        controller.receive_listing(ListingSnapshot::loaded(Listing {
            album,
            files: vec![FileEntry::file("a.jpg"), FileEntry::file("c.jpg")],
        }));
        controller.dispatch(SelectionAction::SetIndex(1));

        let text = draw(&controller, None);
        assert!(text.contains("/2019/"));
        assert!(text.contains("▶ c.jpg"));
        assert!(text.contains("2 of 2"));
        assert!(text.contains("/album/2019/c.jpg"));
    }

    #[test]
    fn test_render_error_line() {
        let album = AlbumPath::parse("/gone/");
        let mut controller = AlbumController::new(PathComponents::new(album.clone(), "x.jpg"), false);
        controller.receive_listing(ListingSnapshot::failed(album));

        let text = draw(&controller, Some("album not found"));
        assert!(text.contains("Failed to fetch images: album not found"));
        assert!(text.contains("Not in this album"));
    }

    #[test]
    fn test_render_photo_metadata() {
        let album = AlbumPath::parse("/2019/");
        let exif = BTreeMap::from([
            ("Model".to_string(), "\"X100V\"".to_string()),
            ("FNumber".to_string(), "f/2".to_string()),
            ("Orientation".to_string(), "row 0 at top".to_string()),
        ]);
        let photo = FileEntry::file("beach.jpg")
            .with_dimensions(ImageDimensions {
                width: 6240,
                height: 4160,
            })
            .with_exif(exif);
        let mut controller = AlbumController::new(PathComponents::new(album.clone(), ""), false);
        controller.receive_listing(ListingSnapshot::loaded(Listing {
            album,
            files: vec![FileEntry::file("a.jpg"), photo],
        }));

        let text = draw(&controller, None);
        assert!(!text.contains("Dimensions:"));

        controller.dispatch(SelectionAction::SetIndex(1));
        let text = draw(&controller, None);
        assert!(text.contains("Dimensions: 6240x4160"));
        assert!(text.contains("Camera: X100V"));
        assert!(text.contains("Aperture: f/2"));
        assert!(!text.contains("row 0 at top"));
        assert!(text.contains("[ Back"));
        assert!(!text.contains("] Fwd"));
    }
}
