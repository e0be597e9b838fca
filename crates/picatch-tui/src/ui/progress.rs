//! Indeterminate loading bar widget.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

/// A bar with a highlighted segment that sweeps across while loading.
pub struct LoadingBar {
    frame: u64,
    segment_style: Style,
    track_style: Style,
}

impl LoadingBar {
    /// Create a loading bar at the given animation frame.
    pub fn new(frame: u64) -> Self {
        Self {
            frame,
            segment_style: Style::default(),
            track_style: Style::default(),
        }
    }

    /// Set the style of the moving segment.
    pub fn segment_style(mut self, style: Style) -> Self {
        self.segment_style = style;
        self
    }

    /// Set the style of the track behind the segment.
    pub fn track_style(mut self, style: Style) -> Self {
        self.track_style = style;
        self
    }

    /// Columns covered by the segment for an area of `width` columns.
    pub fn segment(&self, width: u16) -> std::ops::Range<u16> {
        if width == 0 {
            return 0..0;
        }
        let width = u64::from(width);
        let len = (width / 4).max(1);
        let head = self.frame % (width + len);
        // Both ends are at most `width`, so they fit back into u16.
        head.saturating_sub(len) as u16..head.min(width) as u16
    }
}

impl Widget for LoadingBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let segment = self.segment(area.width);
        for x in 0..area.width {
            let (symbol, style) = if segment.contains(&x) {
                ("━", self.segment_style)
            } else {
                ("─", self.track_style)
            };
            buf[(area.x + x, area.y)].set_symbol(symbol).set_style(style);
        }
    }
}
