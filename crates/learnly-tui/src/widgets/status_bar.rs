//! Bottom status bar: key hints, plus the transient selection flash.

use learnly_app::state::StatusFlash;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette::ThemePalette, styles};

const KEY_HINTS: &str = "1-3 pick a course  \u{2191}/\u{2193}+enter choose  t theme  q quit";

pub struct StatusBar<'a> {
    status: Option<&'a StatusFlash>,
    palette: &'a ThemePalette,
}

impl<'a> StatusBar<'a> {
    pub fn new(status: Option<&'a StatusFlash>, palette: &'a ThemePalette) -> Self {
        Self { status, palette }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        // A flash takes over the whole bar until it expires.
        let line = match self.status {
            Some(flash) => Line::from(Span::styled(flash.text.as_str(), styles::accent_bold())),
            None => Line::from(Span::styled(KEY_HINTS, styles::text_muted(self.palette))),
        };
        buf.set_line(area.x + 1, area.y, &line, area.width.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette;

    fn buf_text(buf: &Buffer, area: Rect) -> String {
        let mut text = String::new();
        for x in 0..area.width {
            if let Some(cell) = buf.cell((x, 0)) {
                text.push_str(cell.symbol());
            }
        }
        text
    }

    #[test]
    fn test_hints_shown_when_no_flash() {
        let area = Rect::new(0, 0, 70, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new(None, &palette::DARK).render(area, &mut buf);
        assert!(buf_text(&buf, area).contains("t theme"));
    }

    #[test]
    fn test_flash_replaces_hints() {
        let flash = StatusFlash {
            text: "Great choice! We'll follow this course in the roadmap: HTML Fundamentals"
                .to_string(),
            expires_at_ms: 5_000,
        };
        let area = Rect::new(0, 0, 90, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new(Some(&flash), &palette::DARK).render(area, &mut buf);
        let text = buf_text(&buf, area);
        assert!(text.contains("Great choice!"));
        assert!(!text.contains("t theme"));
    }
}
