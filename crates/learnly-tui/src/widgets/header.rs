//! Header bar with the logo and tagline.
//!
//! The logo doubles as the pointer trigger for the theme toggle; its hit
//! region is computed by [`logo_region`] so the view can record it for the
//! click dispatcher.

use learnly_app::state::HitRegion;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette::ThemePalette, styles};

/// Logo text shown at the left edge of the header.
pub const LOGO_TEXT: &str = "\u{25c6} Learnly";

const TAGLINE: &str = "Learn by building, one module at a time";
const TOGGLE_HINT: &str = "click logo or press t to switch theme";

pub struct Header<'a> {
    palette: &'a ThemePalette,
}

impl<'a> Header<'a> {
    pub fn new(palette: &'a ThemePalette) -> Self {
        Self { palette }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.palette);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = Line::from(vec![
            Span::styled(LOGO_TEXT, styles::accent_bold()),
            Span::raw("  "),
            Span::styled(TAGLINE, styles::text_muted(self.palette)),
        ]);
        buf.set_line(inner.x + 1, inner.y, &left, inner.width.saturating_sub(1));

        // Right-aligned toggle hint, only when there is room after the logo.
        let hint_width = TOGGLE_HINT.len() as u16;
        let left_width = left.width() as u16;
        if inner.width > left_width + hint_width + 4 {
            let x = inner.x + inner.width - hint_width - 1;
            let hint = Line::from(Span::styled(
                TOGGLE_HINT,
                styles::text_muted(self.palette),
            ));
            buf.set_line(x, inner.y, &hint, hint_width);
        }
    }
}

/// Hit region of the logo inside a rendered header area.
///
/// Must match the position `render` draws the logo at: one cell inside the
/// border, one further cell of padding.
pub fn logo_region(header: Rect) -> HitRegion {
    HitRegion::new(
        header.x + 2,
        header.y + 1,
        LOGO_TEXT.chars().count() as u16,
        1,
    )
}
