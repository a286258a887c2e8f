//! Course list with keyboard focus and clickable rows.

use learnly_app::state::HitRegion;
use learnly_core::course::COURSE_CATALOG;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette::ThemePalette, styles};

pub struct CourseList<'a> {
    focus: usize,
    palette: &'a ThemePalette,
}

impl<'a> CourseList<'a> {
    pub fn new(focus: usize, palette: &'a ThemePalette) -> Self {
        Self { focus, palette }
    }
}

impl Widget for CourseList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.palette).title(Span::styled(
            " Courses ",
            styles::text_main(self.palette),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        for (index, course) in COURSE_CATALOG.iter().enumerate() {
            let y = inner.y + index as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let focused = index == self.focus;
            let marker = if focused { "\u{25b8} " } else { "  " };
            let line = Line::from(vec![
                Span::styled(marker, styles::accent()),
                Span::styled(format!("[{}] ", index + 1), styles::accent()),
                Span::styled(
                    course.name,
                    if focused {
                        styles::stat_value(self.palette)
                    } else {
                        styles::text_main(self.palette)
                    },
                ),
            ]);
            buf.set_line(inner.x + 1, y, &line, inner.width.saturating_sub(1));
        }
    }
}

/// Hit regions matching the course rows `CourseList` renders into `area`.
///
/// Rows that would fall outside the card's interior are omitted.
pub fn course_regions(area: Rect) -> Vec<(HitRegion, &'static str)> {
    if area.width < 3 || area.height < 3 {
        return Vec::new();
    }
    let interior_rows = area.height - 2;
    COURSE_CATALOG
        .iter()
        .enumerate()
        .take(interior_rows as usize)
        .map(|(index, course)| {
            (
                HitRegion::new(area.x + 1, area.y + 1 + index as u16, area.width - 2, 1),
                course.name,
            )
        })
        .collect()
}
