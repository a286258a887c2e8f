//! Hero stats row with the animated counters.

use learnly_app::state::StatCounter;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette::ThemePalette, styles};

pub struct StatsRow<'a> {
    counters: &'a [StatCounter],
    palette: &'a ThemePalette,
}

impl<'a> StatsRow<'a> {
    pub fn new(counters: &'a [StatCounter], palette: &'a ThemePalette) -> Self {
        Self { counters, palette }
    }
}

impl Widget for StatsRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.palette);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.counters.is_empty() || inner.height < 2 || inner.width == 0 {
            return;
        }

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, self.counters.len() as u32);
                self.counters.len()
            ])
            .split(inner);

        // Vertically center the two text rows inside the band.
        let pad = inner.height.saturating_sub(2) / 2;
        for (counter, column) in self.counters.iter().zip(columns.iter()) {
            let cell = Rect {
                y: column.y + pad,
                height: column.height.saturating_sub(pad),
                ..*column
            };
            let lines = vec![
                Line::from(Span::styled(
                    counter.anim.rendered().to_string(),
                    styles::stat_value(self.palette),
                )),
                Line::from(Span::styled(
                    counter.label,
                    styles::text_muted(self.palette),
                )),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .render(cell, buf);
        }
    }
}
