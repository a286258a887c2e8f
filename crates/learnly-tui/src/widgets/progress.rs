//! Course progress panel: title, fill gauge, and topic checklist.

use learnly_app::state::PanelState;
use learnly_core::course::CourseDescriptor;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Gauge, Widget},
};

use crate::theme::{palette, palette::ThemePalette, styles};

pub struct ProgressPanel<'a> {
    panel: &'a PanelState,
    /// Timestamp the eased fill is sampled at.
    now_ms: u64,
    palette: &'a ThemePalette,
}

impl<'a> ProgressPanel<'a> {
    pub fn new(panel: &'a PanelState, now_ms: u64, palette: &'a ThemePalette) -> Self {
        Self {
            panel,
            now_ms,
            palette,
        }
    }
}

impl Widget for ProgressPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.palette).title(Span::styled(
            " Course progress ",
            styles::text_main(self.palette),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 3 {
            return;
        }

        let title = Line::from(Span::styled(
            self.panel.title.as_str(),
            styles::stat_value(self.palette),
        ));
        buf.set_line(inner.x + 1, inner.y, &title, inner.width.saturating_sub(1));

        // Gauge row, sampled from the eased fill transition.
        if inner.height >= 2 {
            let shown = self.panel.fill.value_at(self.now_ms).clamp(0.0, 100.0);
            let gauge_area = Rect::new(
                inner.x + 1,
                inner.y + 2.min(inner.height - 1),
                inner.width.saturating_sub(2),
                1,
            );
            Gauge::default()
                .ratio(shown / 100.0)
                .label(format!("{shown:.0}%"))
                .gauge_style(Style::default().fg(palette::ACCENT).bg(self.palette.bg_alt))
                .use_unicode(true)
                .render(gauge_area, buf);
        }

        // Topic checklist below the gauge.
        for (index, topic) in self.panel.items.iter().enumerate() {
            let y = inner.y + 4 + index as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let style = if CourseDescriptor::is_completed(topic) {
                styles::completed()
            } else {
                styles::text_main(self.palette)
            };
            let line = Line::from(vec![
                Span::styled("\u{2022} ", styles::text_muted(self.palette)),
                Span::styled(topic.as_str(), style),
            ]);
            buf.set_line(inner.x + 1, y, &line, inner.width.saturating_sub(1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette;
    use learnly_app::state::FILL_TRANSITION_MS;

    fn render_panel(panel: &PanelState, now_ms: u64) -> (Buffer, Rect) {
        let area = Rect::new(0, 0, 50, 12);
        let mut buf = Buffer::empty(area);
        ProgressPanel::new(panel, now_ms, &palette::DARK).render(area, &mut buf);
        (buf, area)
    }

    fn buf_text(buf: &Buffer, area: Rect) -> String {
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                if let Some(cell) = buf.cell((x, y)) {
                    text.push_str(cell.symbol());
                }
            }
        }
        text
    }

    #[test]
    fn test_panel_shows_selected_course() {
        let mut panel = PanelState::new();
        panel.select_course("JavaScript Essentials", 0);
        let (buf, area) = render_panel(&panel, FILL_TRANSITION_MS);
        let text = buf_text(&buf, area);
        assert!(text.contains("JavaScript Essentials Module"));
        assert!(text.contains("90%"));
        assert!(text.contains("DOM Manipulation"));
    }

    #[test]
    fn test_panel_gauge_interpolates_midway() {
        let mut panel = PanelState::new();
        panel.select_course("CSS Styling Mastery", 0);
        let (buf, area) = render_panel(&panel, FILL_TRANSITION_MS / 2);
        let text = buf_text(&buf, area);
        // Halfway through the ease the gauge reads 35%, not the 70% target.
        assert!(text.contains("35%"));
        assert!(!text.contains("70%"));
    }

    #[test]
    fn test_panel_initial_state_renders_placeholders() {
        let panel = PanelState::new();
        let (buf, area) = render_panel(&panel, 0);
        let text = buf_text(&buf, area);
        assert!(text.contains("Pick a course to plan your roadmap"));
        assert!(text.contains("0%"));
    }

    #[test]
    fn test_panel_survives_tiny_area() {
        let panel = PanelState::new();
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        ProgressPanel::new(&panel, 0, &palette::LIGHT).render(area, &mut buf);
    }
}
