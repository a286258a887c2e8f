//! Main render/view function (View in TEA pattern)

use learnly_app::state::AppState;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::palette::{self, ThemePalette};
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Rendering is pure except for one piece of bookkeeping: the pointer hit
/// regions are refreshed to match what was just drawn, so the click
/// dispatcher always resolves against the current layout.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let theme = palette::for_mode(state.theme);

    render_backdrop(frame, area, theme);

    let areas = layout::create(area);

    frame.render_widget(widgets::Header::new(theme), areas.header);
    frame.render_widget(
        widgets::StatsRow::new(&state.counters, theme),
        areas.hero,
    );
    frame.render_widget(
        widgets::CourseList::new(state.course_focus, theme),
        areas.courses,
    );
    frame.render_widget(
        widgets::ProgressPanel::new(&state.panel, state.last_tick_ms, theme),
        areas.panel,
    );
    frame.render_widget(
        widgets::StatusBar::new(state.status.as_ref(), theme),
        areas.status_bar,
    );

    state.click_targets.logo = Some(widgets::logo_region(areas.header));
    state.click_targets.courses = widgets::course_regions(areas.courses);
}

/// Paint the full-screen backdrop gradient.
///
/// Every cell gets a background from one of the three stops, banded top to
/// bottom; the whole screen is repainted each frame, so switching themes
/// replaces the previous backdrop completely.
fn render_backdrop(frame: &mut Frame, area: Rect, theme: &ThemePalette) {
    let band = (area.height / 3).max(1);
    let mut y = area.y;
    for (index, stop) in theme.backdrop.iter().enumerate() {
        if y >= area.y + area.height {
            break;
        }
        let height = if index == theme.backdrop.len() - 1 {
            area.y + area.height - y
        } else {
            band.min(area.y + area.height - y)
        };
        let rect = Rect::new(area.x, y, area.width, height);
        frame.render_widget(Block::default().style(Style::default().bg(*stop)), rect);
        y += height;
    }
}
