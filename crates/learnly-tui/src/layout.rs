//! Screen layout

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Terminals at or above this many rows get the roomier hero band.
const TALL_TERMINAL_ROWS: u16 = 34;

const HERO_HEIGHT_COMPACT: u16 = 4;
const HERO_HEIGHT_TALL: u16 = 6;

/// Top-level screen regions.
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub hero: Rect,
    pub courses: Rect,
    pub panel: Rect,
    pub status_bar: Rect,
}

/// Split the terminal into the landing-page regions.
///
/// The hero band compresses on short terminals so the course panel keeps
/// enough room for its checklist.
pub fn create(area: Rect) -> ScreenAreas {
    let hero_height = if area.height >= TALL_TERMINAL_ROWS {
        HERO_HEIGHT_TALL
    } else {
        HERO_HEIGHT_COMPACT
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // header
            Constraint::Length(hero_height), // hero stats
            Constraint::Min(8),              // main content
            Constraint::Length(1),           // status bar
        ])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[2]);

    ScreenAreas {
        header: rows[0],
        hero: rows[1],
        courses: main[0],
        panel: main[1],
        status_bar: rows[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_covers_full_height() {
        let areas = create(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.hero.height, HERO_HEIGHT_COMPACT);
        assert_eq!(areas.status_bar.height, 1);
        let total =
            areas.header.height + areas.hero.height + areas.courses.height + areas.status_bar.height;
        assert_eq!(total, 24);
    }

    #[test]
    fn test_tall_terminal_gets_padded_hero() {
        let areas = create(Rect::new(0, 0, 80, 40));
        assert_eq!(areas.hero.height, HERO_HEIGHT_TALL);
    }

    #[test]
    fn test_main_split_side_by_side() {
        let areas = create(Rect::new(0, 0, 100, 30));
        assert_eq!(areas.courses.y, areas.panel.y);
        assert!(areas.panel.width > areas.courses.width);
        assert_eq!(areas.courses.width + areas.panel.width, 100);
    }
}
