//! Semantic style builders over the active palette.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette::{self, ThemePalette};

// --- Text styles ---
pub fn text_main(palette: &ThemePalette) -> Style {
    Style::default().fg(palette.text_main)
}

pub fn text_muted(palette: &ThemePalette) -> Style {
    Style::default().fg(palette.text_muted)
}

/// Bold primary text for the big stat values.
pub fn stat_value(palette: &ThemePalette) -> Style {
    text_main(palette).add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

/// Completed topic lines.
pub fn completed() -> Style {
    Style::default().fg(palette::COMPLETED)
}

// --- Containers ---
/// Rounded card container on the card background.
pub fn card_block(palette: &ThemePalette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(text_muted(palette))
        .style(Style::default().bg(palette.card))
}
