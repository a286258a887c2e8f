//! Color palettes for the two theme modes.
//!
//! A palette always carries all five themed color slots plus the derived
//! backdrop gradient stops. [`for_mode`] hands out the complete palette, so
//! applying a theme can never leave a slot from the previous mode behind.

use learnly_core::theme::ThemeMode;
use ratatui::style::Color;

/// Accent used for highlights and the progress fill in both modes.
pub const ACCENT: Color = Color::Rgb(0x63, 0x66, 0xf1);

/// Completed-topic marker color in both modes.
pub const COMPLETED: Color = Color::Rgb(0x10, 0xb9, 0x81);

/// The five themed color slots plus the backdrop gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    /// Base background.
    pub bg: Color,
    /// Alternate band background (gauge troughs, stripes).
    pub bg_alt: Color,
    /// Card/panel background.
    pub card: Color,
    /// Primary text.
    pub text_main: Color,
    /// Secondary text.
    pub text_muted: Color,
    /// Full-screen backdrop gradient stops, top to bottom.
    pub backdrop: [Color; 3],
}

pub const DARK: ThemePalette = ThemePalette {
    bg: Color::Rgb(0x02, 0x06, 0x17),
    bg_alt: Color::Rgb(0x02, 0x08, 0x18),
    card: Color::Rgb(0x02, 0x06, 0x17),
    text_main: Color::Rgb(0xe5, 0xe7, 0xeb),
    text_muted: Color::Rgb(0x9c, 0xa3, 0xaf),
    backdrop: [
        Color::Rgb(0x1d, 0x24, 0x47),
        Color::Rgb(0x02, 0x06, 0x17),
        Color::Rgb(0x00, 0x00, 0x00),
    ],
};

pub const LIGHT: ThemePalette = ThemePalette {
    bg: Color::Rgb(0xf3, 0xf4, 0xf6),
    bg_alt: Color::Rgb(0xe5, 0xe7, 0xeb),
    card: Color::Rgb(0xff, 0xff, 0xff),
    text_main: Color::Rgb(0x02, 0x06, 0x17),
    text_muted: Color::Rgb(0x4b, 0x55, 0x63),
    backdrop: [
        Color::Rgb(0xe5, 0xf2, 0xff),
        Color::Rgb(0xf3, 0xf4, 0xf6),
        Color::Rgb(0xe5, 0xe7, 0xeb),
    ],
};

/// Complete palette for a theme mode.
pub fn for_mode(mode: ThemeMode) -> &'static ThemePalette {
    match mode {
        ThemeMode::Dark => &DARK,
        ThemeMode::Light => &LIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_palette_exact_values() {
        let p = for_mode(ThemeMode::Dark);
        assert_eq!(p.bg, Color::Rgb(0x02, 0x06, 0x17));
        assert_eq!(p.bg_alt, Color::Rgb(0x02, 0x08, 0x18));
        assert_eq!(p.card, Color::Rgb(0x02, 0x06, 0x17));
        assert_eq!(p.text_main, Color::Rgb(0xe5, 0xe7, 0xeb));
        assert_eq!(p.text_muted, Color::Rgb(0x9c, 0xa3, 0xaf));
        assert_eq!(
            p.backdrop,
            [
                Color::Rgb(0x1d, 0x24, 0x47),
                Color::Rgb(0x02, 0x06, 0x17),
                Color::Rgb(0x00, 0x00, 0x00),
            ]
        );
    }

    #[test]
    fn test_light_palette_exact_values() {
        let p = for_mode(ThemeMode::Light);
        assert_eq!(p.bg, Color::Rgb(0xf3, 0xf4, 0xf6));
        assert_eq!(p.bg_alt, Color::Rgb(0xe5, 0xe7, 0xeb));
        assert_eq!(p.card, Color::Rgb(0xff, 0xff, 0xff));
        assert_eq!(p.text_main, Color::Rgb(0x02, 0x06, 0x17));
        assert_eq!(p.text_muted, Color::Rgb(0x4b, 0x55, 0x63));
        assert_eq!(
            p.backdrop,
            [
                Color::Rgb(0xe5, 0xf2, 0xff),
                Color::Rgb(0xf3, 0xf4, 0xf6),
                Color::Rgb(0xe5, 0xe7, 0xeb),
            ]
        );
    }

    #[test]
    fn test_toggle_round_trip_restores_exact_palette() {
        let mut mode = ThemeMode::default();
        let initial = *for_mode(mode);
        mode.toggle();
        assert_eq!(*for_mode(mode), LIGHT);
        mode.toggle();
        assert_eq!(*for_mode(mode), initial);
    }
}
