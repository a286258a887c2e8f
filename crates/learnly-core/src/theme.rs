//! Theme mode state machine.
//!
//! Two states, no intermediate. The palettes themselves live in the TUI
//! crate; this is only the state holder with its single transition.

/// Two-value color theme for the whole screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Initial state.
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Flip between the two modes unconditionally. Every registered trigger
    /// (pointer or key) funnels into this one transition.
    pub fn toggle(&mut self) {
        *self = match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        };
    }

    pub fn is_light(self) -> bool {
        self == ThemeMode::Light
    }
}
