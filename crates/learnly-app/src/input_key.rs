//! Backend-independent key representation
//!
//! The TUI crate converts crossterm key events into this enum so the key
//! handlers (and their tests) never touch terminal types.

/// Keys the application reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    CharCtrl(char),
    Enter,
    Esc,
    Up,
    Down,
}
