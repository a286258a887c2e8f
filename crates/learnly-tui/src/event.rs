//! Terminal event polling

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use learnly_app::message::Message;
use learnly_app::InputKey;
use learnly_core::prelude::*;

/// Monotonic clock for animation timestamps, anchored at startup.
#[derive(Debug, Clone, Copy)]
pub struct AppClock {
    origin: Instant,
}

impl AppClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds since startup; non-decreasing.
    pub fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

impl Default for AppClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        _ => None, // Unsupported keys ignored
    }
}

/// Poll for terminal events with a frame-cadence timeout.
///
/// Keys are accepted on press only and pointer events on left button-down
/// only, so a single logical input can never double-fire a toggle. A poll
/// timeout produces the tick that drives animations; its timestamp comes
/// from the monotonic [`AppClock`].
pub fn poll(clock: &AppClock, frame_budget: Duration) -> Result<Option<Message>> {
    if event::poll(frame_budget)? {
        match event::read()? {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                Ok(key_event_to_input(key).map(Message::Key))
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                Ok(Some(Message::Click {
                    x: mouse.column,
                    y: mouse.row,
                }))
            }
            _ => Ok(None),
        }
    } else {
        Ok(Some(Message::Tick {
            now_ms: clock.now_ms(),
        }))
    }
}
