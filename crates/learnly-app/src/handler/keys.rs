//! Key event handlers (the keyboard input adapter)
//!
//! Maps an [`InputKey`] to a message. The theme toggle key produces the same
//! `ToggleTheme` message as the pointer adapter, so the two triggers are
//! indistinguishable downstream.

use learnly_core::course::COURSE_CATALOG;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char('t' | 'T') => Some(Message::ToggleTheme),

        InputKey::Char(c @ '1'..='9') => digit_to_course(c).map(|name| Message::SelectCourse {
            name: name.to_string(),
        }),

        InputKey::Up | InputKey::Char('k') => Some(Message::PrevCourse),
        InputKey::Down | InputKey::Char('j') => Some(Message::NextCourse),

        InputKey::Enter => {
            COURSE_CATALOG
                .get(state.course_focus)
                .map(|course| Message::SelectCourse {
                    name: course.name.to_string(),
                })
        }

        _ => None,
    }
}

/// Map a digit key to the course at that 1-based catalog position.
fn digit_to_course(c: char) -> Option<&'static str> {
    let index = (c.to_digit(10)? as usize).checked_sub(1)?;
    COURSE_CATALOG.get(index).map(|course| course.name)
}
