//! Tests for handler module

use super::*;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, HitRegion, STATUS_FLASH_MS};
use learnly_core::counter::COUNT_UP_DURATION_MS;
use learnly_core::theme::ThemeMode;

/// Drain follow-up messages the way the event loop does.
fn dispatch(state: &mut AppState, message: Message) {
    let mut next = Some(message);
    while let Some(msg) = next {
        next = update(state, msg).message;
    }
}

#[test]
fn test_quit_message_sets_quit_flag() {
    let mut state = AppState::new();
    assert!(!state.should_quit());
    update(&mut state, Message::Quit);
    assert!(state.should_quit());
}

#[test]
fn test_quit_keys_produce_quit_message() {
    let state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::Quit));
    assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::Quit));
    assert_eq!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    );
}

#[test]
fn test_theme_key_toggles_and_round_trips() {
    let mut state = AppState::new();
    dispatch(&mut state, Message::Key(InputKey::Char('t')));
    assert_eq!(state.theme, ThemeMode::Light);
    dispatch(&mut state, Message::Key(InputKey::Char('T')));
    assert_eq!(state.theme, ThemeMode::Dark);
}

#[test]
fn test_logo_click_and_theme_key_are_indistinguishable() {
    let mut via_key = AppState::new();
    dispatch(&mut via_key, Message::Key(InputKey::Char('t')));

    let mut via_click = AppState::new();
    via_click.click_targets.logo = Some(HitRegion::new(2, 1, 9, 1));
    dispatch(&mut via_click, Message::Click { x: 4, y: 1 });

    assert_eq!(via_key.theme, via_click.theme);
    assert_eq!(via_click.theme, ThemeMode::Light);
}

#[test]
fn test_click_outside_targets_is_dropped() {
    let mut state = AppState::new();
    state.click_targets.logo = Some(HitRegion::new(2, 1, 9, 1));
    dispatch(&mut state, Message::Click { x: 40, y: 20 });
    assert_eq!(state.theme, ThemeMode::Dark);
    assert!(state.status.is_none());
}

#[test]
fn test_digit_key_selects_course() {
    let mut state = AppState::new();
    dispatch(&mut state, Message::Key(InputKey::Char('2')));
    assert_eq!(state.panel.title, "Build CSS Layouts Module");
    assert_eq!(state.panel.fill.target(), 70.0);
    assert_eq!(state.course_focus, 1);
    let flash = state.status.as_ref().expect("selection flashes the status");
    assert!(flash.text.contains("CSS Styling Mastery"));
}

#[test]
fn test_out_of_range_digit_is_ignored() {
    let mut state = AppState::new();
    let before = state.panel.clone();
    dispatch(&mut state, Message::Key(InputKey::Char('9')));
    assert_eq!(state.panel, before);
    assert!(state.status.is_none());
}

#[test]
fn test_course_row_click_selects_course() {
    let mut state = AppState::new();
    state
        .click_targets
        .courses
        .push((HitRegion::new(1, 5, 20, 1), "JavaScript Essentials"));
    dispatch(&mut state, Message::Click { x: 3, y: 5 });
    assert_eq!(state.panel.title, "JavaScript Essentials Module");
    assert_eq!(state.panel.fill.target(), 90.0);
}

#[test]
fn test_unknown_course_selection_is_a_no_op() {
    let mut state = AppState::new();
    dispatch(&mut state, Message::Key(InputKey::Char('1')));
    let before = state.panel.clone();
    dispatch(
        &mut state,
        Message::SelectCourse {
            name: "Nonexistent".to_string(),
        },
    );
    assert_eq!(state.panel, before);
}

#[test]
fn test_repeated_selection_is_idempotent() {
    let mut state = AppState::new();
    dispatch(&mut state, Message::Key(InputKey::Char('1')));
    let once = state.panel.clone();
    dispatch(&mut state, Message::Key(InputKey::Char('1')));
    assert_eq!(state.panel, once);
}

#[test]
fn test_focus_navigation_clamps_at_catalog_edges() {
    let mut state = AppState::new();
    dispatch(&mut state, Message::Key(InputKey::Up));
    assert_eq!(state.course_focus, 0);
    for _ in 0..10 {
        dispatch(&mut state, Message::Key(InputKey::Down));
    }
    assert_eq!(state.course_focus, 2);
    dispatch(&mut state, Message::Key(InputKey::Char('k')));
    assert_eq!(state.course_focus, 1);
}

#[test]
fn test_enter_selects_focused_course() {
    let mut state = AppState::new();
    dispatch(&mut state, Message::Key(InputKey::Down));
    dispatch(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(state.panel.title, "Build CSS Layouts Module");
}

#[test]
fn test_tick_advances_counters_to_completion() {
    let mut state = AppState::new();
    dispatch(&mut state, Message::Tick { now_ms: 10 });
    dispatch(
        &mut state,
        Message::Tick {
            now_ms: 10 + COUNT_UP_DURATION_MS,
        },
    );
    for counter in &state.counters {
        assert!(counter.anim.is_done(), "{} still running", counter.label);
    }
    // HERO_STATS order: learners, lessons, rating.
    assert_eq!(state.counters[0].anim.rendered(), "15000+");
    assert_eq!(state.counters[2].anim.rendered(), "4.9");
}

#[test]
fn test_tick_expires_status_flash() {
    let mut state = AppState::new();
    dispatch(&mut state, Message::Tick { now_ms: 100 });
    dispatch(&mut state, Message::Key(InputKey::Char('1')));
    assert!(state.status.is_some());

    dispatch(
        &mut state,
        Message::Tick {
            now_ms: 100 + STATUS_FLASH_MS - 1,
        },
    );
    assert!(state.status.is_some());

    dispatch(
        &mut state,
        Message::Tick {
            now_ms: 100 + STATUS_FLASH_MS,
        },
    );
    assert!(state.status.is_none());
}
