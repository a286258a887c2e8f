//! Main update function - handles state transitions (TEA pattern)

use learnly_core::course::COURSE_CATALOG;
use tracing::debug;

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state.
///
/// Returns an optional follow-up message; the event loop drains follow-ups
/// before drawing, so a selection triggered by a click and one triggered by
/// a key take exactly the same path through here.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Click { x, y } => handle_click(state, x, y),

        Message::Tick { now_ms } => handle_tick(state, now_ms),

        Message::ToggleTheme => {
            state.theme.toggle();
            debug!(?state.theme, "theme toggled");
            UpdateResult::none()
        }

        Message::SelectCourse { name } => handle_select_course(state, &name),

        Message::PrevCourse => {
            state.course_focus = state.course_focus.saturating_sub(1);
            UpdateResult::none()
        }

        Message::NextCourse => {
            state.course_focus = (state.course_focus + 1).min(COURSE_CATALOG.len() - 1);
            UpdateResult::none()
        }
    }
}

/// Advance every time-based piece of state by one frame.
fn handle_tick(state: &mut AppState, now_ms: u64) -> UpdateResult {
    state.last_tick_ms = now_ms;

    // Each counter runs independently; settled ones ignore further frames.
    for counter in &mut state.counters {
        counter.anim.frame(now_ms);
    }

    if let Some(flash) = &state.status {
        if now_ms >= flash.expires_at_ms {
            state.status = None;
        }
    }

    UpdateResult::none()
}

fn handle_select_course(state: &mut AppState, name: &str) -> UpdateResult {
    let now_ms = state.last_tick_ms;
    if let Some(course) = state.panel.select_course(name, now_ms) {
        if let Some(index) = COURSE_CATALOG.iter().position(|c| c.name == name) {
            state.course_focus = index;
        }
        state.flash(
            format!(
                "Great choice! We'll follow this course in the roadmap: {}",
                course.name
            ),
            now_ms,
        );
        debug!(course = course.name, "course selected");
    }
    UpdateResult::none()
}

/// Resolve a pointer button-down against the hit regions recorded by the
/// last render pass. Clicks that land nowhere are dropped.
fn handle_click(state: &mut AppState, x: u16, y: u16) -> UpdateResult {
    if state.click_targets.logo.is_some_and(|r| r.contains(x, y)) {
        return UpdateResult::message(Message::ToggleTheme);
    }
    if let Some((_, name)) = state
        .click_targets
        .courses
        .iter()
        .find(|(region, _)| region.contains(x, y))
    {
        return UpdateResult::message(Message::SelectCourse {
            name: (*name).to_string(),
        });
    }
    UpdateResult::none()
}
