//! Main TUI runner - entry point and event loop

use std::time::Duration;

use learnly_app::handler;
use learnly_app::state::AppState;
use learnly_core::prelude::*;

use crate::event::{self, AppClock};
use crate::{render, terminal};

/// Run the TUI until the user quits.
///
/// `fps_cap` bounds the tick cadence. Animation durations are wall-clock
/// based, so a lower cap only reduces how often frames are drawn, never how
/// long an animation takes.
pub fn run(fps_cap: u16) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = terminal::init()?;

    let mut state = AppState::new();
    let clock = AppClock::new();

    let result = run_loop(&mut term, &mut state, &clock, fps_cap);

    terminal::restore();
    result
}

fn run_loop(
    term: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    clock: &AppClock,
    fps_cap: u16,
) -> Result<()> {
    let frame_budget = Duration::from_millis(1_000 / u64::from(fps_cap.max(1)));
    info!(?frame_budget, "entering event loop");

    while !state.should_quit() {
        term.draw(|frame| render::view(frame, state))?;

        // Drain follow-up messages before drawing again, so e.g. a logo
        // click and a `t` press take the identical toggle path.
        let mut next = event::poll(clock, frame_budget)?;
        while let Some(message) = next {
            next = handler::update(state, message).message;
        }
    }

    info!("event loop finished");
    Ok(())
}
