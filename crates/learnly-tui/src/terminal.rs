//! Terminal setup and restoration

use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use learnly_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Enter the alternate screen and enable pointer reporting.
pub fn init() -> Result<ratatui::DefaultTerminal> {
    let term = ratatui::init();
    execute!(stdout(), EnableMouseCapture)
        .map_err(|e| Error::terminal(format!("enable mouse capture: {e}")))?;
    Ok(term)
}

/// Undo [`init`], tolerating partial failure.
pub fn restore() {
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
}
