//! # learnly-tui - Terminal UI
//!
//! The View half of the TEA loop plus the event adapters and the runner.
//! Rendering is pure (aside from refreshing the pointer hit regions the
//! update handlers resolve clicks against); all state transitions live in
//! `learnly-app`.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

pub use runner::run;
