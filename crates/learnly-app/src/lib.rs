//! # learnly-app - Application State and Update Logic
//!
//! The Model and Update halves of the TEA loop. `AppState` owns the three
//! independent UI components (stat counters, progress panel, theme mode);
//! `handler::update` processes one [`message::Message`] at a time,
//! run-to-completion, and may return a follow-up message for the event loop
//! to drain before the next draw.
//!
//! This crate is deliberately free of rendering-backend types so that all
//! state transitions are testable without a terminal.

pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;

pub use input_key::InputKey;
