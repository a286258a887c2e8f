//! Centralized theme system for the landing screen.
//!
//! This module provides:
//! - `palette` — The two fixed color palettes and their backdrop gradients
//! - `styles` — Semantic style builder functions over the active palette

pub mod palette;
pub mod styles;
