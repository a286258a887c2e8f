//! # learnly-core - Core Domain Types
//!
//! Foundation crate for Learnly. Provides the counter animation state
//! machine, the static course catalog, the theme mode, error handling, and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (thiserror, tracing).
//!
//! ## Public API
//!
//! ### Counters (`counter`)
//! - [`CounterSpec`] - Parsed counter parameters (target, suffix, formatting)
//! - [`CounterAnimation`] - Per-frame count-up state machine
//! - [`StatDecl`], [`HERO_STATS`] - Static hero stat declarations
//!
//! ### Courses (`course`)
//! - [`CourseDescriptor`] - Title, completion percent, and topic list
//! - [`COURSE_CATALOG`], [`find_course()`] - Immutable catalog with a
//!   miss-is-a-no-op lookup policy
//!
//! ### Theme (`theme`)
//! - [`ThemeMode`] - Two-variant dark/light state with a single `toggle`
//!   transition
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum for infrastructure failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use learnly_core::prelude::*;
//! ```

pub mod counter;
pub mod course;
pub mod error;
pub mod logging;
pub mod theme;

/// Prelude for common imports used throughout all Learnly crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use counter::{CounterAnimation, CounterFrame, CounterSpec, StatDecl, HERO_STATS};
pub use course::{find_course, CourseDescriptor, COMPLETED_MARKER, COURSE_CATALOG};
pub use error::{Error, Result};
pub use theme::ThemeMode;
