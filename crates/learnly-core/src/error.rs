//! Application error types
//!
//! Domain misses (unknown course, unparsable stat target) are not errors --
//! they are absorbed at the smallest scope per the best-effort presentation
//! model. This enum only covers infrastructure failures.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Logging setup error: {message}")]
    Logging { message: String },
}

impl Error {
    /// Create a terminal error with a message
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }
}
