//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Pointer button-down at a screen cell; resolved against the hit
    /// regions recorded by the last render pass
    Click { x: u16, y: u16 },

    /// Frame tick driving animations, with milliseconds since startup
    Tick { now_ms: u64 },

    /// Flip the theme mode; both input triggers funnel into this
    ToggleTheme,

    /// Project a course onto the progress panel; unknown names are a no-op
    SelectCourse { name: String },

    /// Move course focus up
    PrevCourse,

    /// Move course focus down
    NextCourse,

    /// Quit the application
    Quit,
}
