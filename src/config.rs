//! Editor configuration.

use std::time::Duration;

/// How many extra Ctrl-Q presses it takes to quit with unsaved changes.
pub const DEFAULT_QUIT_TIMES: u32 = 3;

/// How long a status message stays on the message bar.
pub const DEFAULT_MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Editor session options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditorOptions {
    /// Ctrl-Q presses that only warn when the buffer is dirty.
    pub quit_times: u32,
    /// Lifetime of a status message.
    pub message_timeout: Duration,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            quit_times: DEFAULT_QUIT_TIMES,
            message_timeout: DEFAULT_MESSAGE_TIMEOUT,
        }
    }
}
