//! Timed message bar text.

use std::time::{Duration, Instant};

/// Longest status message kept, in bytes.
pub const MAX_STATUS_LEN: usize = 79;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    text: String,
    set_at: Instant,
}

impl StatusMessage {
    /// Create a message, truncated to [`MAX_STATUS_LEN`] bytes on a char
    /// boundary.
    #[must_use]
    pub fn new(text: impl Into<String>, now: Instant) -> Self {
        let mut text = text.into();
        if text.len() > MAX_STATUS_LEN {
            let mut end = MAX_STATUS_LEN;
            while !text.is_char_boundary(end) {
                end -= 1;
            }
            text.truncate(end);
        }
        Self { text, set_at: now }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the message is younger than `timeout` at `now`.
    #[must_use]
    pub fn is_fresh(&self, now: Instant, timeout: Duration) -> bool {
        now.saturating_duration_since(self.set_at) < timeout
    }
}
