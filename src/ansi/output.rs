//! Per-frame output buffer with colour state tracking.

use crate::ansi::{self, sequences};

/// Byte buffer for exactly one frame.
///
/// The whole frame is assembled here and handed to the terminal in one
/// write; a partially written frame shows up as flicker. Colour changes are
/// tracked so a run of equally highlighted bytes costs one escape sequence.
#[derive(Debug, Default)]
pub struct FrameWriter {
    buffer: Vec<u8>,
    /// Foreground colour code currently in effect (`None` = default).
    current_color: Option<u8>,
}

impl FrameWriter {
    /// Create an empty frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty frame with room for `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            current_color: None,
        }
    }

    /// Write raw bytes to the buffer.
    pub fn write_raw(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Write a raw string to the buffer.
    pub fn write_str(&mut self, s: &str) {
        self.buffer.extend_from_slice(s.as_bytes());
    }

    /// Write a single byte.
    pub fn push(&mut self, byte: u8) {
        self.buffer.push(byte);
    }

    /// Switch foreground colour, writing nothing if it is already active.
    pub fn set_color(&mut self, color: Option<u8>) {
        if self.current_color == color {
            return;
        }
        match color {
            Some(code) => {
                let _ = ansi::write_fg_code(&mut self.buffer, code);
            }
            None => self.write_str(sequences::color::FG_DEFAULT),
        }
        self.current_color = color;
    }

    /// Unconditionally return to the default foreground.
    pub fn reset_color(&mut self) {
        self.write_str(sequences::color::FG_DEFAULT);
        self.current_color = None;
    }

    /// Move the cursor to a 0-indexed screen position.
    pub fn move_cursor(&mut self, row: usize, col: usize) {
        let row = u32::try_from(row).unwrap_or(u32::MAX - 1);
        let col = u32::try_from(col).unwrap_or(u32::MAX - 1);
        let _ = ansi::write_cursor_position(&mut self.buffer, row, col);
    }

    /// Bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Consume the writer, yielding the finished frame.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.buffer
    }
}
