//! A single line of text with its rendered projection.
//!
//! A [`Row`] keeps three parallel views of one line:
//!
//! - `raw`: the literal bytes, without the trailing newline
//! - `rendered`: `raw` with every tab expanded to the next [`TAB_STOP`]
//! - `highlight`: one [`HighlightClass`] per rendered byte
//!
//! `rendered` and `highlight` are derived state. Every method that changes
//! `raw` recomputes both before returning, so readers never observe a stale
//! projection.

use crate::highlight::{HighlightClass, highlight_row};

/// Width of a tab stop in rendered columns.
pub const TAB_STOP: usize = 8;

/// One line of a document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    raw: Vec<u8>,
    rendered: Vec<u8>,
    highlight: Vec<HighlightClass>,
}

impl Row {
    /// Create a row from raw content.
    #[must_use]
    pub fn new(content: &[u8]) -> Self {
        let mut row = Self {
            raw: content.to_vec(),
            rendered: Vec::new(),
            highlight: Vec::new(),
        };
        row.update();
        row
    }

    /// Replace the raw content.
    pub fn set_content(&mut self, content: &[u8]) {
        self.raw.clear();
        self.raw.extend_from_slice(content);
        self.update();
    }

    /// Insert a byte at `at`; positions past the end append.
    pub fn insert_byte(&mut self, at: usize, byte: u8) {
        let at = at.min(self.raw.len());
        self.raw.insert(at, byte);
        self.update();
    }

    /// Append bytes to the end of the row.
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        self.raw.extend_from_slice(bytes);
        self.update();
    }

    /// Delete the byte at `at`.
    ///
    /// Returns `false` (and leaves the row alone) if `at` is out of range.
    pub fn delete_byte(&mut self, at: usize) -> bool {
        if at >= self.raw.len() {
            return false;
        }
        self.raw.remove(at);
        self.update();
        true
    }

    /// Cut the row at `at`, returning everything from `at` onwards.
    pub fn split_off(&mut self, at: usize) -> Vec<u8> {
        let at = at.min(self.raw.len());
        let tail = self.raw.split_off(at);
        self.update();
        tail
    }

    /// Raw bytes.
    #[must_use]
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Tab-expanded bytes.
    #[must_use]
    pub fn rendered(&self) -> &[u8] {
        &self.rendered
    }

    /// Highlight classes, one per rendered byte.
    #[must_use]
    pub fn highlight(&self) -> &[HighlightClass] {
        &self.highlight
    }

    /// Mutable highlight classes.
    ///
    /// Only search uses this, to paint a match temporarily. The length can't
    /// change through a slice, so the one-class-per-byte invariant holds.
    pub fn highlight_mut(&mut self) -> &mut [HighlightClass] {
        &mut self.highlight
    }

    /// Raw length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Rendered length in columns.
    #[must_use]
    pub fn rendered_len(&self) -> usize {
        self.rendered.len()
    }

    /// Convert a raw column into a rendered column.
    ///
    /// Columns past the end of the row are treated as the end of the row.
    #[must_use]
    pub fn cx_to_rx(&self, cx: usize) -> usize {
        let mut rx = 0;
        for &byte in self.raw.iter().take(cx) {
            if byte == b'\t' {
                rx += (TAB_STOP - 1) - (rx % TAB_STOP);
            }
            rx += 1;
        }
        rx
    }

    /// Convert a rendered column back into a raw column.
    ///
    /// A rendered column inside a tab's expansion maps to the tab itself, so
    /// this is not an exact inverse of [`cx_to_rx`](Self::cx_to_rx). Columns
    /// past the end clamp to the row length.
    #[must_use]
    pub fn rx_to_cx(&self, rx: usize) -> usize {
        let mut cur_rx = 0;
        for (cx, &byte) in self.raw.iter().enumerate() {
            if byte == b'\t' {
                cur_rx += (TAB_STOP - 1) - (cur_rx % TAB_STOP);
            }
            cur_rx += 1;

            if cur_rx > rx {
                return cx;
            }
        }
        self.raw.len()
    }

    /// Recompute `rendered` and `highlight` from `raw`.
    fn update(&mut self) {
        let tabs = self.raw.iter().filter(|&&b| b == b'\t').count();
        self.rendered.clear();
        self.rendered.reserve(self.raw.len() + tabs * (TAB_STOP - 1));

        for &byte in &self.raw {
            if byte == b'\t' {
                self.rendered.push(b' ');
                while self.rendered.len() % TAB_STOP != 0 {
                    self.rendered.push(b' ');
                }
            } else {
                self.rendered.push(byte);
            }
        }

        self.highlight = highlight_row(&self.rendered);
    }
}

impl From<&str> for Row {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}
