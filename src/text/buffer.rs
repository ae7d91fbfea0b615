//! The document: an ordered list of rows plus cursor and dirty state.
//!
//! [`Buffer`] owns every structural edit (row insert/delete, split, join)
//! and keeps the cursor valid across them. All positions are clamped rather
//! than rejected; a bad cursor coordinate never turns into a panic.
//!
//! # Examples
//!
//! ```
//! use hayai::text::Buffer;
//!
//! let mut buf = Buffer::new();
//! for &b in b"hello" {
//!     buf.insert_char(b);
//! }
//! buf.insert_newline();
//! assert_eq!(buf.row(0).unwrap().raw(), b"hello");
//! assert_eq!(buf.serialize(), b"hello\n\n");
//! ```

use super::Row;
use std::path::{Path, PathBuf};

/// Cursor position.
///
/// `cx`/`cy` are raw coordinates. `cy == len()` is allowed and means the
/// cursor sits on the virtual empty line past the end of the document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Raw column.
    pub cx: usize,
    /// Row index.
    pub cy: usize,
    /// Rendered column, refreshed by the viewport on every scroll.
    pub rx: usize,
}

impl Cursor {
    #[must_use]
    pub const fn new(cx: usize, cy: usize) -> Self {
        Self { cx, cy, rx: 0 }
    }
}

/// Single-step cursor motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    Up,
    Down,
    Left,
    Right,
}

/// An editable document.
#[derive(Clone, Debug, Default)]
pub struct Buffer {
    rows: Vec<Row>,
    cursor: Cursor,
    dirty: usize,
    filename: Option<PathBuf>,
}

impl Buffer {
    /// Create an empty, unnamed buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer from lines of text. The result is not dirty.
    #[must_use]
    pub fn with_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let mut buf = Self::new();
        for line in lines {
            buf.rows.push(Row::new(strip_line_ending(line.as_ref())));
        }
        buf
    }

    // ============================================
    // Accessors
    // ============================================

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn row(&self, idx: usize) -> Option<&Row> {
        self.rows.get(idx)
    }

    pub fn row_mut(&mut self, idx: usize) -> Option<&mut Row> {
        self.rows.get_mut(idx)
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Move the cursor to `(cx, cy)`, clamped into the document.
    pub fn set_cursor(&mut self, cx: usize, cy: usize) {
        let cy = cy.min(self.rows.len());
        self.cursor.cy = cy;
        self.cursor.cx = cx.min(self.row_len(cy));
    }

    pub(crate) fn set_rx(&mut self, rx: usize) {
        self.cursor.rx = rx;
    }

    /// Number of mutations since the last load or save.
    #[must_use]
    pub fn dirty(&self) -> usize {
        self.dirty
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    /// Record a successful save.
    pub fn mark_saved(&mut self) {
        self.dirty = 0;
    }

    #[must_use]
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    pub fn set_filename(&mut self, path: impl Into<PathBuf>) {
        self.filename = Some(path.into());
    }

    /// Raw length of row `cy`, or 0 for the virtual row past the end.
    #[must_use]
    pub fn row_len(&self, cy: usize) -> usize {
        self.rows.get(cy).map_or(0, Row::len)
    }

    // ============================================
    // Row operations
    // ============================================

    /// Insert a row at `at`. Positions past the end are ignored.
    pub fn insert_row(&mut self, at: usize, content: &[u8]) {
        if at > self.rows.len() {
            return;
        }
        self.rows.insert(at, Row::new(content));
        self.dirty += 1;
    }

    /// Delete the row at `at`. Returns `false` if there is no such row.
    pub fn delete_row(&mut self, at: usize) -> bool {
        if at >= self.rows.len() {
            return false;
        }
        self.rows.remove(at);
        self.dirty += 1;
        true
    }

    // ============================================
    // Editing at the cursor
    // ============================================

    /// Insert a byte at the cursor and advance past it.
    ///
    /// On the virtual row past the end an empty row is appended first.
    pub fn insert_char(&mut self, byte: u8) {
        if self.cursor.cy == self.rows.len() {
            self.insert_row(self.rows.len(), b"");
        }
        let Cursor { cx, cy, .. } = self.cursor;
        self.rows[cy].insert_byte(cx, byte);
        self.dirty += 1;
        self.cursor.cx = cx.min(self.rows[cy].len() - 1) + 1;
    }

    /// Split the current row at the cursor.
    ///
    /// At column 0 an empty row is inserted above instead, leaving the
    /// current row untouched. Either way the cursor ends up at the start of
    /// the following row.
    pub fn insert_newline(&mut self) {
        let Cursor { cx, cy, .. } = self.cursor;
        if cx == 0 {
            self.insert_row(cy, b"");
        } else if let Some(row) = self.rows.get_mut(cy) {
            let tail = row.split_off(cx);
            self.insert_row(cy + 1, &tail);
        }
        self.cursor.cy = (cy + 1).min(self.rows.len());
        self.cursor.cx = 0;
    }

    /// Delete the byte before the cursor, joining rows at column 0.
    ///
    /// Does nothing at the very start of the document or on the virtual row
    /// past the end.
    pub fn delete_char(&mut self) {
        let Cursor { cx, cy, .. } = self.cursor;
        if cy >= self.rows.len() || (cx == 0 && cy == 0) {
            return;
        }

        if cx > 0 {
            if self.rows[cy].delete_byte(cx - 1) {
                self.dirty += 1;
            }
            self.cursor.cx = cx - 1;
        } else {
            let joined = self.rows[cy].raw().to_vec();
            let prev = &mut self.rows[cy - 1];
            self.cursor.cx = prev.len();
            prev.append_bytes(&joined);
            self.dirty += 1;
            self.delete_row(cy);
            self.cursor.cy = cy - 1;
        }
    }

    // ============================================
    // Cursor movement
    // ============================================

    /// Move the cursor one step, wrapping across line ends.
    pub fn move_cursor(&mut self, motion: Motion) {
        let Cursor { cx, cy, .. } = self.cursor;
        let on_row = cy < self.rows.len();

        match motion {
            Motion::Up => {
                self.cursor.cy = cy.saturating_sub(1);
            }
            Motion::Down => {
                if cy < self.rows.len() {
                    self.cursor.cy = cy + 1;
                }
            }
            Motion::Left => {
                if cx > 0 {
                    self.cursor.cx = cx - 1;
                } else if cy > 0 {
                    self.cursor.cy = cy - 1;
                    self.cursor.cx = self.row_len(cy - 1);
                }
            }
            Motion::Right => {
                if on_row {
                    if cx < self.row_len(cy) {
                        self.cursor.cx = cx + 1;
                    } else {
                        self.cursor.cy = cy + 1;
                        self.cursor.cx = 0;
                    }
                }
            }
        }

        self.cursor.cx = self.cursor.cx.min(self.row_len(self.cursor.cy));
    }

    /// Move to column 0.
    pub fn move_to_line_start(&mut self) {
        self.cursor.cx = 0;
    }

    /// Move to the end of the current row, if the cursor is on one.
    pub fn move_to_line_end(&mut self) {
        if self.cursor.cy < self.rows.len() {
            self.cursor.cx = self.row_len(self.cursor.cy);
        }
    }

    // ============================================
    // Load / serialize
    // ============================================

    /// The on-disk representation: every row followed by `\n`.
    #[must_use]
    pub fn serialize(&self) -> Vec<u8> {
        let total: usize = self.rows.iter().map(|r| r.len() + 1).sum();
        let mut out = Vec::with_capacity(total);
        for row in &self.rows {
            out.extend_from_slice(row.raw());
            out.push(b'\n');
        }
        out
    }

    /// Replace the contents with `lines` and bind the buffer to `filename`.
    ///
    /// Trailing `\n`/`\r` bytes are stripped from each line. The cursor
    /// returns to the origin and the buffer is clean afterwards.
    pub fn load<I, L>(&mut self, lines: I, filename: impl Into<PathBuf>)
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        self.rows.clear();
        for line in lines {
            self.insert_row(self.rows.len(), strip_line_ending(line.as_ref()));
        }
        self.cursor = Cursor::default();
        self.filename = Some(filename.into());
        self.dirty = 0;
    }

    /// Load from a single byte blob, splitting it into lines.
    pub fn load_bytes(&mut self, bytes: &[u8], filename: impl Into<PathBuf>) {
        self.load(split_lines(bytes), filename);
    }
}

/// Split bytes into lines the way `getline` does.
///
/// Each line keeps its terminator; a final line without one is still
/// returned, and empty input yields no lines at all.
pub fn split_lines(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    bytes.split_inclusive(|&b| b == b'\n')
}

/// Strip every trailing `\n` and `\r`.
fn strip_line_ending(mut line: &[u8]) -> &[u8] {
    while let [rest @ .., b'\n' | b'\r'] = line {
        line = rest;
    }
    line
}
