//! Viewport scrolling and frame rendering.
//!
//! The [`Viewport`] is the window of the document that fits on screen. It is
//! kept in rendered coordinates, so tabs widen a row exactly as they do on
//! screen. [`render_frame`] turns a buffer plus viewport into one complete
//! terminal frame.

mod render;

pub use render::{WELCOME, draw_message_bar, draw_rows, draw_status_bar, render_frame};

use crate::text::Buffer;

/// Visible region of the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// First visible row.
    pub row_offset: usize,
    /// First visible rendered column.
    pub col_offset: usize,
    screen_rows: usize,
    screen_cols: usize,
}

impl Viewport {
    /// Create a viewport showing `rows` x `cols` text cells.
    ///
    /// Zero sizes are bumped to 1 so scrolling arithmetic stays defined.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            screen_rows: rows.max(1),
            screen_cols: cols.max(1),
        }
    }

    #[must_use]
    pub fn screen_rows(&self) -> usize {
        self.screen_rows
    }

    #[must_use]
    pub fn screen_cols(&self) -> usize {
        self.screen_cols
    }

    /// Change the visible size. Offsets are fixed up on the next scroll.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.screen_rows = rows.max(1);
        self.screen_cols = cols.max(1);
    }

    /// Adjust the offsets so the cursor is on screen.
    ///
    /// Refreshes the cursor's rendered column first. The offsets move just
    /// far enough to reveal the cursor (clamping, not centring), so one call
    /// always suffices.
    pub fn scroll(&mut self, buffer: &mut Buffer) {
        let cursor = buffer.cursor();
        let rx = buffer.row(cursor.cy).map_or(0, |row| row.cx_to_rx(cursor.cx));
        buffer.set_rx(rx);

        if cursor.cy < self.row_offset {
            self.row_offset = cursor.cy;
        }
        if cursor.cy >= self.row_offset + self.screen_rows {
            self.row_offset = cursor.cy - self.screen_rows + 1;
        }
        if rx < self.col_offset {
            self.col_offset = rx;
        }
        if rx >= self.col_offset + self.screen_cols {
            self.col_offset = rx - self.screen_cols + 1;
        }
    }

    /// Check whether a rendered position is inside the viewport.
    #[must_use]
    pub fn contains(&self, row: usize, rx: usize) -> bool {
        (self.row_offset..self.row_offset + self.screen_rows).contains(&row)
            && (self.col_offset..self.col_offset + self.screen_cols).contains(&rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_buffer(rows: usize) -> Buffer {
        Buffer::with_lines((0..rows).map(|i| format!("line {i}")))
    }

    #[test]
    fn test_zero_size_is_clamped() {
        let vp = Viewport::new(0, 0);
        assert_eq!(vp.screen_rows(), 1);
        assert_eq!(vp.screen_cols(), 1);
    }

    #[test]
    fn test_scroll_down_past_bottom() {
        let mut buf = long_buffer(50);
        let mut vp = Viewport::new(10, 80);
        buf.set_cursor(0, 15);
        vp.scroll(&mut buf);
        assert_eq!(vp.row_offset, 6);
        assert!(vp.contains(15, 0));
    }

    #[test]
    fn test_scroll_up_past_top() {
        let mut buf = long_buffer(50);
        let mut vp = Viewport::new(10, 80);
        vp.row_offset = 30;
        buf.set_cursor(0, 12);
        vp.scroll(&mut buf);
        assert_eq!(vp.row_offset, 12);
    }

    #[test]
    fn test_scroll_is_noop_when_visible() {
        let mut buf = long_buffer(50);
        let mut vp = Viewport::new(10, 80);
        vp.row_offset = 5;
        buf.set_cursor(3, 9);
        vp.scroll(&mut buf);
        assert_eq!(vp.row_offset, 5);
        assert_eq!(vp.col_offset, 0);
    }

    #[test]
    fn test_horizontal_scroll_uses_rendered_column() {
        let mut buf = Buffer::with_lines(["\t\t\tx"]);
        let mut vp = Viewport::new(5, 10);
        buf.set_cursor(3, 0);
        vp.scroll(&mut buf);
        assert_eq!(buf.cursor().rx, 24);
        assert_eq!(vp.col_offset, 15);

        buf.set_cursor(0, 0);
        vp.scroll(&mut buf);
        assert_eq!(vp.col_offset, 0);
    }

    #[test]
    fn test_virtual_row_has_zero_rx() {
        let mut buf = long_buffer(3);
        let mut vp = Viewport::new(2, 4);
        vp.col_offset = 7;
        buf.set_cursor(0, 3);
        vp.scroll(&mut buf);
        assert_eq!(buf.cursor().rx, 0);
        assert_eq!(vp.col_offset, 0);
        assert_eq!(vp.row_offset, 2);
    }

    #[test]
    fn test_resize_then_scroll() {
        let mut buf = long_buffer(40);
        let mut vp = Viewport::new(30, 80);
        buf.set_cursor(0, 29);
        vp.scroll(&mut buf);
        assert_eq!(vp.row_offset, 0);

        vp.resize(10, 80);
        vp.scroll(&mut buf);
        assert_eq!(vp.row_offset, 20);
    }
}
