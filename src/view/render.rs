//! Frame rendering.
//!
//! Layout, top to bottom: `screen_rows` text lines, an inverted status bar
//! and a message bar. Every frame is built from scratch into a fresh
//! [`FrameWriter`] and returned as one contiguous byte vector.

use super::Viewport;
use crate::ansi::{FrameWriter, sequences};
use crate::text::Buffer;

/// Banner shown on an empty, unnamed buffer.
pub const WELCOME: &str = concat!("Hayai Editor -- version ", env!("CARGO_PKG_VERSION"));

/// Longest file name shown in the status bar.
const STATUS_NAME_MAX: usize = 20;

/// Render a complete frame.
///
/// `message` is the status message to show, if it is still fresh. The
/// viewport must already have been scrolled to the cursor.
#[must_use]
pub fn render_frame(buffer: &Buffer, viewport: &Viewport, message: Option<&str>) -> Vec<u8> {
    let estimate = (viewport.screen_rows() + 2) * (viewport.screen_cols() + 16);
    let mut w = FrameWriter::with_capacity(estimate);

    w.write_str(sequences::CURSOR_HIDE);
    w.write_str(sequences::CURSOR_HOME);

    draw_rows(&mut w, buffer, viewport);
    draw_status_bar(&mut w, buffer, viewport.screen_cols());
    draw_message_bar(&mut w, message, viewport.screen_cols());

    let cursor = buffer.cursor();
    w.move_cursor(
        cursor.cy.saturating_sub(viewport.row_offset),
        cursor.rx.saturating_sub(viewport.col_offset),
    );
    w.write_str(sequences::CURSOR_SHOW);

    let frame = w.finish();
    tracing::trace!(bytes = frame.len(), "rendered frame");
    frame
}

/// Draw the text area.
pub fn draw_rows(w: &mut FrameWriter, buffer: &Buffer, viewport: &Viewport) {
    let rows = viewport.screen_rows();
    let cols = viewport.screen_cols();
    let show_welcome = buffer.is_empty() && buffer.filename().is_none();

    for y in 0..rows {
        let filerow = y + viewport.row_offset;
        match buffer.row(filerow) {
            Some(row) => {
                let rendered = row.rendered();
                let highlight = row.highlight();
                let start = viewport.col_offset.min(rendered.len());
                let end = (viewport.col_offset + cols).min(rendered.len());

                for (&byte, &class) in rendered[start..end].iter().zip(&highlight[start..end]) {
                    w.set_color(class.color_code());
                    w.push(byte);
                }
                w.reset_color();
            }
            None if show_welcome && y == rows / 3 => draw_welcome(w, cols),
            None => w.push(b'~'),
        }

        w.write_str(sequences::CLEAR_LINE_RIGHT);
        w.write_str(sequences::NEWLINE);
    }
}

fn draw_welcome(w: &mut FrameWriter, cols: usize) {
    let len = WELCOME.len().min(cols);
    let mut padding = (cols - len) / 2;
    if padding > 0 {
        w.push(b'~');
        padding -= 1;
    }
    for _ in 0..padding {
        w.push(b' ');
    }
    w.write_raw(&WELCOME.as_bytes()[..len]);
}

/// Draw the inverted status bar: file name, line count, modified flag on
/// the left and `line/total` on the right.
pub fn draw_status_bar(w: &mut FrameWriter, buffer: &Buffer, cols: usize) {
    w.write_str(sequences::attr::INVERSE);

    let name: String = buffer.filename().map_or_else(
        || "[No Name]".to_string(),
        |p| p.to_string_lossy().chars().take(STATUS_NAME_MAX).collect(),
    );
    let modified = if buffer.is_dirty() { "[Modified]" } else { "" };
    let status = format!("{name} - {} lines {modified}", buffer.len());
    let rstatus = format!("{}/{}", buffer.cursor().cy + 1, buffer.len());

    let mut len = status.len().min(cols);
    w.write_raw(&status.as_bytes()[..len]);
    while len < cols {
        if cols - len == rstatus.len() {
            w.write_str(&rstatus);
            break;
        }
        w.push(b' ');
        len += 1;
    }

    w.write_str(sequences::attr::RESET);
    w.write_str(sequences::NEWLINE);
}

/// Draw the message bar.
pub fn draw_message_bar(w: &mut FrameWriter, message: Option<&str>, cols: usize) {
    w.write_str(sequences::CLEAR_LINE_RIGHT);
    if let Some(msg) = message {
        let len = msg.len().min(cols);
        w.write_raw(&msg.as_bytes()[..len]);
    }
}
