//! Terminal control: raw mode, window size and frame output.

mod raw;

pub use raw::{RawModeGuard, enable_raw_mode, is_tty, raw_termios, terminal_size};

use crate::ansi::sequences;
use crate::error::{Error, Result};
use std::io::{Read, Write};

/// Longest cursor position report accepted.
const MAX_REPORT_LEN: usize = 32;

/// Determine the window size as `(rows, cols)`.
///
/// Asks the kernel first. If that fails, pushes the cursor to the far
/// bottom-right corner and asks the terminal where it ended up.
pub fn window_size<R: Read, W: Write>(input: &mut R, output: &mut W) -> Result<(usize, usize)> {
    match terminal_size() {
        Ok((rows, cols)) => Ok((usize::from(rows), usize::from(cols))),
        Err(err) => {
            tracing::debug!(%err, "ioctl window size failed, querying cursor position");
            query_window_size(input, output)
        }
    }
}

/// Find the window size by moving the cursor as far as it goes and
/// requesting a cursor position report.
pub fn query_window_size<R: Read, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<(usize, usize)> {
    output.write_all(sequences::CURSOR_FAR_CORNER.as_bytes())?;
    output.write_all(sequences::REQUEST_CURSOR_POSITION.as_bytes())?;
    output.flush()?;

    let mut report = Vec::with_capacity(MAX_REPORT_LEN);
    let mut byte = [0u8; 1];
    while report.len() < MAX_REPORT_LEN {
        if input.read(&mut byte)? != 1 {
            break;
        }
        report.push(byte[0]);
        if byte[0] == b'R' {
            break;
        }
    }

    parse_cursor_report(&report)
        .map(|(rows, cols)| (usize::from(rows), usize::from(cols)))
        .ok_or(Error::WindowSize)
}

/// Parse a cursor position report: `ESC [ rows ; cols R`.
#[must_use]
pub fn parse_cursor_report(input: &[u8]) -> Option<(u16, u16)> {
    let body = input.strip_prefix(b"\x1b[")?.strip_suffix(b"R")?;
    let body = std::str::from_utf8(body).ok()?;
    let (rows, cols) = body.split_once(';')?;
    let rows: u16 = rows.parse().ok()?;
    let cols: u16 = cols.parse().ok()?;
    (rows > 0 && cols > 0).then_some((rows, cols))
}

/// Write one complete frame with a single write, then flush.
pub fn write_frame<W: Write>(output: &mut W, frame: &[u8]) -> Result<()> {
    output.write_all(frame)?;
    output.flush()?;
    Ok(())
}

/// Clear the screen and home the cursor.
pub fn clear_screen<W: Write>(output: &mut W) -> Result<()> {
    output.write_all(sequences::CLEAR_SCREEN.as_bytes())?;
    output.write_all(sequences::CURSOR_HOME.as_bytes())?;
    output.flush()?;
    Ok(())
}
