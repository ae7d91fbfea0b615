//! ANSI escape sequence generation.

pub mod output;
pub mod sequences;

pub use output::FrameWriter;
pub use sequences::*;

use std::io::{self, Write};

/// Write a u32 as decimal digits to a writer without formatting overhead.
///
/// Stack buffer is sized for max u32 digits (10) to avoid heap allocation.
#[inline]
fn write_u32_decimal(w: &mut impl Write, n: u32) -> io::Result<()> {
    if n < 10 {
        return w.write_all(&[b'0' + n as u8]);
    }

    let mut buf = [0u8; 10];
    let mut i = buf.len();
    let mut val = n;
    while val > 0 {
        i -= 1;
        buf[i] = b'0' + (val % 10) as u8;
        val /= 10;
    }
    w.write_all(&buf[i..])
}

/// Write a cursor position sequence (0-indexed in, 1-indexed on the wire).
pub fn write_cursor_position(w: &mut impl Write, row: u32, col: u32) -> io::Result<()> {
    w.write_all(b"\x1b[")?;
    write_u32_decimal(w, row.saturating_add(1))?;
    w.write_all(b";")?;
    write_u32_decimal(w, col.saturating_add(1))?;
    w.write_all(b"H")
}

/// Write an SGR sequence selecting a foreground colour code (30-37, 90-97).
pub fn write_fg_code(w: &mut impl Write, code: u8) -> io::Result<()> {
    w.write_all(b"\x1b[")?;
    write_u32_decimal(w, u32::from(code))?;
    w.write_all(b"m")
}
