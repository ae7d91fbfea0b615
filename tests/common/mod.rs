//! Shared harness for end-to-end tests.
//!
//! A [`Session`] feeds raw terminal bytes through the real key decoder into
//! an [`Editor`] and renders frames into a `vt100` screen, so assertions
//! are made against what a terminal would actually show.

#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry
#![allow(dead_code)] // Shared test helper; not every integration test uses every method

use hayai::{Buffer, Editor, EditorOptions, KeyReader, Outcome};
use std::time::Instant;

pub const CTRL_F: &[u8] = b"\x06";
pub const CTRL_Q: &[u8] = b"\x11";
pub const CTRL_S: &[u8] = b"\x13";
pub const ESC: &[u8] = b"\x1b";
pub const ENTER: &[u8] = b"\r";
pub const BACKSPACE: &[u8] = b"\x7f";
pub const UP: &[u8] = b"\x1b[A";
pub const DOWN: &[u8] = b"\x1b[B";
pub const RIGHT: &[u8] = b"\x1b[C";
pub const LEFT: &[u8] = b"\x1b[D";
pub const PAGE_DOWN: &[u8] = b"\x1b[6~";
pub const DELETE: &[u8] = b"\x1b[3~";

pub struct Session {
    pub editor: Editor,
    screen: vt100::Parser,
    cols: u16,
}

impl Session {
    /// Create a session on a `rows` x `cols` terminal.
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            editor: Editor::new(usize::from(rows), usize::from(cols), EditorOptions::default()),
            screen: vt100::Parser::new(rows, cols, 0),
            cols,
        }
    }

    pub fn with_lines(rows: u16, cols: u16, lines: &[&str]) -> Self {
        let mut session = Self::new(rows, cols);
        *session.editor.buffer_mut() = Buffer::with_lines(lines.iter().copied());
        session
    }

    /// Decode `bytes` into keys and process them. Stops at a quit.
    pub fn send(&mut self, bytes: &[u8]) -> Outcome {
        let mut keys = KeyReader::new(bytes);
        while let Some(key) = keys.read_key().expect("in-memory reads never fail") {
            if self.editor.process_key(key) == Outcome::Quit {
                return Outcome::Quit;
            }
        }
        Outcome::Continue
    }

    pub fn type_text(&mut self, text: &str) {
        self.send(text.as_bytes());
    }

    /// Render one frame into the virtual terminal and return the raw frame.
    pub fn draw(&mut self) -> Vec<u8> {
        let frame = self.editor.render(Instant::now());
        self.screen.process(&frame);
        frame
    }

    pub fn screen(&self) -> &vt100::Screen {
        self.screen.screen()
    }

    /// Text of one screen row, trailing blanks removed.
    pub fn row_text(&mut self, row: u16) -> String {
        self.draw();
        self.screen()
            .rows(0, self.cols)
            .nth(usize::from(row))
            .unwrap_or_default()
            .trim_end()
            .to_string()
    }

    /// Every screen row, trailing blanks removed.
    pub fn lines(&mut self) -> Vec<String> {
        self.draw();
        self.screen()
            .rows(0, self.cols)
            .map(|row| row.trim_end().to_string())
            .collect()
    }
}
