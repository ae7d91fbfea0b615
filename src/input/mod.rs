//! Keyboard input.
//!
//! [`InputParser`] decodes escape sequences into [`KeyEvent`]s and
//! [`KeyReader`] drives it from the terminal's timed reads.

mod keyboard;
mod parser;
mod reader;

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
pub use parser::{InputParser, ParseError, ParseResult};
pub use reader::KeyReader;
