//! Escape sequence decoder for terminal input.
//!
//! Turns raw bytes into [`KeyEvent`]s. Handles:
//! - control bytes (Ctrl+letter, Enter, Tab, Backspace)
//! - CSI arrows and navigation keys, with xterm modifier parameters
//! - CSI `N~` editing keys
//! - SS3 arrows and Home/End
//! - Alt+char and UTF-8 characters

#![allow(clippy::unused_self)]

use crate::input::keyboard::{KeyCode, KeyEvent, KeyModifiers};

/// Error type for input parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Input buffer is empty.
    Empty,
    /// Incomplete escape sequence (need more bytes).
    Incomplete,
    /// Well-formed but unknown escape sequence; holds every byte of it.
    UnrecognizedSequence(Vec<u8>),
    /// Invalid UTF-8 in input.
    InvalidUtf8,
}

/// Decoded key and the number of bytes it used.
pub type ParseResult = Result<(KeyEvent, usize), ParseError>;

/// Stateless key decoder.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputParser;

impl InputParser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse the first key out of `input`.
    ///
    /// Returns the key and number of bytes consumed, or an error. Call
    /// repeatedly, advancing past consumed bytes, until `Err(ParseError::Empty)`
    /// or `Err(ParseError::Incomplete)` is returned.
    pub fn parse(&self, input: &[u8]) -> ParseResult {
        let Some(&first) = input.first() else {
            return Err(ParseError::Empty);
        };

        match first {
            0x1b => self.parse_escape(input),
            0x00 => Ok((KeyEvent::key(KeyCode::Null), 1)),
            0x09 => Ok((KeyEvent::key(KeyCode::Tab), 1)),
            0x0d => Ok((KeyEvent::key(KeyCode::Enter), 1)),
            0x01..=0x1a => {
                let c = (first - 1 + b'a') as char;
                Ok((KeyEvent::ctrl(c), 1))
            }
            0x7f => Ok((KeyEvent::key(KeyCode::Backspace), 1)),
            0x20..=0x7e => Ok((KeyEvent::char(first as char), 1)),
            0x80..=0xff => self.parse_utf8(input),
            _ => Ok((KeyEvent::char(first as char), 1)),
        }
    }

    fn parse_escape(&self, input: &[u8]) -> ParseResult {
        if input.len() == 1 {
            // A lone ESC, or the start of a sequence still in flight.
            return Err(ParseError::Incomplete);
        }

        match input[1] {
            b'[' => self.parse_csi(input),
            b'O' => self.parse_ss3(input),
            0x20..=0x7e => {
                let c = input[1] as char;
                Ok((KeyEvent::with_alt(KeyCode::Char(c)), 2))
            }
            _ => Ok((KeyEvent::key(KeyCode::Esc), 1)),
        }
    }

    /// Parse a CSI sequence (ESC [ ...).
    fn parse_csi(&self, input: &[u8]) -> ParseResult {
        if input.len() < 3 {
            return Err(ParseError::Incomplete);
        }

        let Some(end) = input[2..]
            .iter()
            .position(|b| (0x40..=0x7e).contains(b))
            .map(|i| i + 2)
        else {
            return Err(ParseError::Incomplete);
        };

        let params = &input[2..end];
        let consumed = end + 1;

        let code = match input[end] {
            b'A' => KeyCode::Up,
            b'B' => KeyCode::Down,
            b'C' => KeyCode::Right,
            b'D' => KeyCode::Left,
            b'H' => KeyCode::Home,
            b'F' => KeyCode::End,
            b'~' => return self.parse_tilde_key(params, &input[..consumed]),
            _ => return Err(ParseError::UnrecognizedSequence(input[..consumed].to_vec())),
        };

        let modifiers = self.parse_modifiers(params)?;
        Ok((KeyEvent::new(code, modifiers), consumed))
    }

    /// Parse modifiers from CSI parameter bytes.
    ///
    /// Format is `1;N` where `N - 1` is a bitmask: shift 1, alt 2, ctrl 4.
    fn parse_modifiers(&self, params: &[u8]) -> Result<KeyModifiers, ParseError> {
        let s = std::str::from_utf8(params).map_err(|_| ParseError::InvalidUtf8)?;
        let Some(n) = s.split(';').nth(1).and_then(|p| p.parse::<u8>().ok()) else {
            return Ok(KeyModifiers::empty());
        };

        let n = n.saturating_sub(1);
        let mut mods = KeyModifiers::empty();
        if n & 1 != 0 {
            mods |= KeyModifiers::SHIFT;
        }
        if n & 2 != 0 {
            mods |= KeyModifiers::ALT;
        }
        if n & 4 != 0 {
            mods |= KeyModifiers::CTRL;
        }
        Ok(mods)
    }

    /// Parse `ESC [ N ~` editing keys.
    fn parse_tilde_key(&self, params: &[u8], sequence: &[u8]) -> ParseResult {
        let s = std::str::from_utf8(params).map_err(|_| ParseError::InvalidUtf8)?;
        let num: u8 = s
            .split(';')
            .next()
            .and_then(|p| p.parse().ok())
            .unwrap_or(0);

        let code = match num {
            1 | 7 => KeyCode::Home,
            3 => KeyCode::Delete,
            4 | 8 => KeyCode::End,
            5 => KeyCode::PageUp,
            6 => KeyCode::PageDown,
            _ => return Err(ParseError::UnrecognizedSequence(sequence.to_vec())),
        };

        let modifiers = self.parse_modifiers(params)?;
        Ok((KeyEvent::new(code, modifiers), sequence.len()))
    }

    /// Parse SS3 sequences (ESC O ...).
    fn parse_ss3(&self, input: &[u8]) -> ParseResult {
        if input.len() < 3 {
            return Err(ParseError::Incomplete);
        }

        let code = match input[2] {
            b'A' => KeyCode::Up,
            b'B' => KeyCode::Down,
            b'C' => KeyCode::Right,
            b'D' => KeyCode::Left,
            b'H' => KeyCode::Home,
            b'F' => KeyCode::End,
            _ => return Err(ParseError::UnrecognizedSequence(input[..3].to_vec())),
        };

        Ok((KeyEvent::key(code), 3))
    }

    /// Parse a UTF-8 character sequence.
    fn parse_utf8(&self, input: &[u8]) -> ParseResult {
        let first = input[0];

        let expected_len = if first & 0b1110_0000 == 0b1100_0000 {
            2
        } else if first & 0b1111_0000 == 0b1110_0000 {
            3
        } else if first & 0b1111_1000 == 0b1111_0000 {
            4
        } else {
            return Err(ParseError::InvalidUtf8);
        };

        if input.len() < expected_len {
            return Err(ParseError::Incomplete);
        }

        let s = std::str::from_utf8(&input[..expected_len]).map_err(|_| ParseError::InvalidUtf8)?;
        let c = s.chars().next().ok_or(ParseError::InvalidUtf8)?;

        Ok((KeyEvent::char(c), expected_len))
    }
}
