//! Blocking key reader on top of a timed byte source.
//!
//! The terminal is configured so each `read` waits at most a tenth of a
//! second and returns 0 bytes on timeout. [`KeyReader`] accumulates bytes
//! until [`InputParser`] can decode a whole key. A timeout while a sequence
//! is still incomplete means the user pressed Escape on its own, so the
//! pending bytes collapse into a single `Esc`.

use std::io::{self, Read};

use super::keyboard::{KeyCode, KeyEvent};
use super::parser::{InputParser, ParseError};

const READ_CHUNK: usize = 64;

/// Reads keys from a byte source.
#[derive(Debug)]
pub struct KeyReader<R> {
    source: R,
    parser: InputParser,
    pending: Vec<u8>,
}

impl<R: Read> KeyReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            parser: InputParser::new(),
            pending: Vec::with_capacity(READ_CHUNK),
        }
    }

    /// Read the next key.
    ///
    /// Returns `Ok(None)` when the source times out with nothing decodable,
    /// so the caller can redraw (status messages expire) and try again.
    pub fn read_key(&mut self) -> io::Result<Option<KeyEvent>> {
        loop {
            match self.parser.parse(&self.pending) {
                Ok((key, consumed)) => {
                    self.pending.drain(..consumed);
                    return Ok(Some(key));
                }
                Err(ParseError::UnrecognizedSequence(seq)) => {
                    tracing::trace!(?seq, "unrecognized escape sequence");
                    self.pending.drain(..seq.len());
                    return Ok(Some(KeyEvent::key(KeyCode::Esc)));
                }
                Err(ParseError::InvalidUtf8) => {
                    self.pending.remove(0);
                }
                Err(ParseError::Empty | ParseError::Incomplete) => {
                    if self.fill()? == 0 {
                        return Ok(self.flush_incomplete());
                    }
                }
            }
        }
    }

    /// Bytes read but not yet decoded.
    #[must_use]
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }

    /// Read one chunk. Interrupted and would-block reads count as timeouts.
    fn fill(&mut self) -> io::Result<usize> {
        let mut chunk = [0u8; READ_CHUNK];
        match self.source.read(&mut chunk) {
            Ok(n) => {
                self.pending.extend_from_slice(&chunk[..n]);
                Ok(n)
            }
            Err(e) if matches!(e.kind(), io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock) => {
                Ok(0)
            }
            Err(e) => Err(e),
        }
    }

    /// Resolve whatever is left after a timeout.
    fn flush_incomplete(&mut self) -> Option<KeyEvent> {
        if self.pending.is_empty() {
            return None;
        }
        let was_escape = self.pending[0] == 0x1b;
        self.pending.clear();
        was_escape.then(|| KeyEvent::key(KeyCode::Esc))
    }
}
