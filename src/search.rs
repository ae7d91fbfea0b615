//! Incremental search.
//!
//! [`SearchController`] is driven one key at a time by the find prompt. Each
//! step first puts back the highlight it painted on the previous match, then
//! scans the rows as a ring starting next to the last match. A hit moves the
//! cursor there and paints the matched bytes with
//! [`HighlightClass::Match`]; the row's real classes are kept aside until
//! the next step.
//!
//! ```text
//! Idle --begin--> Searching --on_key--> MatchFound | NoMatch
//!                     ^                        |
//!                     +---- Edited/Next/Prev --+
//!                               Commit/Cancel ---> Idle
//! ```

use crate::highlight::HighlightClass;
use crate::text::{Buffer, Cursor};
use crate::view::Viewport;

/// Scan direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// What the prompt reports to the search after each key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchKey {
    /// The query text changed (or any other key was pressed).
    Edited,
    /// Jump to the next match (Right/Down).
    Next,
    /// Jump to the previous match (Left/Up).
    Previous,
    /// Enter: keep the cursor at the current match.
    Commit,
    /// Escape: return to where the search started.
    Cancel,
}

/// Search state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchState {
    #[default]
    Idle,
    Searching,
    MatchFound {
        row: usize,
        col: usize,
    },
    NoMatch,
}

impl SearchState {
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Highlight classes of one row, saved before a match was painted over them.
#[derive(Clone, Debug, PartialEq, Eq)]
struct SavedHighlight {
    row: usize,
    classes: Vec<HighlightClass>,
}

/// Cursor and viewport position when the search began.
#[derive(Clone, Copy, Debug, Default)]
struct Snapshot {
    cursor: Cursor,
    row_offset: usize,
    col_offset: usize,
}

/// Incremental search state machine.
#[derive(Clone, Debug, Default)]
pub struct SearchController {
    state: SearchState,
    last_match: Option<usize>,
    direction: Direction,
    saved: Option<SavedHighlight>,
    snapshot: Snapshot,
}

impl SearchController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> SearchState {
        self.state
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Row of the last match, if any.
    #[must_use]
    pub fn last_match(&self) -> Option<usize> {
        self.last_match
    }

    /// Start a search session, remembering where the cursor and viewport are.
    pub fn begin(&mut self, buffer: &Buffer, viewport: &Viewport) {
        self.snapshot = Snapshot {
            cursor: buffer.cursor(),
            row_offset: viewport.row_offset,
            col_offset: viewport.col_offset,
        };
        self.last_match = None;
        self.direction = Direction::Forward;
        self.saved = None;
        self.state = SearchState::Searching;
        tracing::debug!(cy = buffer.cursor().cy, "search started");
    }

    /// Feed one prompt key into the search.
    pub fn on_key(
        &mut self,
        query: &[u8],
        key: SearchKey,
        buffer: &mut Buffer,
        viewport: &mut Viewport,
    ) -> SearchState {
        self.restore_highlight(buffer);

        match key {
            SearchKey::Commit => {
                self.finish();
                return self.state;
            }
            SearchKey::Cancel => {
                self.finish();
                let Snapshot {
                    cursor,
                    row_offset,
                    col_offset,
                } = self.snapshot;
                buffer.set_cursor(cursor.cx, cursor.cy);
                viewport.row_offset = row_offset;
                viewport.col_offset = col_offset;
                return self.state;
            }
            SearchKey::Next => self.direction = Direction::Forward,
            SearchKey::Previous => self.direction = Direction::Backward,
            SearchKey::Edited => {
                self.last_match = None;
                self.direction = Direction::Forward;
            }
        }

        if self.last_match.is_none() {
            self.direction = Direction::Forward;
        }

        self.state = match self.find(query, buffer) {
            Some((row, offset)) => self.apply_match(row, offset, query.len(), buffer, viewport),
            None => SearchState::NoMatch,
        };
        self.state
    }

    /// Scan every row once, starting next to the last match.
    fn find(&self, query: &[u8], buffer: &Buffer) -> Option<(usize, usize)> {
        let numrows = buffer.len();
        let mut current = self.last_match;

        for _ in 0..numrows {
            let next = match (current, self.direction) {
                (None, _) => 0,
                (Some(c), Direction::Forward) => (c + 1) % numrows,
                (Some(0), Direction::Backward) => numrows - 1,
                (Some(c), Direction::Backward) => c - 1,
            };
            current = Some(next);

            let row = buffer.row(next)?;
            if let Some(offset) = find_subsequence(row.rendered(), query) {
                return Some((next, offset));
            }
        }
        None
    }

    fn apply_match(
        &mut self,
        row_idx: usize,
        offset: usize,
        len: usize,
        buffer: &mut Buffer,
        viewport: &mut Viewport,
    ) -> SearchState {
        self.last_match = Some(row_idx);

        let numrows = buffer.len();
        let Some(row) = buffer.row_mut(row_idx) else {
            return SearchState::NoMatch;
        };
        let col = row.rx_to_cx(offset);

        self.saved = Some(SavedHighlight {
            row: row_idx,
            classes: row.highlight().to_vec(),
        });
        let classes = row.highlight_mut();
        let end = (offset + len).min(classes.len());
        classes[offset..end].fill(HighlightClass::Match);

        buffer.set_cursor(col, row_idx);
        // Past every row, so the next scroll puts the match on the top line.
        viewport.row_offset = numrows;

        tracing::debug!(row = row_idx, col, "search match");
        SearchState::MatchFound { row: row_idx, col }
    }

    fn restore_highlight(&mut self, buffer: &mut Buffer) {
        let Some(saved) = self.saved.take() else {
            return;
        };
        if let Some(row) = buffer.row_mut(saved.row) {
            let classes = row.highlight_mut();
            if classes.len() == saved.classes.len() {
                classes.copy_from_slice(&saved.classes);
            }
        }
    }

    fn finish(&mut self) {
        self.last_match = None;
        self.direction = Direction::Forward;
        self.state = SearchState::Idle;
    }
}

/// Find the first occurrence of `needle` in `haystack`.
///
/// An empty needle matches at offset 0.
fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
