//! The editing session.
//!
//! [`Editor`] owns everything one session needs: the buffer, the viewport,
//! the message bar, the active prompt and the search state. The binary
//! feeds it one [`KeyEvent`] at a time and asks it for frames.
//!
//! # Examples
//!
//! ```
//! use hayai::editor::{Editor, Outcome};
//! use hayai::input::KeyEvent;
//! use hayai::EditorOptions;
//!
//! let mut editor = Editor::new(24, 80, EditorOptions::default());
//! for c in "hi".chars() {
//!     editor.process_key(KeyEvent::char(c));
//! }
//! assert_eq!(editor.buffer().serialize(), b"hi\n");
//! assert_eq!(editor.process_key(KeyEvent::ctrl('q')), Outcome::Continue);
//! ```

mod prompt;
mod status;

pub use prompt::{Prompt, PromptEvent};
pub use status::{MAX_STATUS_LEN, StatusMessage};

use crate::config::EditorOptions;
use crate::file;
use crate::input::{KeyCode, KeyEvent};
use crate::search::{SearchController, SearchKey, SearchState};
use crate::text::{Buffer, Motion};
use crate::view::{Viewport, render_frame};
use std::io;
use std::path::Path;
use std::time::Instant;

/// Rows taken by the status bar and the message bar.
const BAR_ROWS: usize = 2;

const SAVE_PROMPT: &str = "Save As : {} [ESC to Cancel]";
const SEARCH_PROMPT: &str = "Search {} [ESC to Cancel, ARROW_KEYS to Navigate]";

/// Whether the session goes on after a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// What an open prompt is collecting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptKind {
    SaveAs,
    Search,
}

#[derive(Clone, Debug)]
enum Mode {
    Normal,
    Prompt { prompt: Prompt, kind: PromptKind },
}

/// One editing session.
#[derive(Debug)]
pub struct Editor {
    buffer: Buffer,
    viewport: Viewport,
    options: EditorOptions,
    status: Option<StatusMessage>,
    mode: Mode,
    search: SearchController,
    quit_remaining: u32,
}

impl Editor {
    /// Create a session for a terminal of `rows` x `cols` cells.
    #[must_use]
    pub fn new(rows: usize, cols: usize, options: EditorOptions) -> Self {
        Self {
            buffer: Buffer::new(),
            viewport: Viewport::new(rows.saturating_sub(BAR_ROWS), cols),
            options,
            status: None,
            mode: Mode::Normal,
            search: SearchController::new(),
            quit_remaining: options.quit_times,
        }
    }

    #[must_use]
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Current status text, fresh or not.
    #[must_use]
    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(StatusMessage::text)
    }

    /// Status text if it has not expired at `now`.
    #[must_use]
    pub fn visible_message(&self, now: Instant) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|s| s.is_fresh(now, self.options.message_timeout))
            .map(StatusMessage::text)
    }

    /// The open prompt's kind and input, if any.
    #[must_use]
    pub fn prompt(&self) -> Option<(PromptKind, &str)> {
        match &self.mode {
            Mode::Normal => None,
            Mode::Prompt { prompt, kind } => Some((*kind, prompt.input())),
        }
    }

    #[must_use]
    pub fn search_state(&self) -> SearchState {
        self.search.state()
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::new(text, Instant::now()));
    }

    /// Adapt to a new terminal size.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        let text_rows = rows.saturating_sub(BAR_ROWS);
        if (text_rows.max(1), cols.max(1))
            != (self.viewport.screen_rows(), self.viewport.screen_cols())
        {
            tracing::debug!(rows, cols, "resized");
        }
        self.viewport.resize(text_rows, cols);
    }

    /// Scroll to the cursor and render a complete frame.
    pub fn render(&mut self, now: Instant) -> Vec<u8> {
        self.viewport.scroll(&mut self.buffer);
        let message = self
            .status
            .as_ref()
            .filter(|s| s.is_fresh(now, self.options.message_timeout))
            .map(StatusMessage::text);
        render_frame(&self.buffer, &self.viewport, message)
    }

    // ============================================
    // File operations
    // ============================================

    /// Load `path` into the buffer.
    ///
    /// A missing file gives an empty buffer that will be saved to `path`.
    /// Any other failure leaves the buffer alone and reports on the message
    /// bar.
    pub fn open(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match file::read_lines(path) {
            Ok(lines) => {
                self.buffer.load(lines, path);
                tracing::info!(path = %path.display(), rows = self.buffer.len(), "opened file");
            }
            Err(err) if err.io_error().map(io::Error::kind) == Some(io::ErrorKind::NotFound) => {
                self.buffer = Buffer::new();
                self.buffer.set_filename(path);
                self.set_status("New file");
                tracing::info!(path = %path.display(), "new file");
            }
            Err(err) => {
                tracing::warn!(%err, "open failed");
                self.set_status(err.to_string());
            }
        }
    }

    /// Save the buffer, prompting for a name first if it has none.
    pub fn save(&mut self) {
        if self.buffer.filename().is_none() {
            self.open_prompt(PromptKind::SaveAs);
            return;
        }
        self.write_buffer();
    }

    fn write_buffer(&mut self) {
        let Some(path) = self.buffer.filename().map(Path::to_path_buf) else {
            return;
        };
        let bytes = self.buffer.serialize();
        match file::write_file(&path, &bytes) {
            Ok(written) => {
                self.buffer.mark_saved();
                self.set_status(format!("{written} bytes written to disk"));
            }
            Err(err) => {
                tracing::warn!(%err, "save failed");
                let reason = err
                    .io_error()
                    .map_or_else(|| err.to_string(), ToString::to_string);
                self.set_status(format!("Can't save! I/O error: {reason}"));
            }
        }
    }

    /// Start an incremental search.
    pub fn find(&mut self) {
        self.search.begin(&self.buffer, &self.viewport);
        self.open_prompt(PromptKind::Search);
    }

    fn open_prompt(&mut self, kind: PromptKind) {
        let template = match kind {
            PromptKind::SaveAs => SAVE_PROMPT,
            PromptKind::Search => SEARCH_PROMPT,
        };
        let prompt = Prompt::new(template);
        self.set_status(prompt.message());
        self.mode = Mode::Prompt { prompt, kind };
    }

    // ============================================
    // Key handling
    // ============================================

    /// Handle one key.
    pub fn process_key(&mut self, key: KeyEvent) -> Outcome {
        if matches!(self.mode, Mode::Prompt { .. }) {
            self.prompt_key(key);
            return Outcome::Continue;
        }

        if key.is_ctrl('q') {
            if self.buffer.is_dirty() && self.quit_remaining > 0 {
                self.set_status(format!(
                    "WARNING: File has unsaved changes. Press Ctrl + Q {} times to quit.",
                    self.quit_remaining
                ));
                self.quit_remaining -= 1;
                return Outcome::Continue;
            }
            tracing::debug!("quit");
            return Outcome::Quit;
        }

        self.normal_key(key);
        self.quit_remaining = self.options.quit_times;
        Outcome::Continue
    }

    fn normal_key(&mut self, key: KeyEvent) {
        if key.has_ctrl() {
            match key.code {
                KeyCode::Char('s') => self.save(),
                KeyCode::Char('f') => self.find(),
                KeyCode::Char('h') => self.buffer.delete_char(),
                code if code.is_arrow() => self.buffer.move_cursor(motion(code)),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Enter => self.buffer.insert_newline(),
            KeyCode::Home => self.buffer.move_to_line_start(),
            KeyCode::End => self.buffer.move_to_line_end(),
            KeyCode::Backspace => self.buffer.delete_char(),
            KeyCode::Delete => {
                self.buffer.move_cursor(Motion::Right);
                self.buffer.delete_char();
            }
            KeyCode::PageUp | KeyCode::PageDown => self.page(key.code),
            code if code.is_arrow() => self.buffer.move_cursor(motion(code)),
            KeyCode::Tab => self.buffer.insert_char(b'\t'),
            KeyCode::Char(_) => {
                if let Some(c) = key.plain_char() {
                    let mut utf8 = [0u8; 4];
                    for &byte in c.encode_utf8(&mut utf8).as_bytes() {
                        self.buffer.insert_char(byte);
                    }
                }
            }
            KeyCode::Esc | KeyCode::Null => {}
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                unreachable!("arrows are handled by the is_arrow guard")
            }
        }
    }

    /// Jump to the top (or bottom) of the screen, then a screenful further.
    fn page(&mut self, code: KeyCode) {
        let rows = self.viewport.screen_rows();
        let cx = self.buffer.cursor().cx;
        let (target, step) = if code == KeyCode::PageUp {
            (self.viewport.row_offset, Motion::Up)
        } else {
            let bottom = (self.viewport.row_offset + rows - 1).min(self.buffer.len());
            (bottom, Motion::Down)
        };
        self.buffer.set_cursor(cx, target);
        for _ in 0..rows {
            self.buffer.move_cursor(step);
        }
    }

    fn prompt_key(&mut self, key: KeyEvent) {
        let Mode::Prompt { mut prompt, kind } = std::mem::replace(&mut self.mode, Mode::Normal)
        else {
            return;
        };
        let event = prompt.handle_key(key);

        if kind == PromptKind::Search {
            let search_key = match (&event, key.code) {
                (PromptEvent::Cancelled, _) => SearchKey::Cancel,
                (_, KeyCode::Enter) => SearchKey::Commit,
                (_, KeyCode::Right | KeyCode::Down) => SearchKey::Next,
                (_, KeyCode::Left | KeyCode::Up) => SearchKey::Previous,
                _ => SearchKey::Edited,
            };
            let query = match &event {
                PromptEvent::Submitted(query) => query.as_str(),
                _ => prompt.input(),
            };
            self.search.on_key(
                query.as_bytes(),
                search_key,
                &mut self.buffer,
                &mut self.viewport,
            );
        }

        match event {
            PromptEvent::Submitted(input) => {
                self.set_status("");
                if kind == PromptKind::SaveAs {
                    self.buffer.set_filename(input);
                    self.write_buffer();
                }
            }
            PromptEvent::Cancelled => {
                let text = match kind {
                    PromptKind::SaveAs => "Save Aborted",
                    PromptKind::Search => "",
                };
                self.set_status(text);
            }
            PromptEvent::Edited | PromptEvent::Unchanged => {
                self.set_status(prompt.message());
                self.mode = Mode::Prompt { prompt, kind };
            }
        }
    }
}

fn motion(code: KeyCode) -> Motion {
    match code {
        KeyCode::Left => Motion::Left,
        KeyCode::Right => Motion::Right,
        KeyCode::Up => Motion::Up,
        _ => Motion::Down,
    }
}
