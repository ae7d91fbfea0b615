//! Single-line input on the message bar.

use crate::input::{KeyCode, KeyEvent};

/// What a key did to the prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptEvent {
    /// The input text changed.
    Edited,
    /// Enter on non-empty input.
    Submitted(String),
    /// Escape.
    Cancelled,
    /// The key had no effect on the input.
    Unchanged,
}

/// A modal prompt. `template` contains one `{}` where the input goes.
#[derive(Clone, Debug)]
pub struct Prompt {
    template: &'static str,
    input: String,
}

impl Prompt {
    #[must_use]
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            input: String::new(),
        }
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The template with the current input filled in.
    #[must_use]
    pub fn message(&self) -> String {
        self.template.replacen("{}", &self.input, 1)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PromptEvent {
        if key.is_ctrl('h') {
            self.input.pop();
            return PromptEvent::Edited;
        }

        match key.code {
            KeyCode::Backspace | KeyCode::Delete => {
                self.input.pop();
                PromptEvent::Edited
            }
            KeyCode::Esc => PromptEvent::Cancelled,
            KeyCode::Enter if !self.input.is_empty() => {
                PromptEvent::Submitted(std::mem::take(&mut self.input))
            }
            _ => match key.plain_char() {
                Some(c) if c.is_ascii() && !c.is_ascii_control() => {
                    self.input.push(c);
                    PromptEvent::Edited
                }
                _ => PromptEvent::Unchanged,
            },
        }
    }
}
