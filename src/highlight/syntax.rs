//! Number highlighting for rendered rows.
//!
//! The tagger is minimal: digits that start after a separator
//! (or continue a number) are numbers, and a `.` directly after a number
//! continues it. Everything else is [`HighlightClass::Normal`]. Comments,
//! strings and keywords would slot in here as further classes.

use super::HighlightClass;

/// Punctuation that ends a word for highlighting purposes.
const SEPARATORS: &[u8] = b",.()+-/*=~%<>[];";

/// Check whether a byte separates words.
///
/// Whitespace, NUL and the punctuation in [`SEPARATORS`] count.
#[must_use]
pub fn is_separator(byte: u8) -> bool {
    // isspace() also accepts vertical tab, which is_ascii_whitespace does not.
    byte.is_ascii_whitespace() || byte == 0x0b || byte == 0 || SEPARATORS.contains(&byte)
}

/// Compute the highlight classes for a rendered row.
///
/// Always a full pass; the result has exactly one class per rendered byte.
#[must_use]
pub fn highlight_row(rendered: &[u8]) -> Vec<HighlightClass> {
    let mut classes = vec![HighlightClass::Normal; rendered.len()];
    let mut prev_sep = true;

    for (i, &byte) in rendered.iter().enumerate() {
        let prev_class = if i > 0 {
            classes[i - 1]
        } else {
            HighlightClass::Normal
        };

        let continues_number = prev_class == HighlightClass::Number;
        if (byte.is_ascii_digit() && (prev_sep || continues_number))
            || (byte == b'.' && continues_number)
        {
            classes[i] = HighlightClass::Number;
            prev_sep = false;
            continue;
        }

        prev_sep = is_separator(byte);
    }

    classes
}
