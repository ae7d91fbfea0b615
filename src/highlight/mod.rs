//! Syntax highlighting of rendered rows.

mod class;
mod syntax;

pub use class::HighlightClass;
pub use syntax::{highlight_row, is_separator};
