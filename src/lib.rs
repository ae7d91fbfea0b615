//! `hayai` - a small terminal text editor
//!
//! Byte-oriented line editing with tab expansion, number highlighting,
//! incremental search and single-write frame rendering.

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (required for termios FFI)
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::module_name_repetitions)] // Allow HighlightClass in highlight etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod ansi;
pub mod config;
pub mod editor;
pub mod error;
pub mod file;
pub mod highlight;
pub mod input;
pub mod search;
pub mod terminal;
pub mod text;
pub mod view;

// Re-export core types at crate root
pub use config::EditorOptions;
pub use editor::{Editor, Outcome};
pub use error::{Error, Result};
pub use highlight::HighlightClass;
pub use search::{SearchController, SearchKey, SearchState};
pub use text::{Buffer, Cursor, Row};
pub use view::{Viewport, render_frame};

// Re-export input types
pub use input::{InputParser, KeyCode, KeyEvent, KeyModifiers, KeyReader};

// Re-export terminal types
pub use terminal::{RawModeGuard, enable_raw_mode, is_tty, terminal_size, window_size};
