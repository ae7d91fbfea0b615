//! Line-based text storage.
//!
//! Key types:
//!
//! - [`Row`]: one line, with its tab-expanded rendering and highlight classes
//! - [`Buffer`]: the ordered rows of a document, the cursor and dirty state
//!
//! # Examples
//!
//! ```
//! use hayai::text::{Buffer, Row};
//!
//! let row = Row::new(b"a\tb");
//! assert_eq!(row.rendered(), b"a       b");
//! assert_eq!(row.cx_to_rx(2), 8);
//!
//! let buf = Buffer::with_lines(["hello", "world"]);
//! assert_eq!(buf.len(), 2);
//! assert!(!buf.is_dirty());
//! ```

mod buffer;
mod row;

pub use buffer::{Buffer, Cursor, Motion, split_lines};
pub use row::{Row, TAB_STOP};
