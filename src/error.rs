//! Error types for hayai.

use std::io;
use std::path::PathBuf;

/// Result type alias for hayai operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for hayai operations.
///
/// Cursor and index faults never show up here: buffer operations clamp
/// their arguments instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A file could not be opened or read.
    #[error("can't open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A file could not be written.
    #[error("can't save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The terminal size could not be determined.
    #[error("unable to determine window size")]
    WindowSize,
}

impl Error {
    /// The underlying I/O error, if any.
    #[must_use]
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::Io(e) | Self::Open { source: e, .. } | Self::Save { source: e, .. } => Some(e),
            Self::WindowSize => None,
        }
    }
}
