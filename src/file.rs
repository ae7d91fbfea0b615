//! Reading and writing documents on disk.

use crate::error::{Error, Result};
use crate::text::split_lines;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

/// Permission bits for newly created files.
const NEW_FILE_MODE: u32 = 0o644;

/// Read a file as a list of lines, terminators included.
///
/// The buffer strips trailing `\n`/`\r` when it loads them.
pub fn read_lines(path: &Path) -> Result<Vec<Vec<u8>>> {
    let bytes = fs::read(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read file");
    Ok(split_lines(&bytes).map(<[u8]>::to_vec).collect())
}

/// Write `bytes` to `path`, creating it if needed. Returns the byte count.
///
/// The file is truncated to exactly the new length before writing.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<usize> {
    let save_error = |source: io::Error| Error::Save {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .mode(NEW_FILE_MODE)
        .open(path)
        .map_err(save_error)?;
    file.set_len(bytes.len() as u64).map_err(save_error)?;
    file.write_all(bytes).map_err(save_error)?;

    tracing::info!(path = %path.display(), bytes = bytes.len(), "saved file");
    Ok(bytes.len())
}
