//! Raw mode and window size through termios/ioctl.
//!
//! # Safety
//! This module makes the libc FFI calls for terminal control. Every call
//! gets a pointer to a properly sized, zero-initialised struct.

#![allow(unsafe_code)]
#![allow(clippy::borrow_as_ptr)]

use std::io;
use std::os::unix::io::{AsRawFd, RawFd};

/// Restores the saved terminal attributes on drop.
#[derive(Debug)]
pub struct RawModeGuard {
    fd: RawFd,
    original: libc::termios,
}

impl RawModeGuard {
    /// Put the terminal behind `fd` into raw mode.
    pub fn new<F: AsRawFd>(fd: &F) -> io::Result<Self> {
        let fd = fd.as_raw_fd();
        let original = get_termios(fd)?;
        set_termios(fd, &raw_termios(original))?;
        tracing::debug!(fd, "entered raw mode");
        Ok(Self { fd, original })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = set_termios(self.fd, &self.original) {
            tracing::warn!(%err, "failed to restore terminal attributes");
        }
    }
}

/// Derive raw-mode attributes from the current ones.
///
/// Byte-at-a-time input with no echo, no signals, no flow control and no
/// output post-processing. Reads return after at most 100 ms even when
/// nothing was typed.
#[must_use]
pub fn raw_termios(mut t: libc::termios) -> libc::termios {
    t.c_iflag &= !(libc::BRKINT | libc::ICRNL | libc::INPCK | libc::ISTRIP | libc::IXON);
    t.c_oflag &= !libc::OPOST;
    t.c_cflag |= libc::CS8;
    t.c_lflag &= !(libc::ECHO | libc::ICANON | libc::IEXTEN | libc::ISIG);
    t.c_cc[libc::VMIN] = 0;
    t.c_cc[libc::VTIME] = 1;
    t
}

/// Enter raw mode on stdin.
pub fn enable_raw_mode() -> io::Result<RawModeGuard> {
    RawModeGuard::new(&io::stdin())
}

#[must_use]
pub fn is_tty<F: AsRawFd>(fd: &F) -> bool {
    // SAFETY: isatty accepts any fd value
    unsafe { libc::isatty(fd.as_raw_fd()) == 1 }
}

/// Ask the kernel for the size of the terminal on stdout.
///
/// Returns `(rows, cols)`. A zero dimension is reported as an error so the
/// caller can fall back to asking the terminal itself.
pub fn terminal_size() -> io::Result<(u16, u16)> {
    // SAFETY: winsize is plain old data
    let mut size: libc::winsize = unsafe { std::mem::zeroed() };

    // SAFETY: TIOCGWINSZ writes into the winsize we pass
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut size) };

    if result == -1 {
        Err(io::Error::last_os_error())
    } else if size.ws_col == 0 || size.ws_row == 0 {
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "terminal reported zero dimensions",
        ))
    } else {
        Ok((size.ws_row, size.ws_col))
    }
}

fn get_termios(fd: RawFd) -> io::Result<libc::termios> {
    // SAFETY: termios is plain old data
    let mut termios: libc::termios = unsafe { std::mem::zeroed() };

    // SAFETY: tcgetattr writes into the termios we pass
    if unsafe { libc::tcgetattr(fd, &mut termios) } == -1 {
        Err(io::Error::last_os_error())
    } else {
        Ok(termios)
    }
}

fn set_termios(fd: RawFd, termios: &libc::termios) -> io::Result<()> {
    // SAFETY: tcsetattr only reads the termios we pass
    if unsafe { libc::tcsetattr(fd, libc::TCSAFLUSH, termios) } == -1 {
        Err(io::Error::last_os_error())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::os::unix::io::FromRawFd;

    fn all_set() -> libc::termios {
        // SAFETY: termios is plain old data
        let mut t: libc::termios = unsafe { std::mem::zeroed() };
        t.c_iflag = !0;
        t.c_oflag = !0;
        t.c_lflag = !0;
        t.c_cc[libc::VMIN] = 1;
        t.c_cc[libc::VTIME] = 0;
        t
    }

    fn create_pipe() -> io::Result<(File, File)> {
        let mut fds = [0i32; 2];
        // SAFETY: pipe writes two fds into the array
        if unsafe { libc::pipe(fds.as_mut_ptr()) } == -1 {
            return Err(io::Error::last_os_error());
        }
        // SAFETY: pipe() succeeded, so both fds are open and owned here
        Ok(unsafe { (File::from_raw_fd(fds[0]), File::from_raw_fd(fds[1])) })
    }

    // ============================================
    // Attribute derivation
    // ============================================

    #[test]
    fn test_raw_termios_clears_input_flags() {
        let t = raw_termios(all_set());
        for flag in [libc::BRKINT, libc::ICRNL, libc::INPCK, libc::ISTRIP, libc::IXON] {
            assert_eq!(t.c_iflag & flag, 0);
        }
    }

    #[test]
    fn test_raw_termios_clears_local_and_output_flags() {
        let t = raw_termios(all_set());
        for flag in [libc::ECHO, libc::ICANON, libc::IEXTEN, libc::ISIG] {
            assert_eq!(t.c_lflag & flag, 0);
        }
        assert_eq!(t.c_oflag & libc::OPOST, 0);
    }

    #[test]
    fn test_raw_termios_sets_char_size_and_timeout() {
        let t = raw_termios(all_set());
        assert_eq!(t.c_cflag & libc::CS8, libc::CS8);
        assert_eq!(t.c_cc[libc::VMIN], 0);
        assert_eq!(t.c_cc[libc::VTIME], 1);
    }

    // ============================================
    // Non-tty descriptors
    // ============================================

    #[test]
    fn test_pipe_and_file_are_not_ttys() {
        let (read_fd, write_fd) = create_pipe().unwrap();
        assert!(!is_tty(&read_fd));
        assert!(!is_tty(&write_fd));

        let file = tempfile::tempfile().unwrap();
        assert!(!is_tty(&file));
    }

    #[test]
    fn test_raw_mode_on_pipe_fails() {
        let (read_fd, _write_fd) = create_pipe().unwrap();
        assert!(RawModeGuard::new(&read_fd).is_err());
    }

    #[test]
    fn test_invalid_fd() {
        assert!(get_termios(-1).is_err());
        let t = all_set();
        assert!(set_termios(-1, &t).is_err());
    }

    #[test]
    fn test_terminal_size_is_sane_when_available() {
        if let Ok((rows, cols)) = terminal_size() {
            assert!(rows > 0 && cols > 0);
        }
    }
}
