//! Terminal attribute snapshot, restored when the UI dies abnormally.

use nix::sys::termios::{self, SetArg, Termios};
use std::os::unix::io::RawFd;

pub const STDIN: RawFd = 0;

pub struct SavedTermios {
    fd: RawFd,
    attrs: Option<Termios>,
}

impl SavedTermios {
    /// Reads the current attributes of `fd`. A descriptor that is not a
    /// terminal yields a snapshot with nothing to restore.
    pub fn capture(fd: RawFd) -> Self {
        let attrs = match termios::tcgetattr(fd) {
            Ok(attrs) => Some(attrs),
            Err(e) => {
                log::debug!("Failed to get terminal attributes of fd {}: {}", fd, e);
                None
            }
        };

        SavedTermios { fd, attrs }
    }

    pub fn is_terminal(&self) -> bool {
        self.attrs.is_some()
    }

    pub fn restore(&self) -> nix::Result<()> {
        match &self.attrs {
            Some(attrs) => termios::tcsetattr(self.fd, SetArg::TCSANOW, attrs),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::os::unix::io::AsRawFd;

    #[test]
    fn non_terminal_has_nothing_to_restore() {
        let null = File::open("/dev/null").unwrap();
        let saved = SavedTermios::capture(null.as_raw_fd());

        assert!(!saved.is_terminal());
        assert!(saved.restore().is_ok());
    }
}
