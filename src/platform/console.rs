// src/platform/console.rs

//! Raw-mode handling for a Unix console.
//!
//! `TerminalSession` captures the line discipline when it is entered and puts
//! it back exactly once when it is exited or dropped, so the shell never
//! inherits a raw-mode terminal, whichever way the editor stops.

use crate::config::Config;
use crate::error::TerminalError;

use libc::{winsize, STDIN_FILENO, STDOUT_FILENO, TIOCGWINSZ};
use std::fs::File;
use std::io;
use std::mem;
use std::os::fd::AsFd;
use termios::{
    tcsetattr, Termios, BRKINT, CS8, ECHO, ICANON, ICRNL, IEXTEN, INPCK, ISIG, ISTRIP, IXON,
    OPOST, TCSAFLUSH, VMIN, VTIME,
};

use log::{debug, error, info, trace};

/// Access to a terminal's line-discipline settings.
pub trait TtyControl {
    /// Snapshot of the settings; restored verbatim on exit.
    type Attrs: Clone;

    fn get_attrs(&mut self) -> Result<Self::Attrs, TerminalError>;

    fn set_attrs(&mut self, attrs: &Self::Attrs) -> Result<(), TerminalError>;

    /// Derives raw-mode settings from `original`, with reads returning after
    /// at most `timeout_deciseconds`.
    fn raw_attrs(&self, original: &Self::Attrs, timeout_deciseconds: u8) -> Self::Attrs;
}

/// The controlling terminal, reached through standard input.
#[derive(Debug, Default)]
pub struct StdinTty;

impl TtyControl for StdinTty {
    type Attrs = Termios;

    fn get_attrs(&mut self) -> Result<Termios, TerminalError> {
        Termios::from_fd(STDIN_FILENO).map_err(|e| TerminalError::query("tcgetattr", e))
    }

    fn set_attrs(&mut self, attrs: &Termios) -> Result<(), TerminalError> {
        tcsetattr(STDIN_FILENO, TCSAFLUSH, attrs).map_err(|e| TerminalError::query("tcsetattr", e))
    }

    fn raw_attrs(&self, original: &Termios, timeout_deciseconds: u8) -> Termios {
        let mut raw = *original;
        // No break-to-SIGINT, CR-to-NL, parity check, 8th-bit strip or XON/XOFF.
        raw.c_iflag &= !(BRKINT | ICRNL | INPCK | ISTRIP | IXON);
        raw.c_oflag &= !OPOST;
        raw.c_cflag |= CS8;
        // No echo, line buffering, Ctrl-V or signal keys.
        raw.c_lflag &= !(ECHO | ICANON | IEXTEN | ISIG);
        raw.c_cc[VMIN] = 0;
        raw.c_cc[VTIME] = timeout_deciseconds;
        raw
    }
}

/// Scoped raw-mode session. Dropping it restores the captured settings.
pub struct TerminalSession<T: TtyControl> {
    tty: T,
    original: T::Attrs,
    restored: bool,
}

impl<T: TtyControl> TerminalSession<T> {
    /// Captures the current settings and switches the terminal to raw mode.
    pub fn enter(mut tty: T, config: &Config) -> Result<Self, TerminalError> {
        let original = tty.get_attrs()?;
        let raw = tty.raw_attrs(&original, config.read_timeout_deciseconds);

        let mut session = TerminalSession {
            tty,
            original,
            restored: false,
        };
        if let Err(e) = session.tty.set_attrs(&raw) {
            let restore = session.restore();
            return Err(e.with_restore(restore));
        }
        debug!("TerminalSession: terminal set to raw mode");
        Ok(session)
    }

    /// Restores the original settings, reporting any failure to the caller.
    pub fn exit(mut self) -> Result<(), TerminalError> {
        self.restore()
    }

    fn restore(&mut self) -> Result<(), TerminalError> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        info!("TerminalSession: restoring original terminal attributes");
        self.tty.set_attrs(&self.original)
    }
}

impl<T: TtyControl> Drop for TerminalSession<T> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            error!("TerminalSession: failed to restore terminal: {}", e);
        }
    }
}

/// Queries the window size of standard output as `(rows, cols)`.
pub fn window_size() -> Result<(usize, usize), TerminalError> {
    // SAFETY: TIOCGWINSZ only writes into the zeroed winsize we pass.
    let winsz = unsafe {
        let mut winsz: winsize = mem::zeroed();
        if libc::ioctl(STDOUT_FILENO, TIOCGWINSZ, &mut winsz) == -1 {
            return Err(TerminalError::size(format!(
                "ioctl(TIOCGWINSZ) failed: {}",
                io::Error::last_os_error()
            )));
        }
        winsz
    };
    if winsz.ws_col == 0 || winsz.ws_row == 0 {
        return Err(TerminalError::size(format!(
            "terminal reports {}x{} cells",
            winsz.ws_col, winsz.ws_row
        )));
    }
    trace!("window_size: {}x{} cells", winsz.ws_col, winsz.ws_row);
    Ok((winsz.ws_row as usize, winsz.ws_col as usize))
}

/// Unbuffered handle on standard output, so each frame reaches the terminal
/// in one `write`.
pub fn stdout_device() -> Result<File, TerminalError> {
    let fd = io::stdout()
        .as_fd()
        .try_clone_to_owned()
        .map_err(|e| TerminalError::io("dup(stdout)", e))?;
    Ok(File::from(fd))
}
