// src/error.rs

//! Error type shared by the terminal-facing layers of the editor.
//!
//! Every variant is fatal: the only recovery is the top-level handler in
//! `main`, which clears the screen, lets the session guard restore the
//! terminal, and exits with a non-zero status.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TerminalError {
    /// Reading or changing the line discipline (`tcgetattr`/`tcsetattr`) failed.
    #[error("{op}: {source}")]
    TerminalQuery {
        op: &'static str,
        #[source]
        source: io::Error,
    },

    /// The window dimensions could not be determined.
    #[error("getWindowSize: {reason}")]
    TerminalSize { reason: String },

    /// A read or write on the terminal failed for a reason other than
    /// "no data yet".
    #[error("{op}: {source}")]
    Io {
        op: &'static str,
        #[source]
        source: io::Error,
    },

    /// A fatal error, after which putting the terminal back failed too.
    #[error("{source}; restoring the terminal also failed: {restore}")]
    RestoreFailed {
        #[source]
        source: Box<TerminalError>,
        restore: Box<TerminalError>,
    },
}

impl TerminalError {
    pub fn query(op: &'static str, source: io::Error) -> Self {
        TerminalError::TerminalQuery { op, source }
    }

    pub fn io(op: &'static str, source: io::Error) -> Self {
        TerminalError::Io { op, source }
    }

    pub fn size(reason: impl Into<String>) -> Self {
        TerminalError::TerminalSize {
            reason: reason.into(),
        }
    }

    /// Attaches a failed restoration to `self`, unless there is none.
    pub fn with_restore(self, restore: Result<(), TerminalError>) -> Self {
        match restore {
            Ok(()) => self,
            Err(restore) => TerminalError::RestoreFailed {
                source: Box::new(self),
                restore: Box::new(restore),
            },
        }
    }

    /// Name of the operation that failed first, as shown to the user on exit.
    pub fn operation(&self) -> &'static str {
        match self {
            TerminalError::TerminalQuery { op, .. } | TerminalError::Io { op, .. } => *op,
            TerminalError::TerminalSize { .. } => "getWindowSize",
            TerminalError::RestoreFailed { source, .. } => source.operation(),
        }
    }
}
