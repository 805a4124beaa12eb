// src/session.rs

//! Ties the terminal session, the screen size query and the editor loop
//! together, and owns the one place where fatal errors are handled.

use crate::config::Config;
use crate::editor::{Editor, EditorState};
use crate::error::TerminalError;
use crate::input::ByteSource;
use crate::platform::{TerminalSession, TtyControl};
use crate::renderer;

use log::{error, info, warn};
use std::io::Write;

/// Runs the editor from raw-mode entry to quit.
///
/// The terminal is restored when this returns, on success or failure.
/// On failure the screen is cleared and the cursor homed before the error
/// is handed back, so the caller only has to report it.
pub fn run<T, F>(
    tty: T,
    config: &Config,
    input: &mut dyn ByteSource,
    output: &mut dyn Write,
    query_size: F,
) -> Result<(), TerminalError>
where
    T: TtyControl,
    F: FnOnce() -> Result<(usize, usize), TerminalError>,
{
    let result = run_session(tty, config, input, output, query_size);
    if let Err(ref e) = result {
        error!("fatal: {}", e);
        if let Err(clear_err) = renderer::clear_screen(output) {
            warn!("could not clear the screen after a fatal error: {}", clear_err);
        }
    }
    result
}

fn run_session<T, F>(
    tty: T,
    config: &Config,
    input: &mut dyn ByteSource,
    output: &mut dyn Write,
    query_size: F,
) -> Result<(), TerminalError>
where
    T: TtyControl,
    F: FnOnce() -> Result<(usize, usize), TerminalError>,
{
    let session = TerminalSession::enter(tty, config)?;
    let result = run_editor(config, input, output, query_size);
    let restore = session.exit();
    match result {
        Ok(()) => restore,
        Err(e) => Err(e.with_restore(restore)),
    }
}

fn run_editor<F>(
    config: &Config,
    input: &mut dyn ByteSource,
    output: &mut dyn Write,
    query_size: F,
) -> Result<(), TerminalError>
where
    F: FnOnce() -> Result<(usize, usize), TerminalError>,
{
    let (rows, cols) = query_size()?;
    info!("session: screen is {}x{}", cols, rows);

    Editor::new(EditorState::new(rows, cols)?, config, input, output).run()
}
