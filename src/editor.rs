// src/editor.rs

//! The read-decode-act-render loop.
//!
//! `Editor` owns the cursor and screen dimensions and borrows its input and
//! output through trait objects, so the loop runs unchanged against the real
//! terminal or against scripted input in tests.

use crate::config::Config;
use crate::error::TerminalError;
use crate::input::{read_key, ByteSource};
use crate::keys::KeyEvent;
use crate::renderer;

use log::{debug, info};
use std::io::Write;

/// Cursor position and screen size. The cursor always stays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorState {
    pub cursor_x: usize,
    pub cursor_y: usize,
    pub screen_rows: usize,
    pub screen_cols: usize,
}

impl EditorState {
    pub fn new(screen_rows: usize, screen_cols: usize) -> Result<Self, TerminalError> {
        if screen_rows == 0 || screen_cols == 0 {
            return Err(TerminalError::size(format!(
                "terminal reports {}x{} cells",
                screen_cols, screen_rows
            )));
        }
        Ok(EditorState {
            cursor_x: 0,
            cursor_y: 0,
            screen_rows,
            screen_cols,
        })
    }

    /// Moves the cursor one cell for an arrow key. Moving into an edge is a
    /// no-op; any other key is ignored.
    pub fn move_cursor(&mut self, key: KeyEvent) {
        match key {
            KeyEvent::ArrowLeft => self.cursor_x = self.cursor_x.saturating_sub(1),
            KeyEvent::ArrowRight => {
                if self.cursor_x + 1 < self.screen_cols {
                    self.cursor_x += 1;
                }
            }
            KeyEvent::ArrowUp => self.cursor_y = self.cursor_y.saturating_sub(1),
            KeyEvent::ArrowDown => {
                if self.cursor_y + 1 < self.screen_rows {
                    self.cursor_y += 1;
                }
            }
            _ => {}
        }
    }
}

/// Whether the loop should keep going after a key.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EditorStatus {
    Running,
    Terminating,
}

pub struct Editor<'a> {
    state: EditorState,
    config: &'a Config,
    input: &'a mut dyn ByteSource,
    output: &'a mut dyn Write,
}

impl<'a> Editor<'a> {
    pub fn new(
        state: EditorState,
        config: &'a Config,
        input: &'a mut dyn ByteSource,
        output: &'a mut dyn Write,
    ) -> Self {
        Editor {
            state,
            config,
            input,
            output,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Applies one decoded key to the editor state.
    pub fn process_key(&mut self, key: KeyEvent) -> EditorStatus {
        match key {
            k if k.is_ctrl(self.config.quit_key) => {
                info!("Editor: quit chord received");
                EditorStatus::Terminating
            }
            KeyEvent::ArrowUp | KeyEvent::ArrowDown | KeyEvent::ArrowLeft | KeyEvent::ArrowRight => {
                self.state.move_cursor(key);
                EditorStatus::Running
            }
            other => {
                debug!("Editor: ignoring {:?}", other);
                EditorStatus::Running
            }
        }
    }

    /// One iteration: draw the current state, then wait for and apply a key.
    pub fn run_once(&mut self) -> Result<EditorStatus, TerminalError> {
        renderer::refresh_screen(&self.state, self.config, self.output)?;
        let key = read_key(self.input)?;
        Ok(self.process_key(key))
    }

    /// Runs until the quit chord, then clears the screen.
    pub fn run(&mut self) -> Result<(), TerminalError> {
        info!(
            "Editor: running on a {}x{} screen",
            self.state.screen_cols, self.state.screen_rows
        );
        while self.run_once()? == EditorStatus::Running {}
        renderer::clear_screen(self.output)
    }
}
