// src/renderer.rs

//! Composes full-screen frames.
//!
//! A frame hides the cursor, homes it, draws every row (filler rows plus the
//! welcome banner a third of the way down), moves the cursor to the editor's
//! position and shows it again. Everything is collected in a `RenderBuffer`
//! and written with a single call so the terminal never shows a half-drawn
//! screen.

pub mod buffer;

pub use buffer::RenderBuffer;

use crate::config::Config;
use crate::editor::EditorState;
use crate::error::TerminalError;

use log::trace;
use std::io::Write;

// --- ANSI Escape Code Constants ---
pub const CURSOR_HIDE: &str = "\x1b[?25l";
pub const CURSOR_SHOW: &str = "\x1b[?25h";
pub const CURSOR_HOME: &str = "\x1b[H";
pub const ERASE_LINE_RIGHT: &str = "\x1b[K";
pub const CLEAR_SCREEN: &str = "\x1b[2J";
const ROW_SEPARATOR: &str = "\r\n";

/// `ESC[{row};{col}H` for a 1-based position.
pub fn format_cursor_position(row_1_based: usize, col_1_based: usize) -> String {
    format!("\x1b[{};{}H", row_1_based, col_1_based)
}

/// Builds one complete frame for `state`.
pub fn compose_frame(state: &EditorState, config: &Config) -> RenderBuffer {
    let mut buf = RenderBuffer::new();
    buf.append_str(CURSOR_HIDE);
    buf.append_str(CURSOR_HOME);

    draw_rows(state, config, &mut buf);

    buf.append_str(&format_cursor_position(state.cursor_y + 1, state.cursor_x + 1));
    buf.append_str(CURSOR_SHOW);
    buf
}

/// Composes a frame and writes it to `out` in one go.
pub fn refresh_screen(
    state: &EditorState,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), TerminalError> {
    let frame = compose_frame(state, config);
    trace!(
        "refresh_screen: {} bytes for {}x{} screen, cursor at ({}, {})",
        frame.len(),
        state.screen_cols,
        state.screen_rows,
        state.cursor_x,
        state.cursor_y
    );
    frame.flush(out)
}

/// Clears the whole screen and homes the cursor. Used on quit and on
/// fatal errors.
pub fn clear_screen(out: &mut dyn Write) -> Result<(), TerminalError> {
    let mut buf = RenderBuffer::new();
    buf.append_str(CLEAR_SCREEN);
    buf.append_str(CURSOR_HOME);
    buf.flush(out)
}

fn draw_rows(state: &EditorState, config: &Config, buf: &mut RenderBuffer) {
    let banner_row = state.screen_rows / 3;
    let mut glyph = [0u8; 4];
    let marker = config.filler_glyph.encode_utf8(&mut glyph).as_bytes();

    for y in 0..state.screen_rows {
        if y == banner_row {
            draw_banner(config.banner().as_bytes(), state.screen_cols, marker, buf);
        } else {
            buf.append(marker);
        }

        buf.append_str(ERASE_LINE_RIGHT);
        if y + 1 < state.screen_rows {
            buf.append_str(ROW_SEPARATOR);
        }
    }
}

/// Centers `banner` in `cols` columns. The marker glyph occupies the first
/// padding column; a banner wider than the screen is cut to `cols` bytes.
fn draw_banner(banner: &[u8], cols: usize, marker: &[u8], buf: &mut RenderBuffer) {
    let banner = &banner[..banner.len().min(cols)];
    let mut padding = (cols - banner.len()) / 2;
    if padding > 0 {
        buf.append(marker);
        padding -= 1;
    }
    buf.append(&b" ".repeat(padding));
    buf.append(banner);
}
