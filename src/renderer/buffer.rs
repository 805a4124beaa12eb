// src/renderer/buffer.rs

//! Append-only byte buffer that collects a whole frame so it can be written
//! to the terminal in a single call.

use crate::error::TerminalError;

use log::{trace, warn};
use std::io::Write;

#[derive(Debug, Default)]
pub struct RenderBuffer {
    bytes: Vec<u8>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Appends `data` after the existing content.
    ///
    /// If the buffer cannot grow, the append is dropped and the frame goes
    /// out incomplete; the next refresh redraws everything anyway.
    pub fn append(&mut self, data: &[u8]) {
        if let Err(e) = self.bytes.try_reserve(data.len()) {
            warn!(
                "RenderBuffer: dropping {} bytes, allocation failed: {}",
                data.len(),
                e
            );
            return;
        }
        self.bytes.extend_from_slice(data);
    }

    pub fn append_str(&mut self, s: &str) {
        self.append(s.as_bytes());
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Writes the whole frame to `out` in one call and releases the buffer.
    pub fn flush(self, out: &mut dyn Write) -> Result<(), TerminalError> {
        trace!("RenderBuffer: flushing {} bytes", self.bytes.len());
        out.write_all(&self.bytes)
            .map_err(|e| TerminalError::io("write", e))?;
        out.flush().map_err(|e| TerminalError::io("write", e))
    }
}
