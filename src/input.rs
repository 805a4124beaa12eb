// src/input.rs

//! Turns raw terminal input bytes into `KeyEvent`s.
//!
//! Escape sequences are resolved by a small explicit state machine. Each
//! read is bounded by the terminal's `VTIME` setting, so a read that times
//! out in the middle of a sequence resolves it to a plain `Escape`.

use crate::error::TerminalError;
use crate::keys::{KeyEvent, ESC_BYTE};

use log::{debug, trace};
use std::io::{self, stdin, Read};

const CSI_INTRODUCER: u8 = b'[';

/// Something that yields one input byte at a time.
pub trait ByteSource {
    /// Reads one byte. `Ok(None)` means the read timed out with no data,
    /// which is not an error.
    fn read_byte(&mut self) -> Result<Option<u8>, TerminalError>;
}

/// Reads from the process's standard input.
///
/// In raw mode with `VMIN = 0` a read returns zero bytes once `VTIME`
/// expires, which is reported as `None`.
#[derive(Debug, Default)]
pub struct StdinSource;

impl ByteSource for StdinSource {
    fn read_byte(&mut self) -> Result<Option<u8>, TerminalError> {
        let mut buf = [0u8; 1];
        match stdin().read(&mut buf) {
            Ok(0) => Ok(None),
            Ok(_) => {
                trace!("StdinSource: read byte {:#04x}", buf[0]);
                Ok(Some(buf[0]))
            }
            Err(ref e)
                if e.kind() == io::ErrorKind::WouldBlock
                    || e.kind() == io::ErrorKind::Interrupted =>
            {
                trace!("StdinSource: read would block ({})", e);
                Ok(None)
            }
            Err(e) => Err(TerminalError::io("read", e)),
        }
    }
}

/// Position inside a (possible) escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderState {
    Start,
    /// Saw ESC, waiting for the first continuation byte.
    SawEscape,
    /// Saw `ESC [`, waiting for the final byte.
    SawBracket,
    /// Saw ESC followed by something other than `[`. One more byte is
    /// consumed before giving up.
    SawIntroducer,
}

/// Result of feeding one byte to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Next(DecoderState),
    Emit(KeyEvent),
}

/// Transition table for `(state, byte)`.
pub fn step(state: DecoderState, byte: u8) -> Transition {
    use DecoderState::*;
    match (state, byte) {
        (Start, ESC_BYTE) => Transition::Next(SawEscape),
        (Start, b) => Transition::Emit(KeyEvent::from_byte(b)),
        (SawEscape, CSI_INTRODUCER) => Transition::Next(SawBracket),
        (SawEscape, _) => Transition::Next(SawIntroducer),
        (SawBracket, b'A') => Transition::Emit(KeyEvent::ArrowUp),
        (SawBracket, b'B') => Transition::Emit(KeyEvent::ArrowDown),
        (SawBracket, b'C') => Transition::Emit(KeyEvent::ArrowRight),
        (SawBracket, b'D') => Transition::Emit(KeyEvent::ArrowLeft),
        (SawBracket, _) | (SawIntroducer, _) => Transition::Emit(KeyEvent::Escape),
    }
}

/// What a timed-out read means in `state`. `None` means keep waiting.
pub fn on_timeout(state: DecoderState) -> Option<KeyEvent> {
    match state {
        DecoderState::Start => None,
        DecoderState::SawEscape | DecoderState::SawBracket | DecoderState::SawIntroducer => {
            Some(KeyEvent::Escape)
        }
    }
}

/// Reads one key from `source`, blocking (in timeout-sized steps) until the
/// first byte arrives.
pub fn read_key(source: &mut dyn ByteSource) -> Result<KeyEvent, TerminalError> {
    let mut state = DecoderState::Start;
    loop {
        let Some(byte) = source.read_byte()? else {
            if let Some(key) = on_timeout(state) {
                debug!("read_key: sequence timed out in {:?}", state);
                return Ok(key);
            }
            continue;
        };
        match step(state, byte) {
            Transition::Next(next) => state = next,
            Transition::Emit(key) => {
                trace!("read_key: decoded {:?}", key);
                return Ok(key);
            }
        }
    }
}

#[cfg(test)]
mod tests;
