// src/input/tests.rs

use super::*;
use crate::keys::ctrl_key;
use std::collections::VecDeque;
use std::io;
use test_log::test;

/// Scripted input: `Some(b)` is a byte, `None` is a timed-out read.
/// Once the script runs out every read times out.
struct ScriptedSource {
    reads: VecDeque<Option<u8>>,
    calls: usize,
}

impl ScriptedSource {
    fn new(reads: impl IntoIterator<Item = Option<u8>>) -> Self {
        ScriptedSource {
            reads: reads.into_iter().collect(),
            calls: 0,
        }
    }

    fn bytes(bytes: &[u8]) -> Self {
        Self::new(bytes.iter().copied().map(Some))
    }
}

impl ByteSource for ScriptedSource {
    fn read_byte(&mut self) -> Result<Option<u8>, TerminalError> {
        self.calls += 1;
        Ok(self.reads.pop_front().flatten())
    }
}

struct FailingSource;

impl ByteSource for FailingSource {
    fn read_byte(&mut self) -> Result<Option<u8>, TerminalError> {
        Err(TerminalError::io(
            "read",
            io::Error::new(io::ErrorKind::BrokenPipe, "gone"),
        ))
    }
}

#[test]
fn it_should_decode_arrow_sequences() {
    let cases = [
        (b'A', KeyEvent::ArrowUp),
        (b'B', KeyEvent::ArrowDown),
        (b'C', KeyEvent::ArrowRight),
        (b'D', KeyEvent::ArrowLeft),
    ];
    for (last, expected) in cases {
        let mut source = ScriptedSource::bytes(&[ESC_BYTE, b'[', last]);
        assert_eq!(read_key(&mut source).unwrap(), expected);
    }
}

#[test]
fn it_should_decode_unknown_csi_final_byte_as_escape() {
    let mut source = ScriptedSource::bytes(&[ESC_BYTE, b'[', b'Z', b'x']);
    assert_eq!(read_key(&mut source).unwrap(), KeyEvent::Escape);
    // The sequence bytes are consumed, the following key is not.
    assert_eq!(read_key(&mut source).unwrap(), KeyEvent::PrintableByte(b'x'));
}

#[test]
fn it_should_decode_lone_escape_when_input_ends() {
    let mut source = ScriptedSource::bytes(&[ESC_BYTE]);
    assert_eq!(read_key(&mut source).unwrap(), KeyEvent::Escape);
    assert_eq!(source.calls, 2);
}

#[test]
fn it_should_decode_escape_when_sequence_times_out_after_bracket() {
    let mut source = ScriptedSource::new([Some(ESC_BYTE), Some(b'['), None, Some(b'A')]);
    assert_eq!(read_key(&mut source).unwrap(), KeyEvent::Escape);
    assert_eq!(read_key(&mut source).unwrap(), KeyEvent::PrintableByte(b'A'));
}

#[test]
fn it_should_consume_two_bytes_after_escape_without_bracket() {
    let mut source = ScriptedSource::bytes(&[ESC_BYTE, b'O', b'A', b'k']);
    assert_eq!(read_key(&mut source).unwrap(), KeyEvent::Escape);
    assert_eq!(read_key(&mut source).unwrap(), KeyEvent::PrintableByte(b'k'));
}

#[test]
fn it_should_keep_waiting_through_timeouts_before_the_first_byte() {
    let mut source = ScriptedSource::new([None, None, None, Some(b'j')]);
    assert_eq!(read_key(&mut source).unwrap(), KeyEvent::PrintableByte(b'j'));
    assert_eq!(source.calls, 4);
}

#[test]
fn it_should_report_control_chords() {
    let mut source = ScriptedSource::bytes(&[ctrl_key(b'q')]);
    let key = read_key(&mut source).unwrap();
    assert_eq!(key, KeyEvent::ControlChord(0x11));
    assert!(key.is_ctrl('q'));
}

#[test]
fn it_should_propagate_read_errors() {
    let err = read_key(&mut FailingSource).unwrap_err();
    assert!(matches!(err, TerminalError::Io { op: "read", .. }));
}

#[test]
fn transition_table_resolves_pending_states_on_timeout() {
    assert_eq!(on_timeout(DecoderState::Start), None);
    assert_eq!(on_timeout(DecoderState::SawEscape), Some(KeyEvent::Escape));
    assert_eq!(on_timeout(DecoderState::SawBracket), Some(KeyEvent::Escape));
    assert_eq!(on_timeout(DecoderState::SawIntroducer), Some(KeyEvent::Escape));
    assert_eq!(
        step(DecoderState::Start, ESC_BYTE),
        Transition::Next(DecoderState::SawEscape)
    );
    assert_eq!(
        step(DecoderState::SawEscape, b'['),
        Transition::Next(DecoderState::SawBracket)
    );
}
