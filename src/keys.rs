// src/keys.rs

/// Escape byte that starts every multi-byte key sequence.
pub const ESC_BYTE: u8 = 0x1B;
const DEL_BYTE: u8 = 0x7F;

/// A single decoded keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    /// Any byte that is not a control code.
    PrintableByte(u8),
    /// A C0 control code or DEL, i.e. what a Ctrl-modified key produces.
    ControlChord(u8),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// A lone escape press, or an escape sequence that is not recognised.
    Escape,
}

impl KeyEvent {
    /// Classifies a byte read outside of an escape sequence.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0x00..=0x1F | DEL_BYTE => KeyEvent::ControlChord(byte),
            _ => KeyEvent::PrintableByte(byte),
        }
    }

    /// True if this is the chord produced by holding Ctrl and pressing `key`.
    pub fn is_ctrl(&self, key: char) -> bool {
        matches!(self, KeyEvent::ControlChord(b) if key.is_ascii() && *b == ctrl_key(key as u8))
    }
}

/// Byte sent by the terminal for Ctrl + `key`: bits 5 and 6 cleared.
pub const fn ctrl_key(key: u8) -> u8 {
    key & 0x1F
}
