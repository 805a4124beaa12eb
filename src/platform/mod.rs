// src/platform/mod.rs
//
// OS-facing pieces: raw mode, window size and the output device.

pub mod console;
#[cfg(test)]
pub mod mock;

pub use console::{stdout_device, window_size, StdinTty, TerminalSession, TtyControl};
