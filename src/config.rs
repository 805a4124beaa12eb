// src/config.rs

//! Built-in settings for the editor.
//!
//! The editor core reads no configuration file, flags or environment
//! variables. The values below are grouped in one serde-derivable struct so
//! that surrounding tooling can hand in its own copy; missing fields fall back
//! to the defaults.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Process-wide default configuration.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::default);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)] // Apply default values for any field missing from the input.
pub struct Config {
    /// Name shown in the welcome banner.
    pub editor_name: String,
    /// Version string shown in the welcome banner.
    pub version: String,
    /// Glyph drawn at the start of every empty row.
    pub filler_glyph: char,
    /// Letter that, combined with Ctrl, quits the editor.
    pub quit_key: char,
    /// Upper bound on a single terminal read, in deciseconds (`VTIME`).
    pub read_timeout_deciseconds: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            editor_name: "Kilo Editor".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            filler_glyph: '~',
            quit_key: 'q',
            read_timeout_deciseconds: 1,
        }
    }
}

impl Config {
    /// The welcome banner, e.g. `Kilo Editor -- version 0.0.1`.
    pub fn banner(&self) -> String {
        format!("{} -- version {}", self.editor_name, self.version)
    }
}
