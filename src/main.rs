// src/main.rs

// Declare modules
pub mod config;
pub mod editor;
pub mod error;
pub mod input;
pub mod keys;
pub mod platform;
pub mod renderer;
pub mod session;

use crate::{
    config::CONFIG,
    input::StdinSource,
    platform::{stdout_device, window_size, StdinTty},
};

// Logging
use anyhow::Context;
use log::info;

/// Entry point for `kilo`.
///
/// Exits with status 0 after Ctrl-Q. Any terminal error clears the screen,
/// restores the terminal and exits with status 1, printing the failing
/// operation on stderr.
fn main() -> anyhow::Result<()> {
    // Raw mode owns the screen, so logging is off unless RUST_LOG asks for it
    // (redirect stderr to a file to read it).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
        .format_timestamp_micros()
        .init();

    info!("Starting kilo {}...", CONFIG.version);

    let mut output = stdout_device().context("Failed to open the terminal for output")?;
    let mut input = StdinSource;

    session::run(StdinTty, &CONFIG, &mut input, &mut output, window_size)
        .context("kilo terminated after a terminal error")?;

    info!("kilo exited normally.");
    Ok(())
}
