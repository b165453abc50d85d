//! CHIP-8 emulator with debug controls.
//!
//! ```bash
//! chip8 roms/ibm.ch8 --pixel-size 6
//! ```
//!
//! Escape quits, Space fast-forwards, Backspace rewinds. F1..F9 drive the debug
//! controls (see `keymap::debug_keymap`) and a ROM can be dropped on the window.
//! Set `RUST_LOG=debug` to see debug control events.

use clap::Parser;

use settings::Settings;

mod debug;
mod fps;
mod keymap;
mod open;
mod run;
mod settings;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let settings = Settings::parse();
    run::run(settings)
}
