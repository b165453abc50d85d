use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use c8_core::constants::DEFAULT_INSTRUCTIONS_PER_SECOND;

pub const DEFAULT_FRAME_RATE: u32 = 60;
pub const DEFAULT_PIXEL_SIZE: u8 = 4;
pub const DEFAULT_VOLUME: u8 = 100;

/// A CHIP-8 emulator with debug controls
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Settings {
    /// ROM to run; drop a file on the window to load another
    pub rom: Option<PathBuf>,

    /// Size of a CHIP-8 pixel in screen pixels
    #[arg(long, default_value_t = DEFAULT_PIXEL_SIZE, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub pixel_size: u8,

    /// Master volume in percent
    #[arg(long, default_value_t = DEFAULT_VOLUME, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub volume: u8,

    /// Frames drawn per second; timers tick once per frame
    #[arg(long, default_value_t = DEFAULT_FRAME_RATE, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub fps: u32,

    /// Instructions executed per second
    #[arg(long, default_value_t = DEFAULT_INSTRUCTIONS_PER_SECOND, value_parser = clap::value_parser!(u32).range(1..))]
    pub ips: u32,
}

impl Settings {
    /// CPU cycles to run between two frames, at least one
    pub fn cycles_per_frame(&self) -> u32 {
        let (ips, fps) = (u64::from(self.ips), u64::from(self.fps));
        ((ips + fps / 2) / fps).max(1) as u32
    }

    pub fn frame_time(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }
}
