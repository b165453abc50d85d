use c8_audio::MAX_VOLUME;
use c8_core::constants::SOUND_TIMER_MAX;
use c8_core::{Chip8, FrameBuffer};
use c8_display::{MAX_PIXEL_SIZE, MIN_PIXEL_SIZE};

pub const MIN_RANDOM_PIXELS: usize = 1;
pub const MAX_RANDOM_PIXELS: usize = 100;
pub const VOLUME_STEP: i32 = 5;

/// Debug controls that poke at the running machine
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DebugAction {
    /// Force the sound timer to its maximum
    PlaySound,
    /// Force the sound timer to zero
    StopSound,
    ToggleRandomPixels,
    FewerPixels,
    MorePixels,
    VolumeDown,
    VolumeUp,
    PixelSizeDown,
    PixelSizeUp,
}

/// # Debug Panel
/// The values the debug controls adjust, each kept within its range.
#[derive(Debug)]
pub struct DebugPanel {
    volume: u8,
    random_pixel_count: usize,
    pixel_size: usize,
}

fn step(value: i64, delta: i64, min: i64, max: i64) -> i64 {
    (value + delta).max(min).min(max)
}

impl DebugPanel {
    pub fn new(volume: u8, pixel_size: usize) -> Self {
        DebugPanel {
            volume: volume.min(MAX_VOLUME),
            random_pixel_count: MIN_RANDOM_PIXELS,
            pixel_size: pixel_size.max(MIN_PIXEL_SIZE).min(MAX_PIXEL_SIZE),
        }
    }

    pub fn random_pixel_count(&self) -> usize {
        self.random_pixel_count
    }

    /// Returns the new volume if it changed
    pub fn adjust_volume(&mut self, delta: i32) -> Option<u8> {
        let volume = step(self.volume.into(), delta.into(), 0, MAX_VOLUME.into()) as u8;
        if volume == self.volume {
            return None;
        }
        self.volume = volume;
        Some(volume)
    }

    /// Returns the new count if it changed
    pub fn adjust_random_pixel_count(&mut self, delta: i32) -> Option<usize> {
        let count = step(
            self.random_pixel_count as i64,
            delta.into(),
            MIN_RANDOM_PIXELS as i64,
            MAX_RANDOM_PIXELS as i64,
        ) as usize;
        if count == self.random_pixel_count {
            return None;
        }
        self.random_pixel_count = count;
        Some(count)
    }

    /// Returns the new pixel size if it changed
    pub fn adjust_pixel_size(&mut self, delta: i32) -> Option<usize> {
        let size = step(
            self.pixel_size as i64,
            delta.into(),
            MIN_PIXEL_SIZE as i64,
            MAX_PIXEL_SIZE as i64,
        ) as usize;
        if size == self.pixel_size {
            return None;
        }
        self.pixel_size = size;
        Some(size)
    }

    /// One line summary shown in the window title
    pub fn readout(&self, fps: u32, sound_timer: u8) -> String {
        format!(
            "CHIP-8 | {} FPS | ST: {} | Vol: {}% | Px: {} | Count: {}",
            fps, sound_timer, self.volume, self.pixel_size, self.random_pixel_count
        )
    }
}

/// The tone plays while the sound timer is non-zero
pub fn sound_gate(sound_timer: u8) -> bool {
    sound_timer > 0
}

/// Forces the sound timer for PlaySound/StopSound. Returns false for any other action.
pub fn override_sound(action: DebugAction, chip8: &mut Chip8) -> bool {
    match action {
        DebugAction::PlaySound => chip8.set_sound_timer(SOUND_TIMER_MAX),
        DebugAction::StopSound => chip8.set_sound_timer(0),
        _ => return false,
    }
    true
}

/// Inverts `count` pixels picked by `random_byte`, which is drawn twice per pixel (x then y).
/// Picking the same pixel twice toggles it back.
pub fn toggle_random_pixels(
    frame: &mut FrameBuffer,
    count: usize,
    mut random_byte: impl FnMut() -> u8,
) {
    for _ in 0..count {
        let x = random_byte() as usize % frame.width();
        let y = random_byte() as usize % frame.height();
        frame.toggle(x, y);
    }
}
