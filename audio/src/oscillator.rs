use std::f32::consts::PI;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

use sdl2::audio::AudioCallback;

/// Pitch of the tone
pub const TONE_FREQUENCY: f32 = 440.0;
/// Peak sample value at full volume
pub const AMPLITUDE: f32 = 32000.0;
pub const MAX_VOLUME: u8 = 100;

/// # Tone Controls
/// The knobs shared between the frame loop and the audio thread.
///
/// - `playing` gates the oscillator; the frame loop sets it from the sound timer
/// - `volume` is the master volume in percent
#[derive(Clone, Debug)]
pub struct ToneControls {
    playing: Arc<AtomicBool>,
    volume: Arc<AtomicU8>,
}

impl ToneControls {
    pub fn new(volume: u8) -> Self {
        ToneControls {
            playing: Arc::new(AtomicBool::new(false)),
            volume: Arc::new(AtomicU8::new(volume.min(MAX_VOLUME))),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Relaxed)
    }

    pub fn set_playing(&self, playing: bool) {
        self.playing.store(playing, Ordering::Relaxed);
    }

    pub fn volume(&self) -> u8 {
        self.volume.load(Ordering::Relaxed)
    }

    /// Sets the master volume, clamped to `0..=MAX_VOLUME`
    pub fn set_volume(&self, volume: u8) {
        self.volume.store(volume.min(MAX_VOLUME), Ordering::Relaxed);
    }
}

fn square(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// # Square Wave
/// A 440Hz square wave driven by a phase accumulator in `[0, 1)`.
///
/// The phase only advances while the tone is playing, so stopping and restarting the tone
/// resumes the waveform where it left off.
pub struct SquareWave {
    phase: f32,
    phase_inc: f32,
    controls: ToneControls,
}

impl SquareWave {
    pub fn new(sample_rate: i32, controls: ToneControls) -> Self {
        SquareWave {
            phase: 0.0,
            phase_inc: TONE_FREQUENCY / sample_rate as f32,
            controls,
        }
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }
}

impl AudioCallback for SquareWave {
    type Channel = i16;

    fn callback(&mut self, out: &mut [i16]) {
        let amplitude = AMPLITUDE * f32::from(self.controls.volume()) / f32::from(MAX_VOLUME);
        for sample in out.iter_mut() {
            // Re-read per sample so a stop lands mid-buffer
            if !self.controls.is_playing() {
                *sample = 0;
                continue;
            }
            *sample = (amplitude * square((2.0 * PI * self.phase).sin())).round() as i16;
            self.phase += self.phase_inc;
            if self.phase >= 1.0 {
                self.phase -= 1.0;
            }
        }
    }
}
