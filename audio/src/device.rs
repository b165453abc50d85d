use log::info;
use sdl2::audio::{AudioDevice, AudioSpecDesired};

use crate::error::AudioError;
use crate::oscillator::{SquareWave, ToneControls};

pub const SAMPLE_RATE: i32 = 44100;
/// Samples per buffer fill requested from the device
pub const BUFFER_SAMPLES: u16 = 4096;

/// # Beeper
/// A mono 16-bit playback device running a `SquareWave`.
///
/// The device runs for the lifetime of the Beeper and is silent unless `set_playing(true)`.
pub struct Beeper {
    // Kept alive so the callback keeps running
    _device: AudioDevice<SquareWave>,
    controls: ToneControls,
}

impl Beeper {
    /// Opens and starts the default playback device.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context providing the audio subsystem
    /// * `volume` the initial master volume in percent
    pub fn new(sdl: &sdl2::Sdl, volume: u8) -> Result<Self, AudioError> {
        let audio_subsystem = sdl.audio().map_err(AudioError::Sdl)?;
        let desired = AudioSpecDesired {
            freq: Some(SAMPLE_RATE),
            channels: Some(1),
            samples: Some(BUFFER_SAMPLES),
        };
        let controls = ToneControls::new(volume);
        let callback_controls = controls.clone();
        let device = audio_subsystem
            .open_playback(None, &desired, |spec| {
                SquareWave::new(spec.freq, callback_controls)
            })
            .map_err(AudioError::Sdl)?;

        let spec = device.spec();
        info!(
            "opened audio device at {}Hz, {} channel(s), {} samples per buffer",
            spec.freq, spec.channels, spec.samples
        );
        device.resume();

        Ok(Beeper {
            _device: device,
            controls,
        })
    }

    pub fn set_playing(&self, playing: bool) {
        self.controls.set_playing(playing);
    }

    pub fn set_volume(&self, volume: u8) {
        self.controls.set_volume(volume);
    }
}
