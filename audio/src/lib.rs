pub use device::Beeper;
pub use error::AudioError;
pub use oscillator::{SquareWave, ToneControls, MAX_VOLUME};

mod device;
mod error;
mod oscillator;
