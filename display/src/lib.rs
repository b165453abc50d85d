pub use display::Display;
pub use error::DisplayError;
pub use surface::{PixelSource, Surface, MAX_PIXEL_SIZE, MIN_PIXEL_SIZE};

mod display;
mod error;
mod surface;
