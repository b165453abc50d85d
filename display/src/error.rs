use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DisplayError {
    #[error("pixel size {size} is outside {min}..={max}")]
    PixelSize { size: usize, min: usize, max: usize },

    #[error("SDL2 video error: {0}")]
    Sdl(String),
}
