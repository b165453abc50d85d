use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("SDL2 audio error: {0}")]
    Sdl(String),
}
