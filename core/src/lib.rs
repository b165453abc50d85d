pub use chip8::Chip8;
pub use error::Chip8Error;
pub use operations::Keypad;
pub use rom::{load_rom, LoadError, RomImage};
pub use state::{FrameBuffer, State};

mod chip8;
pub mod constants;
mod error;
mod instruction;
mod opcode;
mod operations;
mod rom;
pub mod state;
